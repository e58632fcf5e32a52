//! Address resolution and route matching

mod address;
mod route_table;

pub use address::{resolve_address, strip_query};
pub use route_table::{LayerFactory, RouteMatch, RouteTable, RouteTarget};
