//! Pane Router Core Library
//!
//! Platform-independent navigation engine for multi-pane mobile applications:
//! - Address resolution and route matching
//! - Navigation dispatch (Navigation Service)
//! - Layer load lifecycle (Layer Lifecycle Service)
//! - Abstract-to-native object pairing
//!
//! Rendering, confirmation dialogs and the UI thread are reached through the
//! traits in [`traits`], implemented once per platform binding.

pub mod error;
pub mod pairing;
pub mod routing;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use routing::RouteTable;
pub use services::{NavigationOutcome, NavigationService, ServiceContext};
pub use traits::{LayerBehavior, SourceView, UiDispatcher, ViewHost};
pub use types::{Layer, Link, Pane, Parameters};
