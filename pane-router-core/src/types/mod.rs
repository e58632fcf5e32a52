//! 类型定义模块

mod button;
mod item;
mod layer;
mod link;
mod pane;
mod pane_history;
mod settings;
mod validation;

pub use button::Button;
pub use item::{Field, Fieldset, ItemList, LayerItem, ListItem};
pub use layer::{Layer, LayerState, LayerStyle};
pub use link::{ActionType, Link, Parameters, RequestType};
pub use pane::{NavigationContext, Pane};
pub use pane_history::{HistoryEntry, PaneHistory, PaneStack};
pub use settings::NavigationSettings;
pub use validation::{
    FieldErrors, Rule, RuleFn, ValidationErrors, Validator, REQUIRED_MESSAGE_KEY,
};
