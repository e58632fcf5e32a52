//! External boundary and extension trait definitions

mod capability_resolver;
mod confirmation_prompt;
mod layer_behavior;
mod resource_provider;
mod ui_dispatcher;
mod view_host;

pub use capability_resolver::CapabilityResolver;
pub use confirmation_prompt::ConfirmationPrompt;
pub use layer_behavior::{ExternalContentBehavior, LayerBehavior};
pub use resource_provider::{NoResources, ResourceProvider, LOAD_INDICATOR_TITLE_KEY};
pub use ui_dispatcher::{ImmediateUiDispatcher, UiDispatcher, UiJob};
pub use view_host::{SourceView, ViewHost, ViewRole, DEFAULT_PERSPECTIVE};
