//! Rendering boundary

use crate::error::CoreResult;
use crate::pairing::PairingRegistry;
use crate::types::{Layer, Link, Pane, Parameters};

/// Perspective used when a layer does not ask for one
pub const DEFAULT_PERSPECTIVE: &str = "default";

/// Platform rendering boundary.
///
/// Every method is invoked from a [`UiDispatcher`](super::UiDispatcher) job,
/// so implementations may touch live view state directly.
pub trait ViewHost: Send + Sync {
    /// Render `layer` and register its view against `navigated_url`.
    ///
    /// `layer.navigation_context` says which pane to output on and whether
    /// that pane's history is to be cleared first. Native controls for the
    /// layer's items are obtained through `pairing`.
    fn output_layer(
        &self,
        layer: Layer,
        perspective: &str,
        navigated_url: &str,
        pairing: &PairingRegistry,
    ) -> CoreResult<()>;

    /// Pane of a still-attached view registered for `address` or showing `layer_name`
    fn find_attached_view(&self, address: &str, layer_name: &str) -> Option<Pane>;

    /// Whether `pane`'s history holds a layer with this name
    fn history_contains(&self, pane: Pane, layer_name: &str) -> bool;

    /// Open `url` outside the application
    fn open_external(&self, url: &str);

    fn show_load_indicator(&self, title: Option<&str>);

    fn hide_load_indicator(&self);
}

/// Where the originating view sits in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRole {
    TabContainer { selected_index: usize },
    HistoryEntry { output_pane: Pane },
    Detached,
}

/// The view a navigation was started from
pub trait SourceView: Send + Sync {
    fn role(&self) -> ViewRole;

    /// URL the view's layer was navigated to; base for relative addresses
    fn navigated_url(&self) -> Option<String>;

    /// Ambient action parameters of the bound layer
    fn action_parameters(&self) -> Parameters {
        Parameters::new()
    }

    /// List and grid views handle `Submit` themselves
    fn accepts_submit(&self) -> bool {
        false
    }

    fn submit(&self, _link: &Link) {}

    /// Lets the bound layer veto leaving it
    fn should_navigate_from(&self, _link: &Link) -> bool {
        true
    }
}
