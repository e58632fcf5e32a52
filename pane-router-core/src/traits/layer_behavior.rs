//! Layer behavior extension point

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Layer, LayerItem, Pane, Parameters};

/// Author-supplied behavior of a layer.
///
/// `load` is the only required method; the remaining hooks default to no-ops.
/// A behavior is shared by every instance (and clone) of its layer, so any
/// per-screen state belongs on the [`Layer`].
#[async_trait]
pub trait LayerBehavior: Send + Sync {
    /// Populate `layer` for the navigated `uri`.
    ///
    /// Call [`Layer::cancel_load_and_navigate`] to abort and redirect.
    async fn load(&self, layer: &mut Layer, uri: &str, parameters: &Parameters) -> CoreResult<()>;

    /// Pane this layer should be shown in when no existing view claims one
    fn preferred_pane(&self, _layer: &Layer) -> Pane {
        Pane::Master
    }

    /// Runs after a load that was not canceled
    fn on_load_complete(&self, _layer: &mut Layer) {}

    /// Runs after a load that set the cancel flag; rendering is skipped
    fn on_load_canceled(&self, _layer: &Layer) {}
}

/// Synthesized behavior for addresses that only resolve as external content
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalContentBehavior;

impl ExternalContentBehavior {
    /// Layer name used for browser layers
    pub const LAYER_NAME: &'static str = "external-content";
}

#[async_trait]
impl LayerBehavior for ExternalContentBehavior {
    async fn load(&self, layer: &mut Layer, uri: &str, _parameters: &Parameters) -> CoreResult<()> {
        layer.title = Some(uri.to_string());
        layer.items = vec![LayerItem::Browser {
            id: "browser".to_string(),
            url: uri.to_string(),
        }];
        Ok(())
    }
}
