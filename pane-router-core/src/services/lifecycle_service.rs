//! Layer load lifecycle

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::routing::resolve_address;
use crate::types::{Layer, LayerState, Link, Parameters};

use super::ServiceContext;

/// How a load ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Ready to render
    Loaded,
    /// The behavior canceled the load; rendering is skipped
    Canceled { redirect: Option<Link> },
}

/// Drives a layer through its load lifecycle:
/// `Constructed -> Loading -> (Canceled | Loaded)`.
///
/// On a large form factor a loaded layer's composite chain is followed and
/// every child's items are spliced into the parent.
pub struct LayerLifecycleService {
    ctx: Arc<ServiceContext>,
}

impl LayerLifecycleService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Load `layer` for the navigated `uri`.
    pub async fn load(
        &self,
        layer: &mut Layer,
        uri: &str,
        parameters: &Parameters,
    ) -> CoreResult<LoadOutcome> {
        self.run_load(layer, uri, parameters).await?;

        if layer.is_load_canceled() {
            layer.set_state(LayerState::Canceled);
            layer.behavior().on_load_canceled(layer);
            let redirect = layer.take_redirect();
            log::info!(
                "Load of layer '{}' canceled{}",
                layer.name(),
                redirect
                    .as_ref()
                    .and_then(|link| link.address.as_deref())
                    .map(|address| format!(", redirecting to '{address}'"))
                    .unwrap_or_default()
            );
            return Ok(LoadOutcome::Canceled { redirect });
        }

        if self.ctx.settings.large_form_factor {
            self.load_composites(layer, uri, parameters).await?;
        }

        Self::complete(layer);
        Ok(LoadOutcome::Loaded)
    }

    async fn run_load(
        &self,
        layer: &mut Layer,
        uri: &str,
        parameters: &Parameters,
    ) -> CoreResult<()> {
        layer.set_state(LayerState::Loading);
        layer.parameters = parameters.clone();

        let behavior = layer.behavior();
        behavior.load(layer, uri, parameters).await.map_err(|e| {
            log::error!("Layer '{}' failed to load '{uri}': {e}", layer.name());
            match e {
                CoreError::LoadFailed { .. } => e,
                other => CoreError::LoadFailed {
                    layer: layer.name().to_string(),
                    message: other.to_string(),
                },
            }
        })
    }

    fn complete(layer: &mut Layer) {
        layer.set_state(LayerState::Loaded);
        layer.behavior().on_load_complete(layer);
    }

    /// Follow `parent`'s composite chain, splicing each child's items into it.
    ///
    /// Stops at the first link that does not match a layer route, on a layer
    /// name already seen in this chain, or at the configured depth.
    async fn load_composites(
        &self,
        parent: &mut Layer,
        uri: &str,
        parameters: &Parameters,
    ) -> CoreResult<()> {
        let max_depth = self.ctx.settings.max_composite_depth;
        let mut visited = HashSet::from([parent.name().to_string()]);
        let mut next = parent.composite_layer_link.clone();
        let mut depth = 0;

        while let Some(link) = next.take() {
            if depth >= max_depth {
                log::warn!(
                    "Composite chain of layer '{}' exceeds depth {max_depth}, truncating",
                    parent.name()
                );
                break;
            }
            let Some(address) = link.address.as_deref() else {
                break;
            };
            let address = resolve_address(Some(uri), address);
            let Some(found) = self.ctx.routes.match_url(&address) else {
                log::debug!("Composite link '{address}' does not match a layer route");
                break;
            };

            let mut child = found.create_layer();
            if !visited.insert(child.name().to_string()) {
                log::warn!(
                    "Composite chain of layer '{}' revisits '{}', stopping",
                    parent.name(),
                    child.name()
                );
                break;
            }
            child.composite_parent = Some(parent.name().to_string());

            let mut child_parameters = parameters.clone();
            child_parameters.extend(link.parameters.clone());
            child_parameters.extend(found.parameters);

            self.run_load(&mut child, uri, &child_parameters).await?;
            if child.is_load_canceled() {
                log::warn!(
                    "Composite layer '{}' canceled its load, chain stopped",
                    child.name()
                );
                child.set_state(LayerState::Canceled);
                child.behavior().on_load_canceled(&child);
                break;
            }
            Self::complete(&mut child);

            log::debug!(
                "Spliced {} item(s) of '{}' into '{}'",
                child.items.len(),
                child.name(),
                parent.name()
            );
            parent.items.append(&mut child.items);
            next = child.composite_layer_link.take();
            depth += 1;
        }

        Ok(())
    }
}
