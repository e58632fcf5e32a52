//! Navigation dispatcher

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::{CoreError, CoreResult};
use crate::routing::resolve_address;
use crate::traits::{SourceView, ViewRole, DEFAULT_PERSPECTIVE, LOAD_INDICATOR_TITLE_KEY};
use crate::types::{ActionType, Layer, LayerState, Link, NavigationContext, Pane, RequestType};

use super::load_indicator::LoadIndicatorTimer;
use super::{LayerLifecycleService, LoadOutcome, ServiceContext};

/// Why a navigation stopped without rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// Link action was `None`
    ActionNone,
    /// Originating layer refused to be navigated away from
    Vetoed,
    /// User answered no to the confirmation prompt
    Declined,
    /// Link had no address
    NoAddress,
    /// No route matched the resolved address
    RouteMiss(String),
    /// The UI-affinity thread did not run a job
    UiUnavailable(String),
    /// Canceled loads kept redirecting past the configured limit
    RedirectLimit { layer: String },
}

/// Result of one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// A layer was loaded and handed to the view host
    Rendered {
        layer: String,
        url: String,
        pane: Pane,
        clear_history: bool,
    },
    /// The originating list view consumed a `Submit` link
    Submitted,
    OpenedExternally(String),
    /// The layer canceled its load without naming a redirect
    Canceled { layer: String },
    /// The layer canceled its load and navigation continued elsewhere
    Redirected {
        from: String,
        outcome: Box<NavigationOutcome>,
    },
    Aborted(AbortReason),
}

/// Where a layer is output and whether that pane's history is dropped first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PaneDecision {
    pub output_pane: Pane,
    pub clear_history: bool,
}

/// Pick the output pane and clear-history flag for `target` while `active` is current.
///
/// A push into a more prominent pane starts a fresh stack there. Without split
/// view Detail is not shown beside Master, so a push towards it stays on the
/// active pane's stack instead. A push onto the active pane keeps its stack.
/// Going back to a less prominent pane keeps the stack only if it already
/// holds this layer.
pub(crate) fn decide_pane(
    active: Pane,
    target: Pane,
    split_view: bool,
    force_clear: bool,
    history_contains: impl Fn(Pane) -> bool,
) -> PaneDecision {
    let mut output_pane = target.output_pane();
    if output_pane == Pane::Detail && !split_view && output_pane.is_more_prominent_than(active) {
        output_pane = active.output_pane();
    }

    let clear_history = if force_clear || output_pane.is_more_prominent_than(active) {
        true
    } else if output_pane == active {
        false
    } else {
        !history_contains(output_pane)
    };

    PaneDecision {
        output_pane,
        clear_history,
    }
}

/// Turns links into rendered layers.
///
/// Navigations are not queued: two started together run concurrently and
/// the later output simply lands on top.
pub struct NavigationService {
    ctx: Arc<ServiceContext>,
    lifecycle: LayerLifecycleService,
}

impl NavigationService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let lifecycle = LayerLifecycleService::new(Arc::clone(&ctx));
        Self { ctx, lifecycle }
    }

    /// Navigate to `link`, optionally started from the view `from`.
    ///
    /// The caller's link is not modified. Errors are returned for load and
    /// render failures; every other early stop is an
    /// [`NavigationOutcome::Aborted`] and is logged.
    pub fn navigate(
        &self,
        link: Link,
        from: Option<Arc<dyn SourceView>>,
    ) -> BoxFuture<'_, CoreResult<NavigationOutcome>> {
        self.navigate_hop(link, from, 0)
    }

    /// `redirects` counts the canceled loads that led to this navigation
    fn navigate_hop(
        &self,
        link: Link,
        from: Option<Arc<dyn SourceView>>,
        redirects: usize,
    ) -> BoxFuture<'_, CoreResult<NavigationOutcome>> {
        Box::pin(self.dispatch(link, from, redirects))
    }

    /// Navigate to an address with no originating view
    pub async fn navigate_to(&self, address: &str) -> CoreResult<NavigationOutcome> {
        self.navigate(Link::new(address), None).await
    }

    async fn dispatch(
        &self,
        original: Link,
        from: Option<Arc<dyn SourceView>>,
        redirects: usize,
    ) -> CoreResult<NavigationOutcome> {
        let mut link = original.clone();

        // ambient parameters of the originating layer never override the link's own
        if let Some(view) = &from {
            link.merge_missing_parameters(&view.action_parameters());
        }

        let mut context = NavigationContext::default();
        match from.as_ref().map(|view| view.role()) {
            Some(ViewRole::TabContainer { selected_index }) => {
                context.navigated_active_pane = Pane::Tabs;
                context.navigated_active_tab = Some(selected_index);
            }
            Some(ViewRole::HistoryEntry { output_pane }) => {
                context.navigated_active_pane = output_pane.output_pane();
            }
            Some(ViewRole::Detached) | None => {}
        }

        let base = from.as_ref().and_then(|view| view.navigated_url());
        let address = link
            .address
            .as_deref()
            .map(|address| resolve_address(base.as_deref(), address));

        match link.action {
            ActionType::Submit => {
                if let Some(view) = from.as_ref().filter(|view| view.accepts_submit()) {
                    view.submit(&link);
                    return Ok(NavigationOutcome::Submitted);
                }
            }
            ActionType::None => {
                log::debug!("Link action is None, navigation suppressed");
                return Ok(NavigationOutcome::Aborted(AbortReason::ActionNone));
            }
            _ => {}
        }

        if let Some(view) = &from {
            if !view.should_navigate_from(&link) {
                log::info!("Navigation to {address:?} vetoed by the originating layer");
                return Ok(NavigationOutcome::Aborted(AbortReason::Vetoed));
            }
        }

        if link.requires_confirmation() {
            let text = link.confirmation_text.as_deref().unwrap_or_default();
            let confirmed = match &self.ctx.prompt {
                Some(prompt) => prompt.confirm(text).await,
                None => {
                    log::warn!("Confirmation requested but no prompt is attached, declining");
                    false
                }
            };
            if !confirmed {
                log::debug!("Navigation to {address:?} declined");
                return Ok(NavigationOutcome::Aborted(AbortReason::Declined));
            }
            return self.navigate_hop(original.confirmed(), from, redirects).await;
        }

        let Some(address) = address else {
            log::warn!("Link has no address, nothing to navigate to");
            return Ok(NavigationOutcome::Aborted(AbortReason::NoAddress));
        };

        let Some(route) = self.ctx.routes.resolve(&address) else {
            log::warn!("No route matches '{address}'");
            return Ok(NavigationOutcome::Aborted(AbortReason::RouteMiss(address)));
        };

        if route.is_external() && link.request_type == RequestType::NewWindow {
            let view_host = Arc::clone(&self.ctx.view_host);
            let url = address.clone();
            if let Err(e) = self.ctx.run_on_ui(move || view_host.open_external(&url)).await {
                return Ok(Self::ui_abort(&e));
            }
            log::info!("Opened '{address}' externally");
            return Ok(NavigationOutcome::OpenedExternally(address));
        }

        // values extracted from the address win over link values
        let mut parameters = link.parameters.clone();
        parameters.extend(route.parameters.clone());

        let mut layer = route.create_layer();

        let decision = {
            let view_host = Arc::clone(&self.ctx.view_host);
            let name = layer.name().to_string();
            let preferred = layer.preferred_pane();
            let url = address.clone();
            let active = context.navigated_active_pane;
            let split_view = self.ctx.settings.split_view;
            let force_clear = link.request_type == RequestType::ClearPaneHistory;
            self.ctx
                .run_on_ui(move || {
                    let target = view_host
                        .find_attached_view(&url, &name)
                        .unwrap_or(preferred);
                    decide_pane(active, target, split_view, force_clear, |pane| {
                        view_host.history_contains(pane, &name)
                    })
                })
                .await
        };
        let decision = match decision {
            Ok(decision) => decision,
            Err(e) => return Ok(Self::ui_abort(&e)),
        };

        context.navigated_url = Some(address.clone());
        context.output_on_pane = decision.output_pane;
        context.clear_pane_history_on_output = decision.clear_history;
        layer.navigation_context = context;

        let delay = link
            .load_indicator_delay
            .unwrap_or_else(|| self.ctx.settings.load_indicator_delay());
        let title = link
            .load_indicator_title
            .clone()
            .or_else(|| self.ctx.settings.default_load_indicator_title.clone())
            .or_else(|| self.ctx.resources.resource_string(LOAD_INDICATOR_TITLE_KEY));
        let mut indicator = LoadIndicatorTimer::start(
            Arc::clone(&self.ctx.view_host),
            Arc::clone(&self.ctx.ui),
            delay,
            title,
        );
        let loaded = self.lifecycle.load(&mut layer, &address, &parameters).await;
        indicator.stop();

        match loaded? {
            LoadOutcome::Loaded => self.output(layer, address).await,
            LoadOutcome::Canceled { redirect: None } => Ok(NavigationOutcome::Canceled {
                layer: layer.name().to_string(),
            }),
            LoadOutcome::Canceled {
                redirect: Some(redirect),
            } => {
                let max_redirects = self.ctx.settings.max_redirect_depth;
                if redirects >= max_redirects {
                    log::warn!(
                        "Redirect limit of {max_redirects} reached at layer '{}'",
                        layer.name()
                    );
                    return Ok(NavigationOutcome::Aborted(AbortReason::RedirectLimit {
                        layer: layer.name().to_string(),
                    }));
                }
                let outcome = self.navigate_hop(redirect, from, redirects + 1).await?;
                Ok(NavigationOutcome::Redirected {
                    from: layer.name().to_string(),
                    outcome: Box::new(outcome),
                })
            }
        }
    }

    async fn output(&self, mut layer: Layer, url: String) -> CoreResult<NavigationOutcome> {
        layer.set_state(LayerState::Rendering);
        let outcome = NavigationOutcome::Rendered {
            layer: layer.name().to_string(),
            url: url.clone(),
            pane: layer.navigation_context.output_on_pane,
            clear_history: layer.navigation_context.clear_pane_history_on_output,
        };
        let perspective = layer
            .perspective
            .clone()
            .unwrap_or_else(|| DEFAULT_PERSPECTIVE.to_string());

        let view_host = Arc::clone(&self.ctx.view_host);
        let pairing = self.ctx.pairing.clone();
        let target = url.clone();
        let rendered = self
            .ctx
            .run_on_ui(move || view_host.output_layer(layer, &perspective, &target, &pairing))
            .await;

        match rendered {
            Ok(Ok(())) => {
                log::info!("Navigated to '{url}'");
                Ok(outcome)
            }
            Ok(Err(e)) => {
                if e.is_expected() {
                    log::warn!("Rendering '{url}' failed: {e}");
                } else {
                    log::error!("Rendering '{url}' failed: {e}");
                }
                Err(e)
            }
            Err(e) => Ok(Self::ui_abort(&e)),
        }
    }

    fn ui_abort(error: &CoreError) -> NavigationOutcome {
        log::warn!("Navigation aborted: {error}");
        NavigationOutcome::Aborted(AbortReason::UiUnavailable(error.to_string()))
    }
}
