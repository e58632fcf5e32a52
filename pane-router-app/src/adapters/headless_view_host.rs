//! In-memory rendering boundary

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use pane_router_core::error::CoreResult;
use pane_router_core::pairing::{Capability, Control, PairingRegistry};
use pane_router_core::traits::ViewHost;
use pane_router_core::types::{HistoryEntry, Layer, Pane, PaneHistory, PaneStack};

/// A layer currently shown in a pane, with its paired controls
pub struct RenderedView {
    pub layer: Layer,
    pub perspective: String,
    pub controls: Vec<Control>,
    pub rendered_at: DateTime<Utc>,
}

#[derive(Default)]
struct HostState {
    history: PaneHistory,
    /// navigated URL -> pane of the view registered for it
    attached: HashMap<String, Pane>,
    views: HashMap<Pane, RenderedView>,
    external: Vec<String>,
    indicator: Option<Option<String>>,
}

/// View host without a screen.
///
/// Keeps pane history, pairs every rendered item with a native control and
/// answers existing-view lookups. Used by headless frontends and tests.
#[derive(Default)]
pub struct HeadlessViewHost {
    state: Mutex<HostState>,
}

impl HeadlessViewHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Name of the layer on top of `pane`
    #[must_use]
    pub fn current_layer(&self, pane: Pane) -> Option<String> {
        self.state()
            .history
            .stack(pane)
            .and_then(PaneStack::top)
            .map(|entry| entry.layer_name.clone())
    }

    /// Layer names in `pane`'s history, oldest first
    #[must_use]
    pub fn history(&self, pane: Pane) -> Vec<String> {
        self.state()
            .history
            .stack(pane)
            .map(|stack| {
                stack
                    .entries()
                    .iter()
                    .map(|entry| entry.layer_name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Perspective the view in `pane` was rendered with
    #[must_use]
    pub fn perspective(&self, pane: Pane) -> Option<String> {
        self.state()
            .views
            .get(&pane.output_pane())
            .map(|view| view.perspective.clone())
    }

    /// Number of native controls paired for the view in `pane`
    #[must_use]
    pub fn control_count(&self, pane: Pane) -> usize {
        self.state()
            .views
            .get(&pane.output_pane())
            .map_or(0, |view| view.controls.len())
    }

    /// Title of the visible load indicator, `None` when hidden
    #[must_use]
    pub fn load_indicator(&self) -> Option<Option<String>> {
        self.state().indicator.clone()
    }

    #[must_use]
    pub fn opened_externally(&self) -> Vec<String> {
        self.state().external.clone()
    }

    /// Drop the top of `pane`'s history, as a back gesture would.
    ///
    /// Returns the name of the layer that is on top afterwards.
    pub fn go_back(&self, pane: Pane) -> Option<String> {
        let mut state = self.state();
        let stack = state.history.stack_mut(pane);
        let popped = stack.pop()?;
        let top = stack.top().map(|entry| entry.layer_name.clone());
        if let Some(url) = popped.navigated_url {
            state.attached.remove(&url);
        }
        // the platform re-renders the revealed layer
        state.views.remove(&pane.output_pane());
        log::debug!("Back on {pane:?}: '{}' -> {top:?}", popped.layer_name);
        top
    }
}

impl ViewHost for HeadlessViewHost {
    fn output_layer(
        &self,
        mut layer: Layer,
        perspective: &str,
        navigated_url: &str,
        pairing: &PairingRegistry,
    ) -> CoreResult<()> {
        let pane = layer.navigation_context.output_on_pane.output_pane();
        let clear_history = layer.navigation_context.clear_pane_history_on_output;

        let mut controls = Vec::with_capacity(layer.items.len());
        for item in &layer.items {
            let control = Control::new(Capability::from(item));
            pairing.get_pair(&control)?;
            controls.push(control);
        }
        for button in layer.action_buttons.iter().chain(&layer.back_button) {
            log::trace!("Pairing button '{}'", button.id);
            let control = Control::new(Capability::Button);
            pairing.get_pair(&control)?;
            controls.push(control);
        }

        layer.mark_active();

        let mut state = self.state();
        // entries the push is about to drop no longer have an attached view
        let stack = state.history.stack_mut(pane);
        let keep = if clear_history {
            0
        } else {
            stack
                .entries()
                .iter()
                .position(|entry| entry.layer_name == layer.name())
                .unwrap_or(stack.len())
        };
        let stale: Vec<String> = stack.entries()[keep..]
            .iter()
            .filter_map(|entry| entry.navigated_url.clone())
            .collect();
        for url in stale {
            state.attached.remove(&url);
        }
        state.history.stack_mut(pane).push(
            HistoryEntry::new(
                layer.name().to_string(),
                layer.id(),
                Some(navigated_url.to_string()),
            ),
            clear_history,
        );
        state.attached.insert(navigated_url.to_string(), pane);
        log::debug!(
            "Rendered '{}' on {pane:?} with {} control(s)",
            layer.name(),
            controls.len()
        );
        state.views.insert(
            pane,
            RenderedView {
                layer,
                perspective: perspective.to_string(),
                controls,
                rendered_at: Utc::now(),
            },
        );
        Ok(())
    }

    fn find_attached_view(&self, address: &str, layer_name: &str) -> Option<Pane> {
        let state = self.state();
        state
            .attached
            .get(address)
            .copied()
            .or_else(|| state.history.pane_showing(layer_name))
    }

    fn history_contains(&self, pane: Pane, layer_name: &str) -> bool {
        self.state().history.contains(pane, layer_name)
    }

    fn open_external(&self, url: &str) {
        log::info!("Opening external URL: {url}");
        self.state().external.push(url.to_string());
    }

    fn show_load_indicator(&self, title: Option<&str>) {
        self.state().indicator = Some(title.map(str::to_string));
    }

    fn hide_load_indicator(&self) {
        self.state().indicator = None;
    }
}
