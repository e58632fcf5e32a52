//! 业务逻辑服务层

mod lifecycle_service;
mod load_indicator;
mod navigation_service;

pub use lifecycle_service::{LayerLifecycleService, LoadOutcome};
pub use navigation_service::{AbortReason, NavigationOutcome, NavigationService};

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::error::{CoreError, CoreResult};
use crate::pairing::PairingRegistry;
use crate::routing::RouteTable;
use crate::traits::{
    ConfirmationPrompt, ImmediateUiDispatcher, NoResources, ResourceProvider, UiDispatcher,
    ViewHost,
};
use crate::types::NavigationSettings;

/// 服务上下文 - 持有所有依赖
///
/// The platform layer builds this once and threads it through every
/// navigation; there is no process-wide navigation state.
pub struct ServiceContext {
    /// Route table (immutable after startup)
    pub routes: Arc<RouteTable>,
    /// Rendering boundary
    pub view_host: Arc<dyn ViewHost>,
    /// UI-affinity thread
    pub ui: Arc<dyn UiDispatcher>,
    /// Confirmation dialogs; `None` declines every confirmation
    pub prompt: Option<Arc<dyn ConfirmationPrompt>>,
    /// Localized strings (load indicator title fallback)
    pub resources: Arc<dyn ResourceProvider>,
    /// Abstract-to-native pairing, handed to the view host on every output
    pub pairing: PairingRegistry,
    pub settings: NavigationSettings,
}

impl ServiceContext {
    /// 创建服务上下文
    ///
    /// Jobs run inline, no prompt is attached and no resources are available
    /// until the `with_*` methods say otherwise.
    #[must_use]
    pub fn new(
        routes: Arc<RouteTable>,
        view_host: Arc<dyn ViewHost>,
        pairing: PairingRegistry,
        settings: NavigationSettings,
    ) -> Self {
        Self {
            routes,
            view_host,
            ui: Arc::new(ImmediateUiDispatcher),
            prompt: None,
            resources: Arc::new(NoResources),
            pairing,
            settings,
        }
    }

    #[must_use]
    pub fn with_ui_dispatcher(mut self, ui: Arc<dyn UiDispatcher>) -> Self {
        self.ui = ui;
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: Arc<dyn ConfirmationPrompt>) -> Self {
        self.prompt = Some(prompt);
        self
    }

    #[must_use]
    pub fn with_resources(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = resources;
        self
    }

    /// Run `job` on the UI-affinity thread and wait for its result.
    pub async fn run_on_ui<T, F>(&self, job: F) -> CoreResult<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        self.ui.dispatch(Box::new(move || {
            let _ = tx.send(job());
        }));
        rx.await
            .map_err(|_| CoreError::UiUnavailable("job dropped before completion".to_string()))
    }
}
