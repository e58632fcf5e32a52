//! Platform-agnostic application bootstrap for Pane Router.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter injection),
//! `AppConfig` (JSON configuration) and `StartupHooks` (route registration and
//! startup callbacks).

pub mod adapters;
mod config;

pub use config::AppConfig;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pane_router_core::error::{CoreError, CoreResult};
use pane_router_core::pairing::PairingRegistry;
use pane_router_core::routing::RouteTable;
use pane_router_core::services::{NavigationOutcome, NavigationService, ServiceContext};
use pane_router_core::traits::{
    CapabilityResolver, ConfirmationPrompt, ResourceProvider, UiDispatcher, ViewHost,
};

use adapters::StaticResourceProvider;

/// Application hooks for the startup sequence.
#[async_trait::async_trait]
pub trait StartupHooks: Send + Sync {
    /// Register the application's routes. Registration order is match order.
    fn register_routes(&self, _routes: &mut RouteTable) -> CoreResult<()> {
        Ok(())
    }

    /// Called once the home navigation has finished (`None` without a home address).
    async fn on_started(&self, _outcome: Option<&NavigationOutcome>) {}
}

/// No-op startup hooks: no routes, no callbacks.
pub struct NoopStartupHooks;

#[async_trait::async_trait]
impl StartupHooks for NoopStartupHooks {}

/// Platform-agnostic application state.
///
/// Holds the `ServiceContext` and the navigation service. Every frontend
/// constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds all platform adapters)
    pub ctx: Arc<ServiceContext>,
    /// Navigation service
    pub navigation_service: NavigationService,
    /// Configuration the state was built from
    pub config: AppConfig,
    hooks: Arc<dyn StartupHooks>,
    /// Whether the startup sequence has completed
    pub startup_completed: AtomicBool,
}

impl AppState {
    /// Run the startup sequence: navigate to the home address, then notify the hooks.
    pub async fn run_startup(&self) -> CoreResult<Option<NavigationOutcome>> {
        let outcome = match self.config.home_address.as_deref() {
            Some(home) => {
                log::info!("Navigating to home address '{home}'");
                Some(self.navigation_service.navigate_to(home).await?)
            }
            None => {
                log::info!("No home address configured, startup navigation skipped");
                None
            }
        };

        self.hooks.on_started(outcome.as_ref()).await;
        self.startup_completed.store(true, Ordering::SeqCst);
        Ok(outcome)
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `view_host` — the rendering boundary
/// - `capability_resolver` — native implementations for abstract controls
///
/// # Optional
/// - `ui_dispatcher` — defaults to running jobs inline
/// - `confirmation_prompt` — without one every confirmation is declined
/// - `resource_provider` — defaults to the config's `resources` map
/// - `startup_hooks` — defaults to `NoopStartupHooks`
pub struct AppStateBuilder {
    config: AppConfig,
    view_host: Option<Arc<dyn ViewHost>>,
    capability_resolver: Option<Arc<dyn CapabilityResolver>>,
    ui_dispatcher: Option<Arc<dyn UiDispatcher>>,
    confirmation_prompt: Option<Arc<dyn ConfirmationPrompt>>,
    resource_provider: Option<Arc<dyn ResourceProvider>>,
    startup_hooks: Option<Arc<dyn StartupHooks>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            view_host: None,
            capability_resolver: None,
            ui_dispatcher: None,
            confirmation_prompt: None,
            resource_provider: None,
            startup_hooks: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn view_host(mut self, view_host: Arc<dyn ViewHost>) -> Self {
        self.view_host = Some(view_host);
        self
    }

    #[must_use]
    pub fn capability_resolver(mut self, resolver: Arc<dyn CapabilityResolver>) -> Self {
        self.capability_resolver = Some(resolver);
        self
    }

    #[must_use]
    pub fn ui_dispatcher(mut self, ui: Arc<dyn UiDispatcher>) -> Self {
        self.ui_dispatcher = Some(ui);
        self
    }

    #[must_use]
    pub fn confirmation_prompt(mut self, prompt: Arc<dyn ConfirmationPrompt>) -> Self {
        self.confirmation_prompt = Some(prompt);
        self
    }

    #[must_use]
    pub fn resource_provider(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resource_provider = Some(resources);
        self
    }

    #[must_use]
    pub fn startup_hooks(mut self, hooks: Arc<dyn StartupHooks>) -> Self {
        self.startup_hooks = Some(hooks);
        self
    }

    /// Build the `AppState`, registering the hooks' routes.
    ///
    /// # Errors
    /// Returns `CoreError::ConfigError` if required adapters are missing, and
    /// any error raised while registering routes.
    pub fn build(self) -> CoreResult<AppState> {
        let view_host = self
            .view_host
            .ok_or_else(|| CoreError::ConfigError("view_host is required".to_string()))?;
        let resolver = self.capability_resolver.ok_or_else(|| {
            CoreError::ConfigError("capability_resolver is required".to_string())
        })?;
        let hooks = self
            .startup_hooks
            .unwrap_or_else(|| Arc::new(NoopStartupHooks));

        let mut routes = RouteTable::new();
        hooks.register_routes(&mut routes)?;
        log::info!("Registered {} route(s)", routes.len());

        let resources = self.resource_provider.unwrap_or_else(|| {
            Arc::new(StaticResourceProvider::new(self.config.resources.clone()))
        });

        let mut ctx = ServiceContext::new(
            Arc::new(routes),
            view_host,
            PairingRegistry::new(resolver),
            self.config.navigation.clone(),
        )
        .with_resources(resources);
        if let Some(ui) = self.ui_dispatcher {
            ctx = ctx.with_ui_dispatcher(ui);
        }
        if let Some(prompt) = self.confirmation_prompt {
            ctx = ctx.with_prompt(prompt);
        }

        let ctx = Arc::new(ctx);
        let navigation_service = NavigationService::new(Arc::clone(&ctx));

        Ok(AppState {
            ctx,
            navigation_service,
            config: self.config,
            hooks,
            startup_completed: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
