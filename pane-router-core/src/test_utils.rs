//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::pairing::{BackRef, Capability, Control, NativeObject, PairKey, PairingRegistry};
use crate::routing::RouteTable;
use crate::services::ServiceContext;
use crate::traits::{
    CapabilityResolver, ConfirmationPrompt, LayerBehavior, ResourceProvider, SourceView,
    UiDispatcher, UiJob, ViewHost, ViewRole,
};
use crate::types::{Layer, LayerItem, Link, NavigationSettings, Pane, Parameters};

// ===== StaticBehavior =====

/// Layer behavior that fills the layer from fixed data and counts hook calls
#[derive(Default)]
pub struct StaticBehavior {
    title: Option<String>,
    items: Vec<LayerItem>,
    pane: Pane,
    composite_link: Option<Link>,
    redirect: Option<Link>,
    /// 如果 Some，load 时返回此错误
    fail_with: Option<String>,
    delay: Option<Duration>,
    loads: AtomicUsize,
    completed: AtomicUsize,
    canceled: AtomicUsize,
    seen: Mutex<Vec<(String, Parameters)>>,
}

impl StaticBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_item(mut self, item: LayerItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_pane(mut self, pane: Pane) -> Self {
        self.pane = pane;
        self
    }

    pub fn with_composite(mut self, link: Link) -> Self {
        self.composite_link = Some(link);
        self
    }

    pub fn redirecting_to(mut self, link: Link) -> Self {
        self.redirect = Some(link);
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn canceled_count(&self) -> usize {
        self.canceled.load(Ordering::SeqCst)
    }

    /// (uri, parameters) of every load call
    pub fn seen(&self) -> Vec<(String, Parameters)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl LayerBehavior for StaticBehavior {
    async fn load(&self, layer: &mut Layer, uri: &str, parameters: &Parameters) -> CoreResult<()> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((uri.to_string(), parameters.clone()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref message) = self.fail_with {
            return Err(CoreError::LoadFailed {
                layer: layer.name().to_string(),
                message: message.clone(),
            });
        }
        if let Some(ref redirect) = self.redirect {
            layer.cancel_load_and_navigate(redirect.clone(), Parameters::new());
            return Ok(());
        }

        layer.title.clone_from(&self.title);
        layer.items.extend(self.items.iter().cloned());
        layer.composite_layer_link.clone_from(&self.composite_link);
        Ok(())
    }

    fn preferred_pane(&self, _layer: &Layer) -> Pane {
        self.pane
    }

    fn on_load_complete(&self, _layer: &mut Layer) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_load_canceled(&self, _layer: &Layer) {
        self.canceled.fetch_add(1, Ordering::SeqCst);
    }
}

// ===== MockNative / MockCapabilityResolver =====

#[derive(Debug)]
pub struct MockNative {
    pub capability: Capability,
    key: PairKey,
    back_ref: BackRef,
}

impl MockNative {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            key: PairKey::new(),
            back_ref: BackRef::new(),
        }
    }
}

impl NativeObject for MockNative {
    fn key(&self) -> PairKey {
        self.key
    }

    fn back_ref(&self) -> &BackRef {
        &self.back_ref
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct MockCapabilityResolver {
    supported: Vec<Capability>,
    resolved: AtomicUsize,
}

impl MockCapabilityResolver {
    pub fn new(supported: Vec<Capability>) -> Self {
        Self {
            supported,
            resolved: AtomicUsize::new(0),
        }
    }

    pub fn resolve_count(&self) -> usize {
        self.resolved.load(Ordering::SeqCst)
    }
}

impl CapabilityResolver for MockCapabilityResolver {
    fn resolve(&self, capability: &Capability) -> Option<Arc<dyn NativeObject>> {
        if !self.supported.contains(capability) {
            return None;
        }
        self.resolved.fetch_add(1, Ordering::SeqCst);
        Some(Arc::new(MockNative::new(capability.clone())))
    }
}

// ===== MockViewHost =====

/// What the view host was asked to render
#[derive(Debug, Clone)]
pub struct RenderRecord {
    pub layer: Layer,
    pub perspective: String,
    pub url: String,
}

#[derive(Default)]
pub struct MockViewHost {
    rendered: Mutex<Vec<RenderRecord>>,
    attached: Mutex<HashMap<String, Pane>>,
    history: Mutex<Vec<(Pane, String)>>,
    external: Mutex<Vec<String>>,
    shown: Mutex<Vec<Option<String>>>,
    hidden: AtomicUsize,
    /// 如果 Some，output_layer 时返回此错误
    render_error: Mutex<Option<String>>,
}

impl MockViewHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend a view for `layer_name` is attached in `pane`
    pub fn with_attached(self, layer_name: &str, pane: Pane) -> Self {
        self.attached
            .lock()
            .unwrap()
            .insert(layer_name.to_string(), pane);
        self
    }

    pub fn with_history(self, pane: Pane, layer_name: &str) -> Self {
        self.history
            .lock()
            .unwrap()
            .push((pane, layer_name.to_string()));
        self
    }

    pub fn set_render_error(&self, message: Option<&str>) {
        *self.render_error.lock().unwrap() = message.map(str::to_string);
    }

    pub fn rendered(&self) -> Vec<RenderRecord> {
        self.rendered.lock().unwrap().clone()
    }

    pub fn external(&self) -> Vec<String> {
        self.external.lock().unwrap().clone()
    }

    pub fn indicator_shown(&self) -> Vec<Option<String>> {
        self.shown.lock().unwrap().clone()
    }

    pub fn indicator_hidden(&self) -> usize {
        self.hidden.load(Ordering::SeqCst)
    }
}

impl ViewHost for MockViewHost {
    fn output_layer(
        &self,
        layer: Layer,
        perspective: &str,
        navigated_url: &str,
        pairing: &PairingRegistry,
    ) -> CoreResult<()> {
        if let Some(ref message) = *self.render_error.lock().unwrap() {
            return Err(CoreError::RenderFailed(message.clone()));
        }
        for item in &layer.items {
            pairing.get_pair(&Control::new(Capability::from(item)))?;
        }
        self.history.lock().unwrap().push((
            layer.navigation_context.output_on_pane,
            layer.name().to_string(),
        ));
        self.rendered.lock().unwrap().push(RenderRecord {
            layer,
            perspective: perspective.to_string(),
            url: navigated_url.to_string(),
        });
        Ok(())
    }

    fn find_attached_view(&self, address: &str, layer_name: &str) -> Option<Pane> {
        let attached = self.attached.lock().unwrap();
        attached
            .get(address)
            .or_else(|| attached.get(layer_name))
            .copied()
    }

    fn history_contains(&self, pane: Pane, layer_name: &str) -> bool {
        self.history
            .lock()
            .unwrap()
            .iter()
            .any(|(p, name)| *p == pane && name == layer_name)
    }

    fn open_external(&self, url: &str) {
        self.external.lock().unwrap().push(url.to_string());
    }

    fn show_load_indicator(&self, title: Option<&str>) {
        self.shown.lock().unwrap().push(title.map(str::to_string));
    }

    fn hide_load_indicator(&self) {
        self.hidden.fetch_add(1, Ordering::SeqCst);
    }
}

// ===== MockPrompt =====

pub struct MockPrompt {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl MockPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationPrompt for MockPrompt {
    async fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer
    }
}

// ===== MockSourceView =====

pub struct MockSourceView {
    role: ViewRole,
    url: Option<String>,
    action_parameters: Parameters,
    accepts_submit: bool,
    veto: bool,
    submitted: Mutex<Vec<Link>>,
}

impl MockSourceView {
    pub fn new(role: ViewRole, url: Option<&str>) -> Self {
        Self {
            role,
            url: url.map(str::to_string),
            action_parameters: Parameters::new(),
            accepts_submit: false,
            veto: false,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn in_pane(pane: Pane, url: &str) -> Self {
        Self::new(ViewRole::HistoryEntry { output_pane: pane }, Some(url))
    }

    pub fn with_action_parameter(mut self, key: &str, value: &str) -> Self {
        self.action_parameters
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn accepting_submit(mut self) -> Self {
        self.accepts_submit = true;
        self
    }

    pub fn vetoing(mut self) -> Self {
        self.veto = true;
        self
    }

    pub fn submitted(&self) -> Vec<Link> {
        self.submitted.lock().unwrap().clone()
    }
}

impl SourceView for MockSourceView {
    fn role(&self) -> ViewRole {
        self.role
    }

    fn navigated_url(&self) -> Option<String> {
        self.url.clone()
    }

    fn action_parameters(&self) -> Parameters {
        self.action_parameters.clone()
    }

    fn accepts_submit(&self) -> bool {
        self.accepts_submit
    }

    fn submit(&self, link: &Link) {
        self.submitted.lock().unwrap().push(link.clone());
    }

    fn should_navigate_from(&self, _link: &Link) -> bool {
        !self.veto
    }
}

// ===== MockResources =====

pub struct MockResources(HashMap<String, String>);

impl MockResources {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }
}

impl ResourceProvider for MockResources {
    fn resource_string(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

// ===== DroppingUiDispatcher =====

/// UI thread that has gone away: every job is dropped unrun
pub struct DroppingUiDispatcher;

impl UiDispatcher for DroppingUiDispatcher {
    fn dispatch(&self, job: UiJob) {
        drop(job);
    }
}

// ===== 工厂方法 =====

pub fn pairing_registry() -> PairingRegistry {
    PairingRegistry::new(Arc::new(MockCapabilityResolver::new(vec![
        Capability::Button,
        Capability::Label,
        Capability::TextBox,
        Capability::Fieldset,
        Capability::List,
        Capability::Browser,
    ])))
}

/// Register `(pattern, layer name, behavior)` routes in order
pub fn route_table(routes: Vec<(&str, &'static str, Arc<StaticBehavior>)>) -> RouteTable {
    let mut table = RouteTable::new();
    for (pattern, name, behavior) in routes {
        table
            .register(pattern, move || Layer::new(name, behavior.clone()))
            .unwrap();
    }
    table
}

pub fn create_test_context(
    routes: RouteTable,
    view_host: Arc<MockViewHost>,
    settings: NavigationSettings,
) -> ServiceContext {
    ServiceContext::new(Arc::new(routes), view_host, pairing_registry(), settings)
}
