//! Native objects for the headless frontend

use std::any::Any;
use std::sync::Arc;

use pane_router_core::pairing::{BackRef, Capability, NativeObject, PairKey};
use pane_router_core::traits::CapabilityResolver;

/// Native counterpart that only remembers what it stands for
#[derive(Debug)]
pub struct HeadlessNative {
    capability: Capability,
    key: PairKey,
    back_ref: BackRef,
}

impl HeadlessNative {
    #[must_use]
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            key: PairKey::new(),
            back_ref: BackRef::new(),
        }
    }

    #[must_use]
    pub fn capability(&self) -> &Capability {
        &self.capability
    }
}

impl NativeObject for HeadlessNative {
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

/// Resolves every built-in capability; custom ones only when registered.
#[derive(Debug, Default)]
pub struct HeadlessNativeResolver {
    custom: Vec<String>,
}

impl HeadlessNativeResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_custom(mut self, name: impl Into<String>) -> Self {
        self.custom.push(name.into());
        self
    }
}

impl CapabilityResolver for HeadlessNativeResolver {
    fn resolve(&self, capability: &Capability) -> Option<Arc<dyn NativeObject>> {
        if let Capability::Custom(name) = capability {
            if !self.custom.contains(name) {
                return None;
            }
        }
        Some(Arc::new(HeadlessNative::new(capability.clone())))
    }
}
