//! Resource provider backed by a string map

use std::collections::HashMap;

use pane_router_core::traits::ResourceProvider;

/// Localized strings loaded from the configuration file
#[derive(Debug, Clone, Default)]
pub struct StaticResourceProvider {
    strings: HashMap<String, String>,
}

impl StaticResourceProvider {
    #[must_use]
    pub fn new(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }
}

impl ResourceProvider for StaticResourceProvider {
    fn resource_string(&self, name: &str) -> Option<String> {
        self.strings.get(name).cloned()
    }
}
