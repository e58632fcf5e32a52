//! Resource/localization boundary

/// Resource key of the load indicator title used when neither the link nor
/// the settings name one
pub const LOAD_INDICATOR_TITLE_KEY: &str = "Loading";

/// Resolves display strings by name.
///
/// Lookups never fail: callers fall back to a hard-coded default.
pub trait ResourceProvider: Send + Sync {
    /// Localized string for `name`, if one exists
    fn resource_string(&self, name: &str) -> Option<String>;

    /// Localized string for `name`, or `fallback`
    fn resource_string_or(&self, name: &str, fallback: &str) -> String {
        self.resource_string(name)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Provider without any resources
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceProvider for NoResources {
    fn resource_string(&self, _name: &str) -> Option<String> {
        None
    }
}
