//! Navigation settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_max_composite_depth() -> usize {
    8
}

fn default_max_redirect_depth() -> usize {
    8
}

fn default_load_indicator_delay_ms() -> u64 {
    1000
}

/// Form-factor and dispatch settings consumed by the navigation services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSettings {
    /// Enables composite layer chaining
    #[serde(default)]
    pub large_form_factor: bool,

    /// Master and Detail are visible side by side
    #[serde(default)]
    pub split_view: bool,

    /// Upper bound on chained composite layers below a parent
    #[serde(default = "default_max_composite_depth")]
    pub max_composite_depth: usize,

    /// Upper bound on consecutive cancel-and-redirect hops of one navigation
    #[serde(default = "default_max_redirect_depth")]
    pub max_redirect_depth: usize,

    /// Used when a link carries no delay of its own
    #[serde(default = "default_load_indicator_delay_ms")]
    pub load_indicator_delay_ms: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_load_indicator_title: Option<String>,
}

impl NavigationSettings {
    #[must_use]
    pub fn load_indicator_delay(&self) -> Duration {
        Duration::from_millis(self.load_indicator_delay_ms)
    }

    /// Tablet-style settings: split view with composite chaining
    #[must_use]
    pub fn large_form_factor() -> Self {
        Self {
            large_form_factor: true,
            split_view: true,
            ..Self::default()
        }
    }
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            large_form_factor: false,
            split_view: false,
            max_composite_depth: default_max_composite_depth(),
            max_redirect_depth: default_max_redirect_depth(),
            load_indicator_delay_ms: default_load_indicator_delay_ms(),
            default_load_indicator_title: None,
        }
    }
}
