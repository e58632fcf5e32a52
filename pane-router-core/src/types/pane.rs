//! Pane and per-layer navigation context

use serde::{Deserialize, Serialize};

/// Screen region that owns an independent history stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pane {
    Tabs,
    #[default]
    Master,
    Detail,
    Popover,
}

impl Pane {
    /// Prominence rank: `Tabs < Master < Detail < Popover`.
    ///
    /// A navigation whose target outranks the active pane is a forward push
    /// into a more prominent region.
    #[must_use]
    pub const fn prominence(self) -> u8 {
        match self {
            Self::Tabs => 0,
            Self::Master => 1,
            Self::Detail => 2,
            Self::Popover => 3,
        }
    }

    #[must_use]
    pub const fn is_more_prominent_than(self, other: Self) -> bool {
        self.prominence() > other.prominence()
    }

    /// Tabs never receives content directly; it is redirected to Master.
    #[must_use]
    pub const fn output_pane(self) -> Self {
        match self {
            Self::Tabs => Self::Master,
            other => other,
        }
    }
}

/// Navigation bookkeeping recorded on a layer while it is dispatched.
///
/// Written by the dispatcher only; read by the rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationContext {
    pub navigated_url: Option<String>,
    pub navigated_active_pane: Pane,
    pub navigated_active_tab: Option<usize>,
    pub output_on_pane: Pane,
    pub clear_pane_history_on_output: bool,
}
