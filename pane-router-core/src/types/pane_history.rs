//! Per-pane history stacks

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Pane;

/// One rendered layer in a pane's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Identity key; equal names occupy the same history slot
    pub layer_name: String,
    pub layer_id: Uuid,
    pub navigated_url: Option<String>,
    pub output_at: DateTime<Utc>,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(layer_name: String, layer_id: Uuid, navigated_url: Option<String>) -> Self {
        Self {
            layer_name,
            layer_id,
            navigated_url,
            output_at: Utc::now(),
        }
    }
}

/// History stack of a single pane
#[derive(Debug, Clone, Default)]
pub struct PaneStack {
    entries: Vec<HistoryEntry>,
}

impl PaneStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an entry.
    ///
    /// With `clear_history` every earlier entry is dropped. Otherwise, if an
    /// entry with the same layer name already exists, the stack is truncated
    /// back to that slot before the push.
    pub fn push(&mut self, entry: HistoryEntry, clear_history: bool) {
        if clear_history {
            self.entries.clear();
        } else if let Some(index) = self.position(&entry.layer_name) {
            self.entries.truncate(index);
        }
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn contains(&self, layer_name: &str) -> bool {
        self.position(layer_name).is_some()
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, layer_name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.layer_name == layer_name)
    }
}

/// History stacks for every content pane
#[derive(Debug, Clone, Default)]
pub struct PaneHistory {
    stacks: HashMap<Pane, PaneStack>,
}

impl PaneHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack for a pane (`Tabs` maps to `Master`)
    #[must_use]
    pub fn stack(&self, pane: Pane) -> Option<&PaneStack> {
        self.stacks.get(&pane.output_pane())
    }

    pub fn stack_mut(&mut self, pane: Pane) -> &mut PaneStack {
        self.stacks.entry(pane.output_pane()).or_default()
    }

    /// Pane whose top entry is showing `layer_name`, if any
    #[must_use]
    pub fn pane_showing(&self, layer_name: &str) -> Option<Pane> {
        [Pane::Popover, Pane::Detail, Pane::Master]
            .into_iter()
            .find(|pane| {
                self.stack(*pane)
                    .and_then(PaneStack::top)
                    .is_some_and(|entry| entry.layer_name == layer_name)
            })
    }

    #[must_use]
    pub fn contains(&self, pane: Pane, layer_name: &str) -> bool {
        self.stack(pane)
            .is_some_and(|stack| stack.contains(layer_name))
    }
}
