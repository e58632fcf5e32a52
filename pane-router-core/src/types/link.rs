//! Navigation request descriptor

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Navigation parameters (keys unique, order irrelevant)
pub type Parameters = HashMap<String, String>;

/// The user intent attached to a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActionType {
    #[default]
    Undefined,
    Add,
    Cancel,
    Edit,
    Delete,
    More,
    Submit,
    /// Suppresses navigation entirely
    None,
}

/// How the target of a link should be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestType {
    #[default]
    Async,
    Media,
    /// Output without retaining the target pane's history
    ClearPaneHistory,
    /// Open outside the application (external browser)
    NewWindow,
}

/// A navigation request: address, parameters and behavior flags.
///
/// Links are consumed once by the dispatcher and cloned before they are
/// mutated, so the caller's copy is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Link {
    pub address: Option<String>,
    pub parameters: Parameters,
    pub action: ActionType,
    pub request_type: RequestType,
    /// When set, navigation waits for the user to confirm this text
    pub confirmation_text: Option<String>,
    /// Falls back to the configured delay when `None`
    pub load_indicator_delay: Option<Duration>,
    pub load_indicator_title: Option<String>,
}

impl Link {
    /// Create a link to an address
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters.extend(parameters);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ActionType) -> Self {
        self.action = action;
        self
    }

    #[must_use]
    pub fn with_request_type(mut self, request_type: RequestType) -> Self {
        self.request_type = request_type;
        self
    }

    #[must_use]
    pub fn with_confirmation(mut self, text: impl Into<String>) -> Self {
        self.confirmation_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_load_indicator(mut self, delay: Duration, title: Option<String>) -> Self {
        self.load_indicator_delay = Some(delay);
        self.load_indicator_title = title;
        self
    }

    /// Add every entry of `parameters` whose key is not already present.
    ///
    /// Existing values are never overwritten.
    pub fn merge_missing_parameters(&mut self, parameters: &Parameters) {
        for (key, value) in parameters {
            self.parameters
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Whether a non-empty confirmation text is attached
    #[must_use]
    pub fn requires_confirmation(&self) -> bool {
        self.confirmation_text
            .as_deref()
            .is_some_and(|text| !text.is_empty())
    }

    /// Clone of this link with the confirmation text removed.
    #[must_use]
    pub fn confirmed(&self) -> Self {
        Self {
            confirmation_text: None,
            ..self.clone()
        }
    }
}

impl From<&str> for Link {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Link {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_does_not_overwrite_existing_keys() {
        let mut link = Link::new("Orders").with_parameter("Id", "1");
        let ambient: Parameters = [
            ("Id".to_string(), "99".to_string()),
            ("Company".to_string(), "acme".to_string()),
        ]
        .into_iter()
        .collect();

        link.merge_missing_parameters(&ambient);

        assert_eq!(link.parameters["Id"], "1");
        assert_eq!(link.parameters["Company"], "acme");
    }

    #[test]
    fn confirmed_clone_drops_confirmation_only() {
        let link = Link::new("Orders/Delete/4")
            .with_action(ActionType::Delete)
            .with_parameter("Id", "4")
            .with_confirmation("Delete this order?");
        assert!(link.requires_confirmation());

        let confirmed = link.confirmed();
        assert!(!confirmed.requires_confirmation());
        assert_eq!(confirmed.address, link.address);
        assert_eq!(confirmed.parameters, link.parameters);
        assert_eq!(confirmed.action, ActionType::Delete);
        // original untouched
        assert!(link.requires_confirmation());
    }

    #[test]
    fn empty_confirmation_text_does_not_prompt() {
        let link = Link::new("Home").with_confirmation("");
        assert!(!link.requires_confirmation());
    }
}
