//! Action and back buttons

use crate::traits::ResourceProvider;

use super::{ActionType, Link};

/// Button attached to a layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub id: String,
    pub text: String,
    pub action: ActionType,
    pub link: Option<Link>,
}

impl Button {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, link: Option<Link>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            action: link.as_ref().map_or(ActionType::Undefined, |l| l.action),
            link,
        }
    }

    /// Button for an action, labelled from the resource boundary.
    ///
    /// The link's action is set to `action`.
    #[must_use]
    pub fn for_action(action: ActionType, link: Link, resources: &dyn ResourceProvider) -> Self {
        let key = default_label_key(action);
        Self {
            id: key.to_ascii_lowercase(),
            text: resources.resource_string_or(key, key),
            action,
            link: Some(link.with_action(action)),
        }
    }

    /// Back button labelled from the resource boundary
    #[must_use]
    pub fn back(link: Link, resources: &dyn ResourceProvider) -> Self {
        Self {
            id: "back".to_string(),
            text: resources.resource_string_or("Back", "Back"),
            action: ActionType::Cancel,
            link: Some(link),
        }
    }
}

/// Resource key (and hard-coded English fallback) for an action's default label
fn default_label_key(action: ActionType) -> &'static str {
    match action {
        ActionType::Add => "Add",
        ActionType::Cancel => "Cancel",
        ActionType::Edit => "Edit",
        ActionType::Delete => "Delete",
        ActionType::More => "More",
        ActionType::Submit => "Submit",
        ActionType::Undefined | ActionType::None => "OK",
    }
}
