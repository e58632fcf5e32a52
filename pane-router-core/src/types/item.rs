//! Child UI elements owned by a layer

use super::{Link, Validator};

/// Input field inside a fieldset
#[derive(Debug, Clone, Default)]
pub struct Field {
    /// Key of the submitted value in the parameter map
    pub id: String,
    pub label: Option<String>,
    pub text: Option<String>,
    pub placeholder: Option<String>,
    pub validator: Option<Validator>,
}

impl Field {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// Group of input fields
#[derive(Debug, Clone, Default)]
pub struct Fieldset {
    pub id: String,
    pub header: Option<String>,
    pub fields: Vec<Field>,
}

impl Fieldset {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// Row of an item list
#[derive(Debug, Clone, Default)]
pub struct ListItem {
    pub id: String,
    pub text: String,
    pub subtext: Option<String>,
    pub link: Option<Link>,
}

impl ListItem {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }
}

/// Selectable list of rows
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    pub id: String,
    pub header: Option<String>,
    pub items: Vec<ListItem>,
}

impl ItemList {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }
}

/// An element of a layer's item list
#[derive(Debug, Clone)]
pub enum LayerItem {
    Fieldset(Fieldset),
    List(ItemList),
    Text { id: String, text: String },
    /// External content shown in a browser surface
    Browser { id: String, url: String },
}

impl LayerItem {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Fieldset(fieldset) => &fieldset.id,
            Self::List(list) => &list.id,
            Self::Text { id, .. } | Self::Browser { id, .. } => id,
        }
    }

    /// Whether `id` names this item or an element of its sub-collection
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        if self.id() == id {
            return true;
        }
        match self {
            Self::Fieldset(fieldset) => fieldset.fields.iter().any(|field| field.id == id),
            Self::List(list) => list.items.iter().any(|item| item.id == id),
            Self::Text { .. } | Self::Browser { .. } => false,
        }
    }
}
