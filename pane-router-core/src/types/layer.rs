//! Layer: the screen-equivalent controller state

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::traits::LayerBehavior;

use super::{
    Button, FieldErrors, LayerItem, Link, NavigationContext, Pane, Parameters, ValidationErrors,
};

/// Lifecycle state of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerState {
    #[default]
    Constructed,
    Loading,
    Canceled,
    Loaded,
    Rendering,
    Active,
    Cleared,
}

/// Opaque style bag handed to the rendering boundary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayerStyle {
    pub values: BTreeMap<String, String>,
}

/// A screen controller.
///
/// `name` is the identity key used by pane history; `id` is unique per
/// instance and changes on [`Clone`]. Author code fills a layer from
/// [`LayerBehavior::load`].
pub struct Layer {
    id: Uuid,
    name: String,
    pub title: Option<String>,
    pub items: Vec<LayerItem>,
    pub action_buttons: Vec<Button>,
    pub back_button: Option<Button>,
    /// Name of the layer whose surface this layer's items were spliced into
    pub composite_parent: Option<String>,
    /// Next layer of the composite chain (large form factor only)
    pub composite_layer_link: Option<Link>,
    pub parameters: Parameters,
    /// Ambient parameters merged into every navigation started from this layer's views
    pub action_parameters: Parameters,
    /// Keyboard shortcut bindings
    pub shortcuts: HashMap<String, Link>,
    /// Id of the focused item or of an element inside one
    pub focused_item: Option<String>,
    pub style: LayerStyle,
    /// View perspective requested from the rendering boundary
    pub perspective: Option<String>,
    pub navigation_context: NavigationContext,
    state: LayerState,
    cancel_load: bool,
    redirect: Option<Link>,
    validation_errors: ValidationErrors,
    behavior: Arc<dyn LayerBehavior>,
}

impl Layer {
    #[must_use]
    pub fn new(name: impl Into<String>, behavior: Arc<dyn LayerBehavior>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            title: None,
            items: Vec::new(),
            action_buttons: Vec::new(),
            back_button: None,
            composite_parent: None,
            composite_layer_link: None,
            parameters: Parameters::new(),
            action_parameters: Parameters::new(),
            shortcuts: HashMap::new(),
            focused_item: None,
            style: LayerStyle::default(),
            perspective: None,
            navigation_context: NavigationContext::default(),
            state: LayerState::Constructed,
            cancel_load: false,
            redirect: None,
            validation_errors: ValidationErrors::new(),
            behavior,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn state(&self) -> LayerState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: LayerState) {
        self.state = state;
    }

    /// Called by the rendering boundary once the layer's view is on screen.
    pub fn mark_active(&mut self) {
        self.state = LayerState::Active;
    }

    #[must_use]
    pub fn behavior(&self) -> Arc<dyn LayerBehavior> {
        Arc::clone(&self.behavior)
    }

    /// Pane the behavior would like this layer shown in
    #[must_use]
    pub fn preferred_pane(&self) -> Pane {
        self.behavior.preferred_pane(self)
    }

    #[must_use]
    pub fn is_load_canceled(&self) -> bool {
        self.cancel_load
    }

    /// Abort the current load and navigate elsewhere once it returns.
    ///
    /// The redirect carries the layer's action parameters overlaid with
    /// `overrides`; values already on `link` are kept.
    pub fn cancel_load_and_navigate(&mut self, link: impl Into<Link>, overrides: Parameters) {
        let mut merged = self.action_parameters.clone();
        merged.extend(overrides);

        let mut link = link.into();
        link.merge_missing_parameters(&merged);

        self.cancel_load = true;
        self.redirect = Some(link);
    }

    pub(crate) fn take_redirect(&mut self) -> Option<Link> {
        self.redirect.take()
    }

    #[must_use]
    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation_errors
    }

    /// Layer is valid iff no field has broken rules
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation_errors
            .values()
            .all(|errors| errors.broken_rules.is_empty())
    }

    /// Validate submitted values against the validators of every fieldset field.
    ///
    /// Only fields whose id is present in `parameters` are checked. A field
    /// that passes gets the submitted text written back onto it.
    pub fn validate(&mut self, parameters: &Parameters) -> bool {
        self.validation_errors.clear();

        for item in &mut self.items {
            let LayerItem::Fieldset(fieldset) = item else {
                continue;
            };
            for field in &mut fieldset.fields {
                let Some(value) = parameters.get(&field.id) else {
                    continue;
                };
                let broken_rules = field
                    .validator
                    .as_ref()
                    .map(|validator| validator.validate(value))
                    .unwrap_or_default();

                if broken_rules.is_empty() {
                    field.text = Some(value.clone());
                } else {
                    log::debug!(
                        "Field '{}' on layer '{}' broke {} rule(s)",
                        field.id,
                        self.name,
                        broken_rules.len()
                    );
                    self.validation_errors
                        .insert(field.id.clone(), FieldErrors { broken_rules });
                }
            }
        }

        self.is_valid()
    }

    /// Reset to a blank, reusable state. Identity (`id`, `name`) is kept.
    pub fn clear(&mut self) {
        self.cancel_load = false;
        self.redirect = None;
        self.back_button = None;
        self.composite_parent = None;
        self.composite_layer_link = None;
        self.parameters.clear();
        self.action_buttons.clear();
        self.items.clear();
        self.validation_errors.clear();
        self.shortcuts.clear();
        self.focused_item = None;
        self.state = LayerState::Cleared;
    }

    /// Index of the item holding the focused element
    #[must_use]
    pub fn focused_item_index(&self) -> Option<usize> {
        let focused = self.focused_item.as_deref()?;
        self.items
            .iter()
            .position(|item| item.id() == focused)
            .or_else(|| self.items.iter().position(|item| item.contains(focused)))
    }
}

impl Clone for Layer {
    /// Structurally independent copy with a fresh identity and the same `name`.
    fn clone(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            title: self.title.clone(),
            items: self.items.clone(),
            action_buttons: self.action_buttons.clone(),
            back_button: self.back_button.clone(),
            composite_parent: self.composite_parent.clone(),
            composite_layer_link: self.composite_layer_link.clone(),
            parameters: self.parameters.clone(),
            action_parameters: self.action_parameters.clone(),
            shortcuts: self.shortcuts.clone(),
            // item ids survive the copy; focus is kept only if it still resolves
            focused_item: self
                .focused_item_index()
                .and_then(|_| self.focused_item.clone()),
            style: self.style.clone(),
            perspective: self.perspective.clone(),
            navigation_context: self.navigation_context.clone(),
            state: self.state,
            cancel_load: self.cancel_load,
            redirect: self.redirect.clone(),
            validation_errors: self.validation_errors.clone(),
            behavior: Arc::clone(&self.behavior),
        }
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("state", &self.state)
            .field("items", &self.items.len())
            .field("cancel_load", &self.cancel_load)
            .finish_non_exhaustive()
    }
}
