//! Abstract-to-native object pairing
//!
//! Every abstract UI object owns a [`PairSlot`] that holds at most one native
//! counterpart. The slot is written once: the first successful pairing wins
//! and later writes are ignored, so readers never need a lock once the pair
//! exists. Native objects are resolved through the platform's
//! [`CapabilityResolver`] from the abstract object's [`Capability`].

mod control;

pub use control::Control;

use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock};

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::traits::CapabilityResolver;
use crate::types::LayerItem;

/// Capability an abstract object asks the platform to implement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    Button,
    Label,
    TextBox,
    Fieldset,
    List,
    Browser,
    TabView,
    Custom(String),
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Button => f.write_str("button"),
            Self::Label => f.write_str("label"),
            Self::TextBox => f.write_str("text-box"),
            Self::Fieldset => f.write_str("fieldset"),
            Self::List => f.write_str("list"),
            Self::Browser => f.write_str("browser"),
            Self::TabView => f.write_str("tab-view"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

impl From<&LayerItem> for Capability {
    fn from(item: &LayerItem) -> Self {
        match item {
            LayerItem::Fieldset(_) => Self::Fieldset,
            LayerItem::List(_) => Self::List,
            LayerItem::Text { .. } => Self::Label,
            LayerItem::Browser { .. } => Self::Browser,
        }
    }
}

/// Identity of one side of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey(Uuid);

impl PairKey {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PairKey {
    fn default() -> Self {
        Self::new()
    }
}

/// Native side's reference back to its abstract owner (not ownership).
#[derive(Debug, Default)]
pub struct BackRef(OnceLock<PairKey>);

impl BackRef {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the abstract object this native object was paired with
    #[must_use]
    pub fn get(&self) -> Option<PairKey> {
        self.0.get().copied()
    }

    fn bind(&self, key: PairKey) {
        let _ = self.0.set(key);
    }
}

/// Platform rendering delegate of an abstract object
pub trait NativeObject: Send + Sync + fmt::Debug {
    fn key(&self) -> PairKey;

    fn back_ref(&self) -> &BackRef;

    fn as_any(&self) -> &dyn Any;
}

/// Single-assignment slot for an abstract object's native counterpart
#[derive(Debug, Default)]
pub struct PairSlot {
    key: PairKey,
    native: OnceLock<Arc<dyn NativeObject>>,
}

impl PairSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The abstract object's own key
    #[must_use]
    pub fn key(&self) -> PairKey {
        self.key
    }

    #[must_use]
    pub fn get(&self) -> Option<&Arc<dyn NativeObject>> {
        self.native.get()
    }

    #[must_use]
    pub fn is_paired(&self) -> bool {
        self.native.get().is_some()
    }

    /// Identity used for equality and hashing: the native key once paired.
    #[must_use]
    pub fn identity(&self) -> PairKey {
        self.native.get().map_or(self.key, |native| native.key())
    }
}

/// Narrow capability exposed by every abstract UI object
pub trait Pairable {
    fn capability(&self) -> Capability;

    fn pair_slot(&self) -> &PairSlot;
}

/// Resolves and memoizes native counterparts
#[derive(Clone)]
pub struct PairingRegistry {
    resolver: Arc<dyn CapabilityResolver>,
}

impl PairingRegistry {
    #[must_use]
    pub fn new(resolver: Arc<dyn CapabilityResolver>) -> Self {
        Self { resolver }
    }

    /// Native counterpart of `object`, resolving it on first access.
    ///
    /// Fails with [`CoreError::PairingNotFound`] when the platform has no
    /// implementation for the object's capability.
    pub fn get_pair(&self, object: &dyn Pairable) -> CoreResult<Arc<dyn NativeObject>> {
        let slot = object.pair_slot();
        if let Some(native) = slot.get() {
            return Ok(Arc::clone(native));
        }

        let capability = object.capability();
        let native = self.resolver.resolve(&capability).ok_or_else(|| {
            log::error!("No native implementation resolved for capability '{capability}'");
            CoreError::PairingNotFound {
                capability: capability.to_string(),
            }
        })?;

        self.set_pair_once(object, native);
        // a concurrent writer may have won; either way the slot is set now
        slot.get()
            .map(Arc::clone)
            .ok_or_else(|| CoreError::PairingNotFound {
                capability: capability.to_string(),
            })
    }

    /// Pair `object` with `native` unless it is already paired.
    ///
    /// Returns whether this call performed the pairing.
    pub fn set_pair_once(&self, object: &dyn Pairable, native: Arc<dyn NativeObject>) -> bool {
        let slot = object.pair_slot();
        if slot.native.set(Arc::clone(&native)).is_err() {
            log::warn!(
                "Ignoring second pairing for {} object {:?}",
                object.capability(),
                slot.key
            );
            return false;
        }
        native.back_ref().bind(slot.key);
        true
    }

    /// Downcast a native object to its concrete platform type
    #[must_use]
    pub fn native_as<T: 'static>(native: &Arc<dyn NativeObject>) -> Option<&T> {
        native.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for PairingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingRegistry").finish_non_exhaustive()
    }
}
