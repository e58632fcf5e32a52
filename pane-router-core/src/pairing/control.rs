use std::hash::{Hash, Hasher};

use super::{Capability, PairSlot, Pairable};

/// Abstract control bound to a lazily resolved native counterpart.
///
/// Equality and hashing follow the native counterpart once paired, so two
/// controls wrapping the same native object compare equal. Pair a control
/// before using it as a hash key.
#[derive(Debug)]
pub struct Control {
    capability: Capability,
    slot: PairSlot,
}

impl Control {
    #[must_use]
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            slot: PairSlot::new(),
        }
    }
}

impl Pairable for Control {
    fn capability(&self) -> Capability {
        self.capability.clone()
    }

    fn pair_slot(&self) -> &PairSlot {
        &self.slot
    }
}

impl PartialEq for Control {
    fn eq(&self, other: &Self) -> bool {
        self.slot.identity() == other.slot.identity()
    }
}

impl Eq for Control {}

impl Hash for Control {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.identity().hash(state);
    }
}
