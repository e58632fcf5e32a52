//! Platform capability resolver boundary

use std::sync::Arc;

use crate::pairing::{Capability, NativeObject};

/// Supplies native implementations for abstract capabilities.
///
/// Implemented once per platform binding. The resolver only sees the
/// capability, never the concrete abstract type.
pub trait CapabilityResolver: Send + Sync {
    /// A fresh native object for `capability`, or `None` if the platform has none
    fn resolve(&self, capability: &Capability) -> Option<Arc<dyn NativeObject>>;
}
