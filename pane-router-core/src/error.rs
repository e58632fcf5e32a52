//! Unified error type definition

use thiserror::Error;

/// Core layer error type
///
/// Routing misses and invalid navigation targets are not represented here:
/// the dispatcher recovers from those locally and reports them through
/// [`NavigationOutcome`](crate::services::NavigationOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No native implementation could be resolved for a capability
    #[error("No native implementation for capability: {capability}")]
    PairingNotFound { capability: String },

    /// A layer's `load` returned an error
    #[error("Layer '{layer}' failed to load: {message}")]
    LoadFailed { layer: String, message: String },

    /// A route pattern was rejected at registration
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidRoutePattern { pattern: String, reason: String },

    /// The rendering boundary failed to output a layer
    #[error("Render failed: {0}")]
    RenderFailed(String),

    /// The UI-affinity thread dropped a job before completing it
    #[error("UI dispatcher unavailable: {0}")]
    UiUnavailable(String),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (bad input, misconfiguration) rather than a fault.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidRoutePattern { .. } | Self::ConfigError(_) => true,
            Self::PairingNotFound { .. }
            | Self::LoadFailed { .. }
            | Self::RenderFailed(_)
            | Self::UiUnavailable(_)
            | Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
