use thiserror::Error;

use crate::{backend::BackendError, property::PropertyId};

/// Error type for state queries and fluid management.
///
/// The first two variants mean the caller asked for something malformed; the
/// backend variants carry the backend's own message unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// The query did not supply exactly two distinct recognized property keys.
    #[error("Invalid input: {0}")]
    InvalidInputShape(String),

    /// No flash routine is registered for the two properties.
    #[error("Property combination not supported: {a}{b}")]
    UnsupportedCombination { a: char, b: char },

    /// The backend refused to load the requested fluid.
    #[error("Failed to load fluid: {0}")]
    FluidLoadError(String),

    /// A flash, transport or auxiliary backend call failed mid-query.
    #[error("Calculation failed: {0}")]
    BackendComputationError(String),

    /// A state was requested before any fluid was loaded.
    #[error("No fluid loaded")]
    NoFluidLoaded,

    /// Represents errors when the mutex guarding a shared context is poisoned.
    #[error("Mutex was poisoned")]
    MutexPoisoned,

    /// The fluid configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StateError {
    pub(crate) fn unsupported(a: PropertyId, b: PropertyId) -> Self {
        StateError::UnsupportedCombination {
            a: a.symbol(),
            b: b.symbol(),
        }
    }

    /// True when the error stems from malformed caller input rather than the backend.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            StateError::InvalidInputShape(_) | StateError::UnsupportedCombination { .. }
        )
    }
}

impl From<BackendError> for StateError {
    fn from(err: BackendError) -> Self {
        StateError::BackendComputationError(err.message)
    }
}
