// mav_core/src/error.rs

use thiserror::Error;

/// Errors raised when building entities from untyped input.
///
/// The entity operations themselves are total and never produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("unsupported degrees of freedom {0}, expected 4 or 6")]
    UnsupportedDegreesOfFreedom(u8),
}
