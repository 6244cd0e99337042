//! Validation errors for model types.

use thiserror::Error;

/// A token's name is still absent after deserialization.
///
/// This is a contract violation local to the caller, not a recoverable
/// condition: a nameless token is meaningless to every downstream consumer
/// that uses it as a lookup key. Construction through [`crate::InteropType::new`]
/// or [`crate::InteropType::from_native`] can never produce it; only the
/// degenerate deserialization path can, and [`crate::InteropType::validate`]
/// surfaces it before the token reaches normal use.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("interop type name is missing")]
pub struct InvalidNameError;
