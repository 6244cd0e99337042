//! Canonical interop type name.
//!
//! `InteropType` is the textual form of a type exactly as it must appear in a
//! generated platform-invocation signature. Templates substitute it verbatim,
//! and binding-model maps use it as a key, so the representation is a plain
//! normalized string with byte-exact equality.
//!
//! # Construction
//!
//! Two paths, both explicit:
//! - [`InteropType::new`] wraps a literal spelling as-is (`"IUnknown*"`),
//!   with no canonicalization.
//! - [`InteropType::from_native`] canonicalizes a [`NativeType`] descriptor
//!   through the fixed table on [`NativeType::canonical_name`].
//!
//! `Default` additionally produces an empty-name token. That path exists only
//! so deserialization frameworks can reconstruct a token field-by-field;
//! [`InteropType::validate`] rejects any token that comes out of it still
//! unnamed, keeping the "every live token has a name" invariant intact for
//! all normal use.
//!
//! # Persistence
//!
//! The persisted form is exactly the name string (`#[serde(transparent)]`),
//! so a token round-trips through config and template-definition documents
//! with no wrapping metadata.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{InvalidNameError, NativeType};

/// The canonical name of a type in a generated interop call signature.
///
/// Two tokens are equal iff their names are byte-equal (no case folding, no
/// trimming), and equal tokens always hash identically, so `InteropType` is
/// safe as a map key or set member anywhere in the generator.
#[derive(Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteropType {
    name: String,
}

impl InteropType {
    /// Wrap a type name as-is, with no canonicalization.
    ///
    /// Used wherever templates hard-code a spelling:
    /// `InteropType::new("IUnknown*")`.
    pub fn new(name: impl Into<String>) -> Self {
        InteropType { name: name.into() }
    }

    /// Canonicalize a native-type descriptor into its signature spelling.
    #[must_use]
    pub fn from_native(native: &NativeType) -> Self {
        InteropType {
            name: native.canonical_name().to_owned(),
        }
    }

    /// The canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume the token, yielding the name.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }

    /// Whether this is the degenerate nameless token produced by `Default`
    /// or an empty record in a persisted document.
    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Reject a token whose name is still absent after deserialization.
    ///
    /// Callers loading persisted documents run this before letting a token
    /// into maps or templates; no later operation can fail once it passes.
    pub fn validate(&self) -> Result<(), InvalidNameError> {
        if self.name.is_empty() {
            Err(InvalidNameError)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for InteropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for InteropType {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Lets maps keyed by `InteropType` be queried with `&str`. Consistent with
/// `Hash`/`Eq`: the single-field derive delegates both to the name.
impl Borrow<str> for InteropType {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for InteropType {
    fn from(name: &str) -> Self {
        InteropType::new(name)
    }
}

impl From<String> for InteropType {
    fn from(name: String) -> Self {
        InteropType::new(name)
    }
}

impl From<&NativeType> for InteropType {
    fn from(native: &NativeType) -> Self {
        InteropType::from_native(native)
    }
}

impl From<NativeType> for InteropType {
    fn from(native: NativeType) -> Self {
        InteropType::from_native(&native)
    }
}
