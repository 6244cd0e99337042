//! Native-type descriptors fed to canonicalization.
//!
//! `NativeType` is the generator's handle for "what the host type system says
//! this type is". It exists only as an input to [`crate::InteropType`]
//! construction: the modeling layer turns each parsed native type into a
//! descriptor, and canonicalization maps the descriptor to the exact spelling
//! the generated call signature needs.
//!
//! # Design
//!
//! The well-known machine types get dedicated variants so canonicalization is
//! a total, order-independent match rather than string comparison. Everything
//! else (structs, interfaces, enums) is carried as `Named` with the
//! namespace-qualified name the host reports.

use std::fmt;

/// A host-type-system descriptor for a native type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NativeType {
    /// Signed 32-bit integer.
    Int32,
    /// Signed 16-bit integer.
    Int16,
    /// Generic pointer-to-void.
    VoidPtr,
    /// The absence-of-value type.
    Void,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Signed 64-bit integer.
    Int64,
    /// Any other type, identified by its namespace-qualified name
    /// (e.g. `"MyNamespace.UserStruct"`).
    Named(String),
}

impl NativeType {
    /// Create a descriptor for a user-defined type from its qualified name.
    pub fn named(qualified_name: impl Into<String>) -> Self {
        NativeType::Named(qualified_name.into())
    }

    /// The canonical spelling of this type in a generated call signature.
    ///
    /// Fixed table for the well-known machine types; the qualified name
    /// as-is for everything else:
    ///
    /// | descriptor | canonical name |
    /// |---|---|
    /// | `Int32` | `int` |
    /// | `Int16` | `short` |
    /// | `VoidPtr` | `void*` |
    /// | `Void` | `void` |
    /// | `Float32` | `float` |
    /// | `Float64` | `double` |
    /// | `Int64` | `long` |
    /// | `Named(q)` | `q` |
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        match self {
            NativeType::Int32 => "int",
            NativeType::Int16 => "short",
            NativeType::VoidPtr => "void*",
            NativeType::Void => "void",
            NativeType::Float32 => "float",
            NativeType::Float64 => "double",
            NativeType::Int64 => "long",
            NativeType::Named(qualified) => qualified,
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
