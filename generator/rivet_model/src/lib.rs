//! Rivet model - shared value types for the interop binding generator.
//!
//! This crate contains the foundational data structures the generator's other
//! components (binding-model construction, template expansion) build on:
//! - `InteropType` for canonical type names in generated call signatures
//! - `NativeType` for host-type-system descriptors fed to canonicalization
//! - `InvalidNameError` for rejecting nameless tokens after deserialization
//!
//! # Design Philosophy
//!
//! - **Value semantics**: every type here is immutable, freely clonable data
//!   with no ownership graph of its own. Tokens are equal iff their names are
//!   byte-equal, and equal tokens always hash identically, so they are safe
//!   map keys and set members throughout the generator.
//! - **Explicit construction**: named constructors (`InteropType::new`,
//!   `InteropType::from_native`) plus standard `From` conversions, never
//!   hidden coercions.

mod error;
mod interop_type;
mod native;

pub use error::InvalidNameError;
pub use interop_type::InteropType;
pub use native::NativeType;
