//! Property-based tests for interop type-name tokens.
//!
//! These verify the value-semantics contract over arbitrary names rather
//! than the fixed canonicalization table (covered by unit tests):
//! 1. Wrapping a string never transforms it
//! 2. Equality is exactly name equality, and equal tokens hash identically
//! 3. The persisted plain-string form round-trips to an identical token

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::hash::{DefaultHasher, Hash, Hasher};

use proptest::prelude::*;
use rivet_model::{InteropType, NativeType};
use rustc_hash::FxHashSet;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn name_round_trips_unchanged(s in ".*") {
        let token = InteropType::new(s.clone());
        prop_assert_eq!(token.name(), s.as_str());
        prop_assert_eq!(token.into_name(), s);
    }

    #[test]
    fn equality_is_exactly_name_equality(a in ".*", b in ".*") {
        let ta = InteropType::new(a.clone());
        let tb = InteropType::new(b.clone());
        prop_assert_eq!(ta == tb, a == b);
    }

    #[test]
    fn equal_tokens_hash_identically(s in ".*") {
        let a = InteropType::new(s.clone());
        let b = InteropType::new(s);
        prop_assert_eq!(hash_of(&a), hash_of(&b));

        let mut set = FxHashSet::default();
        set.insert(a);
        set.insert(b);
        prop_assert_eq!(set.len(), 1);
    }

    #[test]
    fn persisted_form_round_trips(s in ".*") {
        let token = InteropType::new(s);
        let doc = serde_json::to_string(&token).unwrap();
        let back: InteropType = serde_json::from_str(&doc).unwrap();
        prop_assert_eq!(back, token);
    }

    #[test]
    fn named_descriptor_canonicalizes_to_qualified_name(
        q in "[A-Za-z][A-Za-z0-9_]*(\\.[A-Za-z][A-Za-z0-9_]*){0,4}",
    ) {
        let native = NativeType::named(q.clone());
        let token = InteropType::from_native(&native);
        prop_assert_eq!(token.name(), q.as_str());
    }
}
