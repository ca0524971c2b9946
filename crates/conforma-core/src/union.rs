//! # Union Descriptor — Logical OR Over Alternatives
//!
//! A value conforms to a union iff it conforms to at least one member.
//! Members are tried in declaration order and the scan short-circuits;
//! since members are pure predicates, order affects performance only.
//!
//! The exhaustive predicate detects overlapping unions: it requires exactly
//! one member to match, so a union of `integer | number` is exhaustive for
//! `1.5` but ambiguous for `1`.

use serde_json::Value;

use crate::descriptor::{Descriptor, DescriptorRef};
use crate::error::DefinitionError;

/// Descriptor accepting any value accepted by at least one member.
#[derive(Debug, Clone)]
pub struct UnionDescriptor {
    members: Vec<DescriptorRef>,
}

impl UnionDescriptor {
    /// Build a union over the given members, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::EmptyUnion`] for an empty member list — a
    /// union over nothing could never accept a value, and constructing one
    /// is always a mistake in the calling code.
    pub fn new(members: Vec<DescriptorRef>) -> Result<Self, DefinitionError> {
        if members.is_empty() {
            return Err(DefinitionError::EmptyUnion);
        }
        Ok(Self { members })
    }

    /// The member descriptors, in declaration order.
    pub fn members(&self) -> &[DescriptorRef] {
        &self.members
    }
}

impl Descriptor for UnionDescriptor {
    /// Member names joined with `" | "` in declaration order — no
    /// deduplication, no sorting.
    fn name(&self) -> String {
        self.members
            .iter()
            .map(|member| member.name())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn check_conformity(&self, value: &Value) -> bool {
        self.members
            .iter()
            .any(|member| member.check_conformity(value))
    }

    /// True iff exactly one member matches. The scan continues past the
    /// first match so a later overlapping member is still detected, and
    /// returns false immediately on a second match.
    fn check_conformity_exhaustive(&self, value: &Value) -> bool {
        let mut matched = false;
        for member in &self.members {
            if member.check_conformity(value) {
                if matched {
                    return false;
                }
                matched = true;
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::shared;
    use crate::enumerated::EnumeratedDescriptor;
    use crate::leaf::{IntegerDescriptor, NullDescriptor, NumberDescriptor, StringDescriptor};
    use serde_json::json;

    fn string_or_number() -> UnionDescriptor {
        UnionDescriptor::new(vec![shared(StringDescriptor), shared(NumberDescriptor)])
            .expect("two members")
    }

    #[test]
    fn test_empty_union_is_a_definition_error() {
        let err = UnionDescriptor::new(Vec::new()).unwrap_err();
        assert_eq!(err, DefinitionError::EmptyUnion);
    }

    #[test]
    fn test_name_joins_members_in_declaration_order() {
        assert_eq!(string_or_number().name(), "string | number");
        let reversed =
            UnionDescriptor::new(vec![shared(NumberDescriptor), shared(StringDescriptor)])
                .unwrap();
        assert_eq!(reversed.name(), "number | string");
    }

    #[test]
    fn test_name_keeps_spaces_in_member_names() {
        let d = UnionDescriptor::new(vec![
            shared(EnumeratedDescriptor::named(vec!["a".into()], "A")),
            shared(EnumeratedDescriptor::named(vec!["b".into()], "B C")),
        ])
        .unwrap();
        assert_eq!(d.name(), "A | B C");
    }

    #[test]
    fn test_name_keeps_duplicates() {
        let d = UnionDescriptor::new(vec![shared(NullDescriptor), shared(NullDescriptor)])
            .unwrap();
        assert_eq!(d.name(), "null | null");
    }

    #[test]
    fn test_conformity_is_logical_or() {
        let d = string_or_number();
        assert!(d.check_conformity(&json!("x")));
        assert!(d.check_conformity(&json!(4)));
        assert!(!d.check_conformity(&json!(true)));
        assert!(!d.check_conformity(&json!([1])));
    }

    #[test]
    fn test_exhaustive_with_single_matching_member() {
        let d = string_or_number();
        assert!(d.check_conformity_exhaustive(&json!("x")));
        assert!(d.check_conformity_exhaustive(&json!(4)));
        assert!(!d.check_conformity_exhaustive(&json!(true)));
    }

    #[test]
    fn test_exhaustive_rejects_overlapping_members() {
        let d = UnionDescriptor::new(vec![shared(IntegerDescriptor), shared(NumberDescriptor)])
            .unwrap();
        // 1.5 only matches `number`; 1 matches both members.
        assert!(d.check_conformity_exhaustive(&json!(1.5)));
        assert!(d.check_conformity(&json!(1)));
        assert!(!d.check_conformity_exhaustive(&json!(1)));
    }

    #[test]
    fn test_exhaustive_rejects_duplicate_members() {
        let d = UnionDescriptor::new(vec![shared(StringDescriptor), shared(StringDescriptor)])
            .unwrap();
        assert!(d.check_conformity(&json!("x")));
        assert!(!d.check_conformity_exhaustive(&json!("x")));
    }

    #[test]
    fn test_union_of_enumerations() {
        let d = UnionDescriptor::new(vec![
            shared(EnumeratedDescriptor::named(vec!["on".into()], "on-state")),
            shared(EnumeratedDescriptor::named(vec!["off".into()], "off-state")),
        ])
        .unwrap();
        assert_eq!(d.name(), "on-state | off-state");
        assert!(d.check_conformity(&json!("on")));
        assert!(d.check_conformity_exhaustive(&json!("off")));
        assert!(!d.check_conformity(&json!("idle")));
    }

    #[test]
    fn test_is_optional_false() {
        assert!(!string_or_number().is_optional());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::descriptor::shared;
    use crate::leaf::{
        ArrayDescriptor, BooleanDescriptor, IntegerDescriptor, NullDescriptor, NumberDescriptor,
        ObjectDescriptor, StringDescriptor,
    };
    use proptest::prelude::*;

    /// Strategy for arbitrary JSON values, including nested aggregates.
    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            any::<f64>().prop_filter("finite", |f| f.is_finite()).prop_map(|f| serde_json::json!(f)),
            "[a-zA-Z0-9_ ]{0,20}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..6).prop_map(|m| {
                    let map: serde_json::Map<String, Value> = m.into_iter().collect();
                    Value::Object(map)
                }),
            ]
        })
    }

    fn leaf_pool() -> Vec<DescriptorRef> {
        vec![
            shared(NullDescriptor),
            shared(BooleanDescriptor),
            shared(NumberDescriptor),
            shared(IntegerDescriptor),
            shared(StringDescriptor),
            shared(ArrayDescriptor),
            shared(ObjectDescriptor),
        ]
    }

    /// Strategy for a non-empty union over the leaf pool.
    fn union_over_leaves() -> impl Strategy<Value = UnionDescriptor> {
        prop::collection::vec(0usize..7, 1..5).prop_map(|indices| {
            let pool = leaf_pool();
            let members = indices.into_iter().map(|i| pool[i].clone()).collect();
            UnionDescriptor::new(members).expect("non-empty")
        })
    }

    proptest! {
        /// Union conformity agrees with "some member conforms".
        #[test]
        fn union_conformity_is_member_disjunction(
            union in union_over_leaves(),
            value in json_value(),
        ) {
            let any_member = union
                .members()
                .iter()
                .any(|member| member.check_conformity(&value));
            prop_assert_eq!(union.check_conformity(&value), any_member);
        }

        /// Exhaustive conformity agrees with "exactly one member conforms".
        #[test]
        fn union_exhaustive_is_unique_membership(
            union in union_over_leaves(),
            value in json_value(),
        ) {
            let matches = union
                .members()
                .iter()
                .filter(|member| member.check_conformity(&value))
                .count();
            prop_assert_eq!(union.check_conformity_exhaustive(&value), matches == 1);
        }

        /// Exhaustive conformity implies plain conformity.
        #[test]
        fn union_exhaustive_implies_conformity(
            union in union_over_leaves(),
            value in json_value(),
        ) {
            if union.check_conformity_exhaustive(&value) {
                prop_assert!(union.check_conformity(&value));
            }
        }

        /// Name synthesis is deterministic and idempotent.
        #[test]
        fn union_name_is_stable(union in union_over_leaves()) {
            prop_assert_eq!(union.name(), union.name());
        }
    }
}
