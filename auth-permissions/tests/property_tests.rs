//! Property-based tests for the bit-set algebra
//!
//! The engine's contract is a handful of algebraic laws; proptest drives
//! them across arbitrary subsets of the enumeration instead of hand-picked
//! cases.

use auth_permissions::*;
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

fn permission_subset() -> impl Strategy<Value = Vec<Permission>> {
    subsequence(Permission::ALL.to_vec(), 0..=Permission::ALL.len())
}

fn any_permission() -> impl Strategy<Value = Permission> {
    select(Permission::ALL.to_vec())
}

fn bits_of(held: &[Permission]) -> PermissionBits {
    held.iter()
        .fold(PermissionBits::zero(), |acc, p| acc | p.bits())
}

proptest! {
    #[test]
    fn grant_is_idempotent(held in permission_subset(), p in any_permission()) {
        let base = bits_of(&held);
        let once = grant(&base, p);
        let twice = grant(&once, p);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn grant_order_is_irrelevant(a in any_permission(), b in any_permission()) {
        let ab = grant(&grant(&PermissionBits::zero(), a), b);
        let ba = grant(&grant(&PermissionBits::zero(), b), a);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn granted_permission_is_held(held in permission_subset(), p in any_permission()) {
        let updated = grant(&bits_of(&held), p);
        prop_assert!(holds_literal(&updated, p));
    }

    #[test]
    fn granting_implies_every_dependency(p in any_permission()) {
        let updated = grant(&PermissionBits::zero(), p);
        for dependency in dependencies_of(p) {
            prop_assert!(
                holds_literal(&updated, dependency),
                "{} should imply {}", p, dependency
            );
        }
    }

    #[test]
    fn revoked_permission_is_gone(held in permission_subset(), p in any_permission()) {
        let updated = revoke(&bits_of(&held), p);
        prop_assert!(!holds_literal(&updated, p));
        for dependant in dependants_of(p) {
            prop_assert!(!holds_literal(&updated, dependant));
        }
    }

    #[test]
    fn revoke_never_adds_bits(held in permission_subset(), p in any_permission()) {
        let base = bits_of(&held);
        let updated = revoke(&base, p);
        prop_assert!(base.contains(&updated));
    }

    #[test]
    fn list_and_fold_round_trip(held in permission_subset()) {
        let base = bits_of(&held);
        let folded = fold_permissions(permission_list(&base));
        prop_assert_eq!(folded, base);
    }

    #[test]
    fn decimal_encoding_round_trips(held in permission_subset()) {
        let base = bits_of(&held);
        let decoded: PermissionBits = base.to_string().parse().expect("decimal form parses");
        prop_assert_eq!(decoded, base);
    }
}
