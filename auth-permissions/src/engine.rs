//! Permission checks and bit-set mutations.
//!
//! Everything here is pure computation over a principal's stored bits, its
//! roles' bits, and the compile-time enumeration in [`crate::registry`]. No
//! I/O, no shared state: callers persist the bit-sets returned by [`grant`]
//! and [`revoke`] themselves.

use tracing::{debug, warn};

use crate::bits::PermissionBits;
use crate::principal::Principal;
use crate::registry::Permission;

/// Checks whether the principal holds `required`.
///
/// An `ADMINISTRATOR` principal passes every check here; use
/// [`holds_literal`] when literal bit membership is wanted (e.g. when
/// rendering a permission editor, where "everything, because admin" would
/// mislead).
pub fn has_permission(principal: &impl Principal, required: Permission) -> bool {
    if is_administrator(principal) {
        debug!(required = %required, "administrator short-circuit");
        return true;
    }
    holds_literal(principal, required)
}

/// Checks whether the principal holds every permission in `required`.
pub fn has_all(principal: &impl Principal, required: &[Permission]) -> bool {
    if is_administrator(principal) {
        return true;
    }
    holds_all_literal(principal, required)
}

/// Checks whether the principal holds at least one permission in `required`.
pub fn has_any(principal: &impl Principal, required: &[Permission]) -> bool {
    if is_administrator(principal) {
        return true;
    }
    holds_any_literal(principal, required)
}

/// Literal bit membership test: no administrator short-circuit.
pub fn holds_literal(principal: &impl Principal, required: Permission) -> bool {
    principal.effective_bits().contains(&required.bits())
}

/// Literal all-of test over the effective bits.
pub fn holds_all_literal(principal: &impl Principal, required: &[Permission]) -> bool {
    let effective = principal.effective_bits();
    required.iter().all(|p| effective.contains(&p.bits()))
}

/// Literal any-of test over the effective bits.
pub fn holds_any_literal(principal: &impl Principal, required: &[Permission]) -> bool {
    let effective = principal.effective_bits();
    required.iter().any(|p| effective.contains(&p.bits()))
}

fn is_administrator(principal: &impl Principal) -> bool {
    holds_literal(principal, Permission::Administrator)
}

/// Folds named permissions into one bit-set.
///
/// Unrecognized names contribute zero bits. That leniency is deliberate —
/// stored name lists must keep resolving after a permission is retired — but
/// each miss is logged so typos do not vanish silently.
pub fn fold_permissions<'a, I>(names: I) -> PermissionBits
where
    I: IntoIterator<Item = &'a str>,
{
    let mut bits = PermissionBits::zero();
    for name in names {
        match Permission::from_name(name) {
            Some(permission) => bits |= &permission.bits(),
            None => warn!(name, "ignoring unknown permission name"),
        }
    }
    bits
}

/// Names of every permission the principal literally holds, in declaration
/// order.
///
/// Uses literal membership: an administrator sees exactly the bits set on
/// their record (including `ADMINISTRATOR` itself when set), not the whole
/// enumeration.
pub fn permission_list(principal: &impl Principal) -> Vec<&'static str> {
    let effective = principal.effective_bits();
    Permission::ALL
        .iter()
        .filter(|p| effective.contains(&p.bits()))
        .map(|p| p.name())
        .collect()
}

/// Every permission name in the enumeration, in declaration order.
pub fn all_permissions() -> Vec<&'static str> {
    Permission::ALL.iter().map(|p| p.name()).collect()
}

/// Permissions implied by holding `permission`: those whose bits are a
/// strict subset of its pattern.
///
/// `ADMINISTRATOR` is a separate axis and never appears on either side.
pub fn dependencies_of(permission: Permission) -> Vec<Permission> {
    if permission == Permission::Administrator {
        return Vec::new();
    }
    Permission::ALL
        .iter()
        .copied()
        .filter(|other| {
            *other != Permission::Administrator
                && other.raw_bits() != permission.raw_bits()
                && permission.raw_bits() & other.raw_bits() == other.raw_bits()
        })
        .collect()
}

/// Permissions that imply `permission`: those whose bits are a strict
/// superset of its pattern. Revocation cascades through these.
pub fn dependants_of(permission: Permission) -> Vec<Permission> {
    if permission == Permission::Administrator {
        return Vec::new();
    }
    Permission::ALL
        .iter()
        .copied()
        .filter(|other| {
            *other != Permission::Administrator
                && other.raw_bits() != permission.raw_bits()
                && other.raw_bits() & permission.raw_bits() == permission.raw_bits()
        })
        .collect()
}

/// Returns the principal's own bit-set with `permission`'s bits added.
///
/// Pure: the principal is not mutated and nothing is persisted.
pub fn grant(principal: &impl Principal, permission: Permission) -> PermissionBits {
    principal.permission_bits() | &permission.bits()
}

/// Returns the principal's own bit-set with `permission` revoked.
///
/// Every dependant of `permission` is cleared first, so no permission is
/// left granted while its prerequisite is gone, then `permission`'s own
/// bits are cleared. Pure, like [`grant`].
pub fn revoke(principal: &impl Principal, permission: Permission) -> PermissionBits {
    let mut bits = principal.permission_bits().clone();
    for dependant in dependants_of(permission) {
        debug!(revoked = %permission, cascades = %dependant, "clearing dependant permission");
        bits = bits.without(&dependant.bits());
    }
    bits.without(&permission.bits())
}
