use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bits::PermissionBits;

/// Anything the engine can authorize: an entity with its own permission
/// bit-set, plus optionally the bit-sets of roles attached to it.
///
/// Roles contribute one level deep only; a role does not itself have roles.
pub trait Principal {
    /// The principal's own bit-set, as stored.
    fn permission_bits(&self) -> &PermissionBits;

    /// Bit-sets contributed by attached roles.
    fn role_bits(&self) -> Vec<&PermissionBits> {
        Vec::new()
    }

    /// The effective bit-set: own bits OR every attached role's bits.
    fn effective_bits(&self) -> PermissionBits {
        let mut bits = self.permission_bits().clone();
        for role in self.role_bits() {
            bits |= role;
        }
        bits
    }
}

/// A named role carrying a permission bit-set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub permissions: PermissionBits,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            permissions: PermissionBits::zero(),
        }
    }

    pub fn with_permissions(mut self, permissions: PermissionBits) -> Self {
        self.permissions = permissions;
        self
    }
}

/// A user account with its own bit-set and zero or more roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub permissions: PermissionBits,
    pub roles: Vec<Role>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            permissions: PermissionBits::zero(),
            roles: Vec::new(),
        }
    }

    pub fn with_permissions(mut self, permissions: PermissionBits) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }
}

impl Principal for User {
    fn permission_bits(&self) -> &PermissionBits {
        &self.permissions
    }

    fn role_bits(&self) -> Vec<&PermissionBits> {
        self.roles.iter().map(|r| &r.permissions).collect()
    }
}

impl Principal for Role {
    fn permission_bits(&self) -> &PermissionBits {
        &self.permissions
    }
}

// A bare bit-set is a principal with no roles. Lets tooling and tests run
// checks against a raw stored value without building a full user record.
impl Principal for PermissionBits {
    fn permission_bits(&self) -> &PermissionBits {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_bits_or_roles_in() {
        let role = Role::new("moderator").with_permissions(PermissionBits::from_raw(0b0100));
        let user = User::new("alice")
            .with_permissions(PermissionBits::from_raw(0b0001))
            .with_role(role);

        assert_eq!(user.effective_bits(), PermissionBits::from_raw(0b0101));
    }

    #[test]
    fn effective_bits_without_roles_is_own_bits() {
        let user = User::new("bob").with_permissions(PermissionBits::from_raw(0b0011));
        assert_eq!(user.effective_bits(), user.permissions);
    }

    #[test]
    fn user_serializes_permissions_as_decimal_string() {
        let user = User::new("carol").with_permissions(PermissionBits::from_raw(3));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["permissions"], "3");
    }
}
