//! The fixed permission enumeration.
//!
//! Every permission Twatter knows about is declared here with a hand-assigned
//! bit pattern. Patterns are fixed at compile time; nothing registers
//! permissions at runtime. An `_EXTENDED` permission is a compound: its
//! pattern is the union of the base permission's bits plus an exclusive bit
//! of its own, so holding the extended form always implies the base form.
//!
//! `ADMINISTRATOR` sits far above the ordinary range (bit 52) and is a
//! separate axis: it short-circuits permission checks in the engine but never
//! participates in dependency or dependant computation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::bits::PermissionBits;
use crate::error::PermissionError;

const MANAGE_USERS: u128 = 1 << 0;
const MANAGE_USERS_EXTENDED: u128 = MANAGE_USERS | 1 << 1;
const MANAGE_POSTS: u128 = 1 << 2;
const MANAGE_POSTS_EXTENDED: u128 = MANAGE_POSTS | 1 << 3;
const MANAGE_COMMENTS: u128 = 1 << 4;
const MANAGE_REPORTS: u128 = 1 << 5;
const BAN_USERS: u128 = 1 << 6;
const VERIFY_USERS: u128 = 1 << 7;
const MANAGE_ROLES: u128 = 1 << 8;
const VIEW_AUDIT_LOG: u128 = 1 << 9;
const ADMINISTRATOR: u128 = 1 << 52;

/// A named permission flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// Edit profiles, reset handles.
    ManageUsers,
    /// Everything `ManageUsers` allows, plus deleting accounts.
    ManageUsersExtended,
    /// Hide or restore posts.
    ManagePosts,
    /// Everything `ManagePosts` allows, plus permanent deletion.
    ManagePostsExtended,
    /// Hide or delete comments.
    ManageComments,
    /// Work the moderation report queue.
    ManageReports,
    /// Suspend and unsuspend accounts.
    BanUsers,
    /// Grant or revoke the verified badge.
    VerifyUsers,
    /// Create roles and edit their permission sets.
    ManageRoles,
    /// Read the moderation audit log.
    ViewAuditLog,
    /// Superuser. Satisfies every check unless the caller asks for
    /// literal bit membership.
    Administrator,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 11] = [
        Permission::ManageUsers,
        Permission::ManageUsersExtended,
        Permission::ManagePosts,
        Permission::ManagePostsExtended,
        Permission::ManageComments,
        Permission::ManageReports,
        Permission::BanUsers,
        Permission::VerifyUsers,
        Permission::ManageRoles,
        Permission::ViewAuditLog,
        Permission::Administrator,
    ];

    /// The raw compile-time bit pattern.
    pub fn raw_bits(self) -> u128 {
        match self {
            Permission::ManageUsers => MANAGE_USERS,
            Permission::ManageUsersExtended => MANAGE_USERS_EXTENDED,
            Permission::ManagePosts => MANAGE_POSTS,
            Permission::ManagePostsExtended => MANAGE_POSTS_EXTENDED,
            Permission::ManageComments => MANAGE_COMMENTS,
            Permission::ManageReports => MANAGE_REPORTS,
            Permission::BanUsers => BAN_USERS,
            Permission::VerifyUsers => VERIFY_USERS,
            Permission::ManageRoles => MANAGE_ROLES,
            Permission::ViewAuditLog => VIEW_AUDIT_LOG,
            Permission::Administrator => ADMINISTRATOR,
        }
    }

    /// The bit pattern widened into an unbounded bit-set.
    pub fn bits(self) -> PermissionBits {
        PermissionBits::from_raw(self.raw_bits())
    }

    /// The canonical name, as stored and displayed.
    pub fn name(self) -> &'static str {
        match self {
            Permission::ManageUsers => "MANAGE_USERS",
            Permission::ManageUsersExtended => "MANAGE_USERS_EXTENDED",
            Permission::ManagePosts => "MANAGE_POSTS",
            Permission::ManagePostsExtended => "MANAGE_POSTS_EXTENDED",
            Permission::ManageComments => "MANAGE_COMMENTS",
            Permission::ManageReports => "MANAGE_REPORTS",
            Permission::BanUsers => "BAN_USERS",
            Permission::VerifyUsers => "VERIFY_USERS",
            Permission::ManageRoles => "MANAGE_ROLES",
            Permission::ViewAuditLog => "VIEW_AUDIT_LOG",
            Permission::Administrator => "ADMINISTRATOR",
        }
    }

    /// Looks up a permission by canonical name.
    ///
    /// Returns `None` for unrecognized names rather than an error; callers
    /// decide whether a miss is fatal. Lookup is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Permission> {
        Permission::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    /// Strict lookup: unknown names are an error. Operator-facing surfaces
    /// (the CLI) parse through here so a typo cannot silently become "no
    /// permission".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::from_name(s).ok_or_else(|| PermissionError::UnknownPermission(s.to_string()))
    }
}
