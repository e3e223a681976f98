//! Bitmask permission engine for Twatter Engine
//!
//! This module implements the authorization core shared by the API and
//! moderation surfaces:
//! - A fixed, compile-time enumeration of named permission flags
//! - Compound permissions whose patterns imply their base permissions
//! - Unbounded-width bit-sets with decimal-string storage encoding
//! - Role aggregation (a user's effective set is own bits OR role bits)
//! - Cascading revocation through dependant permissions
//!
//! # Core Concepts
//!
//! - **Permission**: a named flag with a fixed bit pattern. An `_EXTENDED`
//!   permission is a compound whose pattern includes its base permission.
//! - **Principal**: anything checkable — a user, a role, or a bare bit-set.
//! - **ADMINISTRATOR**: a distinguished high bit that satisfies every check
//!   unless the caller asks for literal membership.
//!
//! # Example
//!
//! ```rust
//! use auth_permissions::{fold_permissions, grant, has_permission, Permission, Role, User};
//!
//! let moderator = Role::new("moderator")
//!     .with_permissions(fold_permissions(["MANAGE_REPORTS"]));
//! let alice = User::new("alice")
//!     .with_permissions(Permission::ManagePosts.bits())
//!     .with_role(moderator);
//!
//! // Role bits count toward the effective set.
//! assert!(has_permission(&alice, Permission::ManageReports));
//! assert!(!has_permission(&alice, Permission::BanUsers));
//!
//! // Mutations are pure and touch own bits only; the caller persists the
//! // returned bit-set.
//! let updated = grant(&alice, Permission::BanUsers);
//! assert_eq!(updated.to_string(), "68");
//! ```

pub mod bits;
pub mod engine;
pub mod error;
pub mod principal;
pub mod registry;

pub use bits::*;
pub use engine::*;
pub use error::*;
pub use principal::*;
pub use registry::*;
