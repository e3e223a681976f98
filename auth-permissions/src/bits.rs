//! Unbounded permission bit-sets.
//!
//! A principal's permissions are stored as a single unsigned integer of
//! unbounded width: one bit (or group of bits) per permission. The value is
//! persisted and transported as a base-10 string so that bit positions above
//! what a 64-bit register can hold survive storage without precision loss.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use crate::error::PermissionError;

/// An arbitrary-precision permission bit-set.
///
/// Supports the set algebra the engine is built on: union for granting,
/// subset tests for checking, and bit clearing for revocation. Serializes
/// as a decimal string (`"3"`, not `3`), matching the storage contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PermissionBits(BigUint);

impl PermissionBits {
    /// The empty bit-set (no permissions).
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Builds a bit-set from a fixed-width bit pattern.
    pub fn from_raw(bits: u128) -> Self {
        Self(BigUint::from(bits))
    }

    /// True if every bit of `required` is set in `self`.
    ///
    /// This is a subset test, not an equality test: a compound permission's
    /// pattern spans several bits and all of them must be present.
    pub fn contains(&self, required: &Self) -> bool {
        (&self.0 & &required.0) == required.0
    }

    /// Returns a copy of `self` with every bit of `other` cleared.
    pub fn without(&self, other: &Self) -> Self {
        // (self & other) ⊆ self, so the subtraction cannot underflow.
        Self(&self.0 - (&self.0 & &other.0))
    }

    /// True if no bits are set.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Binary rendering, most significant bit first. Display tooling only.
    pub fn to_binary(&self) -> String {
        self.0.to_str_radix(2)
    }
}

impl From<u128> for PermissionBits {
    fn from(bits: u128) -> Self {
        Self::from_raw(bits)
    }
}

impl BitOr for PermissionBits {
    type Output = PermissionBits;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOr for &PermissionBits {
    type Output = PermissionBits;

    fn bitor(self, rhs: Self) -> Self::Output {
        PermissionBits(&self.0 | &rhs.0)
    }
}

impl BitOrAssign<&PermissionBits> for PermissionBits {
    fn bitor_assign(&mut self, rhs: &PermissionBits) {
        self.0 |= &rhs.0;
    }
}

impl BitAnd for &PermissionBits {
    type Output = PermissionBits;

    fn bitand(self, rhs: Self) -> Self::Output {
        PermissionBits(&self.0 & &rhs.0)
    }
}

impl fmt::Display for PermissionBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_str_radix(10))
    }
}

impl FromStr for PermissionBits {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<BigUint>()?))
    }
}

impl Serialize for PermissionBits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_str_radix(10))
    }
}

impl<'de> Deserialize<'de> for PermissionBits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
