//! The `Slot` and `Epoch` types are defined as new types over u64 to enforce type-safety between
//! the two types.
//!
//! `Slot` and `Epoch` have implementations which permit conversion, comparison and math operations
//! between each and `u64`, however specifically not between each other.
//!
//! All math operations on `Slot` and `Epoch` are saturating, they never wrap.
use crate::SignedRoot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use tree_hash::{PackedEncoding, TreeHash, TreeHashType};

#[derive(Eq, Clone, Copy, Default, Serialize, Deserialize, PartialEq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Slot(#[serde(with = "serde_utils::quoted_u64")] u64);

#[derive(Eq, Clone, Copy, Default, Serialize, Deserialize, PartialEq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Epoch(#[serde(with = "serde_utils::quoted_u64")] u64);

impl Slot {
    pub const fn new(slot: u64) -> Slot {
        Slot(slot)
    }

    pub fn epoch(self, slots_per_epoch: u64) -> Epoch {
        Epoch::new(self.0.checked_div(slots_per_epoch).unwrap_or(0))
    }
}

impl Epoch {
    pub const fn new(epoch: u64) -> Epoch {
        Epoch(epoch)
    }
}

macro_rules! impl_common {
    ($main: ident) => {
        impl From<u64> for $main {
            fn from(n: u64) -> $main {
                $main(n)
            }
        }

        impl From<$main> for u64 {
            fn from(other: $main) -> u64 {
                other.0
            }
        }

        impl $main {
            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl Add<u64> for $main {
            type Output = $main;

            fn add(self, other: u64) -> $main {
                $main(self.0.saturating_add(other))
            }
        }

        impl Sub<u64> for $main {
            type Output = $main;

            fn sub(self, other: u64) -> $main {
                $main(self.0.saturating_sub(other))
            }
        }

        impl PartialEq<u64> for $main {
            fn eq(&self, other: &u64) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $main {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $main {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($main), self.0)
            }
        }

        impl TreeHash for $main {
            fn tree_hash_type() -> TreeHashType {
                TreeHashType::Basic
            }

            fn tree_hash_packed_encoding(&self) -> PackedEncoding {
                self.0.tree_hash_packed_encoding()
            }

            fn tree_hash_packing_factor() -> usize {
                u64::tree_hash_packing_factor()
            }

            fn tree_hash_root(&self) -> tree_hash::Hash256 {
                self.0.tree_hash_root()
            }
        }

        impl SignedRoot for $main {}
    };
}

impl_common!(Slot);
impl_common!(Epoch);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_to_epoch() {
        assert_eq!(Slot::new(0).epoch(32), Epoch::new(0));
        assert_eq!(Slot::new(31).epoch(32), Epoch::new(0));
        assert_eq!(Slot::new(32).epoch(32), Epoch::new(1));
        assert_eq!(Slot::new(32).epoch(0), Epoch::new(0));
    }

    #[test]
    fn math_saturates() {
        assert_eq!(Epoch::new(0) - 1, Epoch::new(0));
        assert_eq!(Epoch::new(u64::MAX) + 1, Epoch::new(u64::MAX));
        assert_eq!(Slot::new(u64::MAX) + 1, Slot::new(u64::MAX));
    }

    #[test]
    fn tree_hash_matches_u64() {
        assert_eq!(Epoch::new(42).tree_hash_root(), 42u64.tree_hash_root());
        assert_eq!(Slot::new(42).tree_hash_root(), 42u64.tree_hash_root());
    }
}
