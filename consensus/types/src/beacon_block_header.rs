use crate::{Hash256, SignedRoot, Slot};
use serde::{Deserialize, Serialize};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// A header of a `BeaconBlock`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default, Serialize, Deserialize, TreeHash)]
pub struct BeaconBlockHeader {
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub parent_root: Hash256,
    pub state_root: Hash256,
    pub body_root: Hash256,
}

impl SignedRoot for BeaconBlockHeader {}

impl BeaconBlockHeader {
    /// Returns the `tree_hash_root` of the header.
    ///
    /// This is also the root of the full block the header was taken from, which is what allows a
    /// block signature to be checked against its header alone.
    pub fn canonical_root(&self) -> Hash256 {
        self.tree_hash_root()
    }
}
