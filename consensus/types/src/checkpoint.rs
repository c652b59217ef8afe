use crate::{Epoch, Hash256, SignedRoot};
use serde::{Deserialize, Serialize};
use tree_hash_derive::TreeHash;

/// Casper FFG checkpoint, used in attestations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize, TreeHash)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub root: Hash256,
}

impl SignedRoot for Checkpoint {}
