use crate::{Checkpoint, Hash256, SignedRoot, Slot};
use serde::{Deserialize, Serialize};
use tree_hash_derive::TreeHash;

/// The data upon which an attestation is based.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Serialize, Deserialize, TreeHash)]
pub struct AttestationData {
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,

    // LMD GHOST vote
    pub beacon_block_root: Hash256,

    // FFG Vote
    pub source: Checkpoint,
    pub target: Checkpoint,
}

impl SignedRoot for AttestationData {}
