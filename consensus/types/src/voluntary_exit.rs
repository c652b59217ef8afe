use crate::{Epoch, SignedRoot};
use serde::{Deserialize, Serialize};
use tree_hash_derive::TreeHash;

/// An exit voluntarily submitted a validator who wishes to withdraw.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize, TreeHash)]
pub struct VoluntaryExit {
    /// Earliest epoch when voluntary exit can be processed.
    pub epoch: Epoch,
    #[serde(with = "serde_utils::quoted_u64")]
    pub validator_index: u64,
}

impl SignedRoot for VoluntaryExit {}
