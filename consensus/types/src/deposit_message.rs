use crate::{Hash256, PublicKeyBytes, SignedRoot};
use serde::{Deserialize, Serialize};
use tree_hash_derive::TreeHash;

/// The data supplied by the user to the deposit contract.
///
/// Deposits are signed before the chain they are destined for exists, so their domain is always
/// computed from the genesis fork version and an all-zero genesis validators root.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, TreeHash)]
pub struct DepositMessage {
    pub pubkey: PublicKeyBytes,
    pub withdrawal_credentials: Hash256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
}

impl SignedRoot for DepositMessage {}
