use crate::{DomainType, ForkDigest, ForkVersion, Hash256, SignedRoot};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// Specifies a fork of the `BeaconChain`, to prevent replay attacks.
///
/// Only ever constructed to be hashed, the root commits to both the fork and the chain.
#[derive(Debug, Clone, PartialEq, Default, TreeHash)]
pub struct ForkData {
    pub current_version: ForkVersion,
    pub genesis_validators_root: Hash256,
}

impl SignedRoot for ForkData {}

/// Return the 32-byte fork data root for the `current_version` and `genesis_validators_root`.
///
/// This is used primarily in signature domains to avoid collisions across forks/chains.
pub fn compute_fork_data_root(
    current_version: ForkVersion,
    genesis_validators_root: Hash256,
) -> Hash256 {
    ForkData {
        current_version,
        genesis_validators_root,
    }
    .tree_hash_root()
}

/// Return the 4-byte fork digest for the `current_version` and `genesis_validators_root`.
///
/// This is a digest primarily used for domain separation on the p2p layer. 4-bytes suffices for
/// practical separation of forks/chains.
pub fn compute_fork_digest(
    current_version: ForkVersion,
    genesis_validators_root: Hash256,
) -> ForkDigest {
    let mut result = [0; 4];
    let root = compute_fork_data_root(current_version, genesis_validators_root);
    result.copy_from_slice(&root.as_bytes()[0..4]);
    result
}

/// Return the signature domain (fork version concatenated with domain type) of a message.
///
/// The last four bytes of the fork data root are discarded to make room for `domain_type`.
pub fn compute_domain(
    domain_type: DomainType,
    fork_version: ForkVersion,
    genesis_validators_root: Hash256,
) -> Hash256 {
    let mut domain = [0; 32];
    let root = compute_fork_data_root(fork_version, genesis_validators_root);

    domain[0..4].copy_from_slice(&domain_type);
    domain[4..].copy_from_slice(&root.as_bytes()[..28]);

    Hash256::from(domain)
}
