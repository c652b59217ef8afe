//! Types used by the consensus layer when signing and verifying messages.
//!
//! Signatures are bound to a purpose, a fork and a chain by mixing a *domain* into the root of
//! every signed object. See `ChainSpec::compute_domain` and `SignedRoot::signing_root`.

pub mod attestation_data;
pub mod beacon_block_header;
pub mod beacon_state;
pub mod chain_spec;
pub mod checkpoint;
pub mod deposit_message;
pub mod fork;
pub mod fork_data;
pub mod signing_data;
pub mod slot_epoch;
pub mod sync_aggregator_selection_data;
pub mod validator;
pub mod voluntary_exit;

pub use crate::attestation_data::AttestationData;
pub use crate::beacon_block_header::BeaconBlockHeader;
pub use crate::beacon_state::{BeaconState, BeaconStateError, BeaconStateView};
pub use crate::chain_spec::{ChainSpec, Config, ConfigError};
pub use crate::checkpoint::Checkpoint;
pub use crate::deposit_message::DepositMessage;
pub use crate::fork::Fork;
pub use crate::fork_data::{compute_domain, compute_fork_data_root, compute_fork_digest, ForkData};
pub use crate::signing_data::{compute_signing_root_with, RootError, SignedRoot, SigningData};
pub use crate::slot_epoch::{Epoch, Slot};
pub use crate::sync_aggregator_selection_data::SyncAggregatorSelectionData;
pub use crate::validator::Validator;
pub use crate::voluntary_exit::VoluntaryExit;

pub use bls::{
    Keypair, PublicKey, PublicKeyBytes, SecretKey, Signature, SignatureBytes, SignatureSet,
};

pub type Hash256 = ethereum_types::H256;

/// Identifies the purpose of a signature (e.g., block proposal or attestation).
pub type DomainType = [u8; 4];
/// Identifies the rules of a fork of the chain.
pub type ForkVersion = [u8; 4];
/// A short identifier of a fork and chain, used on the p2p layer.
pub type ForkDigest = [u8; 4];
