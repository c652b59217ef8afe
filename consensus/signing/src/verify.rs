use crate::domain::get_domain_from_state;
use crate::signature_set::block_signature_set;
use crate::{Error, Result};
use bls::{PublicKey, Signature};
use types::{
    BeaconBlockHeader, BeaconStateView, ChainSpec, DomainType, Epoch, Hash256, RootError,
    SignedRoot,
};

/// Verify that `signature` across `object` was produced by the validator at `validator_index`,
/// under the `domain_type` domain at `epoch`.
///
/// Returns `Error::ValidatorUnknown` if `state` has no such validator.
pub fn verify_by_validator_index<S, T>(
    state: &S,
    validator_index: u64,
    epoch: Epoch,
    object: &T,
    domain_type: DomainType,
    signature: &[u8],
    spec: &ChainSpec,
) -> Result<()>
where
    S: BeaconStateView,
    T: SignedRoot,
{
    let validator = state.validator(validator_index)?;
    let domain = get_domain_from_state(state, epoch, domain_type, spec);

    verify_signing_root(object, validator.pubkey.as_serialized(), signature, domain)
}

/// Verify that `signature` across the signing root of `object` under `domain` was produced by
/// `public_key`.
///
/// The key and signature are decoded before the root is computed, so malformed bytes always
/// produce a decode error.
pub fn verify_signing_root<T: SignedRoot>(
    object: &T,
    public_key: &[u8],
    signature: &[u8],
    domain: Hash256,
) -> Result<()> {
    let public_key = PublicKey::deserialize(public_key).map_err(Error::PublicKeyDecode)?;
    let signature = Signature::deserialize(signature).map_err(Error::SignatureDecode)?;
    let message = object.signing_root(domain)?;

    if signature.verify(&public_key, message) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}

/// As `verify_signing_root`, but the object root is provided by `root_fn`.
pub fn verify_signing_root_with_fn<F>(
    public_key: &[u8],
    signature: &[u8],
    domain: Hash256,
    root_fn: F,
) -> Result<()>
where
    F: FnOnce() -> std::result::Result<Hash256, RootError>,
{
    let signature_set = block_signature_set(public_key, signature, domain, root_fn)?;

    match signature_set.verify() {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::SignatureInvalid),
        Err(e) => Err(Error::SignatureDecode(e)),
    }
}

/// Verify a signature across a block header, rooted by `BeaconBlockHeader::canonical_root`.
pub fn verify_block_header_signing_root(
    header: &BeaconBlockHeader,
    public_key: &[u8],
    signature: &[u8],
    domain: Hash256,
) -> Result<()> {
    verify_signing_root_with_fn(public_key, signature, domain, || {
        Ok(header.canonical_root())
    })
}
