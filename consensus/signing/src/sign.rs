use crate::domain::get_domain_from_state;
use crate::Result;
use bls::{SecretKey, SignatureBytes};
use types::{BeaconStateView, ChainSpec, DomainType, Epoch, SignedRoot};

/// Sign `object` with `secret_key` under the `domain_type` domain at `epoch`.
///
/// The fork version is that which `state` considers active at `epoch`. Returns the compressed
/// signature.
pub fn compute_domain_and_sign<S, T>(
    state: &S,
    epoch: Epoch,
    object: &T,
    domain_type: DomainType,
    secret_key: &SecretKey,
    spec: &ChainSpec,
) -> Result<SignatureBytes>
where
    S: BeaconStateView,
    T: SignedRoot,
{
    let domain = get_domain_from_state(state, epoch, domain_type, spec);
    let message = object.signing_root(domain)?;

    Ok(secret_key.sign(message).compress())
}
