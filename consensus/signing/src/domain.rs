//! Domain computation from untyped byte input (e.g., from the command line or the wire).
//!
//! Every fixed-length value must have exactly its expected length. Nothing is truncated or
//! padded.
use crate::{Error, Result};
use types::{BeaconStateView, ChainSpec, DomainType, Epoch, ForkVersion, Hash256};

pub const DOMAIN_TYPE_LEN: usize = 4;
pub const FORK_VERSION_LEN: usize = 4;
pub const ROOT_LEN: usize = 32;

/// Copy `bytes` into an array of length `N`, returning `Error::InvalidLength` if the lengths
/// differ.
pub fn fixed_length_bytes<const N: usize>(field: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    if bytes.len() != N {
        return Err(Error::InvalidLength {
            field,
            expected: N,
            got: bytes.len(),
        });
    }

    let mut array = [0; N];
    array.copy_from_slice(bytes);
    Ok(array)
}

pub fn domain_type_from_bytes(bytes: &[u8]) -> Result<DomainType> {
    fixed_length_bytes::<DOMAIN_TYPE_LEN>("domain_type", bytes)
}

pub fn fork_version_from_bytes(bytes: &[u8]) -> Result<ForkVersion> {
    fixed_length_bytes::<FORK_VERSION_LEN>("fork_version", bytes)
}

pub fn root_from_bytes(field: &'static str, bytes: &[u8]) -> Result<Hash256> {
    fixed_length_bytes::<ROOT_LEN>(field, bytes).map(Hash256::from)
}

/// Compute a domain from byte slices, substituting the defaults from `spec` for any absent value.
///
/// See `ChainSpec::compute_domain`.
pub fn compute_domain_from_bytes(
    domain_type: &[u8],
    fork_version: Option<&[u8]>,
    genesis_validators_root: Option<&[u8]>,
    spec: &ChainSpec,
) -> Result<Hash256> {
    let domain_type = domain_type_from_bytes(domain_type)?;
    let fork_version = fork_version.map(fork_version_from_bytes).transpose()?;
    let genesis_validators_root = genesis_validators_root
        .map(|bytes| root_from_bytes("genesis_validators_root", bytes))
        .transpose()?;

    Ok(spec.compute_domain(domain_type, fork_version, genesis_validators_root))
}

/// Get the domain for `domain_type` at `epoch`, using the fork and genesis validators root of
/// `state`.
pub fn get_domain_from_state<S: BeaconStateView>(
    state: &S,
    epoch: Epoch,
    domain_type: DomainType,
    spec: &ChainSpec,
) -> Hash256 {
    spec.get_domain(
        epoch,
        domain_type,
        &state.fork(),
        state.genesis_validators_root(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_typed_computation() {
        let spec = ChainSpec::minimal();
        let root = Hash256::repeat_byte(9);

        assert_eq!(
            compute_domain_from_bytes(
                &[1, 0, 0, 0],
                Some(&[2, 0, 0, 0]),
                Some(root.as_bytes()),
                &spec
            ),
            Ok(spec.compute_domain([1, 0, 0, 0], Some([2, 0, 0, 0]), Some(root)))
        );
        assert_eq!(
            compute_domain_from_bytes(&[1, 0, 0, 0], None, None, &spec),
            Ok(spec.compute_domain([1, 0, 0, 0], None, None))
        );
    }

    #[test]
    fn fork_version_length_is_exact() {
        let spec = ChainSpec::mainnet();

        for (version, got) in [(&[1, 2, 3][..], 3), (&[1, 2, 3, 4, 5][..], 5), (&[][..], 0)] {
            assert_eq!(
                compute_domain_from_bytes(&[0; 4], Some(version), None, &spec),
                Err(Error::InvalidLength {
                    field: "fork_version",
                    expected: 4,
                    got
                })
            );
        }
    }

    #[test]
    fn domain_type_and_root_lengths_are_exact() {
        let spec = ChainSpec::mainnet();

        assert_eq!(
            compute_domain_from_bytes(&[0; 5], None, None, &spec),
            Err(Error::InvalidLength {
                field: "domain_type",
                expected: 4,
                got: 5
            })
        );
        assert_eq!(
            compute_domain_from_bytes(&[0; 4], None, Some(&[0; 31]), &spec),
            Err(Error::InvalidLength {
                field: "genesis_validators_root",
                expected: 32,
                got: 31
            })
        );
    }
}
