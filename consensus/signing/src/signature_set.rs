use crate::{Error, Result};
use bls::{PublicKey, SignatureBytes, SignatureSet};
use types::{compute_signing_root_with, Hash256, RootError};

/// A signature set containing the single `signature` across the signing root of the object
/// rooted by `root_fn` under `domain`.
///
/// The public key is fully decoded whilst the signature is only checked for length, curve point
/// decoding happens when the set is verified.
pub fn block_signature_set<F>(
    public_key: &[u8],
    signature: &[u8],
    domain: Hash256,
    root_fn: F,
) -> Result<SignatureSet>
where
    F: FnOnce() -> std::result::Result<Hash256, RootError>,
{
    let public_key = PublicKey::deserialize(public_key).map_err(Error::PublicKeyDecode)?;
    let signature = SignatureBytes::deserialize(signature).map_err(Error::SignatureDecode)?;
    let message = compute_signing_root_with(root_fn, domain)?;

    Ok(SignatureSet::single_pubkey(signature, public_key, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bls::Keypair;
    use types::{Checkpoint, Epoch, SignedRoot};

    fn checkpoint() -> Checkpoint {
        Checkpoint {
            epoch: Epoch::new(2),
            root: Hash256::repeat_byte(0xaa),
        }
    }

    #[test]
    fn builds_a_singleton() {
        let keypair = Keypair::random();
        let domain = Hash256::repeat_byte(1);
        let message = checkpoint().signing_root(domain).unwrap();
        let signature = keypair.sk.sign(message).serialize();

        let set = block_signature_set(
            &keypair.pk.serialize(),
            &signature,
            domain,
            || checkpoint().object_root(),
        )
        .unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.public_keys(), &[keypair.pk]);
        assert_eq!(set.messages(), &[message]);
        assert_eq!(set.signatures()[0].serialize(), signature);
        assert_eq!(set.verify(), Ok(true));
    }

    #[test]
    fn bad_public_key() {
        let keypair = Keypair::random();
        let signature = keypair.sk.sign(Hash256::zero()).serialize();

        assert!(matches!(
            block_signature_set(&[0; 24], &signature, Hash256::zero(), || Ok(Hash256::zero())),
            Err(Error::PublicKeyDecode(_))
        ));
    }

    #[test]
    fn bad_signature_length() {
        let keypair = Keypair::random();

        assert_eq!(
            block_signature_set(&keypair.pk.serialize(), &[0; 48], Hash256::zero(), || Ok(
                Hash256::zero()
            )),
            Err(Error::SignatureDecode(bls::Error::InvalidByteLength {
                got: 48,
                expected: 96
            }))
        );
    }

    #[test]
    fn root_error_propagates() {
        let keypair = Keypair::random();
        let signature = keypair.sk.sign(Hash256::zero()).serialize();
        let error = RootError::ListTooLong {
            field: "validators",
            len: 10,
            max: 8,
        };

        assert_eq!(
            block_signature_set(&keypair.pk.serialize(), &signature, Hash256::zero(), || Err(
                error.clone()
            )),
            Err(Error::RootComputation(error))
        );
    }
}
