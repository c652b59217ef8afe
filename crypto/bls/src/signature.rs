use crate::{blst_core, public_key::PublicKey, signature_bytes::SignatureBytes, Error, Hash256, DST};
use blst::BLST_ERROR;
use serde_utils::hex::encode as hex_encode;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use tree_hash::TreeHash;

/// The byte-length of a BLS signature when serialized in compressed form.
pub const SIGNATURE_BYTES_LEN: usize = 96;

/// A BLS signature which has been decompressed into a point on G2.
#[derive(Clone)]
pub struct Signature {
    /// The underlying point which performs *actual* cryptographic operations.
    point: blst_core::Signature,
}

impl Signature {
    /// Instantiates `Self` from a `point`.
    pub(crate) fn from_point(point: blst_core::Signature) -> Self {
        Self { point }
    }

    /// Serialize `self` as compressed bytes.
    pub fn serialize(&self) -> [u8; SIGNATURE_BYTES_LEN] {
        self.point.compress()
    }

    /// Returns `self` in the compressed `SignatureBytes` representation.
    pub fn compress(&self) -> SignatureBytes {
        SignatureBytes::from(self)
    }

    /// Deserialize `self` from compressed bytes.
    ///
    /// Fails if `bytes` is not exactly `SIGNATURE_BYTES_LEN` long or does not encode a point on
    /// the curve. The subgroup check is deferred to `Self::verify`.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SIGNATURE_BYTES_LEN {
            return Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: SIGNATURE_BYTES_LEN,
            });
        }

        blst_core::Signature::from_bytes(bytes)
            .map(Self::from_point)
            .map_err(Into::into)
    }

    /// Returns `true` if `self` is a signature across `msg` by `pubkey`.
    pub fn verify(&self, pubkey: &PublicKey, msg: Hash256) -> bool {
        // The public key was validated when it was deserialized, only the signature needs a
        // subgroup check.
        self.point
            .verify(true, msg.as_bytes(), DST, &[], pubkey.point(), false)
            == BLST_ERROR::BLST_SUCCESS
    }
}

impl Eq for Signature {}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.serialize()[..] == other.serialize()[..]
    }
}

impl TreeHash for Signature {
    impl_tree_hash!(SIGNATURE_BYTES_LEN);
}

impl fmt::Display for Signature {
    impl_display!();
}

impl std::str::FromStr for Signature {
    impl_from_str!();
}

impl Serialize for Signature {
    impl_serde_serialize!();
}

impl<'de> Deserialize<'de> for Signature {
    impl_serde_deserialize!();
}

impl fmt::Debug for Signature {
    impl_debug!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Keypair;

    #[test]
    fn sign_and_verify() {
        let keypair = Keypair::random();
        let msg = Hash256::repeat_byte(42);
        let sig = keypair.sk.sign(msg);

        assert!(sig.verify(&keypair.pk, msg));
        assert!(!sig.verify(&keypair.pk, Hash256::repeat_byte(43)));
        assert!(!sig.verify(&Keypair::random().pk, msg));
    }

    #[test]
    fn serialize_round_trip() {
        let sig = Keypair::random().sk.sign(Hash256::zero());
        assert_eq!(Signature::deserialize(&sig.serialize()), Ok(sig));
    }

    #[test]
    fn rejects_truncated_bytes() {
        let sig = Keypair::random().sk.sign(Hash256::zero()).serialize();
        assert_eq!(
            Signature::deserialize(&sig[..SIGNATURE_BYTES_LEN / 2]),
            Err(Error::InvalidByteLength {
                got: SIGNATURE_BYTES_LEN / 2,
                expected: SIGNATURE_BYTES_LEN,
            })
        );
    }

    #[test]
    fn rejects_all_zero_bytes() {
        assert!(matches!(
            Signature::deserialize(&[0; SIGNATURE_BYTES_LEN]),
            Err(Error::BlstError(_))
        ));
    }
}
