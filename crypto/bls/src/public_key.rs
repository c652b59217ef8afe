use crate::{blst_core, public_key_bytes::PublicKeyBytes, Error};
use serde_utils::hex::encode as hex_encode;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use tree_hash::TreeHash;

/// The byte-length of a BLS public key when serialized in compressed form.
pub const PUBLIC_KEY_BYTES_LEN: usize = 48;

/// Represents the public key at infinity.
pub const INFINITY_PUBLIC_KEY: [u8; PUBLIC_KEY_BYTES_LEN] = [
    0xc0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// A BLS public key which has been decompressed and validated.
///
/// Validation includes a subgroup check and rejection of the point at infinity, so holding a
/// `PublicKey` means it is safe to verify signatures against.
#[derive(Clone)]
pub struct PublicKey {
    /// The underlying point which performs *actual* cryptographic operations.
    point: blst_core::PublicKey,
}

impl PublicKey {
    /// Instantiates `Self` from a `point`.
    pub(crate) fn from_point(point: blst_core::PublicKey) -> Self {
        Self { point }
    }

    /// Returns a reference to the underlying BLS point.
    pub(crate) fn point(&self) -> &blst_core::PublicKey {
        &self.point
    }

    /// Returns `self.serialize()` as a `0x`-prefixed hex string.
    pub fn as_hex_string(&self) -> String {
        format!("{:?}", self)
    }

    /// Returns `self` in the compressed `PublicKeyBytes` representation.
    pub fn compress(&self) -> PublicKeyBytes {
        PublicKeyBytes::from(self)
    }

    /// Serialize `self` as compressed bytes.
    pub fn serialize(&self) -> [u8; PUBLIC_KEY_BYTES_LEN] {
        self.point.compress()
    }

    /// Deserialize `self` from compressed bytes.
    ///
    /// Fails if `bytes` is not exactly `PUBLIC_KEY_BYTES_LEN` long, does not encode a point in
    /// the correct subgroup or encodes the point at infinity.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != PUBLIC_KEY_BYTES_LEN {
            Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: PUBLIC_KEY_BYTES_LEN,
            })
        } else if bytes == &INFINITY_PUBLIC_KEY[..] {
            Err(Error::InvalidInfinityPublicKey)
        } else {
            blst_core::PublicKey::key_validate(bytes)
                .map(Self::from_point)
                .map_err(Into::into)
        }
    }
}

impl Eq for PublicKey {}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.serialize()[..] == other.serialize()[..]
    }
}

/// Hashes the `self.serialize()` bytes.
impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialize()[..].hash(state);
    }
}

impl TreeHash for PublicKey {
    impl_tree_hash!(PUBLIC_KEY_BYTES_LEN);
}

impl fmt::Display for PublicKey {
    impl_display!();
}

impl std::str::FromStr for PublicKey {
    impl_from_str!();
}

impl Serialize for PublicKey {
    impl_serde_serialize!();
}

impl<'de> Deserialize<'de> for PublicKey {
    impl_serde_deserialize!();
}

impl fmt::Debug for PublicKey {
    impl_debug!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecretKey;

    #[test]
    fn serialize_round_trip() {
        let pk = SecretKey::random().public_key();
        let decoded = PublicKey::deserialize(&pk.serialize()).expect("should decode");
        assert_eq!(pk, decoded);
    }

    #[test]
    fn rejects_infinity() {
        assert_eq!(
            PublicKey::deserialize(&INFINITY_PUBLIC_KEY),
            Err(Error::InvalidInfinityPublicKey)
        );
    }

    #[test]
    fn rejects_truncated_bytes() {
        let pk = SecretKey::random().public_key().serialize();
        assert_eq!(
            PublicKey::deserialize(&pk[..PUBLIC_KEY_BYTES_LEN / 2]),
            Err(Error::InvalidByteLength {
                got: PUBLIC_KEY_BYTES_LEN / 2,
                expected: PUBLIC_KEY_BYTES_LEN,
            })
        );
    }

    #[test]
    fn rejects_invalid_point() {
        // The compression flag is set but the x-coordinate is not on the curve.
        let mut bytes = [0xff; PUBLIC_KEY_BYTES_LEN];
        bytes[0] = 0x9f;
        assert!(matches!(
            PublicKey::deserialize(&bytes),
            Err(Error::BlstError(_))
        ));
    }

    #[test]
    fn hex_string_round_trip() {
        let pk = SecretKey::random().public_key();
        let string = pk.to_string();
        assert!(string.starts_with("0x"));
        assert_eq!(string.parse::<PublicKey>(), Ok(pk));
    }
}
