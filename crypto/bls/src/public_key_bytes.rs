use crate::{public_key::PublicKey, Error, PUBLIC_KEY_BYTES_LEN};
use serde_utils::hex::encode as hex_encode;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use tree_hash::TreeHash;

/// A wrapper around some bytes that may or may not be a `PublicKey` in compressed form.
///
/// This struct is useful for two things:
///
/// - Lazily verifying a serialized public key.
/// - Storing some bytes that are actually invalid (required in the case of a `Deposit` message).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKeyBytes {
    bytes: [u8; PUBLIC_KEY_BYTES_LEN],
}

impl PublicKeyBytes {
    /// Decompress and deserialize the bytes in `self` into an actual public key.
    ///
    /// May fail if the bytes are invalid.
    pub fn decompress(&self) -> Result<PublicKey, Error> {
        PublicKey::deserialize(&self.bytes)
    }

    /// Instantiates `Self` with all-zeros.
    pub fn empty() -> Self {
        Self {
            bytes: [0; PUBLIC_KEY_BYTES_LEN],
        }
    }

    /// Returns a slice of the bytes contained in `self`.
    ///
    /// The bytes are not verified (i.e., they may not represent a valid BLS point).
    pub fn as_serialized(&self) -> &[u8] {
        &self.bytes
    }

    /// Clones the bytes in `self`.
    ///
    /// The bytes are not verified (i.e., they may not represent a valid BLS point).
    pub fn serialize(&self) -> [u8; PUBLIC_KEY_BYTES_LEN] {
        self.bytes
    }

    /// Instantiates `Self` from bytes.
    ///
    /// The bytes are not fully verified (i.e., they may not represent a valid BLS point). Only the
    /// byte-length is checked.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() == PUBLIC_KEY_BYTES_LEN {
            let mut pk_bytes = [0; PUBLIC_KEY_BYTES_LEN];
            pk_bytes[..].copy_from_slice(bytes);
            Ok(Self { bytes: pk_bytes })
        } else {
            Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: PUBLIC_KEY_BYTES_LEN,
            })
        }
    }
}

impl From<&PublicKey> for PublicKeyBytes {
    fn from(pk: &PublicKey) -> Self {
        Self {
            bytes: pk.serialize(),
        }
    }
}

impl From<PublicKey> for PublicKeyBytes {
    fn from(pk: PublicKey) -> Self {
        Self::from(&pk)
    }
}

impl TreeHash for PublicKeyBytes {
    impl_tree_hash!(PUBLIC_KEY_BYTES_LEN);
}

impl fmt::Display for PublicKeyBytes {
    impl_display!();
}

impl std::str::FromStr for PublicKeyBytes {
    impl_from_str!();
}

impl Serialize for PublicKeyBytes {
    impl_serde_serialize!();
}

impl<'de> Deserialize<'de> for PublicKeyBytes {
    impl_serde_deserialize!();
}

impl fmt::Debug for PublicKeyBytes {
    impl_debug!();
}
