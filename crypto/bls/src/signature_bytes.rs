use crate::{signature::Signature, Error, SIGNATURE_BYTES_LEN};
use serde_utils::hex::encode as hex_encode;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use tree_hash::TreeHash;

/// A wrapper around some bytes that may or may not be a `Signature` in compressed form.
///
/// Only the length is checked on construction, decoding into a curve point happens in
/// `Self::decompress`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureBytes {
    bytes: [u8; SIGNATURE_BYTES_LEN],
}

impl SignatureBytes {
    /// Decompress and deserialize the bytes in `self` into an actual signature.
    ///
    /// May fail if the bytes are invalid.
    pub fn decompress(&self) -> Result<Signature, Error> {
        Signature::deserialize(&self.bytes)
    }

    /// Instantiates `Self` with all-zeros.
    pub fn empty() -> Self {
        Self {
            bytes: [0; SIGNATURE_BYTES_LEN],
        }
    }

    /// Returns a slice of the bytes contained in `self`.
    pub fn as_serialized(&self) -> &[u8] {
        &self.bytes
    }

    /// Clones the bytes in `self`.
    pub fn serialize(&self) -> [u8; SIGNATURE_BYTES_LEN] {
        self.bytes
    }

    /// Instantiates `Self` from bytes, checking only the byte-length.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() == SIGNATURE_BYTES_LEN {
            let mut sig_bytes = [0; SIGNATURE_BYTES_LEN];
            sig_bytes[..].copy_from_slice(bytes);
            Ok(Self { bytes: sig_bytes })
        } else {
            Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: SIGNATURE_BYTES_LEN,
            })
        }
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(sig: &Signature) -> Self {
        Self {
            bytes: sig.serialize(),
        }
    }
}

impl From<Signature> for SignatureBytes {
    fn from(sig: Signature) -> Self {
        Self::from(&sig)
    }
}

impl TreeHash for SignatureBytes {
    impl_tree_hash!(SIGNATURE_BYTES_LEN);
}

impl fmt::Display for SignatureBytes {
    impl_display!();
}

impl std::str::FromStr for SignatureBytes {
    impl_from_str!();
}

impl Serialize for SignatureBytes {
    impl_serde_serialize!();
}

impl<'de> Deserialize<'de> for SignatureBytes {
    impl_serde_deserialize!();
}

impl fmt::Debug for SignatureBytes {
    impl_debug!();
}
