use crate::{
    blst_core, public_key::PublicKey, signature::Signature, Error, Hash256, ZeroizeHash, DST,
};
use rand::RngCore;

/// The byte-length of a BLS secret key.
pub const SECRET_KEY_BYTES_LEN: usize = 32;

/// A BLS secret key.
///
/// Deliberately does not implement `Debug`, `Display` or `Serialize`.
#[derive(Clone)]
pub struct SecretKey {
    /// The underlying point which performs *actual* cryptographic operations.
    point: blst_core::SecretKey,
}

impl SecretKey {
    /// Instantiate `Self` from some secure source of entropy.
    pub fn random() -> Self {
        let mut ikm = [0u8; SECRET_KEY_BYTES_LEN];
        rand::thread_rng().fill_bytes(&mut ikm);
        Self::key_gen(&ikm).expect("32 bytes of ikm is always sufficient for key_gen")
    }

    /// Derive a secret key from the input keying material `ikm`, as per the `KeyGen` procedure
    /// of the BLS signature standard.
    ///
    /// `ikm` must be at least 32 bytes.
    pub fn key_gen(ikm: &[u8]) -> Result<Self, Error> {
        blst_core::SecretKey::key_gen(ikm, &[])
            .map(|point| Self { point })
            .map_err(Into::into)
    }

    /// Signs `msg`.
    pub fn sign(&self, msg: Hash256) -> Signature {
        Signature::from_point(self.point.sign(msg.as_bytes(), DST, &[]))
    }

    /// Returns the public key that corresponds to self.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(self.point.sk_to_pk())
    }

    /// Serialize `self` as compressed bytes.
    ///
    /// ## Note
    ///
    /// The bytes that are returned are the unencrypted secret key. This is sensitive cryptographic
    /// material.
    pub fn serialize(&self) -> ZeroizeHash {
        self.point.to_bytes().into()
    }

    /// Deserialize `self` from compressed bytes.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SECRET_KEY_BYTES_LEN {
            Err(Error::InvalidSecretKeyLength {
                got: bytes.len(),
                expected: SECRET_KEY_BYTES_LEN,
            })
        } else if bytes.iter().all(|b| *b == 0) {
            Err(Error::InvalidZeroSecretKey)
        } else {
            blst_core::SecretKey::from_bytes(bytes)
                .map(|point| Self { point })
                .map_err(Into::into)
        }
    }
}
