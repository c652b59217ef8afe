//! BLS12-381 signatures as used by the consensus layer.
//!
//! All cryptographic operations are deferred to the `blst` library using its `min_pk` variant
//! (48-byte public keys in G1, 96-byte signatures in G2) and the proof-of-possession
//! ciphersuite.
//!
//! This crate provides:
//!
//! - `PublicKey`, `Signature` and `SecretKey`: decoded, validated points.
//! - `PublicKeyBytes` and `SignatureBytes`: compressed bytes of the right length which have not
//!   (yet) been decoded into a curve point.
//! - `SignatureSet`: parallel arrays of `(public key, message, signature)` which may be handed to
//!   some other component for verification.

#[macro_use]
mod macros;
mod keypair;
mod public_key;
mod public_key_bytes;
mod secret_key;
mod signature;
mod signature_bytes;
mod signature_set;
mod zeroize_hash;

pub use keypair::Keypair;
pub use public_key::{PublicKey, INFINITY_PUBLIC_KEY, PUBLIC_KEY_BYTES_LEN};
pub use public_key_bytes::PublicKeyBytes;
pub use secret_key::{SecretKey, SECRET_KEY_BYTES_LEN};
pub use signature::{Signature, SIGNATURE_BYTES_LEN};
pub use signature_bytes::SignatureBytes;
pub use signature_set::SignatureSet;
pub use zeroize_hash::ZeroizeHash;

pub use blst::min_pk as blst_core;
use blst::BLST_ERROR as BlstError;
use std::fmt;

pub type Hash256 = ethereum_types::H256;

/// The domain separation tag of the `BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_` ciphersuite.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An error was raised from the `blst` BLS library.
    BlstError(BlstError),
    /// The provided bytes were an incorrect length.
    InvalidByteLength { got: usize, expected: usize },
    /// The provided secret key bytes were an incorrect length.
    InvalidSecretKeyLength { got: usize, expected: usize },
    /// The public key represents the point at infinity, which is invalid.
    InvalidInfinityPublicKey,
    /// The secret key is all zero bytes, which is invalid.
    InvalidZeroSecretKey,
    /// The components of a `SignatureSet` did not have matching lengths.
    InconsistentSignatureSet {
        public_keys: usize,
        messages: usize,
        signatures: usize,
    },
}

impl From<BlstError> for Error {
    fn from(e: BlstError) -> Error {
        Error::BlstError(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BlstError(e) => write!(f, "blst error: {:?}", e),
            Error::InvalidByteLength { got, expected } => {
                write!(f, "invalid byte length: got {}, expected {}", got, expected)
            }
            Error::InvalidSecretKeyLength { got, expected } => write!(
                f,
                "invalid secret key length: got {}, expected {}",
                got, expected
            ),
            Error::InvalidInfinityPublicKey => write!(f, "public key is the point at infinity"),
            Error::InvalidZeroSecretKey => write!(f, "secret key is zero"),
            Error::InconsistentSignatureSet {
                public_keys,
                messages,
                signatures,
            } => write!(
                f,
                "inconsistent signature set: {} public keys, {} messages, {} signatures",
                public_keys, messages, signatures
            ),
        }
    }
}
