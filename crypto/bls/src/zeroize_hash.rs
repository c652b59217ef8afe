use super::SECRET_KEY_BYTES_LEN;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Provides a wrapper around a `[u8; SECRET_KEY_BYTES_LEN]` that implements `Zeroize` on `Drop`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ZeroizeHash([u8; SECRET_KEY_BYTES_LEN]);

impl ZeroizeHash {
    /// Returns a reference to the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SECRET_KEY_BYTES_LEN]> for ZeroizeHash {
    fn from(array: [u8; SECRET_KEY_BYTES_LEN]) -> Self {
        Self(array)
    }
}

impl AsRef<[u8]> for ZeroizeHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
