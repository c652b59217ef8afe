use crate::{public_key::PublicKey, secret_key::SecretKey};
use std::fmt;

/// A BLS secret key with its corresponding public key.
#[derive(Clone)]
pub struct Keypair {
    pub pk: PublicKey,
    pub sk: SecretKey,
}

impl Keypair {
    pub fn random() -> Self {
        let sk = SecretKey::random();
        Self {
            pk: sk.public_key(),
            sk,
        }
    }
}

impl From<SecretKey> for Keypair {
    fn from(sk: SecretKey) -> Self {
        Self {
            pk: sk.public_key(),
            sk,
        }
    }
}

impl fmt::Debug for Keypair {
    /// Defers to `self.pk` to avoid leaking the secret key.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.pk.fmt(f)
    }
}
