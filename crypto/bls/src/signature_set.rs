use crate::{public_key::PublicKey, signature_bytes::SignatureBytes, Error, Hash256};

/// A collection of `(public key, message, signature)` triples, stored as parallel arrays.
///
/// This struct is primarily useful in a collection (e.g., `Vec<SignatureSet>`) so some other
/// component can perform multiple-signature verification, which is much faster than verifying
/// each signature individually.
///
/// The public keys have already been decoded whilst the signatures are only checked for length,
/// decoding them into curve points is left to whoever verifies the set.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureSet {
    public_keys: Vec<PublicKey>,
    messages: Vec<Hash256>,
    signatures: Vec<SignatureBytes>,
}

impl SignatureSet {
    /// Instantiate self where `signature` across `message` is signed by a single public key.
    pub fn single_pubkey(
        signature: SignatureBytes,
        public_key: PublicKey,
        message: Hash256,
    ) -> Self {
        Self {
            public_keys: vec![public_key],
            messages: vec![message],
            signatures: vec![signature],
        }
    }

    /// Instantiate self from parallel arrays, which must all be the same length.
    pub fn from_parts(
        public_keys: Vec<PublicKey>,
        messages: Vec<Hash256>,
        signatures: Vec<SignatureBytes>,
    ) -> Result<Self, Error> {
        if public_keys.len() != messages.len() || messages.len() != signatures.len() {
            return Err(Error::InconsistentSignatureSet {
                public_keys: public_keys.len(),
                messages: messages.len(),
                signatures: signatures.len(),
            });
        }

        Ok(Self {
            public_keys,
            messages,
            signatures,
        })
    }

    /// The number of triples in `self`.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn public_keys(&self) -> &[PublicKey] {
        &self.public_keys
    }

    pub fn messages(&self) -> &[Hash256] {
        &self.messages
    }

    pub fn signatures(&self) -> &[SignatureBytes] {
        &self.signatures
    }

    /// Iterate over the `(public key, message, signature)` triples in `self`.
    pub fn iter(&self) -> impl Iterator<Item = (&PublicKey, &Hash256, &SignatureBytes)> {
        self.public_keys
            .iter()
            .zip(self.messages.iter())
            .zip(self.signatures.iter())
            .map(|((pk, msg), sig)| (pk, msg, sig))
    }

    /// Returns `Ok(true)` if every signature in `self` is valid across its message by its public
    /// key. Each triple is checked individually.
    ///
    /// An empty set is never valid. Returns an error if any signature cannot be decoded, so a
    /// malformed signature is never reported as a mere verification failure.
    pub fn verify(&self) -> Result<bool, Error> {
        if self.is_empty() {
            return Ok(false);
        }

        for (public_key, message, signature) in self.iter() {
            if !signature.decompress()?.verify(public_key, *message) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Keypair;

    fn signed_set(message: Hash256) -> (Keypair, SignatureSet) {
        let keypair = Keypair::random();
        let signature = keypair.sk.sign(message).compress();
        let set = SignatureSet::single_pubkey(signature, keypair.pk.clone(), message);
        (keypair, set)
    }

    #[test]
    fn single_pubkey_has_one_of_each() {
        let (keypair, set) = signed_set(Hash256::repeat_byte(1));
        assert_eq!(set.len(), 1);
        assert_eq!(set.public_keys(), &[keypair.pk]);
        assert_eq!(set.messages(), &[Hash256::repeat_byte(1)]);
        assert_eq!(set.signatures().len(), 1);
        assert_eq!(set.verify(), Ok(true));
    }

    #[test]
    fn wrong_message_is_invalid() {
        let keypair = Keypair::random();
        let signature = keypair.sk.sign(Hash256::repeat_byte(1)).compress();
        let set = SignatureSet::single_pubkey(signature, keypair.pk, Hash256::repeat_byte(2));
        assert_eq!(set.verify(), Ok(false));
    }

    #[test]
    fn undecodable_signature_is_an_error() {
        let keypair = Keypair::random();
        let set =
            SignatureSet::single_pubkey(SignatureBytes::empty(), keypair.pk, Hash256::zero());
        assert!(matches!(set.verify(), Err(Error::BlstError(_))));
    }

    #[test]
    fn from_parts_checks_lengths() {
        let (_, a) = signed_set(Hash256::repeat_byte(1));
        let (_, b) = signed_set(Hash256::repeat_byte(2));

        let mut public_keys = a.public_keys().to_vec();
        public_keys.extend_from_slice(b.public_keys());
        let mut signatures = a.signatures().to_vec();
        signatures.extend_from_slice(b.signatures());

        assert_eq!(
            SignatureSet::from_parts(
                public_keys.clone(),
                a.messages().to_vec(),
                signatures.clone()
            ),
            Err(Error::InconsistentSignatureSet {
                public_keys: 2,
                messages: 1,
                signatures: 2,
            })
        );

        let set = SignatureSet::from_parts(
            public_keys,
            vec![Hash256::repeat_byte(1), Hash256::repeat_byte(2)],
            signatures,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.verify(), Ok(true));
    }

    #[test]
    fn empty_set_is_invalid() {
        let set = SignatureSet::from_parts(vec![], vec![], vec![]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.verify(), Ok(false));
    }
}
