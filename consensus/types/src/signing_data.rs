use crate::Hash256;
use std::fmt;
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// An error produced while computing the root of an object that is to be signed.
#[derive(Debug, PartialEq, Clone)]
pub enum RootError {
    /// A variable-length field held more elements than its type allows.
    ListTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    /// The object could not be rooted for some other reason.
    InvalidObject(String),
}

impl fmt::Display for RootError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RootError::ListTooLong { field, len, max } => {
                write!(f, "{} has {} elements, the maximum is {}", field, len, max)
            }
            RootError::InvalidObject(reason) => write!(f, "invalid object: {}", reason),
        }
    }
}

/// The container whose root is the message actually signed by a validator.
#[derive(Debug, PartialEq, Clone, Default, TreeHash)]
pub struct SigningData {
    pub object_root: Hash256,
    pub domain: Hash256,
}

/// Implemented by every message which is signed under some signature domain.
///
/// The default `object_root` is the tree hash root of `self`. Types whose root is computed some
/// other way, or may fail to compute, override it.
pub trait SignedRoot: TreeHash {
    /// The root committing to the content of `self`.
    fn object_root(&self) -> Result<Hash256, RootError> {
        Ok(self.tree_hash_root())
    }

    /// The root of `self` mixed with `domain`; this is the message that gets signed.
    fn signing_root(&self, domain: Hash256) -> Result<Hash256, RootError> {
        compute_signing_root_with(|| self.object_root(), domain)
    }
}

/// Compute the signing root from a root supplied by `root_fn` rather than a `SignedRoot`.
///
/// This exists for objects (e.g., blocks) which have a specialised and possibly cached way of
/// computing their root.
pub fn compute_signing_root_with<F>(root_fn: F, domain: Hash256) -> Result<Hash256, RootError>
where
    F: FnOnce() -> Result<Hash256, RootError>,
{
    let object_root = root_fn()?;
    Ok(SigningData {
        object_root,
        domain,
    }
    .tree_hash_root())
}

impl SignedRoot for Hash256 {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Checkpoint, Epoch};

    #[test]
    fn signing_root_is_root_of_signing_data() {
        let checkpoint = Checkpoint {
            epoch: Epoch::new(5),
            root: Hash256::repeat_byte(1),
        };
        let domain = Hash256::repeat_byte(2);

        let expected = SigningData {
            object_root: checkpoint.tree_hash_root(),
            domain,
        }
        .tree_hash_root();

        assert_eq!(checkpoint.signing_root(domain), Ok(expected));
    }

    #[test]
    fn signing_root_is_neither_object_root_nor_domain() {
        let root = Hash256::repeat_byte(1);
        let domain = Hash256::repeat_byte(2);
        let signing_root = root.signing_root(domain).unwrap();

        assert_ne!(signing_root, root);
        assert_ne!(signing_root, domain);
    }

    #[test]
    fn root_fn_matches_trait() {
        let epoch = Epoch::new(9);
        let domain = Hash256::repeat_byte(3);

        assert_eq!(
            compute_signing_root_with(|| Ok(epoch.tree_hash_root()), domain),
            epoch.signing_root(domain)
        );
    }

    #[test]
    fn root_fn_error_propagates() {
        let error = RootError::InvalidObject("bad".into());
        assert_eq!(
            compute_signing_root_with(|| Err(error.clone()), Hash256::zero()),
            Err(error)
        );
    }

    #[test]
    fn hash256_signs_as_itself() {
        let root = Hash256::repeat_byte(4);
        assert_eq!(root.object_root(), Ok(root));
    }
}
