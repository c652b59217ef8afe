//! Signing and verification of consensus messages under a signature domain.
//!
//! A signature is made across the *signing root* of a message, which mixes the root of the
//! message with a domain derived from the purpose of the signature, the fork version and the
//! genesis validators root. A signature is therefore only ever valid for one message in one
//! context.
//!
//! Verification functions return `Ok(())` for a valid signature. `Error::SignatureInvalid` is
//! returned for a well-formed signature which does not verify, see `Error::is_decode_error` to
//! distinguish it from malformed input.
mod domain;
mod error;
mod sign;
mod signature_set;
mod verify;

pub use crate::domain::{
    compute_domain_from_bytes, domain_type_from_bytes, fixed_length_bytes,
    fork_version_from_bytes, get_domain_from_state, root_from_bytes,
};
pub use crate::error::{Error, Result};
pub use crate::sign::compute_domain_and_sign;
pub use crate::signature_set::block_signature_set;
pub use crate::verify::{
    verify_block_header_signing_root, verify_by_validator_index, verify_signing_root,
    verify_signing_root_with_fn,
};
