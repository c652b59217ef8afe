use std::fmt;
use types::{BeaconStateError, RootError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// The public key bytes were the wrong length or not a valid point.
    PublicKeyDecode(bls::Error),
    /// The signature bytes were the wrong length or not a valid point.
    SignatureDecode(bls::Error),
    /// The root of the signed object could not be computed.
    RootComputation(RootError),
    /// Attempted to find the public key of a validator that does not exist.
    ValidatorUnknown(u64),
    /// The signature was well-formed but did not verify against the public key and message.
    SignatureInvalid,
    /// A fixed-length input was supplied with some other length.
    InvalidLength {
        field: &'static str,
        expected: usize,
        got: usize,
    },
}

impl Error {
    /// Returns `true` if the error was caused by input bytes which could never be valid, as
    /// opposed to a well-formed signature which was rejected.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::PublicKeyDecode(_) | Error::SignatureDecode(_) | Error::InvalidLength { .. }
        )
    }
}

impl From<RootError> for Error {
    fn from(e: RootError) -> Error {
        Error::RootComputation(e)
    }
}

impl From<BeaconStateError> for Error {
    fn from(e: BeaconStateError) -> Error {
        match e {
            BeaconStateError::UnknownValidator(index) => Error::ValidatorUnknown(index),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::PublicKeyDecode(e) => write!(f, "unable to decode public key: {}", e),
            Error::SignatureDecode(e) => write!(f, "unable to decode signature: {}", e),
            Error::RootComputation(e) => write!(f, "unable to compute signing root: {}", e),
            Error::ValidatorUnknown(index) => write!(f, "unknown validator index {}", index),
            Error::SignatureInvalid => write!(f, "signature verification failed"),
            Error::InvalidLength {
                field,
                expected,
                got,
            } => write!(
                f,
                "{} must be {} bytes, got {} bytes",
                field, expected, got
            ),
        }
    }
}
