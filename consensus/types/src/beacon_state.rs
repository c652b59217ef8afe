use crate::{Fork, Hash256, Validator};

#[derive(Debug, PartialEq, Clone)]
pub enum BeaconStateError {
    /// There is no validator at the given index.
    UnknownValidator(u64),
}

/// Read-only access to the parts of a `BeaconState` which are required for computing signature
/// domains and finding signing keys.
pub trait BeaconStateView {
    /// The fork record of the state.
    fn fork(&self) -> Fork;

    /// The root committing to the validator set at genesis.
    fn genesis_validators_root(&self) -> Hash256;

    /// The validator at `validator_index`.
    fn validator(&self, validator_index: u64) -> Result<&Validator, BeaconStateError>;
}

/// An in-memory `BeaconState` holding only what signature verification reads.
#[derive(Debug, PartialEq, Clone)]
pub struct BeaconState {
    pub genesis_validators_root: Hash256,
    pub fork: Fork,
    pub validators: Vec<Validator>,
}

impl BeaconState {
    pub fn new(genesis_validators_root: Hash256, fork: Fork, validators: Vec<Validator>) -> Self {
        Self {
            genesis_validators_root,
            fork,
            validators,
        }
    }
}

impl BeaconStateView for BeaconState {
    fn fork(&self) -> Fork {
        self.fork
    }

    fn genesis_validators_root(&self) -> Hash256 {
        self.genesis_validators_root
    }

    fn validator(&self, validator_index: u64) -> Result<&Validator, BeaconStateError> {
        usize::try_from(validator_index)
            .ok()
            .and_then(|i| self.validators.get(i))
            .ok_or(BeaconStateError::UnknownValidator(validator_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Epoch, PublicKeyBytes};

    #[test]
    fn validator_lookup() {
        let validator = Validator::new(PublicKeyBytes::empty(), 32_000_000_000);
        let state = BeaconState::new(
            Hash256::repeat_byte(1),
            Fork {
                previous_version: [0; 4],
                current_version: [1, 0, 0, 0],
                epoch: Epoch::new(10),
            },
            vec![validator.clone()],
        );

        assert_eq!(state.validator(0), Ok(&validator));
        assert_eq!(
            state.validator(1),
            Err(BeaconStateError::UnknownValidator(1))
        );
        assert_eq!(
            state.validator(u64::MAX),
            Err(BeaconStateError::UnknownValidator(u64::MAX))
        );
    }
}
