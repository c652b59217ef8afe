use crate::{Epoch, Hash256, PublicKeyBytes};
use serde::{Deserialize, Serialize};

/// Information about a `BeaconChain` validator.
///
/// The public key is stored compressed and is only decoded when a signature is checked against
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub pubkey: PublicKeyBytes,
    pub withdrawal_credentials: Hash256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub effective_balance: u64,
    pub slashed: bool,
    pub activation_epoch: Epoch,
    pub exit_epoch: Epoch,
}

impl Validator {
    /// A validator which is active from genesis and never exits.
    pub fn new(pubkey: PublicKeyBytes, effective_balance: u64) -> Self {
        Self {
            pubkey,
            withdrawal_credentials: Hash256::zero(),
            effective_balance,
            slashed: false,
            activation_epoch: Epoch::new(0),
            exit_epoch: Epoch::new(u64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_quotes_integers_and_hex_encodes_pubkey() {
        let validator = Validator::new(PublicKeyBytes::empty(), 32_000_000_000);
        let yaml = serde_yaml::to_string(&validator).unwrap();

        assert!(yaml.contains("'32000000000'") || yaml.contains("\"32000000000\""));
        assert!(yaml.contains(&format!("0x{}", "00".repeat(48))));
        assert_eq!(serde_yaml::from_str::<Validator>(&yaml).unwrap(), validator);
    }
}
