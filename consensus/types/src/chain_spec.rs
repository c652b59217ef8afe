use crate::fork_data::{compute_domain, compute_fork_digest};
use crate::{DomainType, Epoch, Fork, ForkDigest, ForkVersion, Hash256};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Holds the network-wide values required to compute signature domains.
///
/// Constructed once at start-up and then only ever read, so it may be freely shared between
/// threads.
#[derive(PartialEq, Debug, Clone)]
pub struct ChainSpec {
    /*
     * Config name
     */
    pub config_name: Option<String>,

    /*
     * Initial Values
     */
    pub genesis_fork_version: ForkVersion,
    pub zero_hash: Hash256,
}

impl ChainSpec {
    /// Returns a `ChainSpec` compatible with the Ethereum Foundation specification.
    pub fn mainnet() -> Self {
        Self {
            config_name: Some("mainnet".to_string()),
            genesis_fork_version: [0; 4],
            zero_hash: Hash256::zero(),
        }
    }

    /// Ethereum Foundation minimal spec, as defined in the consensus-specs repo.
    pub fn minimal() -> Self {
        Self {
            config_name: None,
            genesis_fork_version: [0x00, 0x00, 0x00, 0x01],
            ..ChainSpec::mainnet()
        }
    }

    /// Compute a domain, substituting network defaults for absent values.
    ///
    /// An absent `fork_version` becomes `self.genesis_fork_version` and an absent
    /// `genesis_validators_root` becomes `self.zero_hash`. This permits computing a domain before
    /// the genesis state exists (e.g., for deposits).
    pub fn compute_domain(
        &self,
        domain_type: DomainType,
        fork_version: Option<ForkVersion>,
        genesis_validators_root: Option<Hash256>,
    ) -> Hash256 {
        compute_domain(
            domain_type,
            fork_version.unwrap_or(self.genesis_fork_version),
            genesis_validators_root.unwrap_or(self.zero_hash),
        )
    }

    /// Get the domain that represents the fork meta and signature domain at `epoch`.
    pub fn get_domain(
        &self,
        epoch: Epoch,
        domain_type: DomainType,
        fork: &Fork,
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        compute_domain(
            domain_type,
            fork.get_fork_version(epoch),
            genesis_validators_root,
        )
    }

    /// Return the 4-byte fork digest for the `current_version` and `genesis_validators_root`.
    pub fn compute_fork_digest(
        current_version: ForkVersion,
        genesis_validators_root: Hash256,
    ) -> ForkDigest {
        compute_fork_digest(current_version, genesis_validators_root)
    }
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be opened.
    Io(std::io::Error),
    /// The config file was not valid YAML or was missing a required field.
    Yaml(serde_yaml::Error),
    /// `PRESET_BASE` named a preset which is not known.
    UnknownPreset(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e)
    }
}

/// Exact implementation of the *config* object from the Ethereum spec (YAML/JSON).
///
/// Only the fields this crate needs are represented, any others present in a network's
/// `config.yaml` are ignored.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "UPPERCASE")]
pub struct Config {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,

    #[serde(default = "default_preset_base")]
    pub preset_base: String,

    #[serde(with = "serde_utils::bytes_4_hex")]
    pub genesis_fork_version: ForkVersion,
}

fn default_preset_base() -> String {
    "mainnet".to_string()
}

impl Config {
    pub fn from_chain_spec(spec: &ChainSpec, preset_base: &str) -> Self {
        Self {
            config_name: spec.config_name.clone(),
            preset_base: preset_base.to_string(),
            genesis_fork_version: spec.genesis_fork_version,
        }
    }

    /// Load a config from a YAML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        serde_yaml::from_reader(file).map_err(Into::into)
    }

    /// Apply the values in `self` over `base`.
    pub fn apply_to_chain_spec(&self, base: &ChainSpec) -> ChainSpec {
        ChainSpec {
            config_name: self.config_name.clone(),
            genesis_fork_version: self.genesis_fork_version,
            ..base.clone()
        }
    }

    /// Build a `ChainSpec` from the preset named by `PRESET_BASE`, overridden by `self`.
    pub fn chain_spec(&self) -> Result<ChainSpec, ConfigError> {
        let base = match self.preset_base.as_str() {
            "mainnet" => ChainSpec::mainnet(),
            "minimal" => ChainSpec::minimal(),
            other => return Err(ConfigError::UnknownPreset(other.to_string())),
        };
        Ok(self.apply_to_chain_spec(&base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DOMAIN_DEPOSIT: DomainType = [3, 0, 0, 0];

    #[test]
    fn default_domain_equivalence() {
        for spec in [ChainSpec::mainnet(), ChainSpec::minimal()] {
            assert_eq!(
                spec.compute_domain(DOMAIN_DEPOSIT, None, None),
                spec.compute_domain(
                    DOMAIN_DEPOSIT,
                    Some(spec.genesis_fork_version),
                    Some(Hash256::zero())
                )
            );
        }
    }

    #[test]
    fn defaults_differ_between_presets() {
        assert_ne!(
            ChainSpec::mainnet().compute_domain(DOMAIN_DEPOSIT, None, None),
            ChainSpec::minimal().compute_domain(DOMAIN_DEPOSIT, None, None)
        );
    }

    #[test]
    fn explicit_values_override_defaults() {
        let spec = ChainSpec::mainnet();
        let fork_version = [1, 0, 0, 0];
        let genesis_validators_root = Hash256::repeat_byte(1);

        assert_eq!(
            spec.compute_domain(
                DOMAIN_DEPOSIT,
                Some(fork_version),
                Some(genesis_validators_root)
            ),
            compute_domain(DOMAIN_DEPOSIT, fork_version, genesis_validators_root)
        );
    }

    #[test]
    fn get_domain_follows_fork_boundary() {
        let fork = Fork {
            previous_version: [0, 0, 0, 0],
            current_version: [1, 0, 0, 0],
            epoch: Epoch::new(100),
        };
        let root = Hash256::repeat_byte(7);
        let domain_type = [1, 0, 0, 0];

        assert_eq!(
            ChainSpec::mainnet().get_domain(Epoch::new(99), domain_type, &fork, root),
            compute_domain(domain_type, fork.previous_version, root)
        );
        assert_eq!(
            ChainSpec::mainnet().get_domain(Epoch::new(100), domain_type, &fork, root),
            compute_domain(domain_type, fork.current_version, root)
        );
    }

    #[test]
    fn config_file_overrides_genesis_fork_version() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "PRESET_BASE: 'minimal'\n\
             CONFIG_NAME: 'devnet'\n\
             GENESIS_FORK_VERSION: 0x10000038\n\
             SECONDS_PER_SLOT: 12"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        let spec = config.chain_spec().unwrap();

        assert_eq!(spec.config_name.as_deref(), Some("devnet"));
        assert_eq!(spec.genesis_fork_version, [0x10, 0x00, 0x00, 0x38]);
        assert_eq!(spec.zero_hash, ChainSpec::minimal().zero_hash);
    }

    #[test]
    fn config_round_trips_through_chain_spec() {
        let spec = ChainSpec::minimal();
        let config = Config::from_chain_spec(&spec, "minimal");
        assert_eq!(config.chain_spec().unwrap(), spec);

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(serde_yaml::from_str::<Config>(&yaml).unwrap(), config);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let config = Config {
            config_name: None,
            preset_base: "gnosis".to_string(),
            genesis_fork_version: [0; 4],
        };
        assert!(matches!(
            config.chain_spec(),
            Err(ConfigError::UnknownPreset(name)) if name == "gnosis"
        ));
    }
}
