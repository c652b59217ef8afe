use crate::parse_hex::{encode_hex, parse_hex_optional, parse_hex_required};
use clap::ArgMatches;
use log::info;
use signing::{compute_domain_from_bytes, fork_version_from_bytes, root_from_bytes};
use types::{compute_fork_data_root, compute_fork_digest, ChainSpec, ForkVersion, Hash256};

fn parse_fork_args(matches: &ArgMatches) -> Result<(ForkVersion, Hash256), String> {
    let fork_version = fork_version_from_bytes(&parse_hex_required(matches, "fork-version")?)
        .map_err(|e| e.to_string())?;
    let genesis_validators_root = root_from_bytes(
        "genesis_validators_root",
        &parse_hex_required(matches, "genesis-validators-root")?,
    )
    .map_err(|e| e.to_string())?;

    Ok((fork_version, genesis_validators_root))
}

pub fn run_fork_data_root(matches: &ArgMatches) -> Result<String, String> {
    let (fork_version, genesis_validators_root) = parse_fork_args(matches)?;
    let root = compute_fork_data_root(fork_version, genesis_validators_root);

    Ok(encode_hex(root.as_bytes()))
}

pub fn run_fork_digest(matches: &ArgMatches) -> Result<String, String> {
    let (fork_version, genesis_validators_root) = parse_fork_args(matches)?;
    let digest = compute_fork_digest(fork_version, genesis_validators_root);

    Ok(encode_hex(&digest))
}

pub fn run_compute_domain(matches: &ArgMatches, spec: &ChainSpec) -> Result<String, String> {
    let domain_type = parse_hex_required(matches, "domain-type")?;
    let fork_version = parse_hex_optional(matches, "fork-version")?;
    let genesis_validators_root = parse_hex_optional(matches, "genesis-validators-root")?;

    if fork_version.is_none() {
        info!(
            "Using genesis fork version {}",
            encode_hex(&spec.genesis_fork_version)
        );
    }
    if genesis_validators_root.is_none() {
        info!("Using zero genesis validators root");
    }

    let domain = compute_domain_from_bytes(
        &domain_type,
        fork_version.as_deref(),
        genesis_validators_root.as_deref(),
        spec,
    )
    .map_err(|e| e.to_string())?;

    Ok(encode_hex(domain.as_bytes()))
}
