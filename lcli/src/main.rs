mod domain;
mod parse_hex;
mod signatures;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use std::path::PathBuf;
use std::process;
use types::{ChainSpec, Config};

fn hex_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("HEX")
        .action(ArgAction::Set)
        .help(help)
        .display_order(0)
}

fn fork_args(command: Command) -> Command {
    command
        .arg(hex_arg("fork-version", "The 4-byte fork version.").required(true))
        .arg(
            hex_arg(
                "genesis-validators-root",
                "The 32-byte genesis validators root.",
            )
            .required(true),
        )
}

fn signing_root_args(command: Command) -> Command {
    command
        .arg(hex_arg("object-root", "The 32-byte root of the signed object.").required(true))
        .arg(hex_arg("domain", "The 32-byte signature domain.").required(true))
}

pub fn cli_app() -> Command {
    Command::new("Lighthouse CLI Tool")
        .display_order(0)
        .about("Computes signature domains and signs or verifies consensus messages.")
        .arg(
            Arg::new("spec")
                .short('s')
                .long("spec")
                .value_name("STRING")
                .action(ArgAction::Set)
                .value_parser(["minimal", "mainnet"])
                .default_value("mainnet")
                .global(true)
                .help("The preset providing the genesis fork version.")
                .display_order(0),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .action(ArgAction::Set)
                .global(true)
                .help("A config.yaml which overrides the values of --spec.")
                .display_order(0),
        )
        .subcommand(fork_args(
            Command::new("fork-data-root")
                .about("Computes the root of the fork data for a fork version and chain."),
        ))
        .subcommand(fork_args(
            Command::new("fork-digest")
                .about("Computes the 4-byte fork digest used to identify a fork on the network."),
        ))
        .subcommand(
            Command::new("compute-domain")
                .about(
                    "Computes a signature domain. An absent fork version or genesis validators \
                     root is replaced with its genesis default.",
                )
                .arg(hex_arg("domain-type", "The 4-byte domain type.").required(true))
                .arg(hex_arg(
                    "fork-version",
                    "The 4-byte fork version. Defaults to the genesis fork version.",
                ))
                .arg(hex_arg(
                    "genesis-validators-root",
                    "The 32-byte genesis validators root. Defaults to zero.",
                )),
        )
        .subcommand(signing_root_args(
            Command::new("signing-root").about("Computes the signing root of an object root."),
        ))
        .subcommand(signing_root_args(
            Command::new("sign")
                .about("Signs the signing root of an object root with a secret key.")
                .arg(hex_arg("secret-key", "The 32-byte BLS secret key.").required(true)),
        ))
        .subcommand(signing_root_args(
            Command::new("verify")
                .about("Verifies a signature across the signing root of an object root.")
                .arg(hex_arg("pubkey", "The 48-byte compressed BLS public key.").required(true))
                .arg(hex_arg("signature", "The 96-byte compressed BLS signature.").required(true)),
        ))
}

fn main() {
    env_logger::init();

    let matches = cli_app().get_matches();

    match run(&matches) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Failed to run lcli: {}", e);
            process::exit(1)
        }
    }
}

/// Load the `ChainSpec` from `--config` if it is present, otherwise from `--spec`.
fn chain_spec(matches: &ArgMatches) -> Result<ChainSpec, String> {
    if let Some(path) = matches.get_one::<String>("config") {
        let path = PathBuf::from(path);
        info!("Loading config from {}", path.display());
        return Config::from_file(&path)
            .and_then(|config| config.chain_spec())
            .map_err(|e| format!("Unable to load config at {}: {:?}", path.display(), e));
    }

    match matches.get_one::<String>("spec").map(String::as_str) {
        Some("minimal") => Ok(ChainSpec::minimal()),
        Some("mainnet") | None => Ok(ChainSpec::mainnet()),
        Some(other) => Err(format!("Unknown spec: {}", other)),
    }
}

fn run(matches: &ArgMatches) -> Result<String, String> {
    let spec = chain_spec(matches)?;
    debug!(
        "Using spec {}",
        spec.config_name.as_deref().unwrap_or("unnamed")
    );

    match matches.subcommand() {
        Some(("fork-data-root", matches)) => domain::run_fork_data_root(matches)
            .map_err(|e| format!("Failed to run fork-data-root command: {}", e)),
        Some(("fork-digest", matches)) => domain::run_fork_digest(matches)
            .map_err(|e| format!("Failed to run fork-digest command: {}", e)),
        Some(("compute-domain", matches)) => domain::run_compute_domain(matches, &spec)
            .map_err(|e| format!("Failed to run compute-domain command: {}", e)),
        Some(("signing-root", matches)) => signatures::run_signing_root(matches)
            .map_err(|e| format!("Failed to run signing-root command: {}", e)),
        Some(("sign", matches)) => signatures::run_sign(matches)
            .map_err(|e| format!("Failed to run sign command: {}", e)),
        Some(("verify", matches)) => signatures::run_verify(matches)
            .map_err(|e| format!("Failed to run verify command: {}", e)),
        Some((other, _)) => Err(format!("Unknown subcommand {}. See --help.", other)),
        _ => Err("No subcommand provided. See --help.".to_string()),
    }
}
