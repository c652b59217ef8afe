use crate::parse_hex::{encode_hex, parse_hex_required};
use bls::SecretKey;
use clap::ArgMatches;
use log::debug;
use signing::{root_from_bytes, verify_signing_root};
use types::{Hash256, SignedRoot};

fn parse_root(matches: &ArgMatches, name: &'static str) -> Result<Hash256, String> {
    root_from_bytes(name, &parse_hex_required(matches, name)?).map_err(|e| e.to_string())
}

fn signing_root(matches: &ArgMatches) -> Result<Hash256, String> {
    let object_root = parse_root(matches, "object-root")?;
    let domain = parse_root(matches, "domain")?;

    object_root
        .signing_root(domain)
        .map_err(|e| format!("Unable to compute signing root: {}", e))
}

pub fn run_signing_root(matches: &ArgMatches) -> Result<String, String> {
    signing_root(matches).map(|root| encode_hex(root.as_bytes()))
}

pub fn run_sign(matches: &ArgMatches) -> Result<String, String> {
    let secret_key = SecretKey::deserialize(&parse_hex_required(matches, "secret-key")?)
        .map_err(|e| format!("Invalid secret key: {}", e))?;
    let message = signing_root(matches)?;

    debug!("Signing {:?}", message);

    Ok(encode_hex(secret_key.sign(message).compress().as_serialized()))
}

pub fn run_verify(matches: &ArgMatches) -> Result<String, String> {
    let pubkey = parse_hex_required(matches, "pubkey")?;
    let signature = parse_hex_required(matches, "signature")?;
    let object_root = parse_root(matches, "object-root")?;
    let domain = parse_root(matches, "domain")?;

    verify_signing_root(&object_root, &pubkey, &signature, domain)
        .map(|()| "valid".to_string())
        .map_err(|e| e.to_string())
}
