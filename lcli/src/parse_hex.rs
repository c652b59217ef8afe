use clap::ArgMatches;

/// Decode `hex`, which may or may not have a `0x` prefix.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>, String> {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    hex::decode(hex).map_err(|e| format!("Failed to parse hex: {:?}", e))
}

/// Encode `bytes` as `0x`-prefixed hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn parse_hex_optional(matches: &ArgMatches, name: &str) -> Result<Option<Vec<u8>>, String> {
    matches
        .get_one::<String>(name)
        .map(|hex| decode_hex(hex).map_err(|e| format!("Invalid --{}: {}", name, e)))
        .transpose()
}

pub fn parse_hex_required(matches: &ArgMatches, name: &str) -> Result<Vec<u8>, String> {
    parse_hex_optional(matches, name)?.ok_or_else(|| format!("--{} not specified", name))
}
