//! Argument parsing helpers

use anyhow::{Context, Result};

/// Parse an attribute id given as decimal (`3001`) or hex (`0x0BB9`)
pub fn parse_id(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex_digits) => u32::from_str_radix(hex_digits, 16)
            .with_context(|| format!("Invalid hex attribute id: {}", input)),
        None => trimmed
            .parse::<u32>()
            .with_context(|| format!("Invalid attribute id: {}", input)),
    }
}

/// Decode a hex string, ignoring whitespace and an optional `0x` prefix
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    hex::decode(digits).with_context(|| format!("Invalid hex input: {}", input))
}
