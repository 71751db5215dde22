//! Validation for user input typed into the panels
//!
//! Both parsers are pure and run before any network request is made.

use std::str::FromStr;

use alloy_primitives::{Address, U256};

/// Parse an account address the way wallets accept it.
///
/// Forty hex digits with an optional `0x` prefix. All-lowercase and
/// all-uppercase input is accepted as is; mixed case must be a valid
/// EIP-55 checksum.
pub fn parse_address(input: &str) -> Option<Address> {
    let input = input.trim();
    let hex = input.strip_prefix("0x").unwrap_or(input);

    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let address = Address::from_str(hex).ok()?;

    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower {
        let checksummed = address.to_checksum(None);
        if &checksummed[2..] != hex {
            return None;
        }
    }

    Some(address)
}

/// Parse a token id: a positive decimal integer.
///
/// Empty, zero, negative and non-numeric input are all rejected.
pub fn parse_token_id(input: &str) -> Option<U256> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    U256::from_str_radix(input, 10)
        .ok()
        .filter(|id| !id.is_zero())
}
