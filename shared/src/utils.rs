//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting EVM account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `0x` prefix plus four hex digits, then the last four
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x62aA5e91C4187Cd419520f9Be5De1a5e7eDEe2C5";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x62aA...e2C5");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x62aA5e91C4187Cd419520f9Be5De1a5e7eDEe2C5";
/// assert_eq!(format_address(addr, 6, 4), "0x62aA...e2C5");
/// assert_eq!(format_address(addr, 4, 4), "0x62...e2C5");
/// assert_eq!(format_address("0x12", 6, 4), "0x12");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard individual lengths too so slicing below cannot panic
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an EVM address the way wallets usually display it: `0x1234...abcd`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x62aA5e91C4187Cd419520f9Be5De1a5e7eDEe2C5";
/// assert_eq!(truncate_address(addr), "0x62aA...e2C5");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
