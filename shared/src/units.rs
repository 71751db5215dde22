//! Wei → ether formatting.
//!
//! Amounts are kept as [`U256`] wei end to end; these helpers only render them.
//! No floating point is involved, so what is displayed is exactly what the
//! contract accounts with.

use alloy_primitives::U256;

/// Decimals of the native ether unit.
pub const ETHER_DECIMALS: usize = 18;

fn ten_pow(exp: usize) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

/// Render a wei amount as ether with the shortest exact fraction.
///
/// At least one fractional digit is always kept (`1.0`, `0.0`).
///
/// ```rust
/// use alloy_primitives::U256;
/// use shared::units::format_ether;
///
/// assert_eq!(format_ether(U256::from(500_000_000_000_000u64)), "0.0005");
/// assert_eq!(format_ether(U256::from(10u64).pow(U256::from(18))), "1.0");
/// ```
pub fn format_ether(wei: U256) -> String {
    let unit = ten_pow(ETHER_DECIMALS);
    let whole = wei / unit;
    let fraction = wei % unit;

    let digits = format!("{:0>width$}", fraction.to_string(), width = ETHER_DECIMALS);
    let trimmed = digits.trim_end_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };

    format!("{}.{}", whole, trimmed)
}

/// Render a wei amount as ether with exactly `decimals` fractional digits,
/// rounding half up on the first dropped digit.
///
/// ```rust
/// use alloy_primitives::U256;
/// use shared::units::format_ether_fixed;
///
/// assert_eq!(format_ether_fixed(U256::from(1_234_567_000_000_000_000u128), 4), "1.2346");
/// ```
pub fn format_ether_fixed(wei: U256, decimals: usize) -> String {
    let decimals = decimals.min(ETHER_DECIMALS);
    let dropped = ETHER_DECIMALS - decimals;

    let scaled = if dropped == 0 {
        wei
    } else {
        let divisor = ten_pow(dropped);
        let half = divisor / U256::from(2u64);
        wei.saturating_add(half) / divisor
    };

    if decimals == 0 {
        return scaled.to_string();
    }

    let unit = ten_pow(decimals);
    let whole = scaled / unit;
    let fraction = scaled % unit;
    format!(
        "{}.{:0>width$}",
        whole,
        fraction.to_string(),
        width = decimals
    )
}

/// `format_ether` with the ` ETH` suffix used across the UI.
pub fn display_ether(wei: U256) -> String {
    format!("{} ETH", format_ether(wei))
}
