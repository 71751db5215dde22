//! # Shared Display Helpers
//!
//! Browser-independent helpers used by the `nft-web` front-end. Everything here
//! is plain Rust so it can be unit tested natively.
//!
//! ## Structure
//!
//! - **[`utils`]**: Address formatting for display
//!   - **[`utils::format_address`]**: Format addresses with an ellipsis
//!   - **[`utils::truncate_address`]**: `0x1234...abcd` style truncation
//! - **[`units`]**: Exact wei → ether formatting on [`alloy_primitives::U256`]
//!   - **[`units::format_ether`]**: Minimal decimal rendering (`0.0005`)
//!   - **[`units::format_ether_fixed`]**: Fixed decimal places with rounding (`1.2346`)
//!
//! ## Usage
//!
//! ```rust
//! use alloy_primitives::U256;
//! use shared::units::format_ether;
//! use shared::utils::truncate_address;
//!
//! let price = U256::from(1_000_000_000_000_000u64);
//! assert_eq!(format_ether(price), "0.001");
//! assert_eq!(
//!     truncate_address("0x62aA5e91C4187Cd419520f9Be5De1a5e7eDEe2C5"),
//!     "0x62aA...e2C5"
//! );
//! ```

pub mod units;
pub mod utils;

pub use units::*;
pub use utils::*;
