//! UI Components

pub mod action_button;
pub mod admin_panel;
pub mod message_region;
pub mod mint_panel;
pub mod navbar;
pub mod nft_viewer;
pub mod stats_panel;

pub use admin_panel::AdminPanel;
pub use mint_panel::MintPanel;
pub use navbar::Navbar;
pub use nft_viewer::NftViewer;
pub use stats_panel::StatsPanel;
