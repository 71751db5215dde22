//! Application state
//!
//! Reactive contexts provided at the app root, plus the pure session model
//! they are built on.

pub mod notices;
pub mod pending;
pub mod session;
pub mod viewer;
pub mod wallet;
