pub mod actions;
pub mod contract;
pub mod pricing;
pub mod rpc;
pub mod stats;
pub mod viewer;
pub mod wallet;

#[cfg(test)]
pub mod mock;
