//! Utilities: constants, URL query parsing and input validation

pub mod constants;
pub mod url;
pub mod validation;
