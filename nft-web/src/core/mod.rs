//! Core types shared by services, state and components

pub mod error;
