//! Error types for the notice board

pub mod types;

pub use types::*;
