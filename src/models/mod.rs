//! Data models for the notice board

pub mod color;
pub mod notice;

// Re-export commonly used types
pub use color::*;
pub use notice::*;
