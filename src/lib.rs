//! NoticeBoard - Digital Notice Board
//!
//! A single-window desktop application for posting, updating, and deleting
//! short text notices, each rendered in a randomly assigned color.

pub mod config;
pub mod errors;
pub mod gui;
pub mod models;

// Re-export commonly used types
pub use errors::*;
pub use models::*;

/// NoticeBoard version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// NoticeBoard application name
pub const APP_NAME: &str = "noticeboard";
