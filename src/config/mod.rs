//! Configuration management for the notice board

pub mod app_config;

pub use app_config::*;
