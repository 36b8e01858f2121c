//! Configuration and file management for textdiff-tui
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod error;
pub mod paths;

pub use app_config::{AppConfig, DiffAlgorithmName, MAX_CONTEXT_LINES};
pub use config_file::{find_config_file, load_config_file};
pub use error::ConfigError;
