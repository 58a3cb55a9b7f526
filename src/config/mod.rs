//! Configuration module for FinBEE
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinbeePaths;
pub use settings::Settings;
