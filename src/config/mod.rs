//! Configuration module for Pressbook
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence (currency symbol, fixed-cost base, margins)

pub mod paths;
pub mod settings;

pub use paths::PressbookPaths;
pub use settings::Settings;
