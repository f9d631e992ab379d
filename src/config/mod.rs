//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (store URL, timeout, display preferences)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
