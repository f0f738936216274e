// src/config/mod.rs

pub mod adapters;
pub mod config_manager;

pub use adapters::{ConfigAdapter, DefaultConfigAdapter, FileConfigAdapter};
pub use config_manager::ConfigManager;
