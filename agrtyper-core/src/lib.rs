//! Core utilities and types shared across all agrtyper crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, load_config_or_default, save_config, Config};
pub use error::{AgrError, AgrResult};
pub use types::{TypingResult, UNKNOWN_GROUP};

pub use system::{agrtyper_home, default_config_path, default_db_dir};

/// Version information for the agrtyper project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
