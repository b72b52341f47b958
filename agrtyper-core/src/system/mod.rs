pub mod paths;

// Re-export commonly used functions
pub use paths::{agrtyper_home, default_config_path, default_db_dir};
