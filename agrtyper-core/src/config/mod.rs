//! Configuration types for agrtyper

use crate::AgrError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    /// Directory holding the reference databases
    #[serde(default)]
    pub db_dir: Option<String>,
    /// Basename of the nucleotide BLAST database inside `db_dir`
    #[serde(default = "default_blast_db_name")]
    pub blast_db_name: String,
    /// Basename of the KMA index inside `db_dir`
    #[serde(default = "default_kma_db_name")]
    pub kma_db_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolsConfig {
    /// Search path used instead of PATH when locating aligners
    #[serde(default)]
    pub search_path: Option<String>,
    /// Threads handed to the aligner (1 = aligner default)
    #[serde(default = "default_threads")]
    pub threads: usize,
}

// Default value functions
fn default_blast_db_name() -> String { "agr_blastdb".to_string() }
fn default_kma_db_name() -> String { "agr_kma".to_string() }
fn default_threads() -> usize { 1 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_dir: None,
            blast_db_name: default_blast_db_name(),
            kma_db_name: default_kma_db_name(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            search_path: None,
            threads: default_threads(),
        }
    }
}

impl Config {
    /// Resolve the database directory.
    ///
    /// Precedence: explicit value, `AGRTYPER_DB_DIR`, `database.db_dir`,
    /// then `$AGRTYPER_HOME/db`.
    pub fn resolve_db_dir(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(dir) = explicit {
            return dir.to_path_buf();
        }
        if let Ok(dir) = std::env::var("AGRTYPER_DB_DIR") {
            return PathBuf::from(dir);
        }
        match &self.database.db_dir {
            Some(dir) => PathBuf::from(dir),
            None => crate::system::default_db_dir(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, AgrError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| AgrError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

/// Load a config file, falling back to defaults when it does not exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config, AgrError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load_config(path)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), AgrError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| AgrError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
