use std::path::PathBuf;

/// Get the agrtyper home directory
/// Checks AGRTYPER_HOME environment variable, falls back to ${HOME}/.agrtyper
pub fn agrtyper_home() -> PathBuf {
    if let Ok(path) = std::env::var("AGRTYPER_HOME") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| {
        std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
    });
    PathBuf::from(home).join(".agrtyper")
}

/// Default reference database directory: AGRTYPER_HOME/db
pub fn default_db_dir() -> PathBuf {
    agrtyper_home().join("db")
}

/// Default configuration file: AGRTYPER_HOME/config.toml
pub fn default_config_path() -> PathBuf {
    agrtyper_home().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_under_home() {
        let home = agrtyper_home();
        assert_eq!(default_db_dir(), home.join("db"));
        assert_eq!(default_config_path(), home.join("config.toml"));
    }
}
