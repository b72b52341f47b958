pub mod check;
pub mod run;

use agrtyper_core::Config;
use agrtyper_tools::Toolchain;

/// Toolchain honoring `tools.search_path` from the config
pub fn toolchain_from_config(config: &Config) -> Toolchain {
    match &config.tools.search_path {
        Some(path) => Toolchain::with_search_path(path),
        None => Toolchain::from_env(),
    }
}
