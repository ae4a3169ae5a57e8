//! Configuration loading from disk.
//!
//! Pure parsing and validation live in `domain::configuration`; this module
//! owns the file lookup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppConfig;
use crate::domain::AppError;
use crate::domain::configuration::parse_config_content;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ecocast.toml";

/// Load configuration from an explicit path, the working directory, or defaults.
///
/// An explicit path must exist. The working-directory file is optional.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate: PathBuf = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
