use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::{GidlConfig, CONFIG_FILE_NAME};
use crate::core::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<GidlConfig> {
    let config = toml::from_str::<GidlConfig>(contents)?;
    if config.frontend.root.as_os_str().is_empty() {
        return Err(Error::config("frontend.root must not be empty", None));
    }
    Ok(config)
}

/// Load configuration from an explicit path; every failure is an error.
pub fn load_config_from(path: &Path) -> Result<GidlConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::config(
            format!("cannot read {}: {}", path.display(), e),
            Some(path.to_path_buf()),
        )
    })?;
    parse_and_validate_config(&contents).map_err(|e| {
        Error::config(
            format!("invalid {}: {}", path.display(), e),
            Some(path.to_path_buf()),
        )
    })
}

/// Try loading a discovered config file, falling back to `None` on any problem
fn try_load_config_from_path(config_path: &Path) -> Option<GidlConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search the working directory and its ancestors for `.gidl.toml`
pub fn load_config() -> GidlConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!("Failed to get current directory: {}. Using default config.", e);
            return GidlConfig::default();
        }
    };
    discover_config(current)
}

fn discover_config(start: PathBuf) -> GidlConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            GidlConfig::default()
        })
}
