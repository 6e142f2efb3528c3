//! Configuration for gidl runs.
//!
//! Settings come from a `.gidl.toml` file found in the working directory or one
//! of its ancestors, then command-line flags override individual values.

mod core;
mod loader;

pub use self::core::{
    ExtractionConfig, FrontendConfig, GidlConfig, OutputConfig, WarningsConfig,
    CONFIG_FILE_NAME, DEFAULT_CONFIG,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
};
