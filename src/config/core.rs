use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::extraction::ExtractOptions;
use crate::io::output::OutputFormat;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".gidl.toml";

/// Contents written by `gidl init`.
pub const DEFAULT_CONFIG: &str = r#"# gidl configuration

[frontend]
# Directory holding resolved package documents (<root>/<package path>.json|yaml)
root = "."

[output]
format = "json"
pretty = true

[warnings]
# Echo warnings on stderr after the model
print = true
# Exit with a failure status when any warning was produced
deny = false

[extraction]
parallel = true
"#;

/// Root configuration structure for gidl
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GidlConfig {
    pub frontend: FrontendConfig,
    pub output: OutputConfig,
    pub warnings: WarningsConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Directory holding resolved package documents
    pub root: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningsConfig {
    pub print: bool,
    pub deny: bool,
}

impl Default for WarningsConfig {
    fn default() -> Self {
        Self {
            print: true,
            deny: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub parallel: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl From<&ExtractionConfig> for ExtractOptions {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            parallel: config.parallel,
        }
    }
}
