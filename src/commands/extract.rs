//! `gidl extract`: load a package, extract its model and write it out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::cli::ExtractArgs;
use crate::config::{load_config, load_config_from, GidlConfig};
use crate::extraction::{extract_package, ExtractOptions};
use crate::frontend::SnapshotFrontend;
use crate::io::output::{create_writer, OutputFormat};
use crate::model::Model;

/// Fully resolved settings of one extract run: config file plus flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    pub package: String,
    pub root: PathBuf,
    pub format: OutputFormat,
    pub pretty: bool,
    pub output: Option<PathBuf>,
    pub print_warnings: bool,
    pub deny_warnings: bool,
    pub options: ExtractOptions,
}

impl ExtractConfig {
    /// Flags win over the file; boolean flags can only switch a setting on
    /// (or, for `--quiet-warnings`, off).
    pub fn resolve(args: ExtractArgs, file: GidlConfig) -> Self {
        let mut options = ExtractOptions::from(&file.extraction);
        if args.sequential {
            options.parallel = false;
        }
        Self {
            package: args.package,
            root: args.root.unwrap_or(file.frontend.root),
            format: args.format.unwrap_or(file.output.format),
            pretty: file.output.pretty && !args.compact,
            output: args.output,
            print_warnings: file.warnings.print && !args.quiet_warnings,
            deny_warnings: file.warnings.deny || args.deny_warnings,
            options,
        }
    }
}

/// Loads the explicit config file, or the nearest discovered one.
fn config_for(args: &ExtractArgs) -> Result<GidlConfig> {
    match &args.config {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}

pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let file = config_for(&args)?;
    let config = ExtractConfig::resolve(args, file);
    debug!("Resolved extract settings: {:?}", config);

    let model = run_extract(&config)?;

    let warnings = model.warnings.len();
    if config.print_warnings {
        print_warnings(&model);
    }
    if config.deny_warnings && warnings > 0 {
        anyhow::bail!("extraction produced {} warning(s)", warnings);
    }
    Ok(())
}

/// Extracts and writes the model, returning it for warning handling.
pub fn run_extract(config: &ExtractConfig) -> Result<Model> {
    let frontend = SnapshotFrontend::new(&config.root);
    let model = extract_package(&frontend, &config.package, config.options)?;

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = create_writer(config.format, config.pretty, sink);
    writer.write_model(&model)?;

    if let Some(path) = &config.output {
        info!("Wrote model of {} to {}", config.package, path.display());
    }
    Ok(model)
}

fn print_warnings(model: &Model) {
    for warning in &model.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}
