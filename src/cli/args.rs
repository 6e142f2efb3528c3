use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "gidl")]
#[command(about = "Extract a language-agnostic type model from a resolved package", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the type model of a package
    Extract(ExtractArgs),

    /// Write a default .gidl.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExtractArgs {
    /// Package path, e.g. github.com/a-h/gidl/example
    pub package: String,

    /// Directory holding resolved package documents
    #[arg(long, env = "GIDL_ROOT")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Configuration file (defaults to the nearest .gidl.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail when extraction produced warnings
    #[arg(long)]
    pub deny_warnings: bool,

    /// Do not echo warnings on stderr
    #[arg(long)]
    pub quiet_warnings: bool,

    /// Inspect declarations on a single thread
    #[arg(long)]
    pub sequential: bool,
}
