//! CLI module for gidl
//!
//! This module provides the command-line interface for gidl, including:
//! - Argument parsing (`args`)
//! - Runtime setup such as logging (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, ExtractArgs};
pub use setup::init_logging;

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    <Cli as clap::Parser>::parse()
}
