//! CLI command implementations for gidl.
//!
//! Available commands:
//! - **extract**: Extract the type model of a resolved package
//! - **init**: Initialize a new gidl configuration file

pub mod extract;
pub mod init;

pub use extract::{handle_extract, ExtractConfig};
pub use init::init_config;
