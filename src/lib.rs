//! gidl: a language-agnostic type model extracted from resolved packages.
//!
//! A [`frontend::Frontend`] supplies a package's declarations and syntax
//! trees; [`extraction`] turns them into a [`model::Model`] of records,
//! scalar-backed types and enums that other tools can consume.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod extraction;
pub mod frontend;
pub mod io;
pub mod model;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{Error, FrontendError, Result};

pub use crate::extraction::{classify, extract, extract_package, ExtractOptions, Unmappable};

pub use crate::frontend::{Frontend, NativeType, Package, SnapshotFrontend};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::model::{Enum, EnumLiteral, EnumValue, Field, Is, Kind, Model, Trait, Type};
