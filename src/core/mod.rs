//! Core types shared by every layer of the crate.

pub mod errors;

pub use errors::{Error, FrontendError, Result};
