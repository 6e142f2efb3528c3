//! Common utilities shared across the gidl codebase.
//!
//! Text helpers used by both extraction passes: exported-name detection and
//! reduction of raw doc comments to a one-line synopsis.

pub mod text;

pub use text::{is_exported, synopsis};
