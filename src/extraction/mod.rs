//! Model extraction from a resolved package.
//!
//! Extraction runs two passes over one [`Model`]:
//!
//! 1. [`declarations`] creates a type for every exported, representable
//!    declaration and classifies its fields with [`classifier`].
//! 2. [`syntax_walker`] walks the syntax trees to attach comments and to
//!    collect enum members for the types pass 1 created.
//!
//! Pass 2 only ever annotates; it relies on pass 1 having finished. The model
//! is returned once both passes are done and is never observed half-built.

pub mod classifier;
pub mod declarations;
pub mod syntax_walker;

use tracing::{info, info_span};

use crate::core::{Error, Result};
use crate::frontend::{Frontend, Package};
use crate::model::Model;

pub use classifier::{classify, Unmappable};
pub use declarations::{walk_declarations, Skipped};
pub use syntax_walker::{walk_syntax, SyntaxWalker};

/// Knobs for one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Inspect declarations of the first pass in parallel.
    pub parallel: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Extracts the model of an already resolved package.
pub fn extract(package: &Package, options: ExtractOptions) -> Model {
    let _span = info_span!("extract", package = %package.path).entered();

    let mut model = Model::new();
    let skipped = walk_declarations(package, &mut model, options.parallel);
    walk_syntax(package, &mut model, &skipped);

    info!(
        "Extracted {} types with {} warnings",
        model.types.len(),
        model.warnings.len()
    );
    model
}

/// Loads `package` through `frontend` and extracts its model.
///
/// # Errors
///
/// Fails only when the frontend cannot load the package.
pub fn extract_package<F>(frontend: &F, package: &str, options: ExtractOptions) -> Result<Model>
where
    F: Frontend + ?Sized,
{
    let loaded = frontend
        .load(package)
        .map_err(|source| Error::PackageLoad {
            package: package.to_string(),
            source,
        })?;
    Ok(extract(&loaded, options))
}
