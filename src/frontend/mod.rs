//! Boundary with the type-checking frontend.
//!
//! A frontend turns a package identifier into a fully resolved [`Package`]:
//! its named declarations with structurally navigable types, and one syntax
//! tree per source unit carrying comments and resolved constants. Extraction
//! does no parsing of its own.

pub mod snapshot;
pub mod syntax;
pub mod types;
pub mod visit;

use serde::{Deserialize, Serialize};

use crate::core::FrontendError;

pub use snapshot::SnapshotFrontend;
pub use syntax::{
    ConstValue, Decl, FieldDecl, FuncDecl, GenDecl, GenDeclKind, ImportSpec, IntValue,
    ResolvedConst, SourceFile, Spec, TypeExpr, TypeSpec, ValueName, ValueSpec,
};
pub use types::{ChanDir, Declaration, NamedRef, NativeType, Shape, StructField, StructType};
pub use visit::Visit;

/// A resolved package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Package path, the prefix of every type ID extracted from it.
    pub path: String,
    /// Package-level named declarations, in no particular order.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    #[serde(default)]
    pub files: Vec<SourceFile>,
}

impl Package {
    /// Fully-qualified name of a declaration in this package.
    pub fn qualify(&self, name: &str) -> String {
        format!("{}.{name}", self.path)
    }
}

/// Loads resolved packages.
pub trait Frontend {
    /// Resolves `package` into its declarations and syntax trees.
    ///
    /// # Errors
    ///
    /// Returns an error when the package cannot be found, read or decoded.
    fn load(&self, package: &str) -> Result<Package, FrontendError>;
}
