use std::collections::HashMap;

use crate::core::FrontendError;
use crate::frontend::{Frontend, Package};

/// In-memory frontend serving prebuilt packages by path.
///
/// # Example
///
/// ```rust
/// use gidl::frontend::Frontend;
/// use gidl::testkit::{MemoryFrontend, PackageBuilder};
///
/// let frontend = MemoryFrontend::new().with_package(PackageBuilder::new("example.com/p").build());
/// assert!(frontend.load("example.com/p").is_ok());
/// assert!(frontend.load("example.com/q").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFrontend {
    packages: HashMap<String, Package>,
}

impl MemoryFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package under its own path.
    pub fn with_package(mut self, package: Package) -> Self {
        self.packages.insert(package.path.clone(), package);
        self
    }
}

impl Frontend for MemoryFrontend {
    fn load(&self, package: &str) -> Result<Package, FrontendError> {
        self.packages
            .get(package)
            .cloned()
            .ok_or_else(|| FrontendError::NotFound {
                searched: Vec::new(),
            })
    }
}
