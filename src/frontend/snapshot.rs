//! Frontend reading resolved package documents from disk.
//!
//! An external type checker dumps each package it resolved as a JSON or YAML
//! document. The document for `example.com/a/b` lives at
//! `<root>/example.com/a/b.json` (or `.yaml` / `.yml`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Frontend, Package};
use crate::core::FrontendError;

const EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

#[derive(Debug, Clone)]
pub struct SnapshotFrontend {
    root: PathBuf,
}

impl SnapshotFrontend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Candidate document paths for a package, in lookup order.
    pub fn candidates(&self, package: &str) -> Vec<PathBuf> {
        let relative = package.trim_matches('/');
        EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{relative}.{ext}")))
            .collect()
    }

    fn decode(path: &Path, contents: &str) -> Result<Package, FrontendError> {
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json {
            serde_json::from_str(contents).map_err(|source| FrontendError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_yaml::from_str(contents).map_err(|source| FrontendError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

impl Frontend for SnapshotFrontend {
    fn load(&self, package: &str) -> Result<Package, FrontendError> {
        let searched = self.candidates(package);
        let Some(path) = searched.iter().find(|p| p.is_file()) else {
            return Err(FrontendError::NotFound { searched });
        };

        debug!("Loading package {} from {}", package, path.display());
        let contents = fs::read_to_string(path).map_err(|source| FrontendError::Io {
            path: path.clone(),
            source,
        })?;
        let loaded = Self::decode(path, &contents)?;

        if loaded.path != package {
            return Err(FrontendError::PackageMismatch {
                expected: package.to_string(),
                found: loaded.path,
            });
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn loads_yaml_document() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "example.com/people.yaml",
            indoc! {r#"
                path: example.com/people
                declarations:
                  - name: Person
                    underlying:
                      kind: struct
                      fields:
                        - names: [Name]
                          type: { kind: basic, name: string }
            "#},
        );

        let package = SnapshotFrontend::new(dir.path())
            .load("example.com/people")
            .unwrap();
        assert_eq!(package.path, "example.com/people");
        assert_eq!(package.declarations.len(), 1);
        assert!(package.files.is_empty());
    }

    #[test]
    fn prefers_json_document() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "p.json", r#"{"path": "p"}"#);
        write(dir.path(), "p.yaml", "path: other");

        let package = SnapshotFrontend::new(dir.path()).load("p").unwrap();
        assert_eq!(package.path, "p");
    }

    #[test]
    fn missing_document_lists_candidates() {
        let dir = TempDir::new().unwrap();
        let err = SnapshotFrontend::new(dir.path()).load("a/b").unwrap_err();
        let FrontendError::NotFound { searched } = err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert_eq!(searched.len(), 3);
        assert!(searched[0].ends_with("a/b.json"));
    }

    #[test]
    fn invalid_json_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "p.json", "{ not json");
        let err = SnapshotFrontend::new(dir.path()).load("p").unwrap_err();
        assert!(matches!(err, FrontendError::Json { .. }));
        assert!(err.to_string().contains("p.json"));
    }

    #[test]
    fn mismatched_package_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "p.json", r#"{"path": "q"}"#);
        let err = SnapshotFrontend::new(dir.path()).load("p").unwrap_err();
        assert!(matches!(
            err,
            FrontendError::PackageMismatch { ref found, .. } if found == "q"
        ));
    }
}
