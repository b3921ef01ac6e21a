//! Manifest template loading and final manifest generation
//!
//! The template under the template directory carries every field of the
//! final `manifest.json` except the dependency list, which must be empty
//! there and is filled in from the enabled mods on each build.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BundleError, FileOperation, Result};
use crate::sources::ModRecord;

/// File name shared by the manifest template and the generated copy
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Package manifest consumed by the mod loader
///
/// Serialized field order follows the declaration order below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version_number: String,
    pub website_url: String,
    pub description: String,
    pub dependencies: Vec<String>,
}

impl Manifest {
    /// Load the manifest template, which must not list any dependencies yet
    pub fn from_template_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| BundleError::FileSystem {
            path: path.to_path_buf(),
            operation: FileOperation::Read,
            source,
        })?;

        let manifest: Manifest =
            serde_json::from_str(&text).map_err(|source| BundleError::ManifestJson {
                path: path.to_path_buf(),
                source,
            })?;

        if !manifest.dependencies.is_empty() {
            return Err(BundleError::TemplateHasDependencies {
                path: path.to_path_buf(),
                count: manifest.dependencies.len(),
            });
        }

        Ok(manifest)
    }

    /// Copy of this manifest with the dependency list replaced by the
    /// mods' qualified ids, in the order given
    pub fn with_dependencies(&self, mods: &[ModRecord]) -> Self {
        Self {
            dependencies: mods.iter().map(ModRecord::qualified_id).collect(),
            ..self.clone()
        }
    }

    /// Serialize compactly and write to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self).map_err(|source| BundleError::ManifestJson {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, json).map_err(|source| BundleError::FileSystem {
            path: path.to_path_buf(),
            operation: FileOperation::Write,
            source,
        })
    }
}

/// Build the final manifest from the template and write it into the
/// deployment directory
///
/// Returns the path of the written manifest.
pub fn write_manifest(
    template_path: &Path,
    mods: &[ModRecord],
    deploy_dir: &Path,
) -> Result<PathBuf> {
    let manifest = Manifest::from_template_file(template_path)?.with_dependencies(mods);
    let manifest_path = deploy_dir.join(MANIFEST_FILE_NAME);
    manifest.write_to(&manifest_path)?;

    info!(
        "Wrote {} with {} dependencies",
        manifest_path.display(),
        manifest.dependencies.len()
    );
    Ok(manifest_path)
}
