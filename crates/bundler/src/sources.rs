//! Mod source list loading and filtering
//!
//! The source list is a YAML sequence of mod records. Parsing is strict:
//! the version mapping must carry exactly `major`/`minor`/`patch` as
//! non-negative integers and `enabled` must be a literal boolean. Extra
//! keys on the record itself are ignored so the list can carry notes.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{BundleError, FileOperation, Result};

/// Version triple of a mod release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for ModVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A single entry from the mod source list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModRecord {
    pub name: String,
    #[serde(rename = "versionNumber")]
    pub version: ModVersion,
    pub enabled: bool,
}

impl ModRecord {
    /// Dotted `major.minor.patch` form of the version
    pub fn version_string(&self) -> String {
        self.version.to_string()
    }

    /// `{name}-{major}.{minor}.{patch}` identifier used in manifest
    /// dependency lists
    pub fn qualified_id(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

/// Load the mod source list and keep only the enabled entries, in file order
pub fn load_enabled_mods(path: &Path) -> Result<Vec<ModRecord>> {
    let text = fs::read_to_string(path).map_err(|source| BundleError::FileSystem {
        path: path.to_path_buf(),
        operation: FileOperation::Read,
        source,
    })?;

    let records: Vec<ModRecord> =
        serde_yaml::from_str(&text).map_err(|source| BundleError::SourceParse {
            path: path.to_path_buf(),
            source,
        })?;

    let total = records.len();
    let enabled: Vec<ModRecord> = records.into_iter().filter(|record| record.enabled).collect();
    debug!("Loaded {} mod records, {} enabled", total, enabled.len());

    Ok(enabled)
}
