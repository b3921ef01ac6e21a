//! Error types for the bundling pipeline with path and operation context

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a distribution bundle
#[derive(Error, Debug)]
pub enum BundleError {
    /// Mod source list could not be parsed into the expected records
    #[error("Malformed mod list in '{path}'")]
    SourceParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Manifest JSON could not be parsed or serialized
    #[error("Invalid manifest JSON in '{path}'")]
    ManifestJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest template already lists dependencies
    ///
    /// The template's dependency list is a placeholder that every build
    /// overwrites, so a non-empty list means the wrong file is in place.
    #[error("Manifest template '{path}' already lists {count} dependencies")]
    TemplateHasDependencies { path: PathBuf, count: usize },

    /// Something other than a directory occupies the deployment path
    #[error("Deployment path '{path}' is occupied by a non-directory")]
    DeployPathOccupied { path: PathBuf },

    /// File system I/O errors with file context
    #[error("File system error while {operation} '{path}'")]
    FileSystem {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },

    /// Zip archive could not be written
    #[error("Failed to write archive '{path}'")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

/// Types of file operations for error context
#[derive(Debug, Clone, PartialEq)]
pub enum FileOperation {
    Read,
    Write,
    Create,
    Copy,
    Delete,
    CreateDir,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::Create => write!(f, "creating"),
            FileOperation::Copy => write!(f, "copying"),
            FileOperation::Delete => write!(f, "deleting"),
            FileOperation::CreateDir => write!(f, "creating directory"),
        }
    }
}

pub type Result<T> = std::result::Result<T, BundleError>;

impl BundleError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            BundleError::SourceParse { .. } => "parse",
            BundleError::ManifestJson { .. } => "parse",
            BundleError::TemplateHasDependencies { .. } => "parse",
            BundleError::DeployPathOccupied { .. } => "collision",
            BundleError::FileSystem { .. } => "io",
            BundleError::Archive { .. } => "io",
        }
    }
}
