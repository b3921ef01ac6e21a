//! Bundler Library
//!
//! This library builds distributable mod-loader bundles. It reads a YAML
//! mod source list, stages a dated deployment directory with the static
//! template assets, generates a `manifest.json` whose dependencies are the
//! enabled mods, and compresses the directory into a zip archive.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bundler::{deploy, BundleConfig};
//!
//! # fn example() -> bundler::Result<()> {
//! // Standard layout: sources/mods.yml and template/ under the current
//! // directory, output under deployment/.
//! let config = BundleConfig::default();
//! deploy(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! Each stage is also available on its own (`load_enabled_mods`,
//! `init_deployment`, `write_manifest`, `zip_deployment`) for callers that
//! drive the steps themselves.
//!
//! # Features
//!
//! - **Strict source parsing**: malformed version triples or non-boolean
//!   enabled flags fail the build instead of producing a broken bundle
//! - **Dated deployments**: each build stages into `{slug}_{DD-MM-YY}` and
//!   reruns on the same day rebuild it from scratch
//! - **Template invariants**: the manifest template must be dependency-free
//!   and anything occupying the deployment path is never deleted blindly
//! - **Reproducible archives**: zip entries are written in sorted order
//!   with paths relative to the deployment directory

pub mod archive;
pub mod config;
pub mod deployment;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod sources;

// Re-export commonly used types for convenience
pub use archive::zip_deployment;
pub use config::BundleConfig;
pub use deployment::{deployment_dir_name, init_deployment};
pub use error::{BundleError, FileOperation, Result};
pub use manifest::{write_manifest, Manifest, MANIFEST_FILE_NAME};
pub use pipeline::deploy;
pub use sources::{load_enabled_mods, ModRecord, ModVersion};

#[cfg(test)]
mod tests;
