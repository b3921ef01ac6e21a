//! Deployment directory staging
//!
//! Every build stages into a dated directory under the deployment root.
//! A stale directory left by an earlier run on the same day is cleared
//! and rebuilt; anything else occupying the path aborts the build.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::config::BundleConfig;
use crate::error::{BundleError, FileOperation, Result};

/// Dated deployment directory name: `{slug}_{DD-MM-YY}`
pub fn deployment_dir_name(slug: &str, date: NaiveDate) -> String {
    format!("{}_{}", slug, date.format("%d-%m-%y"))
}

/// Create a fresh deployment directory for today and populate it with the
/// static template files
///
/// Returns the path of the staged directory.
pub fn init_deployment(config: &BundleConfig) -> Result<PathBuf> {
    let name = deployment_dir_name(&config.deploy_slug, Local::now().date_naive());
    let deploy_dir = config.deploy_root.join(name);

    refresh_dir(&deploy_dir)?;
    copy_static_files(config, &deploy_dir)?;

    info!("Staged deployment directory {}", deploy_dir.display());
    Ok(deploy_dir)
}

/// Clear any stale directory at `path` and recreate it empty
///
/// Refuses to touch the path when a non-directory occupies it.
fn refresh_dir(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(BundleError::DeployPathOccupied {
                path: path.to_path_buf(),
            });
        }
        fs::remove_dir_all(path).map_err(|source| BundleError::FileSystem {
            path: path.to_path_buf(),
            operation: FileOperation::Delete,
            source,
        })?;
        debug!("Cleared stale deployment directory {}", path.display());
    }

    fs::create_dir_all(path).map_err(|source| BundleError::FileSystem {
        path: path.to_path_buf(),
        operation: FileOperation::CreateDir,
        source,
    })
}

fn copy_static_files(config: &BundleConfig, deploy_dir: &Path) -> Result<()> {
    for file_name in &config.static_files {
        let from = config.template_dir.join(file_name);
        let to = deploy_dir.join(file_name);
        fs::copy(&from, &to).map_err(|source| BundleError::FileSystem {
            path: from.clone(),
            operation: FileOperation::Copy,
            source,
        })?;
        debug!("Copied template file {}", file_name);
    }
    Ok(())
}
