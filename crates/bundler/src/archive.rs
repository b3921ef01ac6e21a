//! Zip archiving of staged deployment directories

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{BundleError, FileOperation, Result};

/// Compress the deployment directory into `{dir}.zip` next to it
///
/// Entry names are relative to the deployment directory with `/`
/// separators. Entries are walked in sorted order so the same tree always
/// produces the same archive layout.
pub fn zip_deployment(deploy_dir: &Path) -> Result<PathBuf> {
    let zip_path = archive_path(deploy_dir)?;

    let file = File::create(&zip_path).map_err(|source| BundleError::FileSystem {
        path: zip_path.clone(),
        operation: FileOperation::Create,
        source,
    })?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(deploy_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| BundleError::FileSystem {
            path: deploy_dir.to_path_buf(),
            operation: FileOperation::Read,
            source: io::Error::from(source),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry_name(deploy_dir, entry.path())?;
        writer
            .start_file(name.as_str(), options)
            .map_err(|source| BundleError::Archive {
                path: zip_path.clone(),
                source,
            })?;

        let mut reader = File::open(entry.path()).map_err(|source| BundleError::FileSystem {
            path: entry.path().to_path_buf(),
            operation: FileOperation::Read,
            source,
        })?;
        io::copy(&mut reader, &mut writer).map_err(|source| BundleError::FileSystem {
            path: entry.path().to_path_buf(),
            operation: FileOperation::Read,
            source,
        })?;
        debug!("Archived {}", name);
    }

    writer.finish().map_err(|source| BundleError::Archive {
        path: zip_path.clone(),
        source,
    })?;

    info!("Wrote archive {}", zip_path.display());
    Ok(zip_path)
}

/// `{parent}/{dir_name}.zip` for the given deployment directory
fn archive_path(deploy_dir: &Path) -> Result<PathBuf> {
    let name = deploy_dir.file_name().ok_or_else(|| BundleError::FileSystem {
        path: deploy_dir.to_path_buf(),
        operation: FileOperation::Create,
        source: io::Error::new(
            io::ErrorKind::InvalidInput,
            "deployment path has no directory name",
        ),
    })?;

    let parent = deploy_dir.parent().unwrap_or_else(|| Path::new(""));
    Ok(parent.join(format!("{}.zip", name.to_string_lossy())))
}

/// Archive entry name for a file under the deployment directory
fn entry_name(deploy_dir: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(deploy_dir).map_err(|_| BundleError::FileSystem {
        path: path.to_path_buf(),
        operation: FileOperation::Read,
        source: io::Error::new(
            io::ErrorKind::InvalidData,
            "walked file is outside the deployment directory",
        ),
    })?;

    Ok(relative
        .iter()
        .map(|p| p.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
