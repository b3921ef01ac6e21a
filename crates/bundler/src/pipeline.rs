//! Fixed-order bundling pipeline

use tracing::info;

use crate::archive::zip_deployment;
use crate::config::BundleConfig;
use crate::deployment::init_deployment;
use crate::error::Result;
use crate::manifest::write_manifest;
use crate::sources::load_enabled_mods;

/// Run the whole pipeline: load the mod list, stage the deployment
/// directory, write the manifest, archive the result
///
/// The stages run in fixed order and the first failure aborts the build.
/// A partially staged deployment directory is left behind for inspection;
/// the next run on the same day clears it.
pub fn deploy(config: &BundleConfig) -> Result<()> {
    let mods = load_enabled_mods(&config.sources_path)?;
    info!("Bundling {} enabled mods", mods.len());

    let deploy_dir = init_deployment(config)?;
    write_manifest(&config.manifest_template_path(), &mods, &deploy_dir)?;
    let zip_path = zip_deployment(&deploy_dir)?;

    info!("Deployment bundle complete: {}", zip_path.display());
    Ok(())
}
