//! Example demonstrating a full bundle build against a scratch project
//!
//! This example lays out a small project (mod source list plus template),
//! runs the deployment pipeline on it, and prints what was produced.

use std::fs;
use std::fs::File;

use bundler::{deploy, deployment_dir_name, BundleConfig};
use chrono::Local;
use tracing::{info, Level};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Bundle Deployment Example");

    // Scratch project layout
    let scratch = tempfile::tempdir()?;
    let config = BundleConfig::rooted_at(scratch.path());

    fs::create_dir_all(config.sources_path.parent().ok_or("sources path has no parent")?)?;
    fs::write(
        &config.sources_path,
        r#"
- name: BepInExPack
  versionNumber:
    major: 5
    minor: 4
    patch: 21
  enabled: true
- name: LegacyPatcher
  versionNumber:
    major: 2
    minor: 1
    patch: 0
  enabled: false
- name: SivadTweaks
  versionNumber:
    major: 0
    minor: 2
    patch: 1
  enabled: true
"#,
    )?;

    fs::create_dir_all(&config.template_dir)?;
    fs::write(
        config.manifest_template_path(),
        r#"{"name":"SivadPack","version_number":"1.4.0","website_url":"https://example.invalid/sivad","description":"Curated pack","dependencies":[]}"#,
    )?;
    fs::write(config.template_dir.join("icon.png"), b"\x89PNG\r\n\x1a\nstub")?;
    fs::write(config.template_dir.join("README.md"), "# Sivad Pack\n")?;

    println!("📦 Building bundle under {}", scratch.path().display());

    match deploy(&config) {
        Ok(()) => println!("✅ Bundle built"),
        Err(e) => {
            eprintln!("❌ Bundle failed ({}): {}", e.category(), e);
            return Err(e.into());
        }
    }

    // Show what the pipeline produced
    let dir_name = deployment_dir_name(&config.deploy_slug, Local::now().date_naive());
    let deploy_dir = config.deploy_root.join(&dir_name);
    println!("📂 Deployment directory: {}", deploy_dir.display());
    for entry in fs::read_dir(&deploy_dir)? {
        println!("   - {}", entry?.file_name().to_string_lossy());
    }

    let zip_path = config.deploy_root.join(format!("{}.zip", dir_name));
    let archive = zip::ZipArchive::new(File::open(&zip_path)?)?;
    println!("🗜️  Archive: {} ({} entries)", zip_path.display(), archive.len());
    for name in archive.file_names() {
        println!("   - {}", name);
    }

    Ok(())
}
