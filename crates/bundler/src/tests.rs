//! Cross-module tests for the bundling pipeline

use super::*;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::tempdir;

const ICON_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nstub-icon";
const README_TEXT: &str = "# Sivad Pack\n\nInstall with your mod manager.\n";

/// Lay out a complete project fixture (sources plus template) under `root`
fn write_project_fixture(root: &Path) -> BundleConfig {
    let config = BundleConfig::rooted_at(root);

    fs::create_dir_all(config.sources_path.parent().unwrap()).unwrap();
    fs::write(
        &config.sources_path,
        r#"
- name: BepInExPack
  versionNumber:
    major: 5
    minor: 4
    patch: 21
  enabled: true
- name: DisabledThing
  versionNumber:
    major: 3
    minor: 0
    patch: 0
  enabled: false
- name: SivadTweaks
  versionNumber:
    major: 0
    minor: 2
    patch: 1
  enabled: true
"#,
    )
    .unwrap();

    fs::create_dir_all(&config.template_dir).unwrap();
    fs::write(
        config.manifest_template_path(),
        r#"{"name":"SivadPack","version_number":"1.4.0","website_url":"https://example.invalid/sivad","description":"Curated pack","dependencies":[]}"#,
    )
    .unwrap();
    fs::write(config.template_dir.join("icon.png"), ICON_BYTES).unwrap();
    fs::write(config.template_dir.join("README.md"), README_TEXT).unwrap();

    config
}

/// Deployment directory the pipeline stages for today's date
fn todays_deploy_dir(config: &BundleConfig) -> PathBuf {
    let name = deployment_dir_name(&config.deploy_slug, Local::now().date_naive());
    config.deploy_root.join(name)
}

fn read_manifest(path: &Path) -> Manifest {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn zip_entry_names(zip_path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

fn read_zip_entry(zip_path: &Path, name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).unwrap();
    bytes
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_deploy_builds_complete_bundle() {
        let dir = tempdir().unwrap();
        let config = write_project_fixture(dir.path());

        deploy(&config).unwrap();

        let deploy_dir = todays_deploy_dir(&config);
        assert!(deploy_dir.is_dir());

        // Static template files are copied byte for byte.
        assert_eq!(fs::read(deploy_dir.join("icon.png")).unwrap(), ICON_BYTES);
        assert_eq!(
            fs::read_to_string(deploy_dir.join("README.md")).unwrap(),
            README_TEXT
        );

        // Only enabled mods become dependencies, in source order.
        let manifest = read_manifest(&deploy_dir.join(MANIFEST_FILE_NAME));
        assert_eq!(
            manifest.dependencies,
            ["BepInExPack-5.4.21", "SivadTweaks-0.2.1"]
        );
        assert_eq!(manifest.name, "SivadPack");
        assert_eq!(manifest.version_number, "1.4.0");

        // The archive sits next to the directory and holds exactly its files.
        let zip_path = deploy_dir.with_extension("zip");
        assert_eq!(
            zip_entry_names(&zip_path),
            ["README.md", "icon.png", "manifest.json"]
        );
        assert_eq!(
            read_zip_entry(&zip_path, "manifest.json"),
            fs::read(deploy_dir.join(MANIFEST_FILE_NAME)).unwrap()
        );
        assert_eq!(read_zip_entry(&zip_path, "icon.png"), ICON_BYTES);
    }

    #[test]
    fn test_deploy_same_day_rerun_rebuilds_cleanly() {
        let dir = tempdir().unwrap();
        let config = write_project_fixture(dir.path());

        deploy(&config).unwrap();
        let deploy_dir = todays_deploy_dir(&config);
        let first_manifest = fs::read(deploy_dir.join(MANIFEST_FILE_NAME)).unwrap();

        // Junk from a partial run must not leak into the next bundle.
        fs::write(deploy_dir.join("leftover.tmp"), "junk").unwrap();

        deploy(&config).unwrap();

        let second_manifest = fs::read(deploy_dir.join(MANIFEST_FILE_NAME)).unwrap();
        assert_eq!(first_manifest, second_manifest);
        assert!(!deploy_dir.join("leftover.tmp").exists());
        assert_eq!(
            zip_entry_names(&deploy_dir.with_extension("zip")),
            ["README.md", "icon.png", "manifest.json"]
        );
    }

    #[test]
    fn test_deploy_with_nothing_enabled_gives_empty_dependencies() {
        let dir = tempdir().unwrap();
        let config = write_project_fixture(dir.path());
        fs::write(
            &config.sources_path,
            r#"
- name: DisabledThing
  versionNumber: {major: 3, minor: 0, patch: 0}
  enabled: false
"#,
        )
        .unwrap();

        deploy(&config).unwrap();

        let manifest = read_manifest(&todays_deploy_dir(&config).join(MANIFEST_FILE_NAME));
        assert!(manifest.dependencies.is_empty());
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[test]
    fn test_missing_sources_aborts_before_staging() {
        let dir = tempdir().unwrap();
        let config = write_project_fixture(dir.path());
        fs::remove_file(&config.sources_path).unwrap();

        let err = deploy(&config).unwrap_err();

        match err {
            BundleError::FileSystem {
                operation: FileOperation::Read,
                ..
            } => {}
            other => panic!("Expected FileSystem read error, got {:?}", other),
        }
        // Source loading runs first, so nothing was staged.
        assert!(!config.deploy_root.exists());
    }

    #[test]
    fn test_template_with_dependencies_aborts_before_manifest_write() {
        let dir = tempdir().unwrap();
        let config = write_project_fixture(dir.path());
        fs::write(
            config.manifest_template_path(),
            r#"{"name":"SivadPack","version_number":"1.4.0","website_url":"https://example.invalid/sivad","description":"Curated pack","dependencies":["Stale-1.0.0"]}"#,
        )
        .unwrap();

        let err = deploy(&config).unwrap_err();

        match err {
            BundleError::TemplateHasDependencies { count, .. } => assert_eq!(count, 1),
            other => panic!("Expected TemplateHasDependencies, got {:?}", other),
        }

        // The staged directory is left for inspection, without a manifest
        // or an archive.
        let deploy_dir = todays_deploy_dir(&config);
        assert!(deploy_dir.is_dir());
        assert!(!deploy_dir.join(MANIFEST_FILE_NAME).exists());
        assert!(!deploy_dir.with_extension("zip").exists());
    }

    #[test]
    fn test_occupied_deploy_path_aborts_and_preserves_file() {
        let dir = tempdir().unwrap();
        let config = write_project_fixture(dir.path());
        let deploy_dir = todays_deploy_dir(&config);
        fs::create_dir_all(&config.deploy_root).unwrap();
        fs::write(&deploy_dir, "do not delete").unwrap();

        let err = deploy(&config).unwrap_err();

        assert_eq!(err.category(), "collision");
        assert_eq!(fs::read_to_string(&deploy_dir).unwrap(), "do not delete");
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_layout_is_relative_to_working_directory() {
        let config = BundleConfig::default();

        assert_eq!(config.sources_path, Path::new("sources").join("mods.yml"));
        assert_eq!(config.template_dir, Path::new("template"));
        assert_eq!(config.deploy_root, Path::new("deployment"));
        assert_eq!(config.deploy_slug, "sivad");
        assert_eq!(config.static_files, ["icon.png", "README.md"]);
    }

    #[test]
    fn test_rooted_layout_prefixes_every_path() {
        let config = BundleConfig::rooted_at("/srv/pack");

        assert_eq!(
            config.sources_path,
            Path::new("/srv/pack/sources").join("mods.yml")
        );
        assert_eq!(
            config.manifest_template_path(),
            Path::new("/srv/pack/template").join(MANIFEST_FILE_NAME)
        );
        assert_eq!(config.deploy_root, Path::new("/srv/pack/deployment"));
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_categories() {
        let yaml_err = serde_yaml::from_str::<bool>("[").unwrap_err();
        let json_err = serde_json::from_str::<bool>("{").unwrap_err();

        let cases = [
            (
                BundleError::SourceParse {
                    path: PathBuf::from("mods.yml"),
                    source: yaml_err,
                },
                "parse",
            ),
            (
                BundleError::ManifestJson {
                    path: PathBuf::from("manifest.json"),
                    source: json_err,
                },
                "parse",
            ),
            (
                BundleError::TemplateHasDependencies {
                    path: PathBuf::from("manifest.json"),
                    count: 2,
                },
                "parse",
            ),
            (
                BundleError::DeployPathOccupied {
                    path: PathBuf::from("deployment/sivad_01-01-25"),
                },
                "collision",
            ),
            (
                BundleError::FileSystem {
                    path: PathBuf::from("template/icon.png"),
                    operation: FileOperation::Copy,
                    source: io::Error::new(io::ErrorKind::NotFound, "gone"),
                },
                "io",
            ),
            (
                BundleError::Archive {
                    path: PathBuf::from("deployment/sivad_01-01-25.zip"),
                    source: zip::result::ZipError::FileNotFound,
                },
                "io",
            ),
        ];

        for (err, category) in cases {
            assert_eq!(err.category(), category, "category of {:?}", err);
        }
    }

    #[test]
    fn test_file_system_error_names_path_and_operation() {
        let err = BundleError::FileSystem {
            path: PathBuf::from("template/icon.png"),
            operation: FileOperation::Copy,
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        let message = err.to_string();
        assert!(message.contains("copying"), "message: {}", message);
        assert!(message.contains("template/icon.png"), "message: {}", message);
    }
}
