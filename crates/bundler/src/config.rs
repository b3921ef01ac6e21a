//! Configuration types for the bundling pipeline

use std::path::{Path, PathBuf};

use crate::manifest::MANIFEST_FILE_NAME;

/// Configuration for a bundle build
///
/// Collects every path and naming choice the pipeline touches, so a build
/// can run against the repository layout or a scratch directory in tests.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// YAML file listing candidate mods
    pub sources_path: PathBuf,
    /// Directory holding the manifest template and static assets
    pub template_dir: PathBuf,
    /// Directory that receives dated deployment folders and their archives
    pub deploy_root: PathBuf,
    /// Prefix of the dated deployment directory name
    pub deploy_slug: String,
    /// Template files copied verbatim into every deployment
    pub static_files: Vec<String>,
}

impl BundleConfig {
    /// Standard layout resolved under the given root directory
    pub fn rooted_at<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            sources_path: root.join("sources").join("mods.yml"),
            template_dir: root.join("template"),
            deploy_root: root.join("deployment"),
            deploy_slug: "sivad".to_string(),
            static_files: vec!["icon.png".to_string(), "README.md".to_string()],
        }
    }

    /// Path of the manifest template inside the template directory
    pub fn manifest_template_path(&self) -> PathBuf {
        self.template_dir.join(MANIFEST_FILE_NAME)
    }
}

impl Default for BundleConfig {
    /// Standard layout relative to the current working directory
    fn default() -> Self {
        Self::rooted_at("")
    }
}
