//! # Project Configuration
//!
//! Optional settings read from `neonkit.json` at the project root.
//!
//! ```json
//! {
//!   "package_manager": "pnpm",
//!   "reduced_motion": true,
//!   "variant": "pink"
//! }
//! ```
//!
//! Every field is optional. A missing file means defaults; a malformed file
//! is an error, since silently ignoring it would install with the wrong
//! package manager.

use crate::error::{Result, ScaffoldError};
use crate::scaffold::PackageManager;
use crate::style::{MotionPreference, VariantStyle};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "neonkit.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides lockfile detection.
    #[serde(default)]
    pub package_manager: Option<PackageManager>,

    /// Steady glow instead of pulsing in the preview gallery.
    #[serde(default)]
    pub reduced_motion: bool,

    /// Variant key used by the preview gallery.
    #[serde(default)]
    pub variant: Option<String>,
}

impl Config {
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Load `neonkit.json` from `root`, or defaults if it does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_from(&Self::path_in(root))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The configured manager, or the one detected from lockfiles in `root`.
    pub fn package_manager_for(&self, root: &Path) -> PackageManager {
        self.package_manager
            .unwrap_or_else(|| PackageManager::detect(root))
    }

    pub fn motion(&self) -> MotionPreference {
        MotionPreference::new(self.reduced_motion)
    }

    /// The configured variant; unknown names fall back to the default.
    pub fn variant(&self) -> &'static VariantStyle {
        VariantStyle::resolve(self.variant.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config = Config::load(temp_dir.path()).expect("load");
        assert_eq!(config, Config::default());
        assert_eq!(config.variant().key, "cyan");
        assert!(!config.motion().reduced_motion_preferred());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().expect("create temp dir");
        fs::write(
            Config::path_in(temp_dir.path()),
            r#"{"package_manager": "yarn", "reduced_motion": true, "variant": "pink"}"#,
        )
        .expect("write");

        let config = Config::load(temp_dir.path()).expect("load");
        assert_eq!(config.package_manager, Some(PackageManager::Yarn));
        assert_eq!(config.package_manager_for(temp_dir.path()), PackageManager::Yarn);
        assert!(config.motion().reduced_motion_preferred());
        assert_eq!(config.variant().key, "pink");
    }

    #[test]
    fn test_detects_manager_when_not_configured() {
        let temp_dir = TempDir::new().expect("create temp dir");
        fs::write(temp_dir.path().join("pnpm-lock.yaml"), "").expect("write");
        let config = Config::default();
        assert_eq!(config.package_manager_for(temp_dir.path()), PackageManager::Pnpm);
    }

    #[test]
    fn test_unknown_variant_falls_back() {
        let config = Config {
            variant: Some("teal".to_string()),
            ..Config::default()
        };
        assert_eq!(config.variant().key, "cyan");
    }

    #[test]
    fn test_deny_unknown_fields() {
        let temp_dir = TempDir::new().expect("create temp dir");
        fs::write(Config::path_in(temp_dir.path()), r#"{"theme": "Nord"}"#).expect("write");
        let result = Config::load(temp_dir.path());
        assert!(matches!(result, Err(ScaffoldError::Config { .. })));
    }

    #[test]
    fn test_unknown_package_manager_is_rejected() {
        let result: std::result::Result<Config, _> =
            serde_json::from_str(r#"{"package_manager": "deno"}"#);
        assert!(result.is_err());
    }
}
