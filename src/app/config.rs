//! Test kit configuration.
//!
//! Defaults, optionally overlaid by a JSON file, then by environment
//! variables.

use crate::adapters::listing::GcsConfig;
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_TEST_DATA_DIR: &str = "DSTK_TEST_DATA_DIR";
/// Same variable Bazel and most test runners use for the shared temp dir.
pub const ENV_TEMP_ROOT: &str = "TEST_TMPDIR";
pub const ENV_KEEP_SCRATCH: &str = "DSTK_KEEP_SCRATCH";
pub const ENV_GCS_ENDPOINT: &str = "DSTK_GCS_ENDPOINT";
pub const ENV_GCS_BUCKET: &str = "DSTK_GCS_BUCKET";
pub const ENV_GCS_TIMEOUT: &str = "DSTK_GCS_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestkitConfig {
    /// Overrides the fixture directory derived from the test's source file.
    pub test_data_dir: Option<PathBuf>,
    /// Shared root for scratch directories.
    pub temp_root: Option<PathBuf>,
    /// Leave scratch directories behind after each test.
    pub keep_scratch: bool,
    pub gcs: GcsConfig,
}

impl TestkitConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Values that fail to parse are logged
    /// and ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = non_empty(ENV_TEST_DATA_DIR) {
            self.test_data_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = non_empty(ENV_TEMP_ROOT) {
            self.temp_root = Some(PathBuf::from(dir));
        }
        if let Some(raw) = non_empty(ENV_KEEP_SCRATCH) {
            match parse_flag(&raw) {
                Some(keep) => self.keep_scratch = keep,
                None => tracing::warn!(key = ENV_KEEP_SCRATCH, value = %raw, "ignoring unrecognized flag value"),
            }
        }
        if let Some(endpoint) = non_empty(ENV_GCS_ENDPOINT) {
            self.gcs.endpoint = endpoint;
        }
        if let Some(bucket) = non_empty(ENV_GCS_BUCKET) {
            self.gcs.bucket = bucket;
        }
        if let Some(raw) = non_empty(ENV_GCS_TIMEOUT) {
            match raw.trim().parse() {
                Ok(secs) => self.gcs.timeout_secs = secs,
                Err(_) => tracing::warn!(key = ENV_GCS_TIMEOUT, value = %raw, "ignoring non-numeric timeout"),
            }
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TestkitConfig::default();
        assert!(config.test_data_dir.is_none());
        assert!(config.temp_root.is_none());
        assert!(!config.keep_scratch);
        assert_eq!(config.gcs.bucket, "tfds-data");
        assert_eq!(config.gcs.info_root, "dataset_info");
    }

    #[test]
    fn test_env_overrides_apply() {
        let config = TestkitConfig::default().with_overrides_from(lookup(&[
            (ENV_TEST_DATA_DIR, "/data/fixtures"),
            (ENV_TEMP_ROOT, "/tmp/run-1"),
            (ENV_KEEP_SCRATCH, "Yes"),
            (ENV_GCS_BUCKET, "my-bucket"),
            (ENV_GCS_TIMEOUT, "5"),
        ]));
        assert_eq!(config.test_data_dir, Some(PathBuf::from("/data/fixtures")));
        assert_eq!(config.temp_root, Some(PathBuf::from("/tmp/run-1")));
        assert!(config.keep_scratch);
        assert_eq!(config.gcs.bucket, "my-bucket");
        assert_eq!(config.gcs.timeout_secs, 5);
    }

    #[test]
    fn test_malformed_values_are_ignored() {
        let config = TestkitConfig::default().with_overrides_from(lookup(&[
            (ENV_KEEP_SCRATCH, "maybe"),
            (ENV_GCS_TIMEOUT, "soon"),
            (ENV_TEMP_ROOT, "  "),
        ]));
        assert!(!config.keep_scratch);
        assert_eq!(config.gcs.timeout_secs, GcsConfig::default().timeout_secs);
        assert!(config.temp_root.is_none());
    }

    #[test]
    fn test_load_partial_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dstk.json");
        std::fs::write(&path, r#"{"keep_scratch": true, "gcs": {"bucket": "mirror"}}"#).unwrap();

        let config = TestkitConfig::load(&path).unwrap();
        assert!(config.keep_scratch);
        assert_eq!(config.gcs.bucket, "mirror");
        assert_eq!(config.gcs.endpoint, GcsConfig::default().endpoint);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dstk.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(TestkitConfig::load(&path).is_err());
    }
}
