use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative, slash-separated dataset directory, e.g. `mnist/3.0.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatasetRef(String);

impl DatasetRef {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.is_empty() {
            bail!("Dataset reference must not be empty");
        }
        if path.starts_with('/') || path.ends_with('/') {
            bail!("Dataset reference must not start or end with '/': {}", path);
        }
        if path.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
            bail!("Dataset reference has an invalid segment: {}", path);
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dataset name (first segment).
    pub fn name(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }

    /// Object-name prefix of this dataset under `root`, always ending in `/`.
    pub fn prefix_under(&self, root: &str) -> String {
        let root = root.trim_matches('/');
        if root.is_empty() {
            format!("{}/", self.0)
        } else {
            format!("{}/{}/", root, self.0)
        }
    }
}

impl FromStr for DatasetRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for DatasetRef {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DatasetRef> for String {
    fn from(value: DatasetRef) -> Self {
        value.0
    }
}

impl fmt::Display for DatasetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One file reported by a listing provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Object name under the listing root.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Last path segment.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_ref_accepts_name_and_version() {
        let ds: DatasetRef = "mnist/3.0.1".parse().unwrap();
        assert_eq!(ds.as_str(), "mnist/3.0.1");
        assert_eq!(ds.name(), "mnist");
        assert_eq!(ds.to_string(), "mnist/3.0.1");
    }

    #[test]
    fn test_dataset_ref_rejects_malformed_paths() {
        for bad in ["", "/mnist", "mnist/", "mnist//1.0.0", "../mnist", "mnist/./1"] {
            assert!(DatasetRef::new(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_prefix_under_root() {
        let ds = DatasetRef::new("mnist/3.0.1").unwrap();
        assert_eq!(ds.prefix_under("dataset_info"), "dataset_info/mnist/3.0.1/");
        assert_eq!(ds.prefix_under("/dataset_info/"), "dataset_info/mnist/3.0.1/");
        assert_eq!(ds.prefix_under(""), "mnist/3.0.1/");
    }

    #[test]
    fn test_dataset_ref_deserialize_validates() {
        let ok: DatasetRef = serde_json::from_str("\"cifar10/1.0.2\"").unwrap();
        assert_eq!(ok.name(), "cifar10");
        assert!(serde_json::from_str::<DatasetRef>("\"/abs\"").is_err());
    }

    #[test]
    fn test_file_descriptor_file_name() {
        let fd = FileDescriptor::new("dataset_info/mnist/3.0.1/dataset_info.json").with_size(12);
        assert_eq!(fd.file_name(), "dataset_info.json");
        assert_eq!(fd.size, Some(12));
    }
}
