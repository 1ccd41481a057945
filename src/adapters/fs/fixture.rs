use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Name of the fixture directory that sits next to a test source file.
pub const TEST_DATA_DIR: &str = "test_data";

/// Read-only directory of static test inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureDir {
    path: PathBuf,
}

impl FixtureDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `test_data/` next to `source_file`, as reported by `file!()` in a crate
    /// whose manifest lives in `manifest_dir`.
    ///
    /// `file!()` is relative to the workspace root, which may be an ancestor
    /// of the manifest directory, so each ancestor is tried in turn.
    pub fn beside(manifest_dir: impl AsRef<Path>, source_file: impl AsRef<Path>) -> Self {
        let manifest_dir = manifest_dir.as_ref();
        let source_file = source_file.as_ref();

        let source = if source_file.is_absolute() {
            source_file.to_path_buf()
        } else {
            manifest_dir
                .ancestors()
                .map(|base| base.join(source_file))
                .find(|candidate| candidate.is_file())
                .unwrap_or_else(|| manifest_dir.join(source_file))
        };

        let parent = source.parent().unwrap_or(manifest_dir);
        Self::new(parent.join(TEST_DATA_DIR))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.path.join(rel)
    }

    pub fn read_to_string(&self, rel: impl AsRef<Path>) -> Result<String> {
        let path = self.join(rel);
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read fixture file: {}", path.display()))
    }

    /// Sorted file names directly inside the fixture directory.
    pub fn entries(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.path)
            .with_context(|| format!("Failed to read fixture directory: {}", self.path.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("Failed to read entry in: {}", self.path.display())
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}
