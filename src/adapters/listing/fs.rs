use crate::domain::dataset::{DatasetRef, FileDescriptor};
use crate::domain::ports::FileLister;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Lists dataset files from a local mirror of the remote store.
///
/// Files under `<root>/<dataset>/` are reported with paths relative to
/// `root`, `/`-separated and sorted. A dataset with no directory has no files.
pub struct FsLister {
    root: PathBuf,
}

impl FsLister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn walk(&self, dir: &Path, out: &mut Vec<FileDescriptor>) -> Result<()> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read mirror directory: {}", dir.display()))?;
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .with_context(|| format!("Failed to stat: {}", path.display()))?;
            if file_type.is_dir() {
                self.walk(&path, out)?;
            } else if file_type.is_file() {
                let size = entry.metadata().map(|m| m.len()).ok();
                out.push(FileDescriptor {
                    path: self.relative_name(&path),
                    size,
                });
            }
        }
        Ok(())
    }

    fn relative_name(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FileLister for FsLister {
    fn list(&self, dataset: &DatasetRef) -> Result<Vec<FileDescriptor>> {
        let dir = self.root.join(dataset.as_str());
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        self.walk(&dir, &mut files)?;
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn name(&self) -> &str {
        "fs-mirror"
    }
}
