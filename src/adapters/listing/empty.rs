use crate::domain::dataset::{DatasetRef, FileDescriptor};
use crate::domain::ports::FileLister;
use anyhow::Result;

/// Stub lister: ignores the dataset and reports no files.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLister;

impl FileLister for EmptyLister {
    fn list(&self, _dataset: &DatasetRef) -> Result<Vec<FileDescriptor>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "empty"
    }
}
