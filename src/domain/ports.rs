use crate::domain::dataset::{DatasetRef, FileDescriptor};
use anyhow::Result;

/// Remote file listing port (implemented by Infrastructure)
pub trait FileLister: Send + Sync {
    /// List the files stored for `dataset`.
    fn list(&self, dataset: &DatasetRef) -> Result<Vec<FileDescriptor>>;

    /// Short identifier used in logs and CLI output.
    fn name(&self) -> &str;
}
