//! Mock file listers for integration tests.
#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::{Result, anyhow};
use dataset_testkit::domain::dataset::{DatasetRef, FileDescriptor};
use dataset_testkit::domain::ports::FileLister;

/// Mock FileLister that records every dataset it is asked about and answers
/// with a fixed file list.
pub struct RecordingLister {
    files: Vec<FileDescriptor>,
    calls: Mutex<Vec<DatasetRef>>,
}

impl RecordingLister {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.files.push(FileDescriptor::new(path));
        self
    }

    pub fn calls(&self) -> Vec<DatasetRef> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for RecordingLister {
    fn default() -> Self {
        Self::new()
    }
}

impl FileLister for RecordingLister {
    fn list(&self, dataset: &DatasetRef) -> Result<Vec<FileDescriptor>> {
        self.calls.lock().unwrap().push(dataset.clone());
        Ok(self.files.clone())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Mock FileLister that always fails, standing in for an unreachable store.
pub struct FailingLister;

impl FileLister for FailingLister {
    fn list(&self, dataset: &DatasetRef) -> Result<Vec<FileDescriptor>> {
        Err(anyhow!("remote store unreachable while listing {}", dataset))
    }

    fn name(&self) -> &str {
        "failing"
    }
}
