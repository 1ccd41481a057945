//! Process-wide listing slot used by library code that lists dataset files.

use crate::adapters::listing::{EmptyLister, GcsLister};
use crate::app::config::TestkitConfig;
use crate::domain::dataset::{DatasetRef, FileDescriptor};
use crate::domain::ports::FileLister;
use crate::domain::slot::ListingSlot;
use anyhow::Result;
use std::sync::{Arc, OnceLock};

/// Slot over `real`, with [`EmptyLister`] as its stub.
pub fn stubbable_slot(real: Arc<dyn FileLister>) -> ListingSlot {
    ListingSlot::new(real, Arc::new(EmptyLister))
}

static GLOBAL_SLOT: OnceLock<Arc<ListingSlot>> = OnceLock::new();

/// The shared slot. Starts in real mode, listing from GCS with the
/// environment's configuration; test suites switch it to the stub.
///
/// Tests that read or flip this slot share it with every other test in the
/// same binary. Give suites their own slot with `TestSuite::isolated`, or
/// serialize them, when that matters.
pub fn global_slot() -> Arc<ListingSlot> {
    Arc::clone(GLOBAL_SLOT.get_or_init(|| {
        let config = TestkitConfig::from_env();
        Arc::new(stubbable_slot(Arc::new(GcsLister::new(config.gcs))))
    }))
}

/// Files stored for `dataset`, as seen through the global slot.
pub fn dataset_files(dataset: &DatasetRef) -> Result<Vec<FileDescriptor>> {
    global_slot().list(dataset)
}
