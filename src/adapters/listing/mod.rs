//! File listing adapters
//!
//! Implementations of the `FileLister` port: the empty stub used by test
//! suites, the GCS bucket listing, and a local directory mirror.

mod empty;
mod fs;
mod gcs;

pub use empty::EmptyLister;
pub use fs::FsLister;
pub use gcs::{GcsConfig, GcsLister};
