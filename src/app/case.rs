use crate::adapters::fs::ScratchDir;
use crate::app::suite::TestSuite;
use crate::domain::dataset::{DatasetRef, FileDescriptor};
use crate::domain::error::AssertionFailure;
use crate::domain::matcher::{self as matching, ErrorMatch};
use crate::domain::slot::{ListingSlot, RemoteAccess};
use anyhow::Result;
use std::error::Error as StdError;
use std::path::{Path, PathBuf};

/// Per-test fixture state: the suite's fixture directory plus a scratch
/// directory owned by this test.
pub struct TestCase<'s> {
    suite: &'s TestSuite,
    scratch: ScratchDir,
}

impl<'s> TestCase<'s> {
    pub(crate) fn new(suite: &'s TestSuite, scratch: ScratchDir) -> Self {
        Self { suite, scratch }
    }

    pub fn suite(&self) -> &'s TestSuite {
        self.suite
    }

    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    pub fn scratch(&self) -> &ScratchDir {
        &self.scratch
    }

    pub fn fixture_dir(&self) -> &'s Path {
        self.suite.fixture_dir()
    }

    pub fn fixture_path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.suite.fixtures().join(rel)
    }

    pub fn listing(&self) -> &'s ListingSlot {
        self.suite.listing()
    }

    /// Allow real remote listing until the guard is dropped.
    pub fn remote_access(&self) -> RemoteAccess<'s> {
        self.suite.listing().enable_remote()
    }

    /// Run `f` with real remote listing allowed, then restore the stub.
    pub fn with_remote_access<R>(&self, f: impl FnOnce() -> R) -> R {
        self.suite.listing().with_remote(f)
    }

    pub fn list_dataset_files(&self, dataset: &DatasetRef) -> Result<Vec<FileDescriptor>> {
        self.suite.listing().list(dataset)
    }

    /// Fail the test unless `f` returns an error of kind `K` accepted by
    /// `matcher` (a substring, a `Regex`, or an [`ErrorMatch::predicate`]).
    #[track_caller]
    pub fn assert_raises_with_predicate_match<K, T, E, F>(
        &self,
        matcher: impl Into<ErrorMatch<K>>,
        f: F,
    ) where
        K: StdError + Send + Sync + 'static,
        E: Into<anyhow::Error>,
        F: FnOnce() -> Result<T, E>,
    {
        matching::assert_raises_with_predicate_match::<K, T, E, F>(matcher, f)
    }

    pub fn check_raises_with_predicate_match<K, T, E, F>(
        &self,
        matcher: impl Into<ErrorMatch<K>>,
        f: F,
    ) -> Result<(), AssertionFailure>
    where
        K: StdError + Send + Sync + 'static,
        E: Into<anyhow::Error>,
        F: FnOnce() -> Result<T, E>,
    {
        matching::check_raises_with_predicate_match::<K, T, E, F>(matcher, f)
    }
}
