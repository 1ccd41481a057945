//! Suite-level fixture: set up once per test module, hands out one
//! [`TestCase`] per test.

use crate::adapters::fs::{FixtureDir, TempRoot};
use crate::app::case::TestCase;
use crate::app::config::TestkitConfig;
use crate::app::listing::{global_slot, stubbable_slot};
use crate::app::logging::init_test_logging;
use crate::domain::ports::FileLister;
use crate::domain::slot::ListingSlot;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub struct TestSuite {
    fixture_dir: FixtureDir,
    listing: Arc<ListingSlot>,
    config: TestkitConfig,
}

impl TestSuite {
    /// Suite bound to the process-wide listing slot, configured from the
    /// environment. Usually reached through `test_suite!()`.
    pub fn init(fixture_dir: FixtureDir) -> Self {
        Self::with_config(fixture_dir, TestkitConfig::from_env(), global_slot())
    }

    /// Suite with a listing slot of its own, so remote access opened by its
    /// tests cannot leak into other suites running in parallel.
    pub fn isolated(fixture_dir: FixtureDir, real: Arc<dyn FileLister>) -> Self {
        Self::with_config(
            fixture_dir,
            TestkitConfig::from_env(),
            Arc::new(stubbable_slot(real)),
        )
    }

    /// Installs the stub lister in `listing` before returning.
    pub fn with_config(
        fixture_dir: FixtureDir,
        config: TestkitConfig,
        listing: Arc<ListingSlot>,
    ) -> Self {
        init_test_logging();

        let fixture_dir = match &config.test_data_dir {
            Some(dir) => FixtureDir::new(dir),
            None => fixture_dir,
        };

        // Tests must not reach the remote store unless they ask for it.
        listing.install_stub();

        tracing::info!(
            fixture_dir = %fixture_dir.path().display(),
            "test suite initialized with stubbed file listing"
        );

        Self {
            fixture_dir,
            listing,
            config,
        }
    }

    pub fn fixture_dir(&self) -> &Path {
        self.fixture_dir.path()
    }

    pub fn fixtures(&self) -> &FixtureDir {
        &self.fixture_dir
    }

    pub fn listing(&self) -> &ListingSlot {
        &self.listing
    }

    pub fn config(&self) -> &TestkitConfig {
        &self.config
    }

    /// Per-test setup: a fresh scratch directory under the temp root.
    pub fn case(&self) -> Result<TestCase<'_>> {
        let scratch = match &self.config.temp_root {
            Some(root) => TempRoot::at(root)?.scratch(self.config.keep_scratch)?,
            None => TempRoot::process()?.scratch(self.config.keep_scratch)?,
        };
        Ok(TestCase::new(self, scratch))
    }
}
