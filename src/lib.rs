//! dataset-testkit library — shared fixtures for dataset test suites.
//!
//! A [`TestSuite`] is set up once per test module: it resolves the fixture
//! directory and stubs out remote file listing. Each test then asks the suite
//! for a [`TestCase`], which owns a fresh scratch directory and offers
//! scoped remote access and error-matching assertions.
//!
//! ```no_run
//! use dataset_testkit::{ErrorMatch, test_suite};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("bad value: {0}")]
//! struct ValueError(String);
//!
//! let case = test_suite!().case().unwrap();
//! std::fs::write(case.scratch_dir().join("out.txt"), "ok").unwrap();
//! case.assert_raises_with_predicate_match::<ValueError, (), _, _>(
//!     ErrorMatch::predicate(|e: &ValueError| e.0.contains("42")),
//!     || Err(ValueError("code=42".into())),
//! );
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;

pub use adapters::fs::{FixtureDir, ScratchDir, TempRoot};
pub use adapters::listing::{EmptyLister, FsLister, GcsConfig, GcsLister};
pub use app::case::TestCase;
pub use app::config::TestkitConfig;
pub use app::listing::{dataset_files, global_slot, stubbable_slot};
pub use app::suite::TestSuite;
pub use domain::dataset::{DatasetRef, FileDescriptor};
pub use domain::error::AssertionFailure;
pub use domain::matcher::{
    ErrorMatch, assert_raises_with_predicate_match, check_raises_with_predicate_match,
};
pub use domain::ports::FileLister;
pub use domain::slot::{ListingMode, ListingSlot, RemoteAccess};

/// The `test_data/` directory next to the calling source file.
#[macro_export]
macro_rules! fixture_dir {
    () => {
        $crate::adapters::fs::FixtureDir::beside(env!("CARGO_MANIFEST_DIR"), file!())
    };
}

/// A `&'static TestSuite` bound to the process-wide listing slot,
/// initialized on first use.
///
/// Every expansion owns its own suite, so share one across a module's tests
/// by wrapping it: `fn suite() -> &'static TestSuite { test_suite!() }`.
///
/// Without `TEST_TMPDIR`, scratch directories go under a fresh `dstk-*`
/// directory in the system temp dir, and that directory is not removed when
/// the test binary exits. Set `TEST_TMPDIR` to collect them in one place.
#[macro_export]
macro_rules! test_suite {
    () => {{
        static SUITE: ::std::sync::OnceLock<$crate::app::suite::TestSuite> =
            ::std::sync::OnceLock::new();
        SUITE.get_or_init(|| $crate::app::suite::TestSuite::init($crate::fixture_dir!()))
    }};
}
