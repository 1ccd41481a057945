//! Filesystem helpers: the read-only fixture directory and per-test scratch
//! directories under a shared temp root.

pub mod fixture;
pub mod scratch;

pub use fixture::FixtureDir;
pub use scratch::{ScratchDir, TempRoot};
