use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

const SCRATCH_PREFIX: &str = "scratch-";

/// Shared directory that every scratch directory of the process is created in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempRoot {
    path: PathBuf,
}

static PROCESS_ROOT: OnceLock<TempRoot> = OnceLock::new();

impl TempRoot {
    /// Use (and create) an explicit directory.
    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create temp root: {}", path.display()))?;
        Ok(Self { path })
    }

    /// The process-wide root: a `dstk-*` directory under the system temp dir,
    /// created on first use and reused for the rest of the process. It is
    /// not removed at exit, so each process leaves one behind; configure an
    /// explicit root (`TEST_TMPDIR`) to keep them in one place.
    pub fn process() -> Result<&'static TempRoot> {
        if let Some(root) = PROCESS_ROOT.get() {
            return Ok(root);
        }
        let dir = tempfile::Builder::new()
            .prefix("dstk-")
            .tempdir()
            .context("Failed to create process temp root")?;
        let root = Self { path: dir.keep() };
        tracing::debug!(root = %root.path.display(), "using temp root");
        Ok(PROCESS_ROOT.get_or_init(|| root))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scratch(&self, keep: bool) -> Result<ScratchDir> {
        ScratchDir::create_in(&self.path, keep)
    }
}

/// Fresh, uniquely named directory for one test.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
    // None once persisted
    guard: Option<TempDir>,
}

impl ScratchDir {
    /// Create an empty directory under `root`. With `keep` the directory
    /// outlives this value; otherwise it is removed on drop.
    pub fn create_in(root: &Path, keep: bool) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(root)
            .with_context(|| format!("Failed to create scratch dir in: {}", root.display()))?;
        let path = dir.path().to_path_buf();
        let guard = if keep {
            let _ = dir.keep();
            None
        } else {
            Some(dir)
        };
        tracing::debug!(path = %path.display(), keep, "created scratch dir");
        Ok(Self { path, guard })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.path.join(rel)
    }

    pub fn is_kept(&self) -> bool {
        self.guard.is_none()
    }

    /// Persist the directory past this value's lifetime and return its path.
    pub fn keep(mut self) -> PathBuf {
        if let Some(dir) = self.guard.take() {
            let _ = dir.keep();
        }
        self.path.clone()
    }
}

impl AsRef<Path> for ScratchDir {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
