//! Swappable slot holding the active file listing implementation.
//!
//! A slot knows two listers: the real one and a stub. Test suites put the
//! slot in stub mode so nothing reaches a remote store by accident, and open a
//! [`RemoteAccess`] scope when a test really needs the real listing.

use crate::domain::dataset::{DatasetRef, FileDescriptor};
use crate::domain::ports::FileLister;
use anyhow::Result;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    Real,
    Stub,
}

struct SlotState {
    mode: ListingMode,
    remote_scopes: usize,
}

pub struct ListingSlot {
    real: Arc<dyn FileLister>,
    stub: Arc<dyn FileLister>,
    state: Mutex<SlotState>,
}

impl ListingSlot {
    /// Slot in real mode. `stub` takes over once [`ListingSlot::install_stub`]
    /// is called.
    pub fn new(real: Arc<dyn FileLister>, stub: Arc<dyn FileLister>) -> Self {
        Self {
            real,
            stub,
            state: Mutex::new(SlotState {
                mode: ListingMode::Real,
                remote_scopes: 0,
            }),
        }
    }

    // The state is two plain fields that are never left half-written, so a
    // poisoned lock is still usable. Guards rely on this while unwinding.
    fn state(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn mode(&self) -> ListingMode {
        self.state().mode
    }

    pub fn is_stubbed(&self) -> bool {
        self.mode() == ListingMode::Stub
    }

    pub fn install_stub(&self) {
        let mut state = self.state();
        if state.mode != ListingMode::Stub {
            tracing::debug!(stub = self.stub.name(), "installing stub file lister");
        }
        state.mode = ListingMode::Stub;
    }

    /// The lister currently installed.
    pub fn current(&self) -> Arc<dyn FileLister> {
        match self.mode() {
            ListingMode::Real => Arc::clone(&self.real),
            ListingMode::Stub => Arc::clone(&self.stub),
        }
    }

    /// List `dataset` through whichever lister is installed.
    ///
    /// The slot lock is not held while the lister runs.
    pub fn list(&self, dataset: &DatasetRef) -> Result<Vec<FileDescriptor>> {
        let lister = self.current();
        tracing::debug!(lister = lister.name(), dataset = %dataset, "listing dataset files");
        lister.list(dataset)
    }

    /// Install the real lister until the returned guard is dropped.
    ///
    /// Scopes may overlap; the stub comes back when the last one ends.
    pub fn enable_remote(&self) -> RemoteAccess<'_> {
        let mut state = self.state();
        state.remote_scopes += 1;
        if state.remote_scopes == 1 {
            tracing::info!(real = self.real.name(), "remote file listing enabled");
        }
        state.mode = ListingMode::Real;
        RemoteAccess { slot: self }
    }

    /// Run `f` with the real lister installed. The stub is restored
    /// afterwards, also when `f` panics; `f`'s return value (including an
    /// `Err`) is passed through unchanged.
    pub fn with_remote<R>(&self, f: impl FnOnce() -> R) -> R {
        let _access = self.enable_remote();
        f()
    }
}

/// Guard returned by [`ListingSlot::enable_remote`].
#[must_use = "remote access ends as soon as the guard is dropped"]
pub struct RemoteAccess<'a> {
    slot: &'a ListingSlot,
}

impl RemoteAccess<'_> {
    pub fn slot(&self) -> &ListingSlot {
        self.slot
    }
}

impl Drop for RemoteAccess<'_> {
    fn drop(&mut self) {
        let mut state = self.slot.state();
        state.remote_scopes = state.remote_scopes.saturating_sub(1);
        if state.remote_scopes == 0 {
            state.mode = ListingMode::Stub;
            tracing::info!("remote file listing disabled");
        }
    }
}
