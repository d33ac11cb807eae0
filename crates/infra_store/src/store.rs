//! The shared store and its unit of work
//!
//! `MemoryStore` is the one shared handle the interface layer holds. A
//! `tokio::sync::RwLock` serializes writers while letting reads run
//! concurrently; the clone-and-swap commit gives every write closure
//! all-or-nothing semantics without the engines knowing about locking.

use core_kernel::CoreError;
use tokio::sync::RwLock;
use tracing::debug;

use crate::state::StoreState;

/// Process-wide in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from pre-seeded state
    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Runs a read-only closure against a consistent snapshot
    ///
    /// Multiple reads proceed concurrently; a read never observes a
    /// half-applied unit of work.
    pub async fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        let guard = self.state.read().await;
        f(&guard)
    }

    /// Runs a closure as one atomic unit of work
    ///
    /// The closure mutates a copy of the state under the write lock. On
    /// `Ok` the copy replaces the live state; on `Err` the copy is dropped
    /// and the live state is untouched. The write lock also makes
    /// check-then-act sequences inside the closure safe: no other writer
    /// can interleave.
    pub async fn transact<R>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<R, CoreError>,
    ) -> Result<R, CoreError> {
        let mut guard = self.state.write().await;
        let mut work = guard.clone();

        match f(&mut work) {
            Ok(value) => {
                *guard = work;
                Ok(value)
            }
            Err(err) => {
                debug!(error = %err, "unit of work rolled back");
                Err(err)
            }
        }
    }
}
