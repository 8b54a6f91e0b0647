//! # Shared Ledger Handle
//!
//! [`Ledger`] is a single-owner type: the core operations take `&mut self`
//! and there is exactly one logical actor in the system as specified. But
//! the moment a host program hands the ledger to more than one caller, it
//! needs mutual exclusion — append and mutate must never interleave, and
//! verification must observe a consistent snapshot.
//!
//! [`SharedLedger`] is that mutual exclusion, prepackaged: a cheap-to-clone
//! handle over `Arc<RwLock<Ledger>>`. One exclusive lock suffices; none of
//! these operations are latency-sensitive, and all of them terminate in at
//! most one pass over the chain.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::error::LedgerError;
use crate::ledger::{Ledger, Verification};
use crate::record::Record;

/// A clonable, thread-safe handle to a [`Ledger`].
///
/// Writers (`append`, `mutate`) take the write lock; readers (`verify`,
/// `report`, `len`, `tip_identity`) take the read lock, so every read sees
/// the chain between operations, never mid-mutation.
#[derive(Clone, Debug, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Create a shared handle over a freshly seeded ledger.
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    /// Wrap an existing ledger.
    pub fn from_ledger(ledger: Ledger) -> Self {
        SharedLedger {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Append a record under the write lock. Returns the new tip's clone.
    pub fn append(&self, payload: impl Into<String>, sequence: u64) -> Record {
        self.inner.write().append(payload, sequence).clone()
    }

    /// Append with an injected timestamp, under the write lock.
    pub fn append_at(
        &self,
        payload: impl Into<String>,
        sequence: u64,
        created_at: DateTime<Utc>,
    ) -> Record {
        self.inner
            .write()
            .append_at(payload, sequence, created_at)
            .clone()
    }

    /// Rewrite a payload under the write lock.
    pub fn mutate(&self, index: usize, new_payload: impl Into<String>) -> Result<(), LedgerError> {
        self.inner.write().mutate(index, new_payload)
    }

    /// Run an integrity scan against a consistent view of the chain.
    pub fn verify(&self) -> Verification {
        self.inner.read().verify()
    }

    /// Render the human-readable report from a consistent view.
    pub fn report(&self) -> String {
        self.inner.read().report()
    }

    /// Number of records in the chain.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Always false; see [`Ledger::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Identity of the current tip.
    pub fn tip_identity(&self) -> String {
        self.inner.read().tip().identity.clone()
    }

    /// Clone the whole ledger out. Verification or inspection against the
    /// snapshot proceeds without holding any lock.
    pub fn snapshot(&self) -> Ledger {
        self.inner.read().clone()
    }
}
