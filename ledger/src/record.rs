//! # Record Structure
//!
//! A record is one link in the chain: a payload, a caller-chosen sequence
//! tag, a back-reference to the previous record's identity, its own derived
//! identity, and a creation timestamp.
//!
//! ## Record Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Record                                          │
//! │  ├── payload: String          (arbitrary text)   │
//! │  ├── sequence: u64            (caller-supplied)  │
//! │  ├── previous_identity: String ("" for genesis)  │
//! │  ├── identity: String         (SHA-256 hex)      │
//! │  └── created_at: DateTime<Utc>                   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Computation
//!
//! The identity covers all four other fields: `payload ||
//! previous_identity || sequence || created_at` (see
//! [`record_digest`](crate::digest::record_digest)). It is computed once at
//! construction; records are immutable afterwards in normal operation. The
//! one sanctioned exception is [`Ledger::mutate`](crate::ledger::Ledger::mutate),
//! which rewrites a payload and recomputes the identity — on purpose, to
//! demonstrate what verification catches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::digest::record_digest;

/// One link in the chain.
///
/// The `sequence` field is a tag, not an index: the ledger stores whatever
/// the caller supplies and enforces neither uniqueness nor monotonicity.
/// Position in the chain is the vector index; `sequence` is free-form
/// metadata that happens to be bound into the identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Arbitrary text content — the "transaction", loosely speaking.
    pub payload: String,
    /// Caller-supplied integer tag. Unvalidated by design.
    pub sequence: u64,
    /// Identity of the preceding record. Empty string for genesis.
    pub previous_identity: String,
    /// SHA-256 digest (lowercase hex) of the other four fields.
    pub identity: String,
    /// Wall-clock time captured when the record was constructed.
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Construct a record, capturing the current wall-clock time.
    ///
    /// The identity is derived immediately from the supplied fields and the
    /// captured timestamp.
    pub fn new(
        payload: impl Into<String>,
        sequence: u64,
        previous_identity: impl Into<String>,
    ) -> Self {
        Self::new_at(payload, sequence, previous_identity, Utc::now())
    }

    /// Construct a record with an injected timestamp.
    ///
    /// The clock is a collaborator, not part of the hashing algorithm:
    /// passing a fixed `created_at` makes the identity fully reproducible,
    /// which is what test vectors want.
    pub fn new_at(
        payload: impl Into<String>,
        sequence: u64,
        previous_identity: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let payload = payload.into();
        let previous_identity = previous_identity.into();
        let identity = record_digest(&payload, sequence, &previous_identity, created_at);
        Record {
            payload,
            sequence,
            previous_identity,
            identity,
            created_at,
        }
    }

    /// Recompute the identity from the record's current fields.
    ///
    /// For an untampered record this equals `self.identity`. The ledger's
    /// mutate operation uses it to re-derive the identity after rewriting a
    /// payload.
    pub fn compute_identity(&self) -> String {
        record_digest(
            &self.payload,
            self.sequence,
            &self.previous_identity,
            self.created_at,
        )
    }

    /// True for the genesis record: the one link with no predecessor.
    pub fn is_genesis(&self) -> bool {
        self.previous_identity.is_empty()
    }
}
