//! # Ledger: the ordered chain
//!
//! The [`Ledger`] owns an ordered `Vec<Record>` and exposes the five
//! operations that make up the whole system: create (genesis seeding),
//! append, mutate, report, and verify.
//!
//! ## Invariant
//!
//! For every record at position `i >= 1`:
//!
//! ```text
//! records[i].previous_identity == records[i - 1].identity
//! ```
//!
//! This is *checked*, never structurally enforced. [`Ledger::mutate`]
//! recomputes the mutated record's own identity but deliberately leaves its
//! successor's back-reference stale — that asymmetry is the entire lesson,
//! and [`Ledger::verify`] exists to surface it.
//!
//! ## Ownership & concurrency
//!
//! The ledger exclusively owns its records; accessors hand out shared
//! references only. The type itself is single-owner with no interior
//! mutability — callers that need to share one across threads wrap it in
//! [`SharedLedger`](crate::shared::SharedLedger).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{GENESIS_PAYLOAD, GENESIS_PREVIOUS_IDENTITY, GENESIS_SEQUENCE};
use crate::error::LedgerError;
use crate::record::Record;

// ---------------------------------------------------------------------------
// Verification outcome
// ---------------------------------------------------------------------------

/// Outcome of an integrity scan.
///
/// A broken chain is not an error — it is the expected, reportable result
/// of exactly the tampering this system exists to demonstrate. Hence a
/// value type, not an `Err`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verification {
    /// Every record's back-reference matches its predecessor's identity.
    Valid,
    /// The scan found its first mismatch at this position (0-based index of
    /// the record whose stored `previous_identity` is stale). Scanning
    /// stops here; later breaks, if any, are not reported.
    CompromisedAt(usize),
}

impl Verification {
    /// Convenience predicate for callers that only care about the boolean.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid)
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::Valid => write!(f, "ledger is valid"),
            Verification::CompromisedAt(position) => {
                write!(f, "ledger compromised at position {}", position)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// The ordered, append-only chain of records.
///
/// Constructed with exactly one genesis record; grows one record per
/// [`append`](Ledger::append) for the lifetime of the process. There is no
/// deletion, no truncation, and no persistence — the chain lives and dies
/// in memory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    /// Create a ledger seeded with the genesis record.
    ///
    /// The genesis record has payload [`GENESIS_PAYLOAD`], sequence
    /// [`GENESIS_SEQUENCE`], an empty previous identity, and the current
    /// wall-clock time. Its identity is derived from those fields like any
    /// other record's.
    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }

    /// Create a ledger whose genesis record carries an injected timestamp.
    ///
    /// With a fixed timestamp the genesis identity — and therefore every
    /// identity downstream of it, given fixed append timestamps — is fully
    /// reproducible.
    pub fn new_at(genesis_time: DateTime<Utc>) -> Self {
        let genesis = Record::new_at(
            GENESIS_PAYLOAD,
            GENESIS_SEQUENCE,
            GENESIS_PREVIOUS_IDENTITY,
            genesis_time,
        );
        tracing::debug!(identity = %genesis.identity, "genesis record created");
        Ledger {
            records: vec![genesis],
        }
    }

    /// Append a record with the given payload and sequence tag.
    ///
    /// The new record's `previous_identity` is the identity of the current
    /// tip at the moment of the call, and its timestamp is the current
    /// wall-clock time. Neither the payload nor the sequence is validated —
    /// any string and any integer are accepted, duplicates included.
    ///
    /// Returns a reference to the freshly appended record (the new tip).
    pub fn append(&mut self, payload: impl Into<String>, sequence: u64) -> &Record {
        self.append_at(payload, sequence, Utc::now())
    }

    /// Append with an injected timestamp. See [`append`](Ledger::append).
    pub fn append_at(
        &mut self,
        payload: impl Into<String>,
        sequence: u64,
        created_at: DateTime<Utc>,
    ) -> &Record {
        // The ledger is never empty: new() always seeds genesis, and nothing
        // removes records.
        let previous_identity = self.tip().identity.clone();
        let record = Record::new_at(payload, sequence, previous_identity, created_at);
        tracing::debug!(
            position = self.records.len(),
            sequence = record.sequence,
            identity = %record.identity,
            "record appended"
        );
        self.records.push(record);
        self.records.last().expect("record was just pushed")
    }

    /// Rewrite the payload of the record at `index` and recompute its
    /// identity.
    ///
    /// This is the sanctioned tampering operation: the mutated record's own
    /// identity is re-derived from the new payload together with its
    /// *unchanged* sequence, previous identity, and timestamp, but the
    /// successor's stored back-reference is left alone. Mutating any record
    /// except the tip therefore breaks the chain invariant at `index + 1` —
    /// exactly what [`verify`](Ledger::verify) will report. Mutating the
    /// tip breaks nothing, because no record points at it.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::IndexOutOfRange`] when `index >= len`, in
    /// which case the ledger is left completely untouched.
    pub fn mutate(
        &mut self,
        index: usize,
        new_payload: impl Into<String>,
    ) -> Result<(), LedgerError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;
        record.payload = new_payload.into();
        record.identity = record.compute_identity();
        tracing::debug!(index, identity = %record.identity, "record payload rewritten");
        Ok(())
    }

    /// Scan the chain and report the first integrity break, if any.
    ///
    /// Walks the records from position 1 upward, comparing each stored
    /// `previous_identity` against the actual identity of the record before
    /// it. Stops at the first mismatch. Pure read; the ledger is never
    /// modified. Genesis has no predecessor and is implicitly valid, so a
    /// single-record ledger always verifies.
    pub fn verify(&self) -> Verification {
        for position in 1..self.records.len() {
            if self.records[position].previous_identity != self.records[position - 1].identity {
                tracing::warn!(position, "chain integrity broken");
                return Verification::CompromisedAt(position);
            }
        }
        Verification::Valid
    }

    /// Render a human-readable report of every record, in chain order.
    ///
    /// Shows payload, sequence, previous identity, identity, and an
    /// RFC 2822 timestamp per record. The format is for eyeballs, not for
    /// machines — it carries no compatibility promise. For structured
    /// output, serialize the ledger with serde instead.
    pub fn report(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for (position, record) in self.records.iter().enumerate() {
            // String formatting is infallible; ignore the fmt::Result noise.
            let _ = writeln!(out, "Record {}:", position);
            let _ = writeln!(out, "  Payload           : {}", record.payload);
            let _ = writeln!(out, "  Sequence          : {}", record.sequence);
            let _ = writeln!(out, "  Previous identity : {}", record.previous_identity);
            let _ = writeln!(out, "  Identity          : {}", record.identity);
            let _ = writeln!(out, "  Created at        : {}", record.created_at.to_rfc2822());
        }
        out
    }

    /// The latest record. Never fails — genesis is always present.
    pub fn tip(&self) -> &Record {
        self.records.last().expect("ledger always holds genesis")
    }

    /// Number of records in the chain (at least 1).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false — kept so `len`/`is_empty` come as the usual pair.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shared view of the whole chain.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The record at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate the records in chain order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
