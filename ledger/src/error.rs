//! Error types for ledger operations.
//!
//! The taxonomy is short because almost everything in Chronicle is a total
//! function: hashing arbitrary bytes cannot fail, reading the clock cannot
//! fail, and appending to a vector in memory cannot fail in any way worth
//! modeling. Note what is *not* here: a failed integrity check. A
//! compromised chain is a legitimate, expected outcome of verification and
//! is reported as a [`Verification`](crate::ledger::Verification) value,
//! never as an error.

use thiserror::Error;

/// Errors that can occur when operating on a [`Ledger`](crate::ledger::Ledger).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A mutation targeted a position outside the chain.
    ///
    /// When this is returned, nothing was mutated — the ledger is
    /// byte-for-byte the ledger it was before the call.
    #[error("record index {index} out of range (ledger holds {len} records)")]
    IndexOutOfRange {
        /// The index the caller asked for.
        index: usize,
        /// The number of records actually in the ledger.
        len: usize,
    },
}
