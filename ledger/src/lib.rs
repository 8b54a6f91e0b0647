// Copyright (c) 2026 Chronicle Contributors. MIT License.
// See LICENSE for details.

//! # Chronicle — Core Ledger Library
//!
//! Chronicle is a teaching instrument: the smallest honest implementation of
//! a hash-linked ledger. Every record carries a digest derived from its own
//! content plus the digest of the record before it, so changing any interior
//! record quietly invalidates its successor's back-reference — and a single
//! linear scan finds the break.
//!
//! That linkage is the entire trick behind every blockchain you have ever
//! read a breathless article about. Here it comes without the networking,
//! persistence, consensus, or token economics, so the trick is actually
//! visible.
//!
//! ## Architecture
//!
//! - **config** — The handful of constants the chain is built from.
//! - **digest** — Identity derivation: SHA-256 over a record's fields.
//! - **record** — The immutable-after-creation chain link.
//! - **ledger** — The ordered sequence: append, mutate, report, verify.
//! - **error** — What little can go wrong, as a proper error type.
//! - **shared** — A lock-protected handle for callers that insist on sharing.
//!
//! ## What this deliberately is not
//!
//! There is no persistence (the chain dies with the process), no validation
//! of payloads (any string is a "transaction"), and no adversarial hardening
//! of the digest preimage. The [`Ledger::mutate`] operation exists precisely
//! to *break* the chain, because a tamper-evidence demo without tampering is
//! just a vector of strings.

pub mod config;
pub mod digest;
pub mod error;
pub mod ledger;
pub mod record;
pub mod shared;

// Re-export the things people actually need so they don't have to memorize
// the module hierarchy.
pub use digest::record_digest;
pub use error::LedgerError;
pub use ledger::{Ledger, Verification};
pub use record::Record;
pub use shared::SharedLedger;
