//! # Ledger Constants
//!
//! Every magic value in Chronicle lives here. There are not many — this is
//! a teaching chain, not a mainnet — but the rule stands: if you are
//! hardcoding one of these somewhere else, you are doing it wrong.

// ---------------------------------------------------------------------------
// Genesis
// ---------------------------------------------------------------------------

/// Payload of the genesis record. Every chain starts with this exact text;
/// it is the one record nobody appended and nobody can point behind.
pub const GENESIS_PAYLOAD: &str = "Genesis Block";

/// Sequence tag of the genesis record.
pub const GENESIS_SEQUENCE: u64 = 0;

/// The genesis record's previous-identity field: the empty string.
/// Not a hash of anything — there is nothing before genesis to hash.
pub const GENESIS_PREVIOUS_IDENTITY: &str = "";

// ---------------------------------------------------------------------------
// Digest
// ---------------------------------------------------------------------------

/// Length in hex characters of a record identity (SHA-256 → 32 bytes → 64
/// lowercase hex digits).
pub const IDENTITY_HEX_LENGTH: usize = 64;
