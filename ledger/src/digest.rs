//! # Identity Derivation
//!
//! A record's identity is the SHA-256 digest of its content and its
//! back-reference, rendered as lowercase hex. This is the only
//! cryptography in Chronicle, and it is deliberately boring: one audited
//! hash function, no salting, no domain separation.
//!
//! ## Preimage layout
//!
//! ```text
//! payload bytes || previous_identity bytes || decimal(sequence) || display(created_at)
//! ```
//!
//! The fields are fed into the hasher back to back with no length prefixes.
//! That makes the scheme vulnerable in principle to ambiguous-concatenation
//! collisions (payload `"ab"` + sequence `1` vs payload `"a"` + a crafted
//! tail hash the same bytes). A production system would length-prefix each
//! field or use a keyed/domain-separated construction; for a ledger whose
//! threat model is "a student calling `mutate` on purpose", the simple
//! layout is the more instructive one. It also matters that the weakness is
//! *written down* — which it now is.
//!
//! ## Determinism
//!
//! The digest is a pure function of its four inputs. The timestamp is the
//! only input that varies across runs with identical payloads; callers who
//! need reproducible vectors inject a fixed timestamp (see
//! [`Record::new_at`](crate::record::Record::new_at)).

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Derive a record's identity from its four constituent fields.
///
/// Feeds the fields sequentially into a single SHA-256 computation — same
/// result as concatenating first, minus the temporary buffer — and returns
/// the digest as a 64-character lowercase hex string.
///
/// The timestamp is rendered with chrono's `Display` for `DateTime<Utc>`
/// (e.g. `2026-08-30 12:00:00.000000001 UTC`), which keeps full sub-second
/// precision and the offset suffix in the preimage.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chronicle_ledger::digest::record_digest;
///
/// let t = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
/// let id = record_digest("Alice pays Bob 10", 1, "", t);
/// assert_eq!(id.len(), 64);
/// assert_eq!(id, record_digest("Alice pays Bob 10", 1, "", t));
/// ```
pub fn record_digest(
    payload: &str,
    sequence: u64,
    previous_identity: &str,
    created_at: DateTime<Utc>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hasher.update(previous_identity.as_bytes());
    hasher.update(sequence.to_string().as_bytes());
    hasher.update(created_at.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn digest_is_deterministic() {
        let a = record_digest("pay", 1, "prev", fixed_time());
        let b = record_digest("pay", 1, "prev", fixed_time());
        assert_eq!(a, b);
    }

    #[test]
    fn digest_is_lowercase_hex_of_expected_length() {
        let d = record_digest("pay", 1, "prev", fixed_time());
        assert_eq!(d.len(), crate::config::IDENTITY_HEX_LENGTH);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn changing_payload_changes_digest() {
        let a = record_digest("pay", 1, "prev", fixed_time());
        let b = record_digest("Pay", 1, "prev", fixed_time());
        assert_ne!(a, b);
    }

    #[test]
    fn changing_sequence_changes_digest() {
        let a = record_digest("pay", 1, "prev", fixed_time());
        let b = record_digest("pay", 2, "prev", fixed_time());
        assert_ne!(a, b);
    }

    #[test]
    fn changing_previous_identity_changes_digest() {
        let a = record_digest("pay", 1, "prev", fixed_time());
        let b = record_digest("pay", 1, "perv", fixed_time());
        assert_ne!(a, b);
    }

    #[test]
    fn changing_timestamp_changes_digest() {
        let later = fixed_time() + chrono::Duration::nanoseconds(1);
        let a = record_digest("pay", 1, "prev", fixed_time());
        let b = record_digest("pay", 1, "prev", later);
        assert_ne!(a, b);
    }

    #[test]
    fn sequential_feeding_equals_concatenation() {
        // The hasher is fed field by field; the result must equal hashing
        // the concatenated preimage in one shot.
        let t = fixed_time();
        let concatenated = format!("pay{}{}{}", "prev", 7, t);
        let mut hasher = Sha256::new();
        hasher.update(concatenated.as_bytes());
        let expected = hex::encode(hasher.finalize());
        assert_eq!(record_digest("pay", 7, "prev", t), expected);
    }

    #[test]
    fn empty_previous_identity_is_valid_input() {
        // Genesis has no predecessor; the empty back-reference must hash fine.
        let d = record_digest("Genesis Block", 0, "", fixed_time());
        assert_eq!(d.len(), 64);
    }
}
