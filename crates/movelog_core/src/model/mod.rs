//! Domain model for movement records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by every operation.
//! - Own the timestamp format used for `Created`/`Updated` stamping.
//!
//! # Invariants
//! - Every record is identified by its composite `(Owner, Name)` key.
//! - Timestamps are ISO-8601 UTC strings and sort lexicographically in
//!   chronological order.

pub mod movement;
