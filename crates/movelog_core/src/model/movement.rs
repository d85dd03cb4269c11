//! Movement record model.
//!
//! # Responsibility
//! - Define the sole persisted entity and its composite key.
//! - Provide the canonical creation-time stamping helper.
//!
//! # Invariants
//! - `(owner, name)` uniquely identifies a record.
//! - `created` is written once at insertion and never modified by update.
//! - `updated` is refreshed on every successful create or update.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Canonical movement record.
///
/// Wire field names follow the caller-facing request shape (`Owner`,
/// `Name`, `Type`, ...); `kind` is renamed because `type` is reserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Movement {
    /// Partition key component. Records are listed per owner.
    pub owner: String,
    /// Sort key component, unique within one owner partition.
    pub name: String,
    /// Free-form category, e.g. "SYSTEM" or "Sweep".
    #[serde(rename = "Type", default)]
    pub kind: String,
    /// Free-form summary text.
    #[serde(default)]
    pub description: String,
    /// Free-form body text; may contain embedded newlines and markup.
    #[serde(default)]
    pub details: String,
    /// ISO-8601 UTC creation timestamp, immutable after insertion.
    pub created: String,
    /// ISO-8601 UTC timestamp of the last create or update.
    pub updated: String,
}

/// Composite `(Owner, Name)` key.
///
/// Doubles as the opaque continuation token returned by paginated list
/// queries: the last evaluated key of one page is replayed verbatim as the
/// exclusive start of the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovementKey {
    pub owner: String,
    pub name: String,
}

impl Movement {
    /// Builds a freshly inserted record stamped at `now`.
    ///
    /// # Contract
    /// - `created == updated == now`.
    pub fn stamped(
        owner: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
        details: impl Into<String>,
        now: &str,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
            details: details.into(),
            created: now.to_string(),
            updated: now.to_string(),
        }
    }

    /// Returns this record's composite key.
    pub fn key(&self) -> MovementKey {
        MovementKey {
            owner: self.owner.clone(),
            name: self.name.clone(),
        }
    }
}

/// Returns the current time as the canonical timestamp string.
///
/// Millisecond-precision RFC 3339 in UTC (`2026-08-30T12:00:00.000Z`).
/// Strings of this shape compare lexicographically in chronological order,
/// which record-age assertions and the `updated` refresh invariant rely on.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
