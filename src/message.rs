//! Opaque Slack message records.
//!
//! This module provides [`Message`], a thin wrapper over the raw JSON object
//! of a single Slack search-result record.
//!
//! # Overview
//!
//! Search exports carry heterogeneous, partially-populated records. Rather
//! than model every field Slack may emit, a [`Message`] keeps the original
//! object untouched and exposes read-only accessors for the handful of fields
//! the pipeline needs:
//!
//! - `type` — record classification; only `"message"` records are accepted
//! - `ts` — epoch seconds, usually a numeric string like `"1705314600.000200"`
//! - `user` / `user_profile` — author id and optional embedded profile
//! - `team`, `source_team`, `user_team` — team id candidates
//! - `client_msg_id` — used to identify messages in warnings
//!
//! Everything else round-trips through serialization byte-for-byte in the
//! original key order, so downstream tools see exactly what the export
//! contained.
//!
//! # Examples
//!
//! ```
//! use slackpack::Message;
//!
//! let msg = Message::from_value(serde_json::json!({
//!     "type": "message",
//!     "ts": "1705314600.000200",
//!     "user": "U1",
//!     "text": "Hello!"
//! })).unwrap();
//!
//! assert_eq!(msg.user(), Some("U1"));
//! assert_eq!(msg.ts_seconds(), Some(1705314600.0002));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single Slack message record, kept as the raw JSON object it arrived as.
///
/// Serializes transparently: the wrapper adds nothing, removes nothing, and
/// preserves the original field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Map<String, Value>);

impl Message {
    /// Accepts a JSON value as a message record.
    ///
    /// Returns `None` unless the value is an object whose `type` field equals
    /// the literal `"message"`. All other records (channel joins, headers,
    /// arbitrary garbage) are rejected here and never enter the pipeline.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) if map.get("type").and_then(Value::as_str) == Some("message") => {
                Some(Self(map))
            }
            _ => None,
        }
    }

    /// The message timestamp parsed as epoch seconds.
    ///
    /// Slack emits `ts` as a numeric string; some tooling re-exports it as a
    /// JSON number, so both are accepted. Returns `None` when the field is
    /// missing, unparsable, or not finite. The partitioner uses this same
    /// rule for both sorting and date bucketing.
    pub fn ts_seconds(&self) -> Option<f64> {
        let parsed = match self.0.get("ts")? {
            Value::String(s) => s.parse::<f64>().ok()?,
            other => other.as_f64()?,
        };
        parsed.is_finite().then_some(parsed)
    }

    /// The author's user id, if present and non-empty.
    pub fn user(&self) -> Option<&str> {
        self.0
            .get("user")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// The embedded author profile, if the record carries one.
    pub fn user_profile(&self) -> Option<&Map<String, Value>> {
        self.0.get("user_profile").and_then(Value::as_object)
    }

    /// The `team` field as a string, empty when absent.
    ///
    /// This is the value recorded as a user's `team_id` when the user is
    /// first seen.
    pub fn team(&self) -> &str {
        self.0.get("team").and_then(Value::as_str).unwrap_or("")
    }

    /// All non-empty team id candidates on this record, in field order
    /// (`team`, `source_team`, `user_team`).
    pub fn team_candidates(&self) -> impl Iterator<Item = &str> {
        ["team", "source_team", "user_team"]
            .into_iter()
            .filter_map(|field| self.0.get(field))
            .filter_map(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// The client-assigned message id, used to identify messages in warnings.
    pub fn client_msg_id(&self) -> Option<&str> {
        self.0.get("client_msg_id").and_then(Value::as_str)
    }

    /// Read access to the underlying JSON object.
    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }
}
