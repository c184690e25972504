//! Date partitioning of the accepted message set.
//!
//! Slack export archives store one JSON file per channel per UTC calendar
//! day, so the flat message set is globally sorted by timestamp and then
//! split into per-date buckets. Sorting happens before bucketing and uses
//! the exact same `ts` parse rule, so within-bucket order is ascending and
//! a message can never sort under one date and land in another.
//!
//! Messages whose `ts` is missing or unparsable cannot be assigned a date.
//! They are excluded from every bucket and surfaced in
//! [`Partition::skipped`] — they were still counted as accepted input, so
//! dropping them here is what produces a reportable count discrepancy.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};

use crate::Message;

/// Placeholder used in warnings for messages without a `client_msg_id`.
const UNKNOWN_MSG_ID: &str = "unknown id";

/// Result of partitioning the accepted message set.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Messages grouped by UTC calendar date, ascending by `ts` within each
    /// bucket. `BTreeMap` keeps the dates themselves in order.
    pub buckets: BTreeMap<NaiveDate, Vec<Message>>,
    /// Identifiers of messages dropped for missing/unparsable `ts`.
    pub skipped: Vec<String>,
    /// Minimum parsed `ts` across all messages; 0.0 when none was usable.
    pub min_ts: f64,
}

impl Partition {
    /// Total messages across all buckets.
    pub fn total_bucketed(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Converts parsed epoch seconds to a UTC calendar date.
///
/// Sub-second precision is irrelevant for day bucketing, so the value is
/// floored to whole seconds first.
fn utc_date(ts: f64) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts.floor() as i64, 0).map(|dt| dt.date_naive())
}

/// Sorts messages by timestamp and groups them into per-date buckets.
///
/// The sort is stable and keys on `ts_seconds()` with missing values treated
/// as 0.0, so messages that tie (or lack a timestamp entirely) keep their
/// original accepted order.
pub fn partition_by_date(mut messages: Vec<Message>) -> Partition {
    messages.sort_by(|a, b| {
        let ka = a.ts_seconds().unwrap_or(0.0);
        let kb = b.ts_seconds().unwrap_or(0.0);
        ka.total_cmp(&kb)
    });

    let mut partition = Partition::default();
    let mut min_ts: Option<f64> = None;

    for msg in messages {
        let Some(ts) = msg.ts_seconds() else {
            partition
                .skipped
                .push(msg.client_msg_id().unwrap_or(UNKNOWN_MSG_ID).to_string());
            continue;
        };
        // Epochs outside chrono's representable range have no calendar date.
        let Some(date) = utc_date(ts) else {
            partition
                .skipped
                .push(msg.client_msg_id().unwrap_or(UNKNOWN_MSG_ID).to_string());
            continue;
        };

        min_ts = Some(min_ts.map_or(ts, |m: f64| m.min(ts)));
        partition.buckets.entry(date).or_default().push(msg);
    }

    partition.min_ts = min_ts.unwrap_or(0.0);
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn msg(value: serde_json::Value) -> Message {
        Message::from_value(value).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_buckets_by_utc_date() {
        let messages = vec![
            // 2024-01-15 10:30:00 UTC
            msg(json!({"type": "message", "ts": "1705314600.0"})),
            // 2024-01-16 00:00:01 UTC
            msg(json!({"type": "message", "ts": "1705363201.5"})),
        ];
        let partition = partition_by_date(messages);

        assert_eq!(partition.buckets.len(), 2);
        assert_eq!(partition.buckets[&date(2024, 1, 15)].len(), 1);
        assert_eq!(partition.buckets[&date(2024, 1, 16)].len(), 1);
        assert_eq!(partition.total_bucketed(), 2);
    }

    #[test]
    fn test_sorted_ascending_within_bucket() {
        let messages = vec![
            msg(json!({"type": "message", "ts": "300.0", "text": "c"})),
            msg(json!({"type": "message", "ts": "100.0", "text": "a"})),
            msg(json!({"type": "message", "ts": "200.0", "text": "b"})),
        ];
        let partition = partition_by_date(messages);

        let bucket = partition.buckets.values().next().unwrap();
        let texts: Vec<_> = bucket
            .iter()
            .map(|m| m.as_object()["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stable_on_ties() {
        let messages = vec![
            msg(json!({"type": "message", "ts": "100.0", "text": "first"})),
            msg(json!({"type": "message", "ts": "100.0", "text": "second"})),
        ];
        let partition = partition_by_date(messages);

        let bucket = partition.buckets.values().next().unwrap();
        assert_eq!(bucket[0].as_object()["text"], "first");
        assert_eq!(bucket[1].as_object()["text"], "second");
    }

    #[test]
    fn test_missing_ts_is_skipped_with_id() {
        let messages = vec![
            msg(json!({"type": "message", "ts": "100.0"})),
            msg(json!({"type": "message", "client_msg_id": "abc-123"})),
            msg(json!({"type": "message", "ts": "not a number"})),
        ];
        let partition = partition_by_date(messages);

        assert_eq!(partition.total_bucketed(), 1);
        assert_eq!(partition.skipped, vec!["abc-123", "unknown id"]);
    }

    #[test]
    fn test_min_ts_over_usable_timestamps_only() {
        let messages = vec![
            msg(json!({"type": "message", "ts": "200.5"})),
            msg(json!({"type": "message"})),
            msg(json!({"type": "message", "ts": "100.25"})),
        ];
        let partition = partition_by_date(messages);
        assert_eq!(partition.min_ts, 100.25);
    }

    #[test]
    fn test_min_ts_zero_when_nothing_usable() {
        let messages = vec![msg(json!({"type": "message"}))];
        let partition = partition_by_date(messages);
        assert_eq!(partition.min_ts, 0.0);
        assert_eq!(partition.total_bucketed(), 0);
    }

    #[test]
    fn test_numeric_min_not_lexicographic() {
        // "100.0" < "99.0" as strings; the numeric rule must pick 99.
        let messages = vec![
            msg(json!({"type": "message", "ts": "100.0"})),
            msg(json!({"type": "message", "ts": "99.0"})),
        ];
        let partition = partition_by_date(messages);
        assert_eq!(partition.min_ts, 99.0);
    }

    #[test]
    fn test_out_of_range_epoch_is_skipped() {
        let messages = vec![msg(
            json!({"type": "message", "ts": "1e300", "client_msg_id": "huge"}),
        )];
        let partition = partition_by_date(messages);
        assert_eq!(partition.total_bucketed(), 0);
        assert_eq!(partition.skipped, vec!["huge"]);
    }
}
