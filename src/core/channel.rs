//! Synthetic channel and team aggregates.
//!
//! The target archive layout requires a `channels.json`, but a search export
//! has no channel concept: results from many conversations arrive as one
//! flat message set. This module fabricates the single container channel the
//! downstream ingestion tool expects, deriving what it can from the
//! directory builder's accumulators and filling the rest with fixed
//! placeholders.

use serde::{Deserialize, Serialize};

use super::directory::{TeamTally, UserDirectory};

/// Fixed id of the synthetic channel.
pub const CHANNEL_ID: &str = "C_SEARCH_RESULTS";
/// Fixed name of the synthetic channel; also the per-date directory name
/// inside the archive.
pub const CHANNEL_NAME: &str = "search_results";
/// Purpose string stamped on the synthetic channel.
pub const CHANNEL_PURPOSE: &str = "Combined messages from search export";
/// Sentinel team id when no candidate was seen.
pub const UNKNOWN_TEAM: &str = "T_UNKNOWN";
/// Sentinel creator id when no user could be registered.
pub const UNKNOWN_USER: &str = "U_UNKNOWN";

/// Topic/purpose block in Slack channel shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelNote {
    pub value: String,
    pub creator: String,
    pub last_set: i64,
}

impl ChannelNote {
    fn empty() -> Self {
        Self {
            value: String::new(),
            creator: String::new(),
            last_set: 0,
        }
    }

    fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::empty()
        }
    }
}

/// The single fabricated channel record for `channels.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub created: i64,
    pub creator: String,
    pub is_archived: bool,
    pub is_mpim: bool,
    pub members: Vec<String>,
    pub topic: ChannelNote,
    pub purpose: ChannelNote,
}

/// Everything the synthesizer derives: the channel plus the dominant team id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    pub channel: Channel,
    /// Most frequent team id candidate, [`UNKNOWN_TEAM`] when none was seen.
    pub team_id: String,
}

impl Aggregates {
    /// Derives the synthetic aggregates from the directory builder's output.
    ///
    /// - `creator` is the first-registered user id, or [`UNKNOWN_USER`]
    /// - `members` lists every known user id in registration order
    /// - `created` is the floor of the minimum usable message timestamp
    /// - `team_id` is the most frequent candidate; ties resolve to the
    ///   first-seen one, which is deterministic for a given input ordering
    pub fn synthesize(directory: &UserDirectory, teams: &TeamTally, min_ts: f64) -> Self {
        let channel = Channel {
            id: CHANNEL_ID.to_string(),
            name: CHANNEL_NAME.to_string(),
            created: min_ts.floor() as i64,
            creator: directory
                .first_id()
                .unwrap_or(UNKNOWN_USER)
                .to_string(),
            is_archived: false,
            is_mpim: false,
            members: directory.ids(),
            topic: ChannelNote::empty(),
            purpose: ChannelNote::with_value(CHANNEL_PURPOSE),
        };

        Aggregates {
            channel,
            team_id: teams.dominant().unwrap_or(UNKNOWN_TEAM).to_string(),
        }
    }
}
