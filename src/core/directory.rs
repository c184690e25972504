//! User directory and team tally built from the accepted message stream.
//!
//! A search export has no `users.json`, so the directory is reconstructed
//! from the profiles embedded in the messages themselves. Registration is
//! strictly first-seen-wins: the first message that carries both a non-empty
//! `user` id and a `user_profile` object defines that user forever, and later
//! messages never overwrite it — even when they carry richer profile data.
//! A message with a `user` id but no embedded profile registers nothing;
//! this mirrors the upstream export semantics and is kept for compatibility.
//!
//! Team id candidates are tallied independently of user registration, with
//! multiplicity, so the most common value can be picked as the export's team.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::Message;

/// Nested profile block of a [`User`], in Slack export shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    /// Search exports never carry a last name; emitted empty.
    pub last_name: String,
    pub real_name: String,
    pub display_name: String,
    pub image_72: String,
    pub avatar_hash: String,
}

/// A user entry for `users.json`, synthesized from an embedded profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub deleted: bool,
    pub real_name: String,
    pub profile: UserProfile,
}

impl User {
    /// Builds a user from the message that first introduced it.
    ///
    /// Missing profile fields become empty strings; `team_id` is the
    /// introducing message's `team` field.
    pub fn from_profile(id: &str, team_id: &str, profile: &Map<String, Value>) -> Self {
        let field = |name: &str| -> String {
            profile
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        User {
            id: id.to_string(),
            team_id: team_id.to_string(),
            name: field("name"),
            deleted: false,
            real_name: field("real_name"),
            profile: UserProfile {
                first_name: field("first_name"),
                last_name: String::new(),
                real_name: field("real_name"),
                display_name: field("display_name"),
                image_72: field("image_72"),
                avatar_hash: field("avatar_hash"),
            },
        }
    }
}

/// Insertion-ordered user map with insert-if-absent semantics.
///
/// Insertion order is load-bearing: the first-inserted user becomes the
/// synthetic channel's creator, and `members` lists ids in this order.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    index: HashMap<String, usize>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a user with this id is already registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Registers a user unless its id is already present.
    ///
    /// Returns `true` if the user was inserted.
    pub fn insert_first(&mut self, user: User) -> bool {
        if self.index.contains_key(&user.id) {
            return false;
        }
        self.index.insert(user.id.clone(), self.users.len());
        self.users.push(user);
        true
    }

    /// The id of the first-registered user, if any.
    pub fn first_id(&self) -> Option<&str> {
        self.users.first().map(|u| u.id.as_str())
    }

    /// All registered ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.users.iter().map(|u| u.id.clone()).collect()
    }

    /// All registered users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Multiset of team id candidates with first-seen ordering.
#[derive(Debug, Clone, Default)]
pub struct TeamTally {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl TeamTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of a team id. Duplicates matter.
    pub fn record(&mut self, id: &str) {
        let count = self.counts.entry(id.to_string()).or_insert(0);
        if *count == 0 {
            self.order.push(id.to_string());
        }
        *count += 1;
    }

    /// The most frequent team id; ties resolve to the first-seen candidate.
    ///
    /// `None` when nothing was recorded. Walking `order` and replacing only
    /// on a strictly greater count keeps the result deterministic for a
    /// given input ordering.
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for id in &self.order {
            let count = self.counts[id.as_str()];
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((id, count));
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total occurrences recorded across all candidates.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Single pass over the accepted messages, building both accumulators.
pub fn build_directory(messages: &[Message]) -> (UserDirectory, TeamTally) {
    let mut directory = UserDirectory::new();
    let mut teams = TeamTally::new();

    for msg in messages {
        if let Some(user_id) = msg.user() {
            if !directory.contains(user_id) {
                if let Some(profile) = msg.user_profile() {
                    directory.insert_first(User::from_profile(user_id, msg.team(), profile));
                }
            }
        }
        for candidate in msg.team_candidates() {
            teams.record(candidate);
        }
    }

    (directory, teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn msg(value: serde_json::Value) -> Message {
        Message::from_value(value).unwrap()
    }

    #[test]
    fn test_first_seen_wins() {
        let messages = vec![
            msg(json!({
                "type": "message", "user": "U1", "team": "T1",
                "user_profile": {"name": "alice", "real_name": "Alice A"}
            })),
            msg(json!({
                "type": "message", "user": "U1", "team": "T2",
                "user_profile": {"name": "alice-renamed", "real_name": "Alice B"}
            })),
        ];
        let (directory, _) = build_directory(&messages);

        assert_eq!(directory.len(), 1);
        let user = &directory.users()[0];
        assert_eq!(user.name, "alice");
        assert_eq!(user.real_name, "Alice A");
        assert_eq!(user.team_id, "T1");
    }

    #[test]
    fn test_user_without_profile_is_not_registered() {
        let messages = vec![
            msg(json!({"type": "message", "user": "U1", "user_profile": {"name": "alice"}})),
            msg(json!({"type": "message", "user": "U2"})),
        ];
        let (directory, _) = build_directory(&messages);

        assert_eq!(directory.ids(), vec!["U1"]);
        assert!(!directory.contains("U2"));
    }

    #[test]
    fn test_registration_waits_for_a_profile() {
        // U1's first message has no profile and registers nothing, so the id
        // is still absent when the second message arrives with one.
        let messages = vec![
            msg(json!({"type": "message", "user": "U1"})),
            msg(json!({"type": "message", "user": "U1", "user_profile": {"name": "late"}})),
        ];
        let (directory, _) = build_directory(&messages);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.users()[0].name, "late");
    }

    #[test]
    fn test_insertion_order_and_first_id() {
        let messages = vec![
            msg(json!({"type": "message", "user": "U2", "user_profile": {"name": "bob"}})),
            msg(json!({"type": "message", "user": "U1", "user_profile": {"name": "alice"}})),
        ];
        let (directory, _) = build_directory(&messages);

        assert_eq!(directory.first_id(), Some("U2"));
        assert_eq!(directory.ids(), vec!["U2", "U1"]);
    }

    #[test]
    fn test_profile_fields_default_empty() {
        let messages = vec![msg(json!({
            "type": "message", "user": "U1",
            "user_profile": {"display_name": "al"}
        }))];
        let (directory, _) = build_directory(&messages);
        let user = &directory.users()[0];

        assert_eq!(user.name, "");
        assert_eq!(user.team_id, "");
        assert_eq!(user.profile.display_name, "al");
        assert_eq!(user.profile.last_name, "");
        assert!(!user.deleted);
    }

    #[test]
    fn test_team_tally_counts_with_multiplicity() {
        let messages = vec![
            msg(json!({"type": "message", "team": "T1", "source_team": "T1", "user_team": "T2"})),
            msg(json!({"type": "message", "team": "T2", "source_team": "", "user_team": "T2"})),
        ];
        let (_, teams) = build_directory(&messages);

        assert_eq!(teams.total(), 5);
        assert_eq!(teams.dominant(), Some("T2"));
    }

    #[test]
    fn test_team_tally_tie_breaks_to_first_seen() {
        let mut teams = TeamTally::new();
        teams.record("T_LATE");
        teams.record("T_EARLY");
        teams.record("T_EARLY");
        teams.record("T_LATE");
        // Both at 2; T_LATE was recorded first.
        assert_eq!(teams.dominant(), Some("T_LATE"));
    }

    #[test]
    fn test_team_tally_empty() {
        let teams = TeamTally::new();
        assert!(teams.is_empty());
        assert_eq!(teams.dominant(), None);
    }

    #[test]
    fn test_user_serialization_shape() {
        let user = User::from_profile(
            "U1",
            "T1",
            json!({"name": "alice", "real_name": "Alice", "image_72": "http://img"})
                .as_object()
                .unwrap(),
        );
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "U1",
                "team_id": "T1",
                "name": "alice",
                "deleted": false,
                "real_name": "Alice",
                "profile": {
                    "first_name": "",
                    "last_name": "",
                    "real_name": "Alice",
                    "display_name": "",
                    "image_72": "http://img",
                    "avatar_hash": ""
                }
            })
        );
    }
}
