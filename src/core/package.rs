//! Package emitter: assembles the export archive's file tree in memory.
//!
//! The tree mirrors the standard Slack export layout:
//!
//! ```text
//! users.json                       -- array of User objects
//! channels.json                    -- array with exactly one Channel
//! search_results/<YYYY-MM-DD>.json -- that date's messages, sorted
//! ```
//!
//! Assembly is pure: the tree is a list of `(path, bytes)` entries handed to
//! an [`ArchiveWriter`](crate::archive::ArchiveWriter) afterwards. Per-date
//! message counts are captured here, at the moment of serialization, so the
//! reconciliation report counts exactly what went into the archive.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::channel::Channel;
use super::directory::UserDirectory;
use crate::Message;
use crate::archive::ArchiveEntry;
use crate::error::Result;

/// In-memory file tree plus the per-date counts used for reconciliation.
#[derive(Debug, Clone, Default)]
pub struct ExportTree {
    /// Archive entries in emission order: users, channels, then dates.
    pub entries: Vec<ArchiveEntry>,
    /// Messages serialized per date file.
    pub date_counts: BTreeMap<NaiveDate, usize>,
}

impl ExportTree {
    /// Total messages across all date files.
    pub fn total_emitted(&self) -> usize {
        self.date_counts.values().sum()
    }
}

/// Serializes users, the channel, and the date buckets into an export tree.
///
/// Date files live under a directory named after the channel. All JSON is
/// pretty-printed for human inspection during review.
pub fn build_export_tree(
    directory: &UserDirectory,
    channel: &Channel,
    buckets: &BTreeMap<NaiveDate, Vec<Message>>,
) -> Result<ExportTree> {
    let mut tree = ExportTree::default();

    tree.entries.push(ArchiveEntry::new(
        "users.json",
        serde_json::to_vec_pretty(directory.users())?,
    ));
    tree.entries.push(ArchiveEntry::new(
        "channels.json",
        serde_json::to_vec_pretty(&[channel])?,
    ));

    for (date, msgs) in buckets {
        let path = format!("{}/{}.json", channel.name, date.format("%Y-%m-%d"));
        tree.entries
            .push(ArchiveEntry::new(path, serde_json::to_vec_pretty(msgs)?));
        tree.date_counts.insert(*date, msgs.len());
    }

    Ok(tree)
}
