use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::{classify, EntryKind};
use crate::ids::EntryId;

/// One saved clipboard value. Entries are never edited, only removed.
///
/// The serialized field names (`timestamp`, `type`) are the on-disk format of
/// the history key and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: EntryId,
    pub content: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl ClipboardEntry {
    /// Creates an entry with a fresh id and the kind inferred from `content`.
    pub fn new(content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let content = content.into();
        Self {
            id: EntryId::new(),
            kind: classify(&content),
            content,
            created_at,
        }
    }
}
