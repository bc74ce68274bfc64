use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+").expect("static url regex"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex"));

/// What a history entry looks like, inferred once when it is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Text,
    Url,
    Email,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Text => "text",
            EntryKind::Url => "url",
            EntryKind::Email => "email",
        }
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies content; the first matching rule wins (url, then email).
pub fn classify(content: &str) -> EntryKind {
    if URL_PATTERN.is_match(content) {
        EntryKind::Url
    } else if EMAIL_PATTERN.is_match(content) {
        EntryKind::Email
    } else {
        EntryKind::Text
    }
}
