//! Text case converter.
//!
//! Every format is a [`TextCase`] variant bound to a pure `&str -> String`
//! transform. Callers run all of them against one input through
//! [`convert_all`] and get a [`CaseResults`] back; nothing is cached between
//! calls.
//!
//! Word boundaries are ASCII-oriented: only `[a-z][A-Z]` pairs split camel
//! humps, and the identifier formats (camel, Pascal, kebab, snake) keep ASCII
//! letters and digits only.
mod transforms;

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextCase {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Kebab,
    Snake,
}

impl TextCase {
    /// Display order of the converter.
    pub const ALL: [TextCase; 8] = [
        TextCase::Upper,
        TextCase::Lower,
        TextCase::Title,
        TextCase::Sentence,
        TextCase::Camel,
        TextCase::Pascal,
        TextCase::Kebab,
        TextCase::Snake,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TextCase::Upper => "upper",
            TextCase::Lower => "lower",
            TextCase::Title => "title",
            TextCase::Sentence => "sentence",
            TextCase::Camel => "camel",
            TextCase::Pascal => "pascal",
            TextCase::Kebab => "kebab",
            TextCase::Snake => "snake",
        }
    }

    /// Name written in the format itself.
    pub fn label(self) -> &'static str {
        match self {
            TextCase::Upper => "UPPERCASE",
            TextCase::Lower => "lowercase",
            TextCase::Title => "Title Case",
            TextCase::Sentence => "Sentence case",
            TextCase::Camel => "camelCase",
            TextCase::Pascal => "PascalCase",
            TextCase::Kebab => "kebab-case",
            TextCase::Snake => "snake_case",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TextCase::Upper => "Convert to all caps",
            TextCase::Lower => "Convert to all lowercase",
            TextCase::Title => "Capitalize first letter of each word",
            TextCase::Sentence => "Capitalize first letter of each sentence",
            TextCase::Camel => "Convert to camelCase format",
            TextCase::Pascal => "Convert to PascalCase format",
            TextCase::Kebab => "Convert to kebab-case format",
            TextCase::Snake => "Convert to snake_case format",
        }
    }

    /// Applies this format to `text`. Blank input always yields `""`.
    pub fn apply(self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        let transform: fn(&str) -> String = match self {
            TextCase::Upper => transforms::upper,
            TextCase::Lower => transforms::lower,
            TextCase::Title => transforms::title,
            TextCase::Sentence => transforms::sentence,
            TextCase::Camel => transforms::camel,
            TextCase::Pascal => transforms::pascal,
            TextCase::Kebab => transforms::kebab,
            TextCase::Snake => transforms::snake,
        };
        transform(text)
    }
}

impl Display for TextCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TextCase {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TextCase::ALL
            .into_iter()
            .find(|case| {
                case.id() == wanted
                    || case.label().to_ascii_lowercase() == wanted
                    || format!("{}case", case.id()) == wanted
            })
            .ok_or_else(|| ToolError::invalid_format(format!("unknown text case: {s}")))
    }
}

/// Output of one conversion request, in [`TextCase::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResults {
    results: Vec<(TextCase, String)>,
}

impl CaseResults {
    pub fn get(&self, case: TextCase) -> &str {
        self.results
            .iter()
            .find(|(c, _)| *c == case)
            .map(|(_, s)| s.as_str())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextCase, &str)> {
        self.results.iter().map(|(c, s)| (*c, s.as_str()))
    }
}

impl Serialize for CaseResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(case, s)| (case.id(), s)))
    }
}

/// Runs every transform against `text`.
pub fn convert_all(text: &str) -> CaseResults {
    CaseResults {
        results: TextCase::ALL
            .into_iter()
            .map(|case| (case, case.apply(text)))
            .collect(),
    }
}

pub fn upper_case(text: &str) -> String {
    TextCase::Upper.apply(text)
}

pub fn lower_case(text: &str) -> String {
    TextCase::Lower.apply(text)
}

pub fn title_case(text: &str) -> String {
    TextCase::Title.apply(text)
}

pub fn sentence_case(text: &str) -> String {
    TextCase::Sentence.apply(text)
}

pub fn camel_case(text: &str) -> String {
    TextCase::Camel.apply(text)
}

pub fn pascal_case(text: &str) -> String {
    TextCase::Pascal.apply(text)
}

pub fn kebab_case(text: &str) -> String {
    TextCase::Kebab.apply(text)
}

pub fn snake_case(text: &str) -> String {
    TextCase::Snake.apply(text)
}

/// Character and word counts shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }
}
