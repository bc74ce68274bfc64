//! The transform bodies. Callers go through [`super::TextCase::apply`], which
//! handles blank input before any of these run.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static text case regex")
}

/// A lowercase ASCII letter directly followed by an uppercase one.
static CAMEL_HUMP: Lazy<Regex> = Lazy::new(|| regex(r"([a-z])([A-Z])"));
static WORD_JOINERS: Lazy<Regex> = Lazy::new(|| regex(r"[_-]"));
static SENTENCE_START: Lazy<Regex> = Lazy::new(|| regex(r"^\w|[.!?]\s+\w"));
static NOT_ALNUM_OR_SPACE: Lazy<Regex> = Lazy::new(|| regex(r"[^a-zA-Z0-9\s]"));

static KEBAB_DISALLOWED: Lazy<Regex> = Lazy::new(|| regex(r"[^a-zA-Z0-9\s-]"));
static KEBAB_SEPARATORS: Lazy<Regex> = Lazy::new(|| regex(r"[\s_]+"));
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| regex(r"-+"));

static SNAKE_DISALLOWED: Lazy<Regex> = Lazy::new(|| regex(r"[^a-zA-Z0-9\s_]"));
static SNAKE_SEPARATORS: Lazy<Regex> = Lazy::new(|| regex(r"[\s-]+"));
static UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| regex(r"_+"));

fn split_humps(text: &str, separator: char) -> String {
    CAMEL_HUMP
        .replace_all(text, |caps: &Captures| {
            format!("{}{separator}{}", &caps[1], &caps[2])
        })
        .into_owned()
}

/// Hump split plus `_`/`-` to space, shared by title and sentence case.
fn spaced_words(text: &str) -> String {
    WORD_JOINERS
        .replace_all(&split_humps(text, ' '), " ")
        .into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercased ASCII alphanumeric tokens for the identifier formats.
fn identifier_tokens(text: &str) -> Vec<String> {
    let split = split_humps(text, ' ');
    NOT_ALNUM_OR_SPACE
        .replace_all(&split, " ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

pub(super) fn upper(text: &str) -> String {
    text.to_uppercase()
}

pub(super) fn lower(text: &str) -> String {
    text.to_lowercase()
}

pub(super) fn title(text: &str) -> String {
    let lowered = spaced_words(text).to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending = true;

    for c in lowered.chars() {
        if c.is_whitespace() {
            pending = true;
            out.push(c);
        } else if pending && c.is_alphanumeric() {
            pending = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub(super) fn sentence(text: &str) -> String {
    let lowered = spaced_words(text).to_lowercase();
    SENTENCE_START
        .replace_all(&lowered, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

pub(super) fn camel(text: &str) -> String {
    identifier_tokens(text)
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if i == 0 {
                token.clone()
            } else {
                capitalize(token)
            }
        })
        .collect()
}

pub(super) fn pascal(text: &str) -> String {
    identifier_tokens(text)
        .iter()
        .map(|token| capitalize(token))
        .collect()
}

pub(super) fn kebab(text: &str) -> String {
    let split = split_humps(text, '-');
    let kept = KEBAB_DISALLOWED.replace_all(&split, "");
    let joined = KEBAB_SEPARATORS.replace_all(&kept, "-").to_lowercase();
    HYPHEN_RUN
        .replace_all(joined.trim_matches('-'), "-")
        .into_owned()
}

pub(super) fn snake(text: &str) -> String {
    let split = split_humps(text, '_');
    let kept = SNAKE_DISALLOWED.replace_all(&split, "");
    let joined = SNAKE_SEPARATORS.replace_all(&kept, "_").to_lowercase();
    UNDERSCORE_RUN
        .replace_all(joined.trim_matches('_'), "_")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_and_lower_ignore_boundaries() {
        assert_eq!(upper("helloWorld ß"), "HELLOWORLD SS");
        assert_eq!(lower("HelloWorld"), "helloworld");
    }

    #[test]
    fn title_splits_humps_and_joiners() {
        assert_eq!(title("helloWorld foo_bar-baz"), "Hello World Foo Bar Baz");
        assert_eq!(title("THE QUICK brown"), "The Quick Brown");
    }

    #[test]
    fn title_capitalizes_first_alphanumeric_of_each_word() {
        assert_eq!(title("it's a (quiet) day"), "It's A (Quiet) Day");
        assert_eq!(title("  padded   words "), "  Padded   Words ");
    }

    #[test]
    fn sentence_capitalizes_after_terminators() {
        assert_eq!(
            sentence("hello there. how ARE you? fine!  ok"),
            "Hello there. How are you? Fine!  Ok"
        );
    }

    #[test]
    fn sentence_needs_whitespace_after_terminator() {
        assert_eq!(sentence("v1.2 release"), "V1.2 release");
    }

    #[test]
    fn sentence_normalizes_humps_and_joiners() {
        assert_eq!(sentence("someVariable_name"), "Some variable name");
    }

    #[test]
    fn camel_from_mixed_separators() {
        assert_eq!(camel("hello_world-Test"), "helloWorldTest");
        assert_eq!(camel("  Hello   big WORLD  "), "helloBigWorld");
        assert_eq!(camel("XMLHttpRequest"), "xmlhttpRequest");
        assert_eq!(camel("user.name@2x"), "userName2x");
    }

    #[test]
    fn pascal_capitalizes_every_token() {
        assert_eq!(pascal("hello_world-Test"), "HelloWorldTest");
        assert_eq!(pascal("alreadyCamel"), "AlreadyCamel");
    }

    #[test]
    fn kebab_from_various_inputs() {
        assert_eq!(kebab("Hello World"), "hello-world");
        assert_eq!(kebab("helloWorld"), "hello-world");
        assert_eq!(kebab("--Leading  and trailing--"), "leading-and-trailing");
        assert_eq!(kebab("a - b"), "a-b");
    }

    #[test]
    fn kebab_strips_underscores_before_joining() {
        // `_` is not in the kept set, so it vanishes instead of separating
        assert_eq!(kebab("hello_world"), "helloworld");
    }

    #[test]
    fn snake_from_various_inputs() {
        assert_eq!(snake("Hello World"), "hello_world");
        assert_eq!(snake("helloWorld"), "hello_world");
        assert_eq!(snake("__a  b__"), "a_b");
        assert_eq!(snake("hello-world"), "helloworld");
    }
}
