//! Cross-module behaviour of the pure tools, exercised through the public API.

use dk_core::clipboard::{classify, relative_age, ClipboardEntry, ClipboardHistory, EntryKind};
use dk_core::codec;
use dk_core::color::{format_all, hex_to_rgb};
use dk_core::text_case::{camel_case, convert_all, kebab_case, pascal_case, snake_case};
use dk_core::ToolError;

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "hello",
    "Hello World",
    "hello_world-Test",
    "someCamelCaseValue",
    "XMLHttpRequest",
    "  --mixed__separators  and   spaces--  ",
    "Ünïcödé wörds ß",
    "emoji 🎉 party!",
    "sentence one. sentence two? three!",
    "tabs\tand\nnewlines",
    "a_b-c d.e/f",
];

#[test]
fn base64_round_trips_any_text() {
    for text in SAMPLES {
        let encoded = codec::encode(text).unwrap();
        assert!(codec::is_valid_base64(&encoded), "{encoded}");
        assert_eq!(codec::decode(&encoded).unwrap(), *text);
    }
}

#[test]
fn malformed_base64_is_an_error_not_empty() {
    assert!(matches!(codec::decode("abc$"), Err(ToolError::InvalidFormat(_))));
}

#[test]
fn hex_reformats_to_uppercase() {
    for hex in ["#000000", "#ffffff", "#3b82f6", "#c0ffee", "#ABCDEF"] {
        let rgb = hex_to_rgb(hex).unwrap();
        assert_eq!(rgb.to_hex(), hex.to_uppercase());
    }
}

#[test]
fn reference_color_formats() {
    let formats = format_all("#3B82F6").unwrap();
    assert_eq!(formats.hex, "#3B82F6");
    assert_eq!(formats.rgb, "rgb(59, 130, 246)");
    assert_eq!(formats.hsl, "hsl(217, 91%, 60%)");
}

#[test]
fn kebab_and_snake_are_idempotent() {
    for text in SAMPLES {
        let kebab = kebab_case(text);
        assert_eq!(kebab_case(&kebab), kebab, "kebab of {text:?}");

        let snake = snake_case(text);
        assert_eq!(snake_case(&snake), snake, "snake of {text:?}");
    }
}

#[test]
fn identifier_cases_of_mixed_separators() {
    assert_eq!(camel_case("hello_world-Test"), "helloWorldTest");
    assert_eq!(pascal_case("hello_world-Test"), "HelloWorldTest");
}

#[test]
fn blank_input_converts_to_empty_strings() {
    assert!(convert_all(" \t").iter().all(|(_, out)| out.is_empty()));
}

#[test]
fn classification_examples() {
    assert_eq!(classify("https://example.com"), EntryKind::Url);
    assert_eq!(classify("a@b.com"), EntryKind::Email);
    assert_eq!(classify("hello"), EntryKind::Text);
}

#[test]
fn history_keeps_fifty_most_recent() {
    let mut history = ClipboardHistory::new();
    let now = chrono::Utc::now();
    for i in 0..51 {
        history
            .insert(ClipboardEntry::new(format!("entry {i}"), now))
            .unwrap();
    }

    assert_eq!(history.len(), 50);
    let contents: Vec<String> = history.entries().iter().map(|e| e.content.clone()).collect();
    let expected: Vec<String> = (1..51).rev().map(|i| format!("entry {i}")).collect();
    assert_eq!(contents, expected);

    let newest = history.entries()[0].content.clone();
    assert_eq!(
        history.insert(ClipboardEntry::new(newest, now)),
        Err(ToolError::DuplicateContent)
    );
    assert_eq!(history.len(), 50);
}

#[test]
fn relative_age_at_ninety_seconds() {
    let created = chrono::Utc::now();
    let later = created + chrono::Duration::seconds(90);
    assert_eq!(relative_age(created, later), "1m ago");
}
