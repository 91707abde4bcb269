//! Test fixtures and factory functions for creating source lists.

use serde_json::json;

/// Irregular verbs with and without `/` alternatives.
pub const VERBS_JSON: &str = r#"[
    {"swedish": "vara", "infinitive": "be", "past": "was/were", "pastParticiple": "been"},
    {"swedish": "gå", "infinitive": "go", "past": "went", "pastParticiple": "gone"},
    {"swedish": "få", "infinitive": "get", "past": "got", "pastParticiple": "got/gotten"}
]"#;

/// Generate a word list with `count` entries.
pub fn words_json(count: usize) -> String {
    let words: Vec<_> = (0..count)
        .map(|i| json!({ "english": format!("word {}", i), "swedish": format!("ord {}", i) }))
        .collect();
    serde_json::Value::Array(words).to_string()
}

/// Vocabulary used for grading properties.
pub fn vocabulary() -> Vec<(&'static str, &'static str)> {
    vec![
        ("cat", "katt"),
        ("apple", "äpple"),
        ("thank you", "tack"),
        ("island", "ö"),
        ("How are you?", "Hur mår du?"),
        ("good morning", "god morgon"),
    ]
}
