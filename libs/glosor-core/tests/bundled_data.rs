//! The lists shipped in `data/` load cleanly.

use glosor_core::{grade, load_pool, parse_verbs, parse_words, Mode, PoolEntry, QuizItem};
use std::path::PathBuf;

fn data_file(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

#[test]
fn test_word_list_loads() {
    let content = data_file("words.json");
    let words = parse_words(&content).unwrap();
    let pool = load_pool(Mode::Words, &content).unwrap();
    assert!(!words.is_empty());
    assert_eq!(pool.len(), words.len());
}

#[test]
fn test_verb_list_loads() {
    let content = data_file("irregular-verbs.json");
    let verbs = parse_verbs(&content).unwrap();
    let pool = load_pool(Mode::Verbs, &content).unwrap();
    assert_eq!(pool.len(), 3 * verbs.len());
}

#[test]
fn test_every_verb_form_accepts_its_first_spelling() {
    let pool = load_pool(Mode::Verbs, &data_file("irregular-verbs.json")).unwrap();
    for entry in pool.entries {
        let PoolEntry::Verb(verb, form) = entry else {
            panic!("word entry in verb pool");
        };
        let item = QuizItem::verb(verb, form);
        let first = item.canonical_answer().split('/').next().unwrap_or_default().to_string();
        assert!(grade(&item, &first).is_correct, "{:?}", item);
    }
}
