//! Grading properties over whole vocabularies.

mod common;

use common::fixtures;
use glosor_core::{grade, normalize, parse_verbs, Direction, Punctuation, QuizItem, VerbForm, VocabularyPair};

fn item(english: &str, swedish: &str, direction: Direction) -> QuizItem {
    QuizItem::word(
        VocabularyPair {
            english: english.to_string(),
            swedish: swedish.to_string(),
        },
        direction,
    )
}

/// Exact canonical answer is accepted in any casing and with trailing noise.
#[test]
fn test_canonical_answer_always_accepted() {
    for (english, swedish) in fixtures::vocabulary() {
        for direction in [Direction::ToSwedish, Direction::ToEnglish] {
            let item = item(english, swedish, direction);
            let answer = item.canonical_answer().to_string();
            for variant in [
                answer.clone(),
                answer.to_uppercase(),
                answer.to_lowercase(),
                format!("{}?", answer),
                format!("{}!", answer),
                format!("  {} \n", answer),
                format!("{}?!  ", answer.to_uppercase()),
            ] {
                assert!(grade(&item, &variant).is_correct, "{:?} for {:?}", variant, item);
            }
        }
    }
}

/// Cat/katt scenario: Swedish answer requested.
#[test]
fn test_cat_scenario() {
    let item = item("cat", "katt", Direction::ToSwedish);
    assert!(grade(&item, "Katt?").is_correct);

    let verdict = grade(&item, "dog");
    assert!(!verdict.is_correct);
    assert_eq!(verdict.canonical_answer, "katt");
}

/// Every `/` alternative is accepted on its own, never concatenated.
#[test]
fn test_each_alternative_accepted() {
    let verbs = parse_verbs(fixtures::VERBS_JSON).unwrap();
    for verb in verbs {
        for form in VerbForm::ALL {
            let item = QuizItem::verb(verb.clone(), form);
            let canonical = item.canonical_answer().to_string();
            if !canonical.contains('/') {
                continue;
            }
            let alternatives: Vec<&str> = canonical.split('/').collect();
            for alternative in &alternatives {
                assert!(grade(&item, alternative).is_correct);
                assert!(grade(&item, &alternative.to_uppercase()).is_correct);
            }
            assert!(!grade(&item, &alternatives.concat()).is_correct);
            assert!(!grade(&item, &alternatives.join("or")).is_correct);
        }
    }
}

/// Vara scenario: past tense.
#[test]
fn test_vara_scenario() {
    let verbs = parse_verbs(fixtures::VERBS_JSON).unwrap();
    let item = QuizItem::verb(verbs[0].clone(), VerbForm::Past);
    assert!(grade(&item, "WERE").is_correct);
    assert!(grade(&item, "was ").is_correct);
    assert!(!grade(&item, "wasp").is_correct);
}

#[test]
fn test_normalize_is_idempotent() {
    for (english, swedish) in fixtures::vocabulary() {
        for text in [english, swedish] {
            for punctuation in [Punctuation::Basic, Punctuation::WithCommas] {
                let once = normalize(text, punctuation);
                assert_eq!(normalize(&once, punctuation), once);
            }
        }
    }
}
