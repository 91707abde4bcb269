//! Answer grading for typed answers.

use crate::types::{QuizItem, Verdict};

/// Separator between accepted alternatives, e.g. `"was/were"`.
pub const ALTERNATIVE_SEPARATOR: char = '/';

/// Characters stripped from answers before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
    /// `?` and `!`.
    Basic,
    /// `?`, `!` and `,`.
    WithCommas,
}

impl Punctuation {
    /// Punctuation set applied to `item`: word translations also ignore commas.
    pub fn for_item(item: &QuizItem) -> Self {
        match item {
            QuizItem::Word(_) => Self::WithCommas,
            QuizItem::Verb(_) => Self::Basic,
        }
    }

    fn strips(self, c: char) -> bool {
        match c {
            '?' | '!' => true,
            ',' => self == Self::WithCommas,
            _ => false,
        }
    }
}

/// Strip whitespace and punctuation, then lower-case.
pub fn normalize(s: &str, punctuation: Punctuation) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && !punctuation.strips(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Whether a normalized answer matches a normalized canonical answer.
///
/// A canonical answer containing `/` accepts any one alternative as a whole.
pub fn matches_canonical(answer: &str, canonical: &str) -> bool {
    if canonical.contains(ALTERNATIVE_SEPARATOR) {
        canonical
            .split(ALTERNATIVE_SEPARATOR)
            .any(|alternative| alternative == answer)
    } else {
        answer == canonical
    }
}

/// Grade a typed answer against the item's expected answer.
///
/// Blank input must be rejected by the caller before grading.
pub fn grade(item: &QuizItem, input: &str) -> Verdict {
    let canonical_answer = item.canonical_answer();
    let punctuation = Punctuation::for_item(item);

    let answer = normalize(input, punctuation);
    let canonical = normalize(canonical_answer, punctuation);

    Verdict {
        is_correct: matches_canonical(&answer, &canonical),
        canonical_answer: canonical_answer.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, VerbForm, VerbRecord, VocabularyPair};

    fn word(english: &str, swedish: &str, direction: Direction) -> QuizItem {
        QuizItem::word(
            VocabularyPair {
                english: english.to_string(),
                swedish: swedish.to_string(),
            },
            direction,
        )
    }

    fn vara(form: VerbForm) -> QuizItem {
        QuizItem::verb(
            VerbRecord {
                swedish: "vara".to_string(),
                infinitive: "be".to_string(),
                past: "was/were".to_string(),
                past_participle: "been".to_string(),
            },
            form,
        )
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello World?! ", Punctuation::Basic), "helloworld");
        assert_eq!(normalize("Ja, tack", Punctuation::Basic), "ja,tack");
        assert_eq!(normalize("Ja, tack", Punctuation::WithCommas), "jatack");
        assert_eq!(normalize("ÄPPLE\t", Punctuation::WithCommas), "äpple");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["  Was / Were? ", "Ja, TACK!", "i have\u{a0}been", "Övergå"] {
            for punctuation in [Punctuation::Basic, Punctuation::WithCommas] {
                let once = normalize(input, punctuation);
                assert_eq!(normalize(&once, punctuation), once);
            }
        }
    }

    #[test]
    fn test_word_to_swedish() {
        let item = word("cat", "katt", Direction::ToSwedish);

        let verdict = grade(&item, "Katt?");
        assert!(verdict.is_correct);

        let verdict = grade(&item, "dog");
        assert!(!verdict.is_correct);
        assert_eq!(verdict.canonical_answer, "katt");
    }

    #[test]
    fn test_word_to_english() {
        let item = word("cat", "katt", Direction::ToEnglish);
        assert!(grade(&item, "CAT!").is_correct);
        assert!(!grade(&item, "katt").is_correct);
        assert_eq!(grade(&item, "katt").canonical_answer, "cat");
    }

    #[test]
    fn test_word_ignores_commas_and_spacing() {
        let item = word("thank you", "tack, tack", Direction::ToSwedish);
        assert!(grade(&item, "tacktack").is_correct);
        assert!(grade(&item, "Tack tack!").is_correct);

        let item = word("thank you", "tack", Direction::ToEnglish);
        assert!(grade(&item, "Thank you").is_correct);
        assert!(grade(&item, "thankyou").is_correct);
    }

    #[test]
    fn test_verb_alternatives() {
        let item = vara(VerbForm::Past);
        assert!(grade(&item, "WERE").is_correct);
        assert!(grade(&item, "was ").is_correct);
        assert!(!grade(&item, "wasp").is_correct);
        assert!(!grade(&item, "waswere").is_correct);
        assert!(!grade(&item, "wasorwere").is_correct);
        assert_eq!(grade(&item, "wasp").canonical_answer, "was/were");
    }

    #[test]
    fn test_verb_keeps_commas() {
        let item = vara(VerbForm::PastParticiple);
        assert!(grade(&item, "been?").is_correct);
        assert!(!grade(&item, "been,").is_correct);
    }

    #[test]
    fn test_verb_single_form() {
        let item = vara(VerbForm::Infinitive);
        assert!(grade(&item, " Be ").is_correct);
        assert!(!grade(&item, "bee").is_correct);
    }

    #[test]
    fn test_alternatives_in_word_answers() {
        let item = word("big/large", "stor", Direction::ToEnglish);
        assert!(grade(&item, "Large").is_correct);
        assert!(grade(&item, "big").is_correct);
        assert!(!grade(&item, "big/large").is_correct);
    }

    #[test]
    fn test_matches_canonical() {
        assert!(matches_canonical("be", "be"));
        assert!(matches_canonical("were", "was/were"));
        assert!(!matches_canonical("", "was/were"));
        assert!(!matches_canonical("wa", "was/were"));
    }
}
