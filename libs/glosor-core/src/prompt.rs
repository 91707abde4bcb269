//! Prompt text shown for the current item.

use crate::types::{Direction, QuizItem, VerbForm};
use serde::Serialize;

/// Everything a front end needs to render one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    /// Instruction line.
    pub question: String,
    /// The word being asked about.
    pub display: String,
    /// Sentence starter hinting at the verb form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<&'static str>,
    pub placeholder: String,
}

impl Prompt {
    pub fn for_item(item: &QuizItem) -> Self {
        match item {
            QuizItem::Word(word) => {
                let (source, target, display) = match word.direction {
                    Direction::ToSwedish => ("English", "Swedish", &word.pair.english),
                    Direction::ToEnglish => ("Swedish", "English", &word.pair.swedish),
                };
                Self {
                    question: format!("Translate this {} word to {}:", source, target),
                    display: display.clone(),
                    clue: None,
                    placeholder: format!("Type the {} translation...", target),
                }
            }
            QuizItem::Verb(verb) => Self {
                question: format!("What is the {} form?", verb.test_form.label()),
                display: verb.verb.swedish.clone(),
                clue: Some(form_clue(verb.test_form)),
                placeholder: "Type the English verb form...".to_string(),
            },
        }
    }
}

fn form_clue(form: VerbForm) -> &'static str {
    match form {
        VerbForm::Infinitive => "To...",
        VerbForm::Past => "Yesterday I...",
        VerbForm::PastParticiple => "I have/had...",
    }
}

/// Position within the deck, one-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// Label such as `Word 3 of 40`.
    pub fn label(&self, item: &QuizItem) -> String {
        let noun = match item {
            QuizItem::Word(_) => "Word",
            QuizItem::Verb(_) => "Verb",
        };
        format!("{} {} of {}", noun, self.current, self.total)
    }
}
