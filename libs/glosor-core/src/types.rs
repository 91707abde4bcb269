//! Core types for the drill trainer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which deck the learner is drilling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Words,
    Verbs,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Words
    }
}

impl Mode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Verbs => "verbs",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "words" => Some(Self::Words),
            "verbs" => Some(Self::Verbs),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// English/Swedish vocabulary pair as stored in the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyPair {
    pub english: String,
    pub swedish: String,
}

/// Irregular verb with its three English forms.
///
/// Each English field may hold several accepted spellings joined by `/`,
/// e.g. `"was/were"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbRecord {
    pub swedish: String,
    pub infinitive: String,
    pub past: String,
    pub past_participle: String,
}

impl VerbRecord {
    /// The English field drilled by `form`.
    pub fn form(&self, form: VerbForm) -> &str {
        match form {
            VerbForm::Infinitive => &self.infinitive,
            VerbForm::Past => &self.past,
            VerbForm::PastParticiple => &self.past_participle,
        }
    }
}

/// Translation direction of a word item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// English prompt, Swedish answer.
    ToSwedish,
    /// Swedish prompt, English answer.
    ToEnglish,
}

/// English conjugation form drilled by a verb item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerbForm {
    Infinitive,
    Past,
    PastParticiple,
}

impl VerbForm {
    /// Every form, in the order the loader expands them.
    pub const ALL: [VerbForm; 3] = [Self::Infinitive, Self::Past, Self::PastParticiple];

    /// Human-readable form name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Infinitive => "infinitive",
            Self::Past => "past",
            Self::PastParticiple => "past participle",
        }
    }
}

/// A word item ready to be quizzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordItem {
    #[serde(flatten)]
    pub pair: VocabularyPair,
    pub direction: Direction,
}

/// A verb item ready to be quizzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbItem {
    #[serde(flatten)]
    pub verb: VerbRecord,
    pub test_form: VerbForm,
}

/// One drillable unit in a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuizItem {
    Word(WordItem),
    Verb(VerbItem),
}

impl QuizItem {
    /// Create a word item.
    pub fn word(pair: VocabularyPair, direction: Direction) -> Self {
        Self::Word(WordItem { pair, direction })
    }

    /// Create a verb item.
    pub fn verb(verb: VerbRecord, test_form: VerbForm) -> Self {
        Self::Verb(VerbItem { verb, test_form })
    }

    /// Mode this item belongs to.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Word(_) => Mode::Words,
            Self::Verb(_) => Mode::Verbs,
        }
    }

    /// The expected answer as written in the source, alternatives included.
    pub fn canonical_answer(&self) -> &str {
        match self {
            Self::Word(item) => match item.direction {
                Direction::ToSwedish => &item.pair.swedish,
                Direction::ToEnglish => &item.pair.english,
            },
            Self::Verb(item) => item.verb.form(item.test_form),
        }
    }
}

/// Unshuffled loader output entry.
///
/// Word entries carry no direction: it is drawn by the shuffler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolEntry {
    Word(VocabularyPair),
    Verb(VerbRecord, VerbForm),
}

/// Unshuffled quizzable entries for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub mode: Mode,
    pub entries: Vec<PoolEntry>,
}

impl Pool {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shuffled, ordered items for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub mode: Mode,
    pub items: Vec<QuizItem>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Running score for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    /// Record one graded answer.
    pub fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    /// Percentage of correct answers, rounded. `None` before the first answer.
    pub fn percent(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        Some((f64::from(self.correct) * 100.0 / f64::from(self.total)).round() as u32)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)?;
        if let Some(percent) = self.percent() {
            write!(f, " ({}%)", percent)?;
        }
        Ok(())
    }
}

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_correct: bool,
    /// Expected answer as written in the source.
    pub canonical_answer: String,
}
