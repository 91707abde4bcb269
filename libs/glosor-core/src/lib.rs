//! Core library for the English/Swedish drill trainer.
//!
//! Provides:
//! - Deck loader for word and irregular-verb lists
//! - Deck shuffling with per-session translation directions
//! - Answer grading with normalization and `/` alternatives
//! - Session controller (position, score, restart, mode switching)
//! - Shared types (QuizItem, Deck, Score, Verdict, etc.)

pub mod error;
pub mod grading;
pub mod loader;
pub mod prompt;
pub mod session;
pub mod shuffle;
pub mod types;

pub use error::{LoadError, Result, SessionError};
pub use grading::{grade, normalize, Punctuation};
pub use loader::{load_pool, load_verbs, load_words, parse_verbs, parse_words};
pub use prompt::{Progress, Prompt};
pub use session::{Advance, Availability, Phase, Session, SessionController, Status};
pub use shuffle::{reshuffle, shuffle};
pub use types::{
    Deck, Direction, Mode, Pool, PoolEntry, QuizItem, Score, Verdict, VerbForm, VerbItem,
    VerbRecord, VocabularyPair, WordItem,
};
