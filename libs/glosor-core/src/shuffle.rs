//! Deck randomization.
//!
//! Every call is an independent uniform permutation. Word directions are
//! drawn again on every call; verb forms are fixed by the loader so that one
//! pass over a verb deck drills each verb in all three forms.

use crate::types::{Deck, Direction, Pool, PoolEntry, QuizItem};
use rand::seq::SliceRandom;
use rand::Rng;

/// Build a shuffled deck from a freshly loaded pool.
pub fn shuffle<R: Rng + ?Sized>(pool: &Pool, rng: &mut R) -> Deck {
    let mut items: Vec<QuizItem> = pool
        .entries
        .iter()
        .map(|entry| match entry {
            PoolEntry::Word(pair) => QuizItem::word(pair.clone(), random_direction(rng)),
            PoolEntry::Verb(verb, form) => QuizItem::verb(verb.clone(), *form),
        })
        .collect();
    items.shuffle(rng);

    tracing::debug!(mode = %pool.mode, items = items.len(), "shuffled deck");
    Deck {
        mode: pool.mode,
        items,
    }
}

/// Re-permute an existing deck, re-drawing word directions.
pub fn reshuffle<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Deck {
    let mut items = deck.items.clone();
    for item in &mut items {
        if let QuizItem::Word(word) = item {
            word.direction = random_direction(rng);
        }
    }
    items.shuffle(rng);

    tracing::debug!(mode = %deck.mode, items = items.len(), "reshuffled deck");
    Deck {
        mode: deck.mode,
        items,
    }
}

/// `ToSwedish` with probability one half.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    if rng.random_bool(0.5) {
        Direction::ToSwedish
    } else {
        Direction::ToEnglish
    }
}
