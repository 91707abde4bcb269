//! Session controller.
//!
//! A [`Session`] owns one shuffled deck, the position in it and the running
//! score. The [`SessionController`] owns the per-mode deck slots, feeds load
//! completions into them and replaces the session on mode switches.

use crate::error::{LoadError, SessionError};
use crate::grading::grade;
use crate::prompt::{Progress, Prompt};
use crate::shuffle::{reshuffle, shuffle};
use crate::types::{Deck, Mode, Pool, QuizItem, Score, Verdict};
use rand::Rng;

/// Per-item state of an active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Answered(Verdict),
    /// Advanced past the last item.
    Finished,
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Self::Unanswered => "unanswered",
            Self::Answered(_) => "answered",
            Self::Finished => "finished",
        }
    }
}

/// Result of advancing past an answered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next,
    /// The deck is exhausted.
    Finished,
}

/// One pass over a shuffled deck.
#[derive(Debug, Clone)]
pub struct Session {
    deck: Deck,
    position: usize,
    phase: Phase,
    score: Score,
}

impl Session {
    /// Start a session at the first item. The deck must not be empty.
    pub fn new(deck: Deck) -> Result<Self, SessionError> {
        if deck.is_empty() {
            return Err(SessionError::DeckUnavailable {
                mode: deck.mode,
                reason: "no items".to_string(),
            });
        }
        Ok(Self {
            deck,
            position: 0,
            phase: Phase::Unanswered,
            score: Score::default(),
        })
    }

    pub fn mode(&self) -> Mode {
        self.deck.mode
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn current_item(&self) -> &QuizItem {
        &self.deck.items[self.position]
    }

    pub fn prompt(&self) -> Prompt {
        Prompt::for_item(self.current_item())
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: self.position + 1,
            total: self.deck.len(),
        }
    }

    /// Verdict for the current item, once answered.
    pub fn last_verdict(&self) -> Option<&Verdict> {
        match &self.phase {
            Phase::Answered(verdict) => Some(verdict),
            _ => None,
        }
    }

    /// Grade an answer to the current item.
    ///
    /// Blank input is ignored and returns `Ok(None)` without touching the
    /// score.
    pub fn submit(&mut self, input: &str) -> Result<Option<Verdict>, SessionError> {
        if self.phase != Phase::Unanswered {
            return Err(self.invalid("submit"));
        }
        if input.trim().is_empty() {
            return Ok(None);
        }

        let verdict = grade(self.current_item(), input);
        self.score.record(verdict.is_correct);
        self.phase = Phase::Answered(verdict.clone());
        Ok(Some(verdict))
    }

    /// Move past the answered item.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if !matches!(self.phase, Phase::Answered(_)) {
            return Err(self.invalid("advance"));
        }

        if self.position + 1 == self.deck.len() {
            self.phase = Phase::Finished;
            tracing::debug!(mode = %self.mode(), score = %self.score, "deck exhausted");
            return Ok(Advance::Finished);
        }

        self.position += 1;
        self.phase = Phase::Unanswered;
        Ok(Advance::Next)
    }

    /// Reshuffle the deck and start over with a zero score.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck = reshuffle(&self.deck, rng);
        self.position = 0;
        self.phase = Phase::Unanswered;
        self.score = Score::default();
    }

    pub fn into_deck(self) -> Deck {
        self.deck
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            action,
            state: self.phase.name(),
        }
    }
}

/// Load state of one mode's deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Loading,
    Ready,
    Unavailable(String),
}

#[derive(Debug)]
enum DeckSlot {
    Pending,
    /// Loaded but never selected.
    Loaded(Pool),
    /// Selected before; kept for reshuffling when selected again.
    Dealt(Deck),
    /// Owned by the active session.
    InSession,
    Unavailable(String),
}

impl DeckSlot {
    fn availability(&self) -> Availability {
        match self {
            Self::Pending => Availability::Loading,
            Self::Loaded(_) | Self::Dealt(_) | Self::InSession => Availability::Ready,
            Self::Unavailable(reason) => Availability::Unavailable(reason.clone()),
        }
    }
}

/// Overall controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Waiting for the active mode's deck.
    Loading,
    Unavailable(String),
    Active { position: usize, answered: Option<bool> },
    Finished,
}

/// Drives sessions for both modes.
pub struct SessionController<R> {
    mode: Mode,
    words: DeckSlot,
    verbs: DeckSlot,
    session: Option<Session>,
    rng: R,
}

impl<R: Rng> SessionController<R> {
    /// Create a controller that starts in `mode` once its deck loads.
    pub fn new(mode: Mode, rng: R) -> Self {
        Self {
            mode,
            words: DeckSlot::Pending,
            verbs: DeckSlot::Pending,
            session: None,
            rng,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn availability(&self, mode: Mode) -> Availability {
        self.slot(mode).availability()
    }

    pub fn status(&self) -> Status {
        match &self.session {
            Some(session) => match session.phase() {
                Phase::Finished => Status::Finished,
                Phase::Unanswered => Status::Active {
                    position: session.position(),
                    answered: None,
                },
                Phase::Answered(verdict) => Status::Active {
                    position: session.position(),
                    answered: Some(verdict.is_correct),
                },
            },
            None => match self.availability(self.mode) {
                Availability::Unavailable(reason) => Status::Unavailable(reason),
                _ => Status::Loading,
            },
        }
    }

    /// Score of the active session, zero while loading.
    pub fn score(&self) -> Score {
        self.session.as_ref().map(Session::score).unwrap_or_default()
    }

    pub fn current_item(&self) -> Option<&QuizItem> {
        self.session.as_ref().map(Session::current_item)
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.session.as_ref().map(Session::prompt)
    }

    pub fn progress(&self) -> Option<Progress> {
        self.session.as_ref().map(Session::progress)
    }

    pub fn is_finished(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_finished)
    }

    /// Record the completion of one source load.
    ///
    /// Loads may complete in any order. If the controller was waiting for
    /// this mode, the session starts.
    pub fn deck_loaded(&mut self, mode: Mode, result: Result<Pool, LoadError>) {
        let slot = self.slot_mut(mode);
        if !matches!(slot, DeckSlot::Pending) {
            tracing::warn!(%mode, "ignoring repeated deck load");
            return;
        }

        *slot = match result {
            Ok(pool) if pool.is_empty() => DeckSlot::Unavailable("no items".to_string()),
            Ok(pool) => DeckSlot::Loaded(pool),
            Err(e) => DeckSlot::Unavailable(e.to_string()),
        };

        if mode == self.mode && self.session.is_none() {
            if let Err(e) = self.deal() {
                tracing::warn!(%mode, error = %e, "cannot start session");
            }
        }
    }

    /// Start a fresh session for `mode`, discarding the current one.
    ///
    /// An unavailable mode cannot be entered; the current session is kept.
    pub fn start(&mut self, mode: Mode) -> Result<(), SessionError> {
        if let DeckSlot::Unavailable(reason) = self.slot(mode) {
            return Err(SessionError::DeckUnavailable {
                mode,
                reason: reason.clone(),
            });
        }
        self.park();
        self.mode = mode;
        tracing::debug!(%mode, "starting session");
        self.deal()
    }

    /// Switch to `mode`. Selecting the active mode restarts it.
    pub fn switch_mode(&mut self, mode: Mode) -> Result<(), SessionError> {
        if mode == self.mode && self.session.is_some() {
            return self.restart();
        }
        self.start(mode)
    }

    pub fn submit(&mut self, input: &str) -> Result<Option<Verdict>, SessionError> {
        self.active_session("submit")?.submit(input)
    }

    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        self.active_session("advance")?.advance()
    }

    /// Reshuffle the current deck and reset position and score.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        match self.session.as_mut() {
            Some(session) => {
                session.restart(&mut self.rng);
                Ok(())
            }
            None => Err(unavailable_or_loading(self.mode, self.slot(self.mode), "restart")),
        }
    }

    fn active_session(&mut self, action: &'static str) -> Result<&mut Session, SessionError> {
        let slot = match self.mode {
            Mode::Words => &self.words,
            Mode::Verbs => &self.verbs,
        };
        match self.session.as_mut() {
            Some(session) => Ok(session),
            None => Err(unavailable_or_loading(self.mode, slot, action)),
        }
    }

    /// Return the active session's deck to its slot.
    fn park(&mut self) {
        if let Some(session) = self.session.take() {
            let mode = session.mode();
            *self.slot_mut(mode) = DeckSlot::Dealt(session.into_deck());
        }
    }

    /// Shuffle the active mode's deck into a new session, if it is loaded.
    fn deal(&mut self) -> Result<(), SessionError> {
        let mode = self.mode;
        let slot = match mode {
            Mode::Words => &mut self.words,
            Mode::Verbs => &mut self.verbs,
        };

        let deck = match std::mem::replace(slot, DeckSlot::InSession) {
            DeckSlot::Loaded(pool) => shuffle(&pool, &mut self.rng),
            DeckSlot::Dealt(deck) => reshuffle(&deck, &mut self.rng),
            DeckSlot::Pending => {
                *slot = DeckSlot::Pending;
                return Ok(());
            }
            DeckSlot::Unavailable(reason) => {
                *slot = DeckSlot::Unavailable(reason.clone());
                return Err(SessionError::DeckUnavailable { mode, reason });
            }
            DeckSlot::InSession => {
                return Err(SessionError::InvalidTransition {
                    action: "deal",
                    state: "in session",
                })
            }
        };

        match Session::new(deck) {
            Ok(session) => {
                self.session = Some(session);
                Ok(())
            }
            Err(e) => {
                *self.slot_mut(mode) = DeckSlot::Unavailable(e.to_string());
                Err(e)
            }
        }
    }

    fn slot(&self, mode: Mode) -> &DeckSlot {
        match mode {
            Mode::Words => &self.words,
            Mode::Verbs => &self.verbs,
        }
    }

    fn slot_mut(&mut self, mode: Mode) -> &mut DeckSlot {
        match mode {
            Mode::Words => &mut self.words,
            Mode::Verbs => &mut self.verbs,
        }
    }
}

fn unavailable_or_loading(mode: Mode, slot: &DeckSlot, action: &'static str) -> SessionError {
    match slot {
        DeckSlot::Unavailable(reason) => SessionError::DeckUnavailable {
            mode,
            reason: reason.clone(),
        },
        _ => SessionError::InvalidTransition {
            action,
            state: "loading",
        },
    }
}
