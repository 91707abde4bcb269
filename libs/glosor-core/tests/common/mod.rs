//! Shared fixtures for glosor-core integration tests.

pub mod fixtures;

use glosor_core::{Mode, SessionController};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Controller with both decks loaded from the fixture lists.
pub fn loaded_controller(seed: u64) -> SessionController<StdRng> {
    let mut controller = SessionController::new(Mode::Words, StdRng::seed_from_u64(seed));
    controller.deck_loaded(
        Mode::Words,
        glosor_core::load_pool(Mode::Words, &fixtures::words_json(5)),
    );
    controller.deck_loaded(
        Mode::Verbs,
        glosor_core::load_pool(Mode::Verbs, fixtures::VERBS_JSON),
    );
    controller
}
