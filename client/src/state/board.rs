//! Board state provided to components through Leptos context.
//!
//! DESIGN
//! ======
//! `BoardState` wraps the `notes` engine together with the random source used
//! for new notes. Components mutate it through `RwSignal::update` and read it
//! through `with`, so every change is one synchronous engine call followed by
//! a re-render. Each call's `Action` is logged to the browser console.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use notes::engine::{Action, BoardCore};
use notes::geometry::Size;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::util::clock;

/// Board engine plus the RNG that places and colors new notes.
#[derive(Debug)]
pub struct BoardState {
    core: BoardCore,
    rng: SmallRng,
}

impl BoardState {
    /// Board seeded with the welcome notes; `now_ms` also seeds the RNG.
    pub fn new(now_ms: u64) -> Self {
        let mut core = BoardCore::new();
        core.seed_welcome_notes(now_ms);
        Self { core, rng: SmallRng::seed_from_u64(now_ms) }
    }

    /// Read-only access to the engine for rendering.
    pub fn core(&self) -> &BoardCore {
        &self.core
    }

    /// Append a randomly placed, randomly colored note.
    pub fn add_note(&mut self, now_ms: u64) -> Action {
        let action = self.core.add_note(&mut self.rng, now_ms);
        log_action(&action);
        action
    }

    /// Run one engine operation and log what it did.
    pub fn dispatch(&mut self, op: impl FnOnce(&mut BoardCore) -> Action) -> Action {
        let action = op(&mut self.core);
        log_action(&action);
        action
    }

    /// Mirror the editor's text input into the engine's edit buffer.
    pub fn set_edit_buffer(&mut self, text: String) {
        self.core.set_edit_buffer(text);
    }

    /// Record a new container size. Returns how many notes were pulled back
    /// inside the board.
    pub fn resize(&mut self, size: Size) -> usize {
        let moved = self.core.set_board_size(size);
        for action in &moved {
            log_action(action);
        }
        moved.len()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(clock::now_ms())
    }
}

fn log_action(action: &Action) {
    #[cfg(feature = "hydrate")]
    {
        match action {
            Action::None => {}
            Action::NoteMoved { .. } => log::trace!("board: {action:?}"),
            _ => log::debug!("board: {action:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = action;
    }
}
