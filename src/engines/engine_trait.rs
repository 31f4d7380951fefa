//! Engine abstraction layer.
//!
//! Defines the one call a move-picking strategy must answer so drivers
//! (harnesses, binaries, tests) can swap strategies behind a single trait.

use crate::game_state::GameState;
use crate::move_description::MoveDescription;

pub trait Engine {
    fn name(&self) -> &str;

    /// Called when a fresh game begins; stateless engines can ignore it.
    fn new_game(&mut self) {}

    /// Picks a legal move for the side to move, or `None` when that side has
    /// no legal move at all.
    fn choose_move(&mut self, game_state: &GameState) -> Option<MoveDescription>;
}
