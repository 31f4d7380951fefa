//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and the self-play demo.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::move_generator::generate_all_moves;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "arbiter_random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<MoveDescription> {
        let legal_moves = generate_all_moves(game_state);
        let mut rng = rand::rng();
        legal_moves.as_slice().choose(&mut rng).copied()
    }
}
