//! King-safety filtering of pseudo-moves.
//!
//! Each candidate is tested on a hypothetical copy of the state: the piece is
//! lifted from its start square and dropped on the destination, overwriting
//! any capture. The special effects of the move (en passant removal, rook
//! relocation) are deliberately NOT simulated; only the plain overwrite is,
//! matching the adjudicated game's safety test.

use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::attack_checks::{find_king, is_square_under_attack};
use crate::move_generation::move_generator::generate_potential_moves;
use crate::piece_team::PieceTeam;

/// Whether moving `mover`'s piece from `start` to `stop` leaves `mover`'s
/// king unattacked.
///
/// When the king cannot be located on the hypothetical board the move is
/// treated as unsafe; a kingless side has no safe moves.
pub fn is_move_safe(
    game: &GameState,
    start: &BoardLocation,
    stop: &BoardLocation,
    mover: PieceTeam,
) -> bool {
    let mut trial = game.clone();
    let moving = trial.piece_register.take_piece(start);
    *trial.piece_register.at(stop) = moving;

    match find_king(&trial.piece_register, mover) {
        Some(king_location) => !is_square_under_attack(&trial, &king_location, mover),
        None => false,
    }
}

/// The piece's pseudo-moves with every king-exposing candidate discarded.
pub fn generate_legal_moves(
    game: &GameState,
    start: &BoardLocation,
    mover: PieceTeam,
) -> Vec<MoveDescription> {
    generate_potential_moves(game, start, mover)
        .into_iter()
        .filter(|candidate| is_move_safe(game, &candidate.start, &candidate.stop, mover))
        .collect()
}
