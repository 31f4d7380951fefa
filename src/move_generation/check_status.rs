//! Check and checkmate adjudication.

use crate::game_state::GameState;
use crate::move_generation::attack_checks::{find_king, is_square_under_attack};
use crate::move_generation::legal_move_filter::generate_legal_moves;
use crate::piece_team::PieceTeam;

/// The answer to a status query for one side.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CheckStatus {
    /// The side's king is not attacked.
    Clear,
    /// The king is attacked but at least one legal move exists.
    Check,
    /// The king is attacked and no piece of the side has a legal move.
    Checkmate,
}

/// Classifies `side`'s situation.
///
/// A side without a king reports `Clear`: a kingless board is a degraded,
/// non-playable state, not a mate.
pub fn inspect_check_status(game: &GameState, side: PieceTeam) -> CheckStatus {
    let Some(king_location) = find_king(&game.piece_register, side) else {
        return CheckStatus::Clear;
    };
    if !is_square_under_attack(game, &king_location, side) {
        return CheckStatus::Clear;
    }
    // In check: look for any legal reply across the whole piece set
    for (location, piece) in game.piece_register.iter() {
        if piece.team == side && !generate_legal_moves(game, &location, side).is_empty() {
            return CheckStatus::Check;
        }
    }
    CheckStatus::Checkmate
}

/// Whether `side` is in check with zero legal responses.
pub fn is_checkmate(game: &GameState, side: PieceTeam) -> bool {
    inspect_check_status(game, side) == CheckStatus::Checkmate
}
