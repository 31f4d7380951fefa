//! Committing a chosen move to the authoritative state.
//!
//! `apply_move_to_game` is the boundary entry point: it re-derives the legal
//! set for the start square and rejects destinations outside it. The
//! unchecked variant trusts its caller (engines and the checked wrapper, which
//! only hand it generator-produced moves) and performs no validation.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::GameState;
use crate::move_description::{MoveDescription, MoveTypes};
use crate::move_generation::legal_move_filter::generate_legal_moves;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Applies a generator-produced move without re-validating it.
///
/// Board effects, in order: the en passant victim or the castling rook is
/// handled first, the moving piece is then placed (overwriting any captured
/// piece), the moved-flags are updated from the piece's identity and start
/// column, the en passant window is reset, and the turn flips.
pub fn apply_move_to_game_unchecked(
    game: &GameState,
    chess_move: &MoveDescription,
) -> Result<GameState, ChessErrors> {
    let mut result = game.clone();
    let piece = result
        .piece_register
        .take_piece(&chess_move.start)
        .ok_or(ChessErrors::TryingToMoveFromEmptySquare(chess_move.start))?;

    match chess_move.move_type {
        MoveTypes::EnPassant(victim) => {
            // the captured pawn does not stand on the destination square
            result.piece_register.take_piece(&victim);
        }
        MoveTypes::Castling {
            rook_start,
            rook_stop,
        } => {
            // a vanished corner rook degrades to a no-op relocation
            if let Some(rook) = result.piece_register.take_piece(&rook_start) {
                *result.piece_register.at(&rook_stop) = Some(rook);
            }
        }
        MoveTypes::Regular | MoveTypes::DoubleStep(_) => {}
    }

    // Move the piece, overwriting any captured piece
    *result.piece_register.at(&chess_move.stop) = Some(piece);

    // Moved-flag bookkeeping, keyed on identity and start column
    match piece.class {
        PieceClass::King => match piece.team {
            PieceTeam::Light => result.special_flags.light_king_moved = true,
            PieceTeam::Dark => result.special_flags.dark_king_moved = true,
        },
        PieceClass::Rook => match (piece.team, chess_move.start.1) {
            (PieceTeam::Light, 0) => result.special_flags.light_rook_queenside_moved = true,
            (PieceTeam::Light, 7) => result.special_flags.light_rook_kingside_moved = true,
            (PieceTeam::Dark, 0) => result.special_flags.dark_rook_queenside_moved = true,
            (PieceTeam::Dark, 7) => result.special_flags.dark_rook_kingside_moved = true,
            _ => {}
        },
        _ => {}
    }

    // The en passant window lasts exactly one reply
    result.special_flags.en_passant_location = match chess_move.move_type {
        MoveTypes::DoubleStep(skipped) => Some(skipped),
        _ => None,
    };

    result.turn = result.turn.opposite();
    Ok(result)
}

/// Applies the move `start -> stop` for the side to move after confirming
/// `stop` is in the piece's current legal set.
pub fn apply_move_to_game(
    game: &GameState,
    start: &BoardLocation,
    stop: &BoardLocation,
) -> Result<GameState, ChessErrors> {
    let chosen = generate_legal_moves(game, start, game.turn)
        .into_iter()
        .find(|candidate| candidate.stop == *stop)
        .ok_or(ChessErrors::IllegalMove((*start, *stop)))?;
    apply_move_to_game_unchecked(game, &chosen)
}
