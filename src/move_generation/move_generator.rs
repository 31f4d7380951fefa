//! Whole-piece and whole-side move generation entry points.

use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::legal_move_filter::generate_legal_moves;
use crate::moves::bishop_moves::generate_potential_moves_bishop;
use crate::moves::king_moves::generate_potential_moves_king;
use crate::moves::knight_moves::generate_potential_moves_knight;
use crate::moves::pawn_moves::generate_potential_moves_pawn;
use crate::moves::queen_moves::generate_potential_moves_queen;
use crate::moves::rook_moves::generate_potential_moves_rook;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Generates the pseudo-moves of the piece on `start`, dispatched by its
/// class. Geometry and occupancy only; king safety is not considered.
///
/// An empty square, or a piece that does not belong to `mover`, yields an
/// empty set.
pub fn generate_potential_moves(
    game: &GameState,
    start: &BoardLocation,
    mover: PieceTeam,
) -> Vec<MoveDescription> {
    let Some(piece) = game.piece_register.view(start) else {
        return Vec::new();
    };
    match piece.class {
        PieceClass::Pawn => generate_potential_moves_pawn(game, start, mover),
        PieceClass::Knight => generate_potential_moves_knight(game, start, mover),
        PieceClass::Bishop => generate_potential_moves_bishop(game, start, mover),
        PieceClass::Rook => generate_potential_moves_rook(game, start, mover),
        PieceClass::Queen => generate_potential_moves_queen(game, start, mover),
        PieceClass::King => generate_potential_moves_king(game, start, mover),
    }
}

/// Generates every legal move available to the side to move.
pub fn generate_all_moves(game: &GameState) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    for (location, piece) in game.piece_register.iter() {
        if piece.team == game.turn {
            result.extend(generate_legal_moves(game, &location, game.turn));
        }
    }
    result
}
