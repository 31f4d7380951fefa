use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::moves::move_shared::{follow_move_vector, piece_matches};
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Generates bishop slides along the four diagonal rays.
pub fn generate_potential_moves_bishop(
    game: &GameState,
    start: &BoardLocation,
    mover: PieceTeam,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    let Some(piece) = piece_matches(game, start, PieceClass::Bishop, mover) else {
        return result;
    };
    follow_move_vector(game, piece, start, 1, 1, &mut result);
    follow_move_vector(game, piece, start, 1, -1, &mut result);
    follow_move_vector(game, piece, start, -1, 1, &mut result);
    follow_move_vector(game, piece, start, -1, -1, &mut result);
    result
}
