use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::moves::move_shared::{check_move_collision, piece_matches};
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// Generates the knight's eight jump candidates.
pub fn generate_potential_moves_knight(
    game: &GameState,
    start: &BoardLocation,
    mover: PieceTeam,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    let Some(piece) = piece_matches(game, start, PieceClass::Knight, mover) else {
        return result;
    };
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Ok(stop) = move_board_location(start, d_row, d_col) {
            if let Some(candidate) = check_move_collision(game, piece, start, &stop) {
                result.push(candidate);
            }
        }
    }
    result
}
