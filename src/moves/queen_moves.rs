use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::moves::move_shared::{follow_move_vector, piece_matches};
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Generates queen slides: the union of the rook and bishop ray sets.
pub fn generate_potential_moves_queen(
    game: &GameState,
    start: &BoardLocation,
    mover: PieceTeam,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    let Some(piece) = piece_matches(game, start, PieceClass::Queen, mover) else {
        return result;
    };
    for (d_row, d_col) in [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ] {
        follow_move_vector(game, piece, start, d_row, d_col, &mut result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;

    #[test]
    fn queen_covers_rook_and_bishop_rays() -> Result<(), ChessErrors> {
        let mut game = GameState::empty();
        game.place_piece(PieceClass::King, PieceTeam::Dark, (0, 0))?;
        game.place_piece(PieceClass::King, PieceTeam::Light, (7, 7))?;
        game.place_piece(PieceClass::Queen, PieceTeam::Light, (4, 4))?;

        let moves = generate_potential_moves_queen(&game, &(4, 4), PieceTeam::Light);
        // 27 reachable squares from the center, minus the diagonal blocked by
        // the own king at (7,7)
        assert_eq!(moves.len(), 26);
        assert!(moves.iter().any(|m| m.stop == (4, 0)));
        assert!(moves.iter().any(|m| m.stop == (1, 1)));
        assert!(!moves.iter().any(|m| m.stop == (7, 7)));
        Ok(())
    }
}
