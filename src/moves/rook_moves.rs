use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::moves::move_shared::{follow_move_vector, piece_matches};
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Generates rook slides along the four orthogonal rays.
pub fn generate_potential_moves_rook(
    game: &GameState,
    start: &BoardLocation,
    mover: PieceTeam,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    let Some(piece) = piece_matches(game, start, PieceClass::Rook, mover) else {
        return result;
    };
    follow_move_vector(game, piece, start, 1, 0, &mut result);
    follow_move_vector(game, piece, start, -1, 0, &mut result);
    follow_move_vector(game, piece, start, 0, 1, &mut result);
    follow_move_vector(game, piece, start, 0, -1, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;

    #[test]
    fn rays_stop_on_pieces() -> Result<(), ChessErrors> {
        let mut game = GameState::empty();
        game.place_piece(PieceClass::King, PieceTeam::Dark, (0, 0))?;
        game.place_piece(PieceClass::King, PieceTeam::Light, (7, 7))?;
        game.place_piece(PieceClass::Rook, PieceTeam::Light, (4, 4))?;
        game.place_piece(PieceClass::Knight, PieceTeam::Dark, (4, 6))?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Light, (6, 4))?;

        let moves = generate_potential_moves_rook(&game, &(4, 4), PieceTeam::Light);
        // right ray ends on the capture; down ray stops short of the teammate
        assert!(moves.iter().any(|m| m.stop == (4, 6)));
        assert!(!moves.iter().any(|m| m.stop == (4, 7)));
        assert!(moves.iter().any(|m| m.stop == (5, 4)));
        assert!(!moves.iter().any(|m| m.stop == (6, 4)));
        assert_eq!(moves.len(), 11);
        Ok(())
    }
}
