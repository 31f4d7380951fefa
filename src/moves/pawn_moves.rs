use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::GameState;
use crate::move_description::{MoveDescription, MoveTypes};
use crate::moves::move_shared::{forward_direction_for_team, piece_matches};
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Generates all geometrically possible pawn moves: single step, double step
/// from the home row, diagonal captures, and the en passant capture onto the
/// currently vulnerable square.
///
/// Promotion is not modeled: a pawn arriving on the far rank stays a pawn and
/// the arrival is an ordinary move. This mirrors the behavior of the game this
/// engine adjudicates and is a documented limitation, not an oversight.
///
/// # Arguments
/// * `game` - The game state.
/// * `start` - The pawn's square.
/// * `mover` - The side the move is generated for.
///
/// # Returns
/// * The pseudo-moves; empty when `start` does not hold a `mover` pawn.
pub fn generate_potential_moves_pawn(
    game: &GameState,
    start: &BoardLocation,
    mover: PieceTeam,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    let Some(piece) = piece_matches(game, start, PieceClass::Pawn, mover) else {
        return result;
    };
    let forward = forward_direction_for_team(mover);

    // Forward march
    if let Ok(stop) = move_board_location(start, forward, 0) {
        if game.piece_register.view(&stop).is_none() {
            result.push(MoveDescription {
                piece,
                start: *start,
                stop,
                move_type: MoveTypes::Regular,
            });
        }
    }

    // Double step from the home row, both squares clear
    let home_row = match mover {
        PieceTeam::Light => 6,
        PieceTeam::Dark => 1,
    };
    if start.0 == home_row {
        if let (Ok(skipped), Ok(stop)) = (
            move_board_location(start, forward, 0),
            move_board_location(start, 2 * forward, 0),
        ) {
            if game.piece_register.view(&skipped).is_none()
                && game.piece_register.view(&stop).is_none()
            {
                result.push(MoveDescription {
                    piece,
                    start: *start,
                    stop,
                    move_type: MoveTypes::DoubleStep(skipped),
                });
            }
        }
    }

    // Diagonal captures, including onto the en passant square
    for d_col in [-1, 1] {
        if let Ok(stop) = move_board_location(start, forward, d_col) {
            if let Some(target) = game.piece_register.view(&stop) {
                if target.team != mover {
                    result.push(MoveDescription {
                        piece,
                        start: *start,
                        stop,
                        move_type: MoveTypes::Regular,
                    });
                }
            } else if game.special_flags.en_passant_location == Some(stop) {
                // The victim pawn stands beside the start square, not on the stop square
                result.push(MoveDescription {
                    piece,
                    start: *start,
                    stop,
                    move_type: MoveTypes::EnPassant((start.0, stop.1)),
                });
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;

    fn kings_only() -> Result<GameState, ChessErrors> {
        let mut game = GameState::empty();
        game.place_piece(PieceClass::King, PieceTeam::Dark, (0, 3))?;
        game.place_piece(PieceClass::King, PieceTeam::Light, (7, 3))?;
        Ok(game)
    }

    #[test]
    fn single_and_double_step() -> Result<(), ChessErrors> {
        let mut game = kings_only()?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Light, (6, 4))?;
        let moves = generate_potential_moves_pawn(&game, &(6, 4), PieceTeam::Light);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.stop == (5, 4)));
        assert!(moves
            .iter()
            .any(|m| m.stop == (4, 4) && m.move_type == MoveTypes::DoubleStep((5, 4))));
        Ok(())
    }

    #[test]
    fn blocked_pawn_generates_nothing() -> Result<(), ChessErrors> {
        let mut game = kings_only()?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Light, (6, 4))?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Dark, (5, 4))?;
        let moves = generate_potential_moves_pawn(&game, &(6, 4), PieceTeam::Light);
        assert!(moves.is_empty());
        Ok(())
    }

    #[test]
    fn double_step_needs_both_squares_clear() -> Result<(), ChessErrors> {
        let mut game = kings_only()?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Light, (6, 4))?;
        game.place_piece(PieceClass::Knight, PieceTeam::Dark, (4, 4))?;
        let moves = generate_potential_moves_pawn(&game, &(6, 4), PieceTeam::Light);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].stop, (5, 4));
        Ok(())
    }

    #[test]
    fn diagonal_captures_enemies_only() -> Result<(), ChessErrors> {
        let mut game = kings_only()?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Light, (6, 4))?;
        game.place_piece(PieceClass::Knight, PieceTeam::Dark, (5, 3))?;
        game.place_piece(PieceClass::Bishop, PieceTeam::Light, (5, 5))?;
        let moves = generate_potential_moves_pawn(&game, &(6, 4), PieceTeam::Light);
        // forward, double step, and one capture; the teammate diagonal is out
        assert_eq!(moves.len(), 3);
        assert!(moves.iter().any(|m| m.stop == (5, 3)));
        assert!(!moves.iter().any(|m| m.stop == (5, 5)));
        Ok(())
    }

    #[test]
    fn en_passant_square_is_offered() -> Result<(), ChessErrors> {
        let mut game = kings_only()?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Light, (3, 3))?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Dark, (3, 4))?;
        game.special_flags.en_passant_location = Some((2, 4));
        let moves = generate_potential_moves_pawn(&game, &(3, 3), PieceTeam::Light);
        assert!(moves
            .iter()
            .any(|m| m.stop == (2, 4) && m.move_type == MoveTypes::EnPassant((3, 4))));
        Ok(())
    }

    #[test]
    fn wrong_team_is_empty() -> Result<(), ChessErrors> {
        let mut game = kings_only()?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Light, (6, 4))?;
        let moves = generate_potential_moves_pawn(&game, &(6, 4), PieceTeam::Dark);
        assert!(moves.is_empty());
        Ok(())
    }
}
