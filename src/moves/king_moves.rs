use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::GameState;
use crate::move_description::{MoveDescription, MoveTypes};
use crate::moves::move_shared::{check_move_collision, piece_matches};
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Generates the king's eight adjacent steps plus the two castle candidates.
///
/// # Arguments
/// * `game` - The game state.
/// * `start` - The king's square.
/// * `mover` - The side the move is generated for.
///
/// # Returns
/// * The pseudo-moves; empty when `start` does not hold a `mover` king.
pub fn generate_potential_moves_king(
    game: &GameState,
    start: &BoardLocation,
    mover: PieceTeam,
) -> Vec<MoveDescription> {
    let mut result = Vec::new();
    let Some(piece) = piece_matches(game, start, PieceClass::King, mover) else {
        return result;
    };

    // Try all 8 king steps
    for d_row in -1..2 {
        for d_col in -1..2 {
            if (d_row == 0) && (d_col == 0) {
                continue;
            }
            if let Ok(stop) = move_board_location(start, d_row, d_col) {
                if let Some(candidate) = check_move_collision(game, piece, start, &stop) {
                    result.push(candidate);
                }
            }
        }
    }

    // Kingside castle candidate: two columns toward the column-7 rook
    if let Ok(stop) = move_board_location(start, 0, 2) {
        if is_valid_castle(game, start, &stop) {
            result.push(MoveDescription {
                piece,
                start: *start,
                stop,
                move_type: MoveTypes::Castling {
                    rook_start: (start.0, 7),
                    rook_stop: (start.0, start.1 + 1),
                },
            });
        }
    }
    // Queenside castle candidate: two columns toward the column-0 rook
    if let Ok(stop) = move_board_location(start, 0, -2) {
        if is_valid_castle(game, start, &stop) {
            result.push(MoveDescription {
                piece,
                start: *start,
                stop,
                move_type: MoveTypes::Castling {
                    rook_start: (start.0, 0),
                    rook_stop: (start.0, start.1 - 1),
                },
            });
        }
    }

    result
}

/// Decides whether the king on `start` may castle toward `stop`.
///
/// A castle is allowed while the mover's king flag and the flag of the rook on
/// the chosen wing are both unset, and every square strictly between the
/// king's column and that rook's column is empty.
///
/// The squares the king crosses are NOT tested for enemy attacks here, and no
/// rook is required to actually stand on the corner square; both follow the
/// adjudicated game's behavior and are documented limitations.
pub fn is_valid_castle(game: &GameState, start: &BoardLocation, stop: &BoardLocation) -> bool {
    let Some(piece) = game.piece_register.view(start) else {
        return false;
    };
    let kingside = stop.1 > start.1;
    let flags = &game.special_flags;

    match piece.team {
        PieceTeam::Light => {
            if flags.light_king_moved {
                return false;
            }
            if kingside && flags.light_rook_kingside_moved {
                return false;
            }
            if !kingside && flags.light_rook_queenside_moved {
                return false;
            }
        }
        PieceTeam::Dark => {
            if flags.dark_king_moved {
                return false;
            }
            if kingside && flags.dark_rook_kingside_moved {
                return false;
            }
            if !kingside && flags.dark_rook_queenside_moved {
                return false;
            }
        }
    }

    // Every square strictly between the king and the corner must be clear
    let between = if kingside {
        (start.1 + 1)..7
    } else {
        1..start.1
    };
    for col in between {
        if game.piece_register.view(&(start.0, col)).is_some() {
            return false;
        }
    }
    true
}
