//! Helpers shared by the per-piece pseudo-move generators.
//!
//! Everything here is geometry and occupancy only. King safety is applied
//! later by `move_generation::legal_move_filter`.

use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::GameState;
use crate::move_description::{MoveDescription, MoveTypes};
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Row 0 is Dark's back rank, so Light pawns march toward decreasing rows
/// and Dark pawns toward increasing rows.
pub fn forward_direction_for_team(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Light => -1,
        PieceTeam::Dark => 1,
    }
}

/// Returns the piece at `start` only when it has the expected class and
/// belongs to `mover`. Anything else means the generator produces nothing.
pub fn piece_matches(
    game: &GameState,
    start: &BoardLocation,
    class: PieceClass,
    mover: PieceTeam,
) -> Option<PieceRecord> {
    match game.piece_register.view(start) {
        Some(piece) if piece.class == class && piece.team == mover => Some(*piece),
        _ => None,
    }
}

/// Checks a single-step destination against occupancy rules.
///
/// Returns `Some(regular move)` when the square is empty or holds an enemy
/// piece, `None` when a teammate blocks it.
pub fn check_move_collision(
    game: &GameState,
    piece: PieceRecord,
    start: &BoardLocation,
    stop: &BoardLocation,
) -> Option<MoveDescription> {
    if let Some(target) = game.piece_register.view(stop) {
        if target.team == piece.team {
            // Collide with teammate, not a move
            return None;
        }
    }
    Some(MoveDescription {
        piece,
        start: *start,
        stop: *stop,
        move_type: MoveTypes::Regular,
    })
}

/// Follows a ray `(d_row, d_col)` from `start`, collecting moves until the
/// board edge, a teammate (exclusive), or an enemy piece (inclusive).
pub fn follow_move_vector(
    game: &GameState,
    piece: PieceRecord,
    start: &BoardLocation,
    d_row: i8,
    d_col: i8,
    result: &mut Vec<MoveDescription>,
) {
    for distance in 1..8 {
        let stop = match move_board_location(start, d_row * distance, d_col * distance) {
            Ok(stop) => stop,
            Err(_) => break,
        };
        match check_move_collision(game, piece, start, &stop) {
            Some(candidate) => {
                let hit_enemy = game.piece_register.view(&stop).is_some();
                result.push(candidate);
                if hit_enemy {
                    break;
                }
            }
            None => break,
        }
    }
}
