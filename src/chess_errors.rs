//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type across the crate. Functions that can
//! fail in an expected way (bad coordinates, occupied squares, rejected moves)
//! return `Result<_, ChessErrors>`; conditions the engine treats as degraded
//! states rather than faults (a missing king) are reported through empty or
//! `false` results instead, never through this enum.

use crate::board_location::BoardLocation;

/// Unified error type for the rules engine.
#[derive(Debug, PartialEq)]
pub enum ChessErrors {
    /// Attempted to offset a board location by `(d_row, d_col)` past the edge.
    ///
    /// Payload: (origin_location, d_row, d_col)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// Attempted to place a piece on a square that already holds one.
    BoardLocationOccupied(BoardLocation),

    /// Attempted to apply a move whose start square is empty.
    TryingToMoveFromEmptySquare(BoardLocation),

    /// The requested destination is not in the current legal-move set for the
    /// piece on the start square.
    ///
    /// Payload: (start_location, stop_location)
    IllegalMove((BoardLocation, BoardLocation)),
}
