use crate::chess_errors::ChessErrors;

/// A `(row, column)` pair, each component in `0..=7`.
///
/// Row 0 is Dark's back rank; Light pawns start on row 6. All rank-sensitive
/// rules (pawn direction, castling rows, en passant) rely on this orientation.
pub type BoardLocation = (i8, i8);

/// Offsets a board location by a row and column delta.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - The new location if it stays on
///   the board, otherwise `TriedToMoveOutOfBounds`.
pub fn move_board_location(
    x: &BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::TriedToMoveOutOfBounds((*x, d_row, d_col)))
    } else {
        Ok(y)
    }
}
