use crate::{board_location::BoardLocation, piece_record::PieceRecord};

/// Distinguishes moves that carry extra board effects from plain ones.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveTypes {
    /// A regular move or regular capture.
    Regular,
    /// Double pawn step; payload is the skipped square left vulnerable.
    DoubleStep(BoardLocation),
    /// En passant capture; payload is the victim pawn's square, which is not
    /// the destination square.
    EnPassant(BoardLocation),
    /// Castling; payload is the rook's relocation.
    Castling {
        rook_start: BoardLocation,
        rook_stop: BoardLocation,
    },
}

/// A candidate or chosen move. Produced by the generators, filtered for
/// legality, and consumed by the applier; never stored in `GameState`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MoveDescription {
    pub piece: PieceRecord,
    pub start: BoardLocation,
    pub stop: BoardLocation,
    pub move_type: MoveTypes,
}
