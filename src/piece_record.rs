use crate::{piece_class::PieceClass, piece_team::PieceTeam};

/// A piece on the board: its class and its team.
///
/// Immutable value; a square either holds exactly one record or is empty.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
}
