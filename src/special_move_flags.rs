use crate::board_location::BoardLocation;

/// The special stuff for castling rights and en passant.
///
/// The six `*_moved` flags are monotonic: they start `false` and are set
/// `true` forever once the tracked piece leaves its original square. A castle
/// stays available only while the relevant king flag and rook flag are both
/// still `false`.
#[derive(Default, Clone, Debug)]
pub struct SpecialMoveFlags {
    pub light_king_moved: bool,
    pub dark_king_moved: bool,
    pub light_rook_kingside_moved: bool,
    pub light_rook_queenside_moved: bool,
    pub dark_rook_kingside_moved: bool,
    pub dark_rook_queenside_moved: bool,
    /// The square a pawn skipped on its two-step advance, capturable for
    /// exactly one reply and cleared by every applied move after that.
    pub en_passant_location: Option<BoardLocation>,
}
