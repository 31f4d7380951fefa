//! The authoritative game state: board, special-move flags, and the turn.
//!
//! `GameState` is the sole unit of truth. Move evaluation clones it and works
//! on the clone; the authoritative value changes only when a move is applied
//! through `move_generation::legal_move_apply`.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;
use crate::special_move_flags::SpecialMoveFlags;

const BACK_RANK: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

#[derive(Clone, Debug)]
pub struct GameState {
    pub piece_register: PieceRegister,
    pub special_flags: SpecialMoveFlags,
    pub turn: PieceTeam,
}

impl GameState {
    /// An empty board with Light to move and all rights intact.
    ///
    /// Positions built on top of this are caller-guaranteed to be sensible;
    /// the engine degrades softly (empty move sets, `false` status answers)
    /// rather than validating king counts at construction.
    pub fn empty() -> Self {
        GameState {
            piece_register: PieceRegister::default(),
            special_flags: SpecialMoveFlags::default(),
            turn: PieceTeam::Light,
        }
    }

    /// The standard starting position.
    pub fn new_game() -> Self {
        let mut game = GameState::empty();
        for col in 0..8 {
            let class = BACK_RANK[col as usize];
            game.seed_piece(class, PieceTeam::Dark, (0, col));
            game.seed_piece(PieceClass::Pawn, PieceTeam::Dark, (1, col));
            game.seed_piece(PieceClass::Pawn, PieceTeam::Light, (6, col));
            game.seed_piece(class, PieceTeam::Light, (7, col));
        }
        game
    }

    /// Places a piece while setting up a position.
    pub fn place_piece(
        &mut self,
        class: PieceClass,
        team: PieceTeam,
        location: BoardLocation,
    ) -> Result<(), ChessErrors> {
        self.piece_register
            .place_piece(PieceRecord { class, team }, &location)
    }

    fn seed_piece(&mut self, class: PieceClass, team: PieceTeam, location: BoardLocation) {
        self.place_piece(class, team, location)
            .expect("start layout must not collide");
    }
}
