use crate::{board_location::BoardLocation, chess_errors::ChessErrors, piece_record::PieceRecord};

/// The 8x8 board: a grid of optional piece records addressed by `(row, col)`.
///
/// Double occupancy is prevented at placement time; the rest of the engine
/// assumes the invariant and never re-checks it.
#[derive(Default, Clone, Debug)]
pub struct PieceRegister {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl PieceRegister {
    pub fn view(&self, x: &BoardLocation) -> &Option<PieceRecord> {
        &self.buffer[x.0 as usize][x.1 as usize]
    }

    pub fn at(&mut self, x: &BoardLocation) -> &mut Option<PieceRecord> {
        &mut self.buffer[x.0 as usize][x.1 as usize]
    }

    /// Places a piece on an empty square.
    pub fn place_piece(&mut self, piece: PieceRecord, x: &BoardLocation) -> Result<(), ChessErrors> {
        if self.view(x).is_some() {
            return Err(ChessErrors::BoardLocationOccupied(*x));
        }
        *self.at(x) = Some(piece);
        Ok(())
    }

    /// Removes and returns whatever occupies the square.
    pub fn take_piece(&mut self, x: &BoardLocation) -> Option<PieceRecord> {
        self.at(x).take()
    }

    /// Iterates over every occupied square as `(location, piece)`.
    pub fn iter(&self) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        self.buffer.iter().enumerate().flat_map(|(row, columns)| {
            columns.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| ((row as i8, col as i8), piece))
            })
        })
    }
}
