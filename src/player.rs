//! Players: a side identity plus the record of pieces captured from the
//! opponent.

use log::debug;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::piece::{Piece, PieceId};

#[derive(Debug)]
pub struct Player {
    side: Color,
    captured_pieces: Vec<PieceId>,
}

impl Player {
    pub fn new(side: Color) -> Self {
        Self {
            side,
            captured_pieces: Vec::new(),
        }
    }

    pub fn side(&self) -> Color {
        self.side
    }

    /// Ids of the pieces this player has captured, in capture order.
    pub fn captured_pieces(&self) -> &[PieceId] {
        &self.captured_pieces
    }

    /// Records a capture. A player may never record one of its own pieces as
    /// captured; that holds even for moves that skipped the validity check.
    pub fn capture(&mut self, id: PieceId, piece: &Piece) -> Result<(), BoardError> {
        if piece.owner() == self.side {
            return Err(BoardError::SelfCapture {
                side: self.side,
                kind: piece.kind(),
            });
        }

        debug!("{} captures {}", self.side, piece);
        self.captured_pieces.push(id);
        Ok(())
    }
}
