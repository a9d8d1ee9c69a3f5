use thiserror::Error;

use crate::board::color::Color;
use crate::piece::PieceKind;

/// Contract violations raised by board lookups and the move protocol. A
/// well-formed but illegal move is not an error; it is reported as a
/// rejected move (`Ok(false)`).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("board lookup key {key:?} is not a file index, coordinate pair, range, or algebraic coordinate")]
    InvalidKey { key: String },
    #[error("board access out of bounds: {key}")]
    OutOfBounds { key: String },
    #[error("{side} attempted to capture its own {kind}")]
    SelfCapture { side: Color, kind: PieceKind },
    #[error("cannot put a piece on a square that is already occupied")]
    SquareOccupied,
    #[error("cannot move a piece that has been captured off the board")]
    PieceOffBoard,
}
