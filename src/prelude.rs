//! Common types re-exported for convenience.

pub use crate::board::{Board, BoardError, Color, Coord, File, GameMode, Rank, Square, SquareColor};
pub use crate::game::Game;
pub use crate::piece::{Piece, PieceId, PieceKind};
pub use crate::player::Player;
