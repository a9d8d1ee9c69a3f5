//! Piece variants and the piece entities that live in the game arena.

use std::fmt;

use crate::board::color::Color;
use crate::board::square::Coord;

/// Stable handle into the game's piece arena. Squares refer to their
/// occupant through this id rather than a live reference.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct PieceId(pub(crate) usize);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn to_fen(&self, color: Color) -> char {
        match (self, color) {
            (PieceKind::Bishop, Color::Black) => 'b',
            (PieceKind::Bishop, Color::White) => 'B',
            (PieceKind::King, Color::Black) => 'k',
            (PieceKind::King, Color::White) => 'K',
            (PieceKind::Knight, Color::Black) => 'n',
            (PieceKind::Knight, Color::White) => 'N',
            (PieceKind::Pawn, Color::Black) => 'p',
            (PieceKind::Pawn, Color::White) => 'P',
            (PieceKind::Queen, Color::Black) => 'q',
            (PieceKind::Queen, Color::White) => 'Q',
            (PieceKind::Rook, Color::Black) => 'r',
            (PieceKind::Rook, Color::White) => 'R',
        }
    }

    pub fn from_fen(c: char) -> Option<(PieceKind, Color)> {
        match c {
            'b' => Some((PieceKind::Bishop, Color::Black)),
            'B' => Some((PieceKind::Bishop, Color::White)),
            'k' => Some((PieceKind::King, Color::Black)),
            'K' => Some((PieceKind::King, Color::White)),
            'n' => Some((PieceKind::Knight, Color::Black)),
            'N' => Some((PieceKind::Knight, Color::White)),
            'p' => Some((PieceKind::Pawn, Color::Black)),
            'P' => Some((PieceKind::Pawn, Color::White)),
            'q' => Some((PieceKind::Queen, Color::Black)),
            'Q' => Some((PieceKind::Queen, Color::White)),
            'r' => Some((PieceKind::Rook, Color::Black)),
            'R' => Some((PieceKind::Rook, Color::White)),
            _ => None,
        }
    }

    pub fn to_unicode(&self, color: Color) -> char {
        match (self, color) {
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::King, Color::Black) => '♚',
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Rook, Color::White) => '♖',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_str = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{}", kind_str)
    }
}

/// A movable game entity: its variant, its owning side, and the coordinate
/// of the square it currently stands on. A captured piece keeps its identity
/// but loses its square; it remains reachable through the capturing player's
/// record.
#[derive(Clone, Debug)]
pub struct Piece {
    kind: PieceKind,
    owner: Color,
    square: Option<Coord>,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, owner: Color, square: Coord) -> Self {
        Self {
            kind,
            owner,
            square: Some(square),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn owner(&self) -> Color {
        self.owner
    }

    /// The coordinate this piece stands on, or `None` once captured.
    pub fn square(&self) -> Option<Coord> {
        self.square
    }

    pub fn is_captured(&self) -> bool {
        self.square.is_none()
    }

    pub(crate) fn set_square(&mut self, square: Option<Coord>) {
        self.square = square;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.owner, self.kind)
    }
}
