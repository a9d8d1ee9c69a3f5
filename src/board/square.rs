//! Files, ranks, and the squares they address.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::board::error::BoardError;
use crate::piece::PieceId;

/// A `(file_index, rank_index)` pair, both in `0..8`. Derived once at square
/// construction and used as the stable address of a square everywhere else.
pub type Coord = (u8, u8);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<File> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = (b'a' + *self as u8) as char;
        write!(f, "{}", c)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Rank> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// Light/dark identity of a square, fixed by coordinate parity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SquareColor {
    Dark,
    Light,
}

impl SquareColor {
    fn of(file: File, rank: Rank) -> SquareColor {
        if (file.index() + rank.index()) % 2 == 1 {
            SquareColor::Light
        } else {
            SquareColor::Dark
        }
    }
}

/// One of the 64 board positions. File, rank, coordinate, and color are
/// fixed for the square's lifetime; only the occupant changes, and only
/// through the move protocol.
#[derive(Clone, Debug)]
pub struct Square {
    file: File,
    rank: Rank,
    coord: Coord,
    color: SquareColor,
    occupied_by: Option<PieceId>,
}

impl Square {
    pub fn new(file: File, rank: Rank) -> Self {
        Self {
            file,
            rank,
            coord: (file.index() as u8, rank.index() as u8),
            color: SquareColor::of(file, rank),
            occupied_by: None,
        }
    }

    pub fn file(&self) -> File {
        self.file
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn color(&self) -> SquareColor {
        self.color
    }

    pub fn occupied_by(&self) -> Option<PieceId> {
        self.occupied_by
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied_by.is_some()
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<PieceId>) {
        self.occupied_by = occupant;
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

static ALGEBRAIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-hA-H])([1-8])$").unwrap());

/// Parses an algebraic coordinate like `"a4"` into a numeric coordinate
/// pair. Anything that does not match the two-character pattern is a
/// malformed lookup key.
pub fn parse_algebraic(notation: &str) -> Result<Coord, BoardError> {
    let caps = ALGEBRAIC_RE
        .captures(notation)
        .ok_or_else(|| BoardError::InvalidKey {
            key: notation.to_string(),
        })?;

    let file_char = caps[1].chars().next().unwrap().to_ascii_lowercase();
    let rank_char = caps[2].chars().next().unwrap();
    let file = file_char as u8 - b'a';
    let rank = rank_char as u8 - b'1';

    Ok((file, rank))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parity_law() {
        // Light iff (file_index + rank_index) is odd, across the whole board.
        for &file in &File::ALL {
            for &rank in &Rank::ALL {
                let square = Square::new(file, rank);
                let expected = if (file.index() + rank.index()) % 2 == 1 {
                    SquareColor::Light
                } else {
                    SquareColor::Dark
                };
                assert_eq!(expected, square.color(), "square {}", square);
            }
        }
    }

    #[test]
    fn test_known_square_colors() {
        assert_eq!(SquareColor::Dark, Square::new(File::A, Rank::One).color());
        assert_eq!(SquareColor::Light, Square::new(File::A, Rank::Four).color());
        assert_eq!(SquareColor::Light, Square::new(File::H, Rank::One).color());
    }

    #[test]
    fn test_display() {
        assert_eq!("a4", format!("{}", Square::new(File::A, Rank::Four)));
        assert_eq!("h8", format!("{}", Square::new(File::H, Rank::Eight)));
    }

    #[test]
    fn test_coord_derived_once() {
        let square = Square::new(File::C, Rank::Six);
        assert_eq!((2, 5), square.coord());
        assert!(!square.is_occupied());
    }

    #[test]
    fn test_parse_algebraic() {
        assert_eq!((0, 0), parse_algebraic("a1").unwrap());
        assert_eq!((0, 0), parse_algebraic("A1").unwrap());
        assert_eq!((4, 4), parse_algebraic("e5").unwrap());
    }

    #[test]
    fn test_parse_algebraic_rejects_malformed_keys() {
        for key in &["", "a", "a0", "a9", "j4", "a44", "4a", "e5 "] {
            match parse_algebraic(key) {
                Err(BoardError::InvalidKey { .. }) => {}
                other => panic!("expected InvalidKey for {:?}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_file_rank_round_trip() {
        for (i, &file) in File::ALL.iter().enumerate() {
            assert_eq!(i, file.index());
            assert_eq!(Some(file), File::from_index(i));
        }
        assert_eq!(None, File::from_index(8));
        assert_eq!(None, Rank::from_index(8));
    }
}
