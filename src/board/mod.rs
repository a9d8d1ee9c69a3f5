pub mod color;
pub mod error;
pub mod square;

mod display;

pub use color::Color;
pub use error::BoardError;
pub use square::{Coord, File, Rank, Square, SquareColor};

use std::ops::Range;

/// Board setup variants. Only `Standard` populates squares; anything else is
/// an extensibility seam that yields an empty board rather than an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameMode {
    Standard,
    Empty,
}

impl From<&str> for GameMode {
    fn from(mode: &str) -> Self {
        match mode {
            "standard" | "Standard" => GameMode::Standard,
            _ => GameMode::Empty,
        }
    }
}

/// The addressable substrate of a position: owns all 64 squares in
/// file-major order (index = file * 8 + rank) and never grows or shrinks
/// after construction. Occupancy is the only thing that mutates, and only
/// the move protocol does that.
pub struct Board {
    mode: GameMode,
    squares: Vec<Square>,
}

impl Board {
    pub fn new(mode: GameMode) -> Self {
        let squares = match mode {
            GameMode::Standard => File::ALL
                .iter()
                .flat_map(|&file| Rank::ALL.iter().map(move |&rank| Square::new(file, rank)))
                .collect(),
            GameMode::Empty => Vec::new(),
        };

        Self { mode, squares }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The flat file-major square collection.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// The 8 squares along one file, ordered by rank.
    pub fn file(&self, file: usize) -> Result<&[Square], BoardError> {
        if file >= File::ALL.len() {
            return Err(BoardError::OutOfBounds {
                key: format!("file {}", file),
            });
        }
        let start = file * Rank::ALL.len();
        self.squares
            .get(start..start + Rank::ALL.len())
            .ok_or_else(|| BoardError::OutOfBounds {
                key: format!("file {}", file),
            })
    }

    /// The 8 squares along one rank, ordered by file. This is the transposed
    /// view over the same square identities as [`Board::file`].
    pub fn rank(&self, rank: usize) -> Result<Vec<&Square>, BoardError> {
        if rank >= Rank::ALL.len() {
            return Err(BoardError::OutOfBounds {
                key: format!("rank {}", rank),
            });
        }
        (0..File::ALL.len())
            .map(|file| self.squares.get(file * Rank::ALL.len() + rank))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| BoardError::OutOfBounds {
                key: format!("rank {}", rank),
            })
    }

    /// The single square at a (file_index, rank_index) coordinate pair.
    pub fn square(&self, coord: Coord) -> Result<&Square, BoardError> {
        let (file, rank) = coord;
        if file as usize >= File::ALL.len() || rank as usize >= Rank::ALL.len() {
            return Err(BoardError::OutOfBounds {
                key: format!("coordinate ({}, {})", file, rank),
            });
        }
        self.squares
            .get(file as usize * Rank::ALL.len() + rank as usize)
            .ok_or_else(|| BoardError::OutOfBounds {
                key: format!("coordinate ({}, {})", file, rank),
            })
    }

    pub(crate) fn square_mut(&mut self, coord: Coord) -> Result<&mut Square, BoardError> {
        let (file, rank) = coord;
        if file as usize >= File::ALL.len() || rank as usize >= Rank::ALL.len() {
            return Err(BoardError::OutOfBounds {
                key: format!("coordinate ({}, {})", file, rank),
            });
        }
        self.squares
            .get_mut(file as usize * Rank::ALL.len() + rank as usize)
            .ok_or_else(|| BoardError::OutOfBounds {
                key: format!("coordinate ({}, {})", file, rank),
            })
    }

    /// A slice of the flat square collection.
    pub fn span(&self, range: Range<usize>) -> Result<&[Square], BoardError> {
        self.squares
            .get(range.clone())
            .ok_or_else(|| BoardError::OutOfBounds {
                key: format!("range {:?}", range),
            })
    }

    /// Looks a square up by its algebraic coordinate, e.g. `"e4"`. A string
    /// that is not an algebraic coordinate fails with `InvalidKey`.
    pub fn square_at(&self, notation: &str) -> Result<&Square, BoardError> {
        let coord = square::parse_algebraic(notation)?;
        self.square(coord)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GameMode::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_has_64_distinct_squares() {
        let board = Board::new(GameMode::Standard);
        assert_eq!(64, board.squares().len());

        let mut seen = std::collections::HashSet::new();
        for square in board.squares() {
            assert!(seen.insert(square.coord()), "duplicate square {}", square);
        }
    }

    #[test]
    fn test_file_major_ordering() {
        let board = Board::new(GameMode::Standard);
        let a_file = board.file(0).unwrap();
        assert_eq!("a1", format!("{}", a_file[0]));
        assert_eq!("a8", format!("{}", a_file[7]));
        let h_file = board.file(7).unwrap();
        assert_eq!("h1", format!("{}", h_file[0]));
    }

    #[test]
    fn test_file_and_rank_views_share_square_identities() {
        let board = Board::new(GameMode::Standard);
        for i in 0..8 {
            let file_view = board.file(i).unwrap();
            for j in 0..8 {
                let rank_view = board.rank(j).unwrap();
                assert!(
                    std::ptr::eq(&file_view[j], rank_view[i]),
                    "file[{}][{}] and rank[{}][{}] are different squares",
                    i,
                    j,
                    j,
                    i
                );
                assert!(std::ptr::eq(board.square((i as u8, j as u8)).unwrap(), rank_view[i]));
            }
        }
    }

    #[test]
    fn test_span_lookup() {
        let board = Board::new(GameMode::Standard);
        let span = board.span(8..16).unwrap();
        assert_eq!(8, span.len());
        // second file of a file-major layout
        assert_eq!("b1", format!("{}", span[0]));
    }

    #[test]
    fn test_out_of_bounds_lookups() {
        let board = Board::new(GameMode::Standard);
        assert!(matches!(board.file(8), Err(BoardError::OutOfBounds { .. })));
        assert!(matches!(board.rank(8), Err(BoardError::OutOfBounds { .. })));
        assert!(matches!(
            board.square((8, 0)),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert!(matches!(
            board.square((0, 8)),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert!(matches!(
            board.span(60..70),
            Err(BoardError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_algebraic_lookup() {
        let board = Board::new(GameMode::Standard);
        let square = board.square_at("e4").unwrap();
        assert_eq!((4, 3), square.coord());
        assert!(matches!(
            board.square_at("z9"),
            Err(BoardError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_unknown_mode_builds_an_empty_board() {
        let board = Board::new(GameMode::from("freeform"));
        assert_eq!(GameMode::Empty, board.mode());
        assert!(board.squares().is_empty());
        assert!(matches!(board.file(0), Err(BoardError::OutOfBounds { .. })));
        assert!(matches!(
            board.square((0, 0)),
            Err(BoardError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(GameMode::Standard, GameMode::from("standard"));
        assert_eq!(GameMode::Standard, GameMode::from("Standard"));
        assert_eq!(GameMode::Empty, GameMode::from("blitz960"));
    }
}
