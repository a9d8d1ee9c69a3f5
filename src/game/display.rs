use std::fmt;

use super::Game;

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        writeln!(f, "  ┌───┬───┬───┬───┬───┬───┬───┬───┐")?;

        for rank in (0..8u8).rev() {
            write!(f, "{} │", rank + 1)?;
            for file in 0..8u8 {
                let occupant = self
                    .board()
                    .square((file, rank))
                    .ok()
                    .and_then(|square| square.occupied_by());
                let glyph = match occupant {
                    Some(id) => {
                        let piece = self.piece(id);
                        piece.kind().to_unicode(piece.owner())
                    }
                    None => {
                        if (rank + file) % 2 == 0 {
                            ' '
                        } else {
                            '·'
                        }
                    }
                };
                write!(f, " {} │", glyph)?;
            }
            writeln!(f, " {}", rank + 1)?;

            if rank > 0 {
                writeln!(f, "  ├───┼───┼───┼───┼───┼───┼───┼───┤")?;
            } else {
                writeln!(f, "  └───┴───┴───┴───┴───┴───┴───┴───┘")?;
            }
        }

        writeln!(f, "    a   b   c   d   e   f   g   h")
    }
}

/// Builds a fully populated `Game` from an ASCII diagram written from
/// white's perspective (top row is rank 8).
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut game = $crate::game::Game::new($crate::board::GameMode::Standard);
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (kind, color) = $crate::piece::PieceKind::from_fen(c)
                    .expect("Invalid character in chess position");
                // The diagram reads top-down from white's perspective, so the
                // first row of characters is rank 8.
                let row = i / 8;
                let col = i % 8;
                let rank = 7 - row;
                game.put(kind, color, (col as u8, rank as u8)).unwrap();
            }
        }
        game
    }};
}

#[cfg(test)]
mod tests {
    use crate::board::Color;
    use crate::chess_position;
    use crate::piece::PieceKind;

    #[test]
    fn test_chess_position_macro_places_pieces_where_written() {
        let game = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            R...K...
        };

        let (_, rook) = game.piece_at((0, 0)).unwrap().unwrap();
        assert_eq!(PieceKind::Rook, rook.kind());
        assert_eq!(Color::White, rook.owner());

        let (_, black_king) = game.piece_at((4, 7)).unwrap().unwrap();
        assert_eq!(PieceKind::King, black_king.kind());
        assert_eq!(Color::Black, black_king.owner());

        assert_eq!(3, game.pieces().len());
    }

    #[test]
    fn test_display_renders_pieces_and_frame() {
        let game = chess_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            R.......
        };

        let rendered = format!("{}", game);
        assert!(rendered.contains('♖'));
        assert!(rendered.contains("a   b   c   d   e   f   g   h"));
    }
}
