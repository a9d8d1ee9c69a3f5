use super::Board;
use std::fmt;

// The board alone knows occupancy but not piece identity, so occupants
// render as a filled marker; `Game`'s Display shows the actual pieces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        writeln!(f, "  ┌───┬───┬───┬───┬───┬───┬───┬───┐")?;

        for rank in (0..8u8).rev() {
            write!(f, "{} │", rank + 1)?;
            for file in 0..8u8 {
                let occupied = self
                    .square((file, rank))
                    .map(|square| square.is_occupied())
                    .unwrap_or(false);
                let glyph = if occupied {
                    '●'
                } else if (rank + file) % 2 == 0 {
                    ' '
                } else {
                    '·'
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
