//! Per-variant move legality. Every rule is a pure predicate over the
//! piece's square, the destination, and current board occupancy.

use log::trace;

use crate::board::square::Coord;
use crate::board::Color;
use crate::piece::{Piece, PieceId, PieceKind};

use super::Game;

const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(super) fn is_valid_move(game: &Game, id: PieceId, destination: Coord) -> bool {
    let piece = game.piece(id);
    let source = match piece.square() {
        Some(coord) => coord,
        None => return false,
    };

    if source == destination || game.board().square(destination).is_err() {
        return false;
    }

    // a destination held by a same-side piece is invalid for every variant;
    // rejecting it here keeps the capture guard a backstop, not a rule
    if let Some(occupant) = occupant(game, destination) {
        if occupant.owner() == piece.owner() {
            return false;
        }
    }

    let (df, dr) = delta(source, destination);
    match piece.kind() {
        PieceKind::Pawn => pawn_step(game, piece.owner(), df, dr, destination),
        PieceKind::Rook => straight(df, dr) && path_clear(game, source, destination),
        PieceKind::Knight => KNIGHT_OFFSETS.contains(&(df, dr)),
        PieceKind::Bishop => diagonal(df, dr) && path_clear(game, source, destination),
        PieceKind::Queen => {
            (straight(df, dr) || diagonal(df, dr)) && path_clear(game, source, destination)
        }
        PieceKind::King => df.abs() <= 1 && dr.abs() <= 1,
    }
}

fn delta(source: Coord, destination: Coord) -> (i16, i16) {
    (
        destination.0 as i16 - source.0 as i16,
        destination.1 as i16 - source.1 as i16,
    )
}

fn straight(df: i16, dr: i16) -> bool {
    (df == 0) != (dr == 0)
}

fn diagonal(df: i16, dr: i16) -> bool {
    df != 0 && df.abs() == dr.abs()
}

fn occupant(game: &Game, coord: Coord) -> Option<&Piece> {
    game.board()
        .square(coord)
        .ok()
        .and_then(|square| square.occupied_by())
        .map(|id| game.piece(id))
}

/// Walks the squares strictly between source and destination along a
/// straight or diagonal line; any occupant of either side blocks the ray.
fn path_clear(game: &Game, source: Coord, destination: Coord) -> bool {
    let (df, dr) = delta(source, destination);
    let step = (df.signum(), dr.signum());
    let goal = (destination.0 as i16, destination.1 as i16);

    let mut cursor = (source.0 as i16 + step.0, source.1 as i16 + step.1);
    while cursor != goal {
        let coord = (cursor.0 as u8, cursor.1 as u8);
        if occupant(game, coord).is_some() {
            trace!("ray from {:?} to {:?} blocked at {:?}", source, destination, coord);
            return false;
        }
        cursor = (cursor.0 + step.0, cursor.1 + step.1);
    }

    true
}

/// A pawn advances one rank toward the opponent: straight ahead onto an
/// empty square, or diagonally ahead onto an opponent's piece. Double-step
/// and en passant are not part of this rule set.
fn pawn_step(game: &Game, owner: Color, df: i16, dr: i16, destination: Coord) -> bool {
    if dr != owner.pawn_direction() {
        return false;
    }

    let destination_occupied = occupant(game, destination).is_some();
    match df {
        0 => !destination_occupied,
        // same-side occupants were already rejected above
        -1 | 1 => destination_occupied,
        _ => false,
    }
}
