//! The piece arena and the move protocol that mutates board state.

mod display;
mod rules;

use log::debug;

use crate::board::square::Coord;
use crate::board::{Board, BoardError, Color, GameMode};
use crate::piece::{Piece, PieceId, PieceKind};
use crate::player::Player;

/// A position under play: the board substrate, the arena of every piece ever
/// placed (captured ones included), and the two players. All mutation goes
/// through `put` and `move_piece`, which keep square occupancy and piece
/// back-references mutually consistent.
pub struct Game {
    board: Board,
    pieces: Vec<Piece>,
    players: [Player; 2],
}

impl Game {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(mode),
            pieces: Vec::new(),
            // indexed by Color discriminant
            players: [Player::new(Color::Black), Player::new(Color::White)],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, side: Color) -> &Player {
        &self.players[side as usize]
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// Every piece placed into this game, captured ones included.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The occupant of a square, if any.
    pub fn piece_at(&self, coord: Coord) -> Result<Option<(PieceId, &Piece)>, BoardError> {
        let square = self.board.square(coord)?;
        Ok(square.occupied_by().map(|id| (id, &self.pieces[id.0])))
    }

    /// Places a new piece on an empty square and hands back its arena id.
    pub fn put(
        &mut self,
        kind: PieceKind,
        owner: Color,
        coord: Coord,
    ) -> Result<PieceId, BoardError> {
        if self.board.square(coord)?.is_occupied() {
            return Err(BoardError::SquareOccupied);
        }

        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(kind, owner, coord));
        self.board.square_mut(coord)?.set_occupant(Some(id));
        Ok(id)
    }

    /// Whether moving the piece to `destination` is permitted by its
    /// variant's movement rule. Pure: a function of the piece's square, the
    /// destination, and current occupancy only.
    pub fn is_valid_move(&self, id: PieceId, destination: Coord) -> bool {
        rules::is_valid_move(self, id, destination)
    }

    /// Attempts to move a piece, capturing any opponent piece standing on
    /// the destination.
    ///
    /// Returns `Ok(true)` when the move executed and `Ok(false)` when it was
    /// well-formed but illegal (nothing changes). With `skip_validity_check`
    /// the legality rule is bypassed; the resulting position is then
    /// unspecified but stays internally consistent, and a bypassed move onto
    /// one's own piece still fails with `SelfCapture` before any state
    /// changes.
    pub fn move_piece(
        &mut self,
        id: PieceId,
        destination: Coord,
        skip_validity_check: bool,
    ) -> Result<bool, BoardError> {
        // bounds first, so the legality rules and the mutation below can
        // both assume an on-board destination
        self.board.square(destination)?;

        let piece = &self.pieces[id.0];
        let owner = piece.owner();
        let source = piece.square().ok_or(BoardError::PieceOffBoard)?;

        if !skip_validity_check && !rules::is_valid_move(self, id, destination) {
            debug!(
                "rejected move: {} {:?} -> {:?}",
                self.pieces[id.0], source, destination
            );
            return Ok(false);
        }

        // capture bookkeeping runs before any occupancy mutation, so a
        // self-capture aborts with the position untouched
        if let Some(captured_id) = self.board.square(destination)?.occupied_by() {
            self.players[owner as usize].capture(captured_id, &self.pieces[captured_id.0])?;
            self.pieces[captured_id.0].set_square(None);
        }

        self.board.square_mut(source)?.set_occupant(None);
        self.pieces[id.0].set_square(Some(destination));
        self.board.square_mut(destination)?.set_occupant(Some(id));

        debug!(
            "moved {} {:?} -> {}",
            self.pieces[id.0],
            source,
            self.board.square(destination)?
        );
        Ok(true)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::Standard)
    }
}
