//! The press/release protocol a drag-and-drop front end drives.
//!
//! A press picks up a piece if it belongs to the side to move; the matching
//! release tries to drop it. The board itself knows nothing about selections.

use serde::Serialize;
use tracing::debug;

use crate::board::Board;
use crate::piece::Piece;
use crate::rules;
use crate::square::Square;

/// A piece that has been picked up and not yet dropped.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub struct Selection {
    pub piece: Piece,
    pub origin: Square,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    board: Board,
    selection: Option<Selection>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Board) -> Self {
        Session {
            board,
            selection: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Pick up the piece on `square`. Returns false, and drops any earlier
    /// selection, when the square is empty or holds an opposing piece.
    pub fn press(&mut self, square: Square) -> bool {
        self.selection = self
            .board
            .piece_at(square)
            .filter(|&p| rules::owns_turn(p, self.board.current_turn()))
            .map(|piece| Selection {
                piece,
                origin: square,
            });

        if let Some(sel) = self.selection {
            debug!(origin = %sel.origin, piece = sel.piece.piece_type.name(), "piece selected");
        }
        self.selection.is_some()
    }

    /// Drop the held piece on `square`. False means nothing was held or the
    /// move was illegal, in which case the piece belongs back on its origin.
    pub fn release(&mut self, square: Square) -> bool {
        match self.selection.take() {
            Some(sel) => self.board.try_move(sel.origin, square),
            None => false,
        }
    }

    /// Destinations available to the held piece, for highlighting.
    pub fn targets(&self) -> Vec<Square> {
        match self.selection {
            Some(sel) => rules::legal_destinations(&self.board, sel.origin),
            None => Vec::new(),
        }
    }

    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.selection = None;
    }
}
