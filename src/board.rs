use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::piece::{Color, Piece, PieceType};
use crate::rules;
use crate::square::Square;

/// Glyph used for empty squares in board diagrams.
pub const EMPTY_GLYPH: char = '·';

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Piece placement plus the side to move. This is all the game state there is:
/// no castling rights, no en passant square, no history.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Option<Piece>; 8]; 8],
    pub current_turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            current_turn: Color::White,
        }
    }

    pub fn new() -> Self {
        let mut squares = [[None; 8]; 8];

        // Black pieces (rows 0-1)
        for (sq, kind) in squares[0].iter_mut().zip(BACK_RANK) {
            *sq = Some(Piece::new(kind, Color::Black));
        }
        for sq in &mut squares[1] {
            *sq = Some(Piece::new(PieceType::Pawn, Color::Black));
        }

        // White pieces (rows 6-7)
        for sq in &mut squares[6] {
            *sq = Some(Piece::new(PieceType::Pawn, Color::White));
        }
        for (sq, kind) in squares[7].iter_mut().zip(BACK_RANK) {
            *sq = Some(Piece::new(kind, Color::White));
        }

        Board {
            squares,
            current_turn: Color::White,
        }
    }

    /// Contents of `square`. Off-board squares are simply empty.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        square.index().and_then(|(r, c)| self.squares[r][c])
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Put `piece` on `square` (or clear it with `None`). Setup only: no rules,
    /// no turn change. Off-board squares are ignored.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        if let Some((r, c)) = square.index() {
            self.squares[r][c] = piece;
        }
    }

    /// Occupied squares, row by row from row 0.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Move whatever stands on `origin` to `destination` and pass the turn.
    ///
    /// The caller is trusted to have checked legality. Anything on
    /// `destination` is captured and gone. If `origin` is empty or either
    /// square is off the board nothing happens.
    pub fn apply_move(&mut self, origin: Square, destination: Square) {
        let (Some((fr, fc)), Some((tr, tc))) = (origin.index(), destination.index()) else {
            return;
        };
        let piece = match self.squares[fr][fc] {
            Some(p) => p,
            None => return,
        };

        if let Some(captured) = self.squares[tr][tc] {
            trace!(%destination, captured = captured.piece_type.name(), "capture");
        }

        self.squares[fr][fc] = None;
        self.squares[tr][tc] = Some(piece);
        self.current_turn = self.current_turn.opposite();
    }

    /// Validate and, if legal, apply a move of the piece on `origin`.
    ///
    /// Returns false, leaving the board untouched, when `origin` is empty,
    /// holds a piece of the side not to move, or the move breaks the rules.
    pub fn try_move(&mut self, origin: Square, destination: Square) -> bool {
        let piece = match self.piece_at(origin) {
            Some(p) if rules::owns_turn(p, self.current_turn) => p,
            _ => {
                debug!(%origin, %destination, turn = self.current_turn.name(), "no movable piece on origin");
                return false;
            }
        };

        if !rules::is_legal_move(piece, origin, destination, self) {
            debug!(%origin, %destination, piece = piece.piece_type.name(), "illegal move rejected");
            return false;
        }

        self.apply_move(origin, destination);
        debug!(
            %origin,
            %destination,
            piece = piece.piece_type.name(),
            next = self.current_turn.name(),
            "move applied"
        );
        true
    }
}

/// Eight rows of glyphs, row 0 first, then the side to move.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            let line: String = row
                .iter()
                .map(|sq| sq.map_or(EMPTY_GLYPH, Piece::glyph))
                .collect();
            writeln!(f, "{line}")?;
        }
        write!(f, "Turn: {}", self.current_turn.name())
    }
}

/// Parses the `Display` format. `.` also counts as empty, blank lines are
/// skipped and a missing turn line means white to move.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut board = Board::empty();
        let mut rows = 0usize;

        for (i, raw) in s.lines().enumerate() {
            let line = raw.trim();
            let line_no = i + 1;
            if line.is_empty() {
                continue;
            }

            if let Some(turn) = line.strip_prefix("Turn:") {
                board.current_turn = match turn.trim() {
                    "White" => Color::White,
                    "Black" => Color::Black,
                    other => {
                        return Err(Error::Diagram {
                            line: line_no,
                            reason: format!("unknown side {other:?}"),
                        })
                    }
                };
                continue;
            }

            if rows == 8 {
                return Err(Error::Diagram {
                    line: line_no,
                    reason: "more than eight rows".to_string(),
                });
            }
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != 8 {
                return Err(Error::Diagram {
                    line: line_no,
                    reason: format!("expected 8 squares, found {}", cells.len()),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                board.squares[rows][col] = match ch {
                    EMPTY_GLYPH | '.' => None,
                    _ => Some(Piece::from_glyph(ch).ok_or_else(|| Error::Diagram {
                        line: line_no,
                        reason: format!("unknown glyph {ch:?}"),
                    })?),
                };
            }
            rows += 1;
        }

        if rows != 8 {
            return Err(Error::Diagram {
                line: s.lines().count(),
                reason: format!("expected 8 rows, found {rows}"),
            });
        }
        Ok(board)
    }
}
