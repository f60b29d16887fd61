// =============================================================================
// Move legality
//
// Simplified chess rules over a Board. Everything here is a pure predicate:
// an illegal or malformed request answers `false` and never touches the board.
//
// No check detection, castling, en passant or promotion. A king may step
// onto an attacked square.
// =============================================================================

use crate::board::Board;
use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;

/// True iff `piece` belongs to the side to move.
pub fn owns_turn(piece: Piece, turn: Color) -> bool {
    piece.color == turn
}

/// Decide whether `piece`, standing on `origin`, may move to `destination`.
///
/// Checks run in a fixed order: destination on the board, no capture of a
/// piece of the mover's own colour, then the geometry of the piece kind.
/// The own-colour guard runs once here so the per-kind rules only need to
/// ask whether a square is occupied.
pub fn is_legal_move(piece: Piece, origin: Square, destination: Square, board: &Board) -> bool {
    if !origin.in_bounds() || !destination.in_bounds() {
        return false;
    }

    if let Some(target) = board.piece_at(destination) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.piece_type {
        PieceType::Pawn => pawn_move_ok(piece.color, origin, destination, board),
        PieceType::Rook => is_straight(origin, destination) && path_clear(origin, destination, board),
        PieceType::Knight => is_knight_jump(origin, destination),
        PieceType::Bishop => is_diagonal(origin, destination) && path_clear(origin, destination, board),
        PieceType::Queen => {
            (is_straight(origin, destination) || is_diagonal(origin, destination))
                && path_clear(origin, destination, board)
        }
        PieceType::King => is_king_step(origin, destination),
    }
}

/// True iff every square strictly between `origin` and `destination` is empty.
///
/// Only meaningful along a rank, file or diagonal; any other geometry is
/// reported as blocked, as is any path with an end off the board. Adjacent
/// squares have nothing between them.
pub fn path_clear(origin: Square, destination: Square, board: &Board) -> bool {
    if !origin.in_bounds() || !destination.in_bounds() {
        return false;
    }

    let dr = destination.row - origin.row;
    let dc = destination.col - origin.col;
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return false;
    }

    let (step_r, step_c) = (dr.signum(), dc.signum());
    let mut sq = origin.offset(step_r, step_c);
    while sq != destination {
        if board.piece_at(sq).is_some() {
            return false;
        }
        sq = sq.offset(step_r, step_c);
    }
    true
}

/// Every square the piece on `origin` could legally move to. Empty when
/// `origin` is empty or off the board.
pub fn legal_destinations(board: &Board, origin: Square) -> Vec<Square> {
    match board.piece_at(origin) {
        Some(piece) => Square::all()
            .filter(|&to| is_legal_move(piece, origin, to, board))
            .collect(),
        None => Vec::new(),
    }
}

fn pawn_move_ok(color: Color, origin: Square, destination: Square, board: &Board) -> bool {
    let forward = color.forward();
    let dr = destination.row - origin.row;
    let dc = destination.col - origin.col;

    if dc == 0 {
        if dr == forward && board.piece_at(destination).is_none() {
            return true;
        }
        if origin.row == color.pawn_row()
            && dr == 2 * forward
            && board.piece_at(origin.offset(forward, 0)).is_none()
            && board.piece_at(destination).is_none()
        {
            return true;
        }
    }

    // Diagonal steps only capture.
    dr == forward && dc.abs() == 1 && board.piece_at(destination).is_some()
}

fn is_straight(origin: Square, destination: Square) -> bool {
    (origin.row == destination.row) != (origin.col == destination.col)
}

fn is_diagonal(origin: Square, destination: Square) -> bool {
    let dr = (destination.row - origin.row).abs();
    let dc = (destination.col - origin.col).abs();
    dr == dc && dr != 0
}

fn is_knight_jump(origin: Square, destination: Square) -> bool {
    let dr = (destination.row - origin.row).abs();
    let dc = (destination.col - origin.col).abs();
    matches!((dr, dc), (2, 1) | (1, 2))
}

fn is_king_step(origin: Square, destination: Square) -> bool {
    let dr = (destination.row - origin.row).abs();
    let dc = (destination.col - origin.col).abs();
    dr.max(dc) == 1
}
