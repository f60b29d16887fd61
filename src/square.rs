use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A board coordinate. Row 0 is black's back rank, row 7 is white's.
///
/// Coordinates are signed so a shell can hand over whatever square a drop
/// landed on, including ones off the edge; those are never legal targets.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self {
        Square { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    pub fn offset(self, dr: i32, dc: i32) -> Square {
        Square::new(self.row + dr, self.col + dc)
    }

    /// Array indices, or `None` when off the board.
    pub fn index(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Every on-board square, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|r| (0..8).map(move |c| Square::new(r, c)))
    }
}

/// File letter plus rank digit, with row 7 as rank 1.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + (7 - self.row) as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::Square(s.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(Error::Square(s.to_string()));
        }
        Ok(Square::new(7 - (rank - b'1') as i32, (file - b'a') as i32))
    }
}
