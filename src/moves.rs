use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::square::Square;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Coordinate notation, e.g. "e2e4".
    pub fn to_uci(&self) -> String {
        format!("{}{}", self.from, self.to)
    }

    pub fn from_uci(s: &str) -> Result<Move> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(Error::Move(s.to_string()));
        }
        let from = s[..2].parse().map_err(|_| Error::Move(s.to_string()))?;
        let to = s[2..].parse().map_err(|_| Error::Move(s.to_string()))?;
        Ok(Move { from, to })
    }
}
