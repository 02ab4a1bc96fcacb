//! Code for working with [`Location`]s on the board.

use crate::Direction;
use std::fmt::{self, Display, Formatter, Write};

const COLUMN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A 0-based `(x, y)` coordinate: `x` is the column, `y` is the row.
///
/// Locations may lie off the board; only [`Board`](crate::Board) knows its bounds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location {
    pub x: isize,
    pub y: isize,
}

impl Location {
    #[inline]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Convert from the 1-based `(column, row)` pair used at the system boundary.
    /// Values at the bottom of the range stay off the board instead of wrapping.
    pub fn from_one_based(column: isize, row: isize) -> Self {
        Self::new(column.saturating_sub(1), row.saturating_sub(1))
    }

    /// The 1-based `(column, row)` pair for this location.
    pub fn to_one_based(self) -> (isize, isize) {
        (self.x.saturating_add(1), self.y.saturating_add(1))
    }

    /// The neighbouring location one step along `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Convert this [`Location`] into string notation ("C4").
/// Locations that have no notation are shown as coordinates.
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let letter = if self.x >= 0 && self.y >= 0 {
            COLUMN_LETTERS.chars().nth(self.x as usize)
        } else {
            None
        };

        match letter {
            Some(col) => {
                f.write_char(col)?;
                write!(f, "{}", self.y + 1)
            }
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {}

/// Build a [`Location`] from a 1-indexed string notation ("C4", "b10").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.find(col_str).ok_or(ParseLocationError)?;
        let row: usize = chars.as_str().parse().or(Err(ParseLocationError))?;

        if row == 0 {
            return Err(ParseLocationError);
        }

        Ok(Self::new(col as isize, row as isize - 1))
    }
}
