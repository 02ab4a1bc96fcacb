//! Errors produced by the core board logic.

use derive_more::{Display, Error};

/// Everything that can go wrong while building or reading a [`Board`](crate::Board).
///
/// Ray casting and move application never return these: running off the board
/// is an ordinary outcome for them, not a failure.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum BoardError {
    #[display(fmt = "invalid board dimensions {}x{}", width, height)]
    InvalidDimensions { width: usize, height: usize },

    #[display(fmt = "location ({}, {}) is outside the board", x, y)]
    OutOfBounds { x: isize, y: isize },

    #[display(fmt = "expected {} cell states, got {}", expected, actual)]
    InvalidLength { expected: usize, actual: usize },

    #[display(fmt = "invalid cell state {}", code)]
    InvalidCellState { code: u8 },

    #[display(fmt = "invalid player {}", code)]
    InvalidPlayer { code: u8 },
}
