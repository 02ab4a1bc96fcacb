//! Players and the states a cell can be in.

use crate::BoardError;
use std::convert::TryFrom;
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The integer code used for this player at the system boundary.
    pub fn code(self) -> u8 {
        CellState::from(self).code()
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match CellState::try_from(code) {
            Ok(CellState::Black) => Ok(Player::Black),
            Ok(CellState::White) => Ok(Player::White),
            _ => Err(BoardError::InvalidPlayer { code }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// The contents of a single cell.
///
/// Encoded at the boundary as 0 (empty), 1 (black) and 2 (white).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum CellState {
    Empty,
    Black,
    White,
}

impl CellState {
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Black => 1,
            CellState::White => 2,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// The player owning a disc here, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Player::Black),
            CellState::White => Some(Player::White),
        }
    }

    /// The character used when printing a board.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Black => '#',
            CellState::White => 'O',
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::Black),
            2 => Ok(CellState::White),
            _ => Err(BoardError::InvalidCellState { code }),
        }
    }
}
