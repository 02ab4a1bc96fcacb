//! `reversi-move` validates and applies a single Reversi (Othello) move.
//!
//! Given a board, a target cell and a player, it casts a ray in each of the
//! eight compass directions, finds the runs of opponent discs closed off by
//! one of the player's own discs, and flips them.
//!
//!  - [`Board`] owns the grid and implements ray casting and serialization to
//!    a flat row-major sequence of [`CellState`]s.
//!  - [`Board::capture`] evaluates a move without touching the board;
//!    [`Board::apply_move`] commits it.
//!  - [`ffi`] exposes move application to C callers.

pub mod ffi;
pub mod test_utils;

mod board;
mod capture;
mod direction;
mod error;
mod location;
mod player;
mod utils;

pub use board::*;
pub use capture::*;
pub use direction::*;
pub use error::*;
pub use location::*;
pub use player::*;

/// The number of spaces on one edge of a standard board.
pub const DEFAULT_EDGE_LENGTH: usize = 8;

/// The longest board edge: one column per letter of the location notation.
pub const MAX_EDGE_LENGTH: usize = 26;
