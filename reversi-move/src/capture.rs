//! Move validation and application.
//!
//! A move is evaluated in two phases: [`Board::capture`] casts all eight rays
//! against the unmodified board, then [`Board::apply_move`] commits the flips.

use crate::{Board, Direction, Line, Location, Player};
use tracing::debug;

/// A disc placement by one player.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Move {
    pub location: Location,
    pub player: Player,
}

impl Move {
    pub fn new(location: Location, player: Player) -> Self {
        Self { location, player }
    }

    /// Build a move from the 1-based `(column, row)` pair used at the system boundary.
    pub fn from_one_based(column: isize, row: isize, player: Player) -> Self {
        Self::new(Location::from_one_based(column, row), player)
    }
}

/// The result of casting all eight rays for a prospective move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Capture {
    lines: Vec<(Direction, Line)>,
    legal: bool,
}

impl Capture {
    /// Whether at least one direction flips a disc.
    #[inline]
    pub fn is_legal(&self) -> bool {
        self.legal
    }

    /// Every ray, in [`Direction::ALL`] order.
    pub fn lines(&self) -> impl Iterator<Item = (Direction, &Line)> {
        self.lines.iter().map(|(direction, line)| (*direction, line))
    }

    /// The rays that flip at least one disc.
    pub fn contributing(&self) -> impl Iterator<Item = (Direction, &Line)> {
        self.lines().filter(|(_, line)| line.contributes())
    }

    /// Every location that changes hands, excluding the placed disc.
    pub fn flips(&self) -> impl Iterator<Item = Location> + '_ {
        self.contributing()
            .flat_map(|(_, line)| line.cells.iter().copied())
    }

    pub fn flip_count(&self) -> usize {
        self.contributing().map(|(_, line)| line.cells.len()).sum()
    }
}

impl Board {
    /// Evaluate a move by `player` at `origin` without changing the board.
    pub fn capture(&self, origin: Location, player: Player) -> Capture {
        let mut legal = false;
        let mut lines = Vec::with_capacity(Direction::ALL.len());

        for &direction in Direction::ALL.iter() {
            let line = self.cast_ray(origin, direction, player);
            legal |= line.contributes();
            lines.push((direction, line));
        }

        Capture { lines, legal }
    }

    /// Place a disc for `player` at `origin` and flip every captured run.
    ///
    /// Returns the number of flipped discs, not counting the placed one.
    /// Illegal and off-board moves return 0 and leave the board unchanged.
    pub fn apply_move(&mut self, origin: Location, player: Player) -> usize {
        if self.get_cell(origin).is_err() {
            debug!(%origin, %player, "move is off the board");
            return 0;
        }

        let capture = self.capture(origin, player);
        if !capture.is_legal() {
            debug!(%origin, %player, "move captures nothing");
            return 0;
        }

        let mut flipped = 0;
        for location in capture.flips().chain(std::iter::once(origin)) {
            if let Some(cell) = self.cell_mut(location) {
                cell.set_player(player);
            }
            if location != origin {
                flipped += 1;
            }
        }

        debug!(%origin, %player, flipped, "applied move");
        flipped
    }

    /// Apply `mv`. See [`Board::apply_move`].
    #[inline]
    pub fn play(&mut self, mv: Move) -> usize {
        self.apply_move(mv.location, mv.player)
    }
}
