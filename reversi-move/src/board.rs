//! The board grid, ray casting and flat serialization.
//!
//! Cells live in a single row-major buffer; every lookup goes through
//! [`Board::index`], which is the only place bounds are checked.

use crate::{
    utils, BoardError, CellState, Direction, Location, Player, DEFAULT_EDGE_LENGTH,
    MAX_EDGE_LENGTH,
};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use tracing::trace;

/// A single square of the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cell {
    location: Location,
    state: CellState,
}

impl Cell {
    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Give this cell to `player`.
    #[inline]
    pub fn set_player(&mut self, player: Player) {
        self.state = player.into();
    }
}

/// Dimensions of a board. Fixed for the board's lifetime.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let edges = 1..=MAX_EDGE_LENGTH;
        if edges.contains(&width) && edges.contains(&height) {
            Ok(Self { width, height })
        } else {
            Err(BoardError::InvalidDimensions { width, height })
        }
    }

    #[inline]
    pub fn area(self) -> usize {
        self.width * self.height
    }
}

/// The opponent discs a ray passed over, and whether a disc of the
/// moving player ended the run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Line {
    pub cells: Vec<Location>,
    pub had_hit: bool,
}

impl Line {
    /// Whether this ray flips anything: it must be closed off by the moving
    /// player and pass over at least one opponent disc.
    #[inline]
    pub fn contributes(&self) -> bool {
        self.had_hit && !self.cells.is_empty()
    }
}

/// What a ray finds when it moves onto a location.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RayStep {
    /// An opponent disc; keep going.
    Continue(Location),
    /// Off the board or an empty cell.
    Blocked,
    /// A disc of the moving player.
    Hit,
}

/// A rectangular Reversi board of any size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    size: Size,
    cells: Vec<Cell>,
}

impl Default for Board {
    /// The standard 8x8 starting position.
    fn default() -> Self {
        let size = Size {
            width: DEFAULT_EDGE_LENGTH,
            height: DEFAULT_EDGE_LENGTH,
        };
        let mut board = Self::blank(size);
        board.place_opening();
        board
    }
}

impl Board {
    /// Build a `width` x `height` board with the four opening discs in the center.
    /// Both dimensions must be at least 2 so the opening block fits, and at
    /// most [`MAX_EDGE_LENGTH`].
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let size = Size::new(width, height)?;
        if width < 2 || height < 2 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let mut board = Self::blank(size);
        board.place_opening();
        Ok(board)
    }

    /// Build a board from row-major cell states. The states are taken as given:
    /// no opening discs are placed and nothing is checked for legality.
    pub fn from_states(
        width: usize,
        height: usize,
        states: &[CellState],
    ) -> Result<Self, BoardError> {
        let size = Size::new(width, height)?;
        if states.len() != size.area() {
            return Err(BoardError::InvalidLength {
                expected: size.area(),
                actual: states.len(),
            });
        }

        let mut board = Self::blank(size);
        for (cell, &state) in board.cells.iter_mut().zip(states) {
            cell.state = state;
        }
        Ok(board)
    }

    /// Build a board from row-major integer codes (0 empty, 1 black, 2 white).
    pub fn from_codes(width: usize, height: usize, codes: &[u8]) -> Result<Self, BoardError> {
        let size = Size::new(width, height)?;
        if codes.len() != size.area() {
            return Err(BoardError::InvalidLength {
                expected: size.area(),
                actual: codes.len(),
            });
        }

        let states = codes
            .iter()
            .map(|&code| CellState::try_from(code))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_states(width, height, &states)
    }

    fn blank(size: Size) -> Self {
        let cells = (0..size.height)
            .flat_map(|y| {
                (0..size.width).map(move |x| Cell {
                    location: Location::new(x as isize, y as isize),
                    state: CellState::Empty,
                })
            })
            .collect();

        Self { size, cells }
    }

    /// Place the standard 2x2 block: black on the main diagonal, white on the other.
    fn place_opening(&mut self) {
        let cx = (self.size.width / 2) as isize;
        let cy = (self.size.height / 2) as isize;

        let opening = [
            (Location::new(cx - 1, cy - 1), Player::Black),
            (Location::new(cx, cy), Player::Black),
            (Location::new(cx, cy - 1), Player::White),
            (Location::new(cx - 1, cy), Player::White),
        ];
        for &(location, player) in opening.iter() {
            if let Some(cell) = self.cell_mut(location) {
                cell.set_player(player);
            }
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The row-major buffer position of `location`, or None if it is off the board.
    #[inline]
    fn index(&self, location: Location) -> Option<usize> {
        let in_bounds = location.x >= 0
            && location.y >= 0
            && (location.x as usize) < self.size.width
            && (location.y as usize) < self.size.height;

        if in_bounds {
            Some(location.y as usize * self.size.width + location.x as usize)
        } else {
            None
        }
    }

    /// Get the cell at `location`.
    pub fn get_cell(&self, location: Location) -> Result<&Cell, BoardError> {
        self.index(location)
            .map(|i| &self.cells[i])
            .ok_or(BoardError::OutOfBounds {
                x: location.x,
                y: location.y,
            })
    }

    pub(crate) fn cell_mut(&mut self, location: Location) -> Option<&mut Cell> {
        let i = self.index(location)?;
        self.cells.get_mut(i)
    }

    /// Look at the next location of a ray cast by `player`.
    fn step_onto(&self, location: Location, player: Player) -> RayStep {
        let state = match self.index(location) {
            Some(i) => self.cells[i].state,
            None => return RayStep::Blocked,
        };

        match state.owner() {
            None => RayStep::Blocked,
            Some(owner) if owner == player => RayStep::Hit,
            Some(_) => RayStep::Continue(location),
        }
    }

    /// Walk from `origin` along `direction`, collecting opponent discs until
    /// a disc of `player` closes the run. The origin must be an empty cell on
    /// the board; otherwise the returned line is empty and unhit.
    pub fn cast_ray(&self, origin: Location, direction: Direction, player: Player) -> Line {
        let mut line = Line::default();

        match self.get_cell(origin) {
            Ok(cell) if cell.state.is_empty() => {}
            _ => return line,
        }

        // No straight line on the board is longer than this.
        let max_steps = self.size.width + self.size.height;
        let mut current = origin;

        for _ in 0..max_steps {
            current = current.step(direction);
            match self.step_onto(current, player) {
                RayStep::Continue(location) => line.cells.push(location),
                RayStep::Blocked => break,
                RayStep::Hit => {
                    line.had_hit = true;
                    break;
                }
            }
        }

        trace!(
            %origin,
            ?direction,
            %player,
            passed = line.cells.len(),
            hit = line.had_hit,
            "cast ray"
        );
        line
    }

    /// All cell states in row-major order.
    pub fn to_flat(&self) -> Vec<CellState> {
        self.cells.iter().map(|cell| cell.state).collect()
    }

    /// All cell states in row-major order, as boundary integer codes.
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.state.code()).collect()
    }

    /// How many cells are in each state. States that do not occur are absent.
    pub fn count_by_state(&self) -> BTreeMap<CellState, usize> {
        let mut counts = BTreeMap::new();
        for cell in &self.cells {
            *counts.entry(cell.state).or_insert(0) += 1;
        }
        counts
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells.iter().map(|cell| cell.state.symbol()),
            self.size.width,
            self.size.height,
            f,
        )
    }
}
