//! Build boards from ASCII pictures: `.` empty, `#` black, `O` white.
//!
//! Rows are separated by newlines; surrounding whitespace and blank lines are
//! ignored, so pictures can be indented inside test code.

use crate::{Board, BoardError, CellState};
use derive_more::{Display, Error};

#[derive(Debug, PartialEq, Display, Error)]
pub enum PictureError {
    #[display(fmt = "picture has no rows")]
    Empty,
    #[display(fmt = "row {} has {} cells, expected {}", row, actual, expected)]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[display(fmt = "unknown cell symbol {:?}", symbol)]
    UnknownSymbol { symbol: char },
    #[display(fmt = "{}", _0)]
    Board(BoardError),
}

impl From<BoardError> for PictureError {
    fn from(err: BoardError) -> Self {
        PictureError::Board(err)
    }
}

/// Parse a picture into a board sized to fit it.
pub fn parse_picture(picture: &str) -> Result<Board, PictureError> {
    let rows: Vec<&str> = picture
        .lines()
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .collect();

    let width = rows.first().ok_or(PictureError::Empty)?.chars().count();
    let mut states = Vec::with_capacity(width * rows.len());

    for (i, row) in rows.iter().enumerate() {
        let actual = row.chars().count();
        if actual != width {
            return Err(PictureError::RaggedRow {
                row: i,
                expected: width,
                actual,
            });
        }

        for symbol in row.chars() {
            states.push(match symbol {
                '.' => CellState::Empty,
                '#' => CellState::Black,
                'O' => CellState::White,
                _ => return Err(PictureError::UnknownSymbol { symbol }),
            });
        }
    }

    Ok(Board::from_states(width, rows.len(), &states)?)
}

/// Like [`parse_picture`], but panics on a malformed picture.
pub fn board_from_picture(picture: &str) -> Board {
    match parse_picture(picture) {
        Ok(board) => board,
        Err(err) => panic!("bad board picture: {}", err),
    }
}
