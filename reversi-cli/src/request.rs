//! The JSON request and response exchanged with callers.

use derive_more::{Display, Error};
use reversi_move::{Board, BoardError, Location, Move, Player, DEFAULT_EDGE_LENGTH};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use tracing::{debug, instrument};

fn default_edge() -> usize {
    DEFAULT_EDGE_LENGTH
}

/// A board and one move to apply to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default = "default_edge")]
    pub width: usize,
    #[serde(default = "default_edge")]
    pub height: usize,
    /// Row-major cell codes. The standard opening is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<u8>>,
    #[serde(rename = "move")]
    pub mv: MoveSpec,
}

/// A move as callers send it: 1-based column and row, player 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveSpec {
    pub column: isize,
    pub row: isize,
    pub player: u8,
}

/// The board after the move, in the same encoding as the request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub board: Vec<u8>,
}

#[derive(Debug, Display, Error)]
pub enum RequestError {
    /// The input is not JSON at all.
    #[display(fmt = "Invalid board input. (Must be json)")]
    Json(serde_json::Error),
    /// Valid JSON that does not describe a request.
    #[display(fmt = "Invalid request: {}", _0)]
    Shape(serde_json::Error),
    #[display(fmt = "Invalid request: {}", _0)]
    Board(BoardError),
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            RequestError::Json(err)
        } else {
            RequestError::Shape(err)
        }
    }
}

impl From<BoardError> for RequestError {
    fn from(err: BoardError) -> Self {
        RequestError::Board(err)
    }
}

impl Request {
    /// Parse a request from JSON text.
    pub fn parse(input: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Move the disc placement to `location`, keeping the player.
    pub fn place_at(&mut self, location: Location) {
        let (column, row) = location.to_one_based();
        self.mv.column = column;
        self.mv.row = row;
    }

    /// Build the board and the 0-based move this request describes.
    pub fn resolve(&self) -> Result<(Board, Move), BoardError> {
        let board = match &self.board {
            Some(codes) => Board::from_codes(self.width, self.height, codes)?,
            None => Board::new(self.width, self.height)?,
        };
        let player = Player::try_from(self.mv.player)?;

        Ok((board, Move::from_one_based(self.mv.column, self.mv.row, player)))
    }

    /// Apply the move and serialize the resulting board.
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn respond(&self) -> Result<Response, RequestError> {
        let (mut board, mv) = self.resolve()?;
        let flipped = board.play(mv);
        debug!(location = %mv.location, player = %mv.player, flipped, "move applied\n{}", board);

        Ok(Response {
            board: board.to_codes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_opening_board() {
        let request =
            Request::parse(r#"{"move": {"column": 3, "row": 4, "player": 2}}"#).unwrap();
        assert_eq!(request.width, 8);
        assert_eq!(request.height, 8);
        assert_eq!(request.board, None);

        let (board, mv) = request.resolve().unwrap();
        assert_eq!(board, Board::default());
        assert_eq!(mv, Move::new(Location::new(2, 3), Player::White));
    }

    #[test]
    fn responds_with_flipped_board() {
        let request =
            Request::parse(r#"{"move": {"column": 3, "row": 4, "player": 2}}"#).unwrap();
        let mut expected = Board::default().to_codes();
        expected[3 * 8 + 2] = 2;
        expected[3 * 8 + 3] = 2;

        assert_eq!(request.respond().unwrap(), Response { board: expected });
    }

    #[test]
    fn explicit_board_is_used_as_is() {
        let request = Request {
            width: 3,
            height: 1,
            board: Some(vec![0, 2, 1]),
            mv: MoveSpec {
                column: 1,
                row: 1,
                player: 1,
            },
        };
        assert_eq!(request.respond().unwrap().board, vec![1, 1, 1]);
    }

    #[test]
    fn out_of_range_move_is_a_no_op() {
        for &(column, row) in [
            (9, 1),
            (0, 0),
            (-3, 2),
            (1, 9),
            (isize::MIN, 1),
            (1, isize::MIN),
            (isize::MAX, isize::MAX),
        ]
        .iter()
        {
            let request = Request {
                width: 8,
                height: 8,
                board: None,
                mv: MoveSpec {
                    column,
                    row,
                    player: 1,
                },
            };
            assert_eq!(request.respond().unwrap().board, Board::default().to_codes());
        }
    }

    #[test]
    fn not_json() {
        let err = Request::parse("board please").unwrap_err();
        assert!(matches!(err, RequestError::Json(_)));
        assert_eq!(err.to_string(), "Invalid board input. (Must be json)");

        let truncated = Request::parse(r#"{"move": {"column": 1"#).unwrap_err();
        assert!(matches!(truncated, RequestError::Json(_)));
    }

    #[test]
    fn extreme_column_from_json_is_a_no_op() {
        let request =
            Request::parse(r#"{"move": {"column": -9223372036854775808, "row": 1, "player": 1}}"#)
                .unwrap();
        assert_eq!(request.respond().unwrap().board, Board::default().to_codes());
    }

    #[test]
    fn wrong_shape_is_not_reported_as_bad_json() {
        for &input in [
            r#"{"move": {"column": "three", "row": 1, "player": 1}}"#,
            r#"{"width": -8, "move": {"column": 1, "row": 1, "player": 1}}"#,
            r#"{"board": [0, 0]}"#,
            r#"[1, 2, 3]"#,
        ]
        .iter()
        {
            let err = Request::parse(input).unwrap_err();
            assert!(matches!(err, RequestError::Shape(_)), "{}", input);
            assert!(err.to_string().starts_with("Invalid request: "));
        }
    }

    #[test]
    fn place_at_overrides_move_location() {
        let mut request =
            Request::parse(r#"{"move": {"column": 1, "row": 1, "player": 1}}"#).unwrap();
        request.place_at("C5".parse().unwrap());
        assert_eq!(request.mv.column, 3);
        assert_eq!(request.mv.row, 5);
        assert_eq!(request.mv.player, 1);

        let mut expected = Board::default().to_codes();
        expected[4 * 8 + 2] = 1;
        expected[4 * 8 + 3] = 1;
        assert_eq!(request.respond().unwrap().board, expected);
    }

    #[test]
    fn structural_errors() {
        let short =
            Request::parse(r#"{"board": [0, 0], "move": {"column": 1, "row": 1, "player": 1}}"#)
                .unwrap()
                .respond()
                .unwrap_err();
        assert!(matches!(
            short,
            RequestError::Board(BoardError::InvalidLength {
                expected: 64,
                actual: 2
            })
        ));

        let bad_player = Request::parse(r#"{"move": {"column": 1, "row": 1, "player": 3}}"#)
            .unwrap()
            .respond()
            .unwrap_err();
        assert_eq!(bad_player.to_string(), "Invalid request: invalid player 3");

        let zero_width =
            Request::parse(r#"{"width": 0, "move": {"column": 1, "row": 1, "player": 1}}"#)
                .unwrap()
                .respond()
                .unwrap_err();
        assert!(matches!(
            zero_width,
            RequestError::Board(BoardError::InvalidDimensions { .. })
        ));

        let huge = Request::parse(
            r#"{"width": 3000000000, "height": 3000000000, "move": {"column": 1, "row": 1, "player": 1}}"#,
        )
        .unwrap()
        .respond()
        .unwrap_err();
        assert!(matches!(
            huge,
            RequestError::Board(BoardError::InvalidDimensions {
                width: 3_000_000_000,
                height: 3_000_000_000
            })
        ));
    }
}
