//! Request/response glue around [`reversi_move`].
//!
//! Callers send a board and a move as JSON and get the resulting board back.
//! [`fixtures`] replays recorded request/response pairs against the same path.

pub mod apply;
pub mod fixtures;
pub mod logging;
pub mod request;

pub use request::{MoveSpec, Request, RequestError, Response};
