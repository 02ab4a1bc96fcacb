//! Answer a single request: read JSON, apply the move, write JSON.

use crate::request::Request;
use anyhow::Context;
use reversi_move::Location;
use std::io::{Read, Write};
use tracing::info;

/// Read one request from `input` and write the response to `output`.
/// `at` replaces the location of the requested move.
/// Nothing is written if the request fails.
pub fn run<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    at: Option<Location>,
) -> anyhow::Result<()> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read request")?;

    let mut request = Request::parse(&text)?;
    if let Some(location) = at {
        request.place_at(location);
    }

    let response = request.respond()?;
    serde_json::to_writer(&mut output, &response).context("failed to write response")?;
    output.flush().context("failed to write response")?;

    info!(cells = response.board.len(), "wrote response");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trip() {
        let mut output = Vec::new();
        run(
            Cursor::new(r#"{"board": [0, 2, 1, 0], "width": 4, "height": 1, "move": {"column": 1, "row": 1, "player": 1}}"#),
            &mut output,
            None,
        )
        .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), r#"{"board":[1,1,1,0]}"#);
    }

    #[test]
    fn failure_writes_nothing() {
        let mut output = Vec::new();
        let err = run(Cursor::new("{"), &mut output, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid board input. (Must be json)");
        assert!(output.is_empty());
    }

    #[test]
    fn location_override() {
        let mut output = Vec::new();
        run(
            Cursor::new(r#"{"board": [0, 2, 1, 0], "width": 4, "height": 1, "move": {"column": 4, "row": 1, "player": 1}}"#),
            &mut output,
            Some("A1".parse().unwrap()),
        )
        .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), r#"{"board":[1,1,1,0]}"#);
    }
}
