//! Replay a file of recorded requests and compare the boards they produce.
//!
//! A fixture file is a JSON array of `{"input": <request>, "expected": {"board": [..]}}`.
//! Inputs are parsed one at a time so a single malformed fixture is reported
//! on its own instead of rejecting the whole file.

use crate::request::{Request, RequestError, Response};
use anyhow::Context;
use itertools::{EitherOrBoth, Itertools};
use serde::Deserialize;
use std::fs;
use std::iter::FromIterator;
use std::path::Path;
use tracing::{info, warn};

/// One recorded request and the board it should produce.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Fixture {
    pub input: serde_json::Value,
    pub expected: Response,
}

/// How a single fixture went.
#[derive(Debug)]
pub enum Outcome {
    Passed,
    /// Board positions that differ, including positions present on only one side.
    Failed { mismatches: Vec<usize> },
    Errored(RequestError),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Read every fixture in the file at `path`.
pub fn load_fixtures(path: &Path) -> anyhow::Result<Vec<Fixture>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixtures from {}", path.display()))?;
    let fixtures: Vec<Fixture> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse fixtures in {}", path.display()))?;

    info!(count = fixtures.len(), path = %path.display(), "loaded fixtures");
    Ok(fixtures)
}

/// Positions at which two boards disagree.
pub fn board_mismatches(actual: &[u8], expected: &[u8]) -> Vec<usize> {
    actual
        .iter()
        .zip_longest(expected)
        .enumerate()
        .filter_map(|(i, pair)| match pair {
            EitherOrBoth::Both(a, e) if a == e => None,
            _ => Some(i),
        })
        .collect()
}

/// Run one fixture through the same path as a live request.
pub fn run_fixture(fixture: &Fixture) -> Outcome {
    let response = serde_json::from_value::<Request>(fixture.input.clone())
        .map_err(RequestError::from)
        .and_then(|request| request.respond());

    match response {
        Ok(response) => {
            let mismatches = board_mismatches(&response.board, &fixture.expected.board);
            if mismatches.is_empty() {
                Outcome::Passed
            } else {
                Outcome::Failed { mismatches }
            }
        }
        Err(err) => {
            warn!(%err, "fixture could not be run");
            Outcome::Errored(err)
        }
    }
}

/// The outcome of every fixture in a file, in file order.
#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_pass()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.outcomes.len()
    }

    /// One line per fixture, numbered from 1.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .map(|(i, outcome)| match outcome {
                Outcome::Passed => format!("Passed test #{}", i + 1),
                Outcome::Failed { mismatches } => format!(
                    "Failed test #{} (cells {})",
                    i + 1,
                    mismatches.iter().join(", ")
                ),
                Outcome::Errored(err) => format!("Failed test #{} ({})", i + 1, err),
            })
    }
}

impl FromIterator<Outcome> for Report {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}
