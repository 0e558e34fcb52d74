// Primitives for reading the line-oriented votes format.

use std::io::BufRead;

use log::debug;
use snafu::prelude::*;

use vote_tally::Vote;

use crate::poll::{PollResult, ReadingInputSnafu};

/// Reads `<voter> <topic>` pairs, one per line, until the end of the input.
///
/// Empty lines are skipped. Lines that do not split on a single space into
/// exactly two non-empty tokens are dropped without an error.
pub fn read_votes<R: BufRead>(input: R) -> PollResult<Vec<Vote>> {
    let mut res: Vec<Vote> = Vec::new();
    for (idx, line_r) in input.lines().enumerate() {
        let lineno = idx + 1;
        let line = line_r.context(ReadingInputSnafu {})?;
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split(' ').collect();
        match tokens.as_slice() {
            [voter, topic] if !voter.is_empty() && !topic.is_empty() => {
                res.push(Vote {
                    voter: voter.to_string(),
                    topic: topic.to_string(),
                });
            }
            _ => {
                debug!(
                    "read_votes: lineno: {:?} dropping malformed line {:?}",
                    lineno, line
                );
            }
        }
    }
    Ok(res)
}
