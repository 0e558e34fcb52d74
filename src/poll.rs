use log::{debug, info, warn};

use vote_tally::*;

use snafu::{prelude::*, Snafu};

use std::fs;
use std::fs::File;
use std::io::{self, BufReader};

use text_diff::print_diff;

use crate::poll::summary::*;

pub mod reader;
pub mod summary;

#[derive(Debug, Snafu)]
pub enum PollError {
    #[snafu(display("Error opening votes file {path}"))]
    OpeningInput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading votes"))]
    ReadingInput { source: std::io::Error },
    #[snafu(display("Error opening summary file"))]
    OpeningJson { source: std::io::Error },
    #[snafu(display(""))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type PollResult<T> = Result<T, PollError>;

pub fn run_poll(
    input_path: Option<String>,
    out_path: Option<String>,
    reference_path: Option<String>,
) -> PollResult<()> {
    let votes = match input_path {
        Some(path) => {
            info!("Attempting to read votes file {:?}", path);
            let f = File::open(path.as_str()).context(OpeningInputSnafu { path: path.clone() })?;
            reader::read_votes(BufReader::new(f))?
        }
        None => {
            let stdin = io::stdin();
            reader::read_votes(stdin.lock())?
        }
    };
    debug!("votes: {:?}", votes);

    let stats = run_tally_stats(&votes);
    info!("stats: {:?}", stats);

    print_report(&stats);

    let summary = Summary::from_stats(&stats);
    let pretty_js_summary = serde_json::to_string_pretty(&summary).context(ParsingJsonSnafu {})?;

    if let Some(out) = out_path {
        if out == "stdout" {
            println!("{}", pretty_js_summary);
        } else {
            fs::write(out.as_str(), &pretty_js_summary)
                .context(WritingSummarySnafu { path: out.clone() })?;
            info!("Wrote the summary to {:?}", out);
        }
    }

    // The reference summary, if provided for comparison
    if let Some(summary_p) = reference_path {
        let summary_ref = read_summary(summary_p)?;
        info!("summary: {:?}", summary_ref);
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_summary {
            warn!("Found differences with the reference summary");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_summary.as_ref(),
                "\n",
            );
            whatever!("Difference detected between calculated summary and reference summary")
        }
    }

    Ok(())
}

fn print_report(stats: &TallyStats) {
    println!("Here are how many times each topic appears (unfiltered):");
    for (topic, count) in stats.unfiltered.iter() {
        println!("  {}: {}", topic, count);
    }
    println!();
    println!("Here are how many times each topic appears (filtered):");
    for (topic, count) in stats.filtered.iter() {
        println!("  {}: {}", topic, count);
    }
    println!("Here are the voters who did not have their votes counted:");
    for (voter, reason) in stats.excluded.iter() {
        println!("  {}: {}", voter, reason);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use vote_tally::*;

    use crate::poll::reader::read_votes;
    use crate::poll::summary::Summary;

    fn vote(voter: &str, topic: &str) -> Vote {
        Vote {
            voter: voter.to_string(),
            topic: topic.to_string(),
        }
    }

    #[test]
    fn read_votes_splits_well_formed_lines() {
        let input = Cursor::new("a x\na y\nb z\n");
        let votes = read_votes(input).unwrap();
        assert_eq!(votes, vec![vote("a", "x"), vote("a", "y"), vote("b", "z")]);
    }

    #[test]
    fn read_votes_skips_empty_lines() {
        let input = Cursor::new("a x\n\na y\n");
        let votes = read_votes(input).unwrap();
        assert_eq!(votes.len(), 2);
    }

    #[test]
    fn read_votes_drops_malformed_lines() {
        // Three tokens, one token, empty tokens around the separator.
        let input = Cursor::new("a b c\nonly\n x\nx \na  b\nok fine\n");
        let votes = read_votes(input).unwrap();
        assert_eq!(votes, vec![vote("ok", "fine")]);
    }

    #[test]
    fn summary_round_trips_through_json() {
        let votes = vec![vote("a", "x"), vote("a", "y"), vote("b", "z")];
        let stats = run_tally_stats(&votes);
        let summary = Summary::from_stats(&stats);
        let js = serde_json::to_string_pretty(&summary).unwrap();
        let parsed: Summary = serde_json::from_str(js.as_str()).unwrap();
        assert_eq!(parsed, summary);
        assert_eq!(parsed.unfiltered_tally.get("x").map(|s| s.as_str()), Some("1"));
        assert_eq!(
            parsed.removed_voters.get("b").map(|s| s.as_str()),
            Some(NOT_ENOUGH_VOTES)
        );
    }

    #[test]
    fn pipeline_from_lines_to_stats() {
        let input = Cursor::new("a x\na y\nb z\n\n");
        let votes = read_votes(input).unwrap();
        let stats = run_tally_stats(&votes);
        assert_eq!(stats.total_votes, 3);
        assert_eq!(stats.unfiltered.len(), 3);
        assert_eq!(stats.filtered.len(), 2);
        assert_eq!(
            stats.excluded.get("b").map(|s| s.as_str()),
            Some(NOT_ENOUGH_VOTES)
        );
    }
}
