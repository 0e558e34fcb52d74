mod config;
pub mod manual;

use log::{debug, info};

use std::collections::BTreeMap;

pub use crate::config::*;

/// Counts the occurrences of each distinct value in the input.
///
/// The resulting map iterates in lexicographic (code point) order of the
/// keys. An empty input yields an empty map.
pub fn tally<'a, I>(values: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for value in values {
        let e = counts.entry(value.to_string()).or_insert(0);
        *e += 1;
    }
    counts
}

/// Counts the occurrences of each topic, only keeping the votes cast by
/// voters with exactly two votes.
///
/// The voter tally is derived from the same sequence of votes, so every
/// voter must be found in it. A miss means the vote records were corrupted
/// after construction and this function panics.
pub fn tally_filtered(votes: &[Vote]) -> BTreeMap<String, u64> {
    let voter_counts = tally(votes.iter().map(|v| v.voter.as_str()));
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for v in votes.iter() {
        let num_votes = match voter_counts.get(&v.voter) {
            Some(n) => *n,
            None => panic!("tally_filtered: voter {:?} missing from its own tally", v.voter),
        };
        if num_votes == 2 {
            let e = counts.entry(v.topic.clone()).or_insert(0);
            *e += 1;
        }
    }
    counts
}

/// Lists the voters who did not cast exactly two votes, with the reason
/// their votes were not counted.
///
/// Voters with exactly two votes are omitted entirely.
pub fn excluded_voters(votes: &[Vote]) -> BTreeMap<String, String> {
    let voter_counts = tally(votes.iter().map(|v| v.voter.as_str()));
    let mut removed: BTreeMap<String, String> = BTreeMap::new();
    for (voter, count) in voter_counts {
        if count < 2 {
            removed.insert(voter, NOT_ENOUGH_VOTES.to_string());
        } else if count > 2 {
            removed.insert(voter, TOO_MANY_VOTES.to_string());
        }
    }
    removed
}

/// Tabulates a poll: the unfiltered tally of the topics, the tally
/// restricted to voters with exactly two votes, and the excluded voters.
///
/// ```
/// use vote_tally::{run_tally_stats, Vote, NOT_ENOUGH_VOTES};
///
/// let votes = vec![
///     Vote { voter: "amy".to_string(), topic: "rust".to_string() },
///     Vote { voter: "amy".to_string(), topic: "games".to_string() },
///     Vote { voter: "bob".to_string(), topic: "rust".to_string() },
/// ];
/// let stats = run_tally_stats(&votes);
/// assert_eq!(stats.unfiltered.get("rust"), Some(&2));
/// assert_eq!(stats.filtered.get("rust"), Some(&1));
/// assert_eq!(stats.excluded.get("bob").map(|s| s.as_str()), Some(NOT_ENOUGH_VOTES));
/// ```
pub fn run_tally_stats(votes: &[Vote]) -> TallyStats {
    info!("Processing {:?} votes", votes.len());
    let unfiltered = tally(votes.iter().map(|v| v.topic.as_str()));
    let filtered = tally_filtered(votes);
    let excluded = excluded_voters(votes);
    debug!(
        "run_tally_stats: {:?} topics unfiltered, {:?} topics filtered, {:?} voters excluded",
        unfiltered.len(),
        filtered.len(),
        excluded.len()
    );
    TallyStats {
        unfiltered,
        filtered,
        excluded,
        total_votes: votes.len() as u64,
    }
}
