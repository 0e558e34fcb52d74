use std::collections::BTreeMap;
use std::fs;

use log::debug;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

use vote_tally::TallyStats;

use crate::poll::*;

/// The JSON summary of one tabulated poll.
///
/// The counts are serialized as strings.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "unfilteredTally")]
    pub unfiltered_tally: BTreeMap<String, String>,
    #[serde(rename = "filteredTally")]
    pub filtered_tally: BTreeMap<String, String>,
    #[serde(rename = "removedVoters")]
    pub removed_voters: BTreeMap<String, String>,
    #[serde(rename = "totalVotes")]
    pub total_votes: String,
}

impl Summary {
    pub fn from_stats(stats: &TallyStats) -> Summary {
        Summary {
            unfiltered_tally: counts_to_strings(&stats.unfiltered),
            filtered_tally: counts_to_strings(&stats.filtered),
            removed_voters: stats.excluded.clone(),
            total_votes: stats.total_votes.to_string(),
        }
    }
}

fn counts_to_strings(counts: &BTreeMap<String, u64>) -> BTreeMap<String, String> {
    counts
        .iter()
        .map(|(name, count)| (name.clone(), count.to_string()))
        .collect()
}

pub fn read_summary(path: String) -> PollResult<Summary> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {})?;
    debug!("read content: {:?}", contents);
    let summary: Summary = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(summary)
}
