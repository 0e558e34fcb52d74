// ********* Input data structures ***********

use std::collections::BTreeMap;

/// One vote cast in the poll: a voter id paired with the topic it was cast for.
///
/// Neither field may contain internal whitespace. This is a precondition of
/// the input format and it is not validated here.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Vote {
    pub voter: String,
    pub topic: String,
}

// ******** Output data structures *********

/// The reason recorded for a voter who cast fewer than two votes.
pub const NOT_ENOUGH_VOTES: &str = "Not Enough Votes";

/// The reason recorded for a voter who cast more than two votes.
pub const TOO_MANY_VOTES: &str = "Too Many Votes";

/// The aggregated outcome of one tallying run.
///
/// The maps iterate in lexicographic key order.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TallyStats {
    /// Occurrences of each topic across all the votes.
    pub unfiltered: BTreeMap<String, u64>,
    /// Occurrences of each topic, only counting voters with exactly two votes.
    pub filtered: BTreeMap<String, u64>,
    /// The voters whose votes were not counted, with the reason.
    pub excluded: BTreeMap<String, String>,
    /// The number of votes read, including the ones that were filtered out.
    pub total_votes: u64,
}
