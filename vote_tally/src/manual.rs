/*!

This is the long-form manual for `vote_tally` and `topictally`.

## Input format

The program consumes line-oriented text, by default from the standard input:

```text
amy rust
amy games
bob rust
```

Each line is either empty (ignored) or of the form `<voter> <topic>` with
exactly one space separator. Lines that do not split into exactly two
non-empty tokens are dropped without a warning. Neither field may contain
internal whitespace.

## Tabulation

Every voter is expected to cast exactly two votes. Three results are
computed over one batch of input:

* the **unfiltered tally**: how many times each topic appears, counting
  every vote;
* the **filtered tally**: the same count, only keeping the votes of voters
  who cast exactly two votes;
* the **removed voters**: the voters whose votes were not counted, each with
  the reason `Not Enough Votes` or `Too Many Votes`.

All three are printed to the standard output in that order, sorted by key.

## Summary files

`topictally` can record the outcome in JSON with the `--out` flag:

```text
{
  "unfilteredTally": { "games": "1", "rust": "2" },
  "filteredTally": { "games": "1", "rust": "1" },
  "removedVoters": { "bob": "Not Enough Votes" },
  "totalVotes": "3"
}
```

A summary recorded earlier can be checked against the current run with the
`--reference` flag. Any difference is printed as a diff and reported as an
error.

*/
