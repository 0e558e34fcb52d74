use clap::Parser;

/// This is a topic vote tabulation program.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path or empty) The file containing the votes, one `<voter> <topic>` pair per line.
    /// If not specified, the votes are read from the standard input.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file path) A reference file containing the summary of a poll in JSON format. If provided, topictally will
    /// check that the tabulated output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the poll will be written in JSON format to the given
    /// location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
