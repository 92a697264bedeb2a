use clap::Parser;

/// scansum — terminal client for the host-scan summarization API
#[derive(Parser, Debug)]
#[command(name = "scansum", version, about = "Summarize host-scan data via the scansum API")]
pub struct Args {
    /// Base URL of the backend API
    #[arg(
        long = "api-url",
        value_name = "URL",
        env = "SCANSUM_API_URL",
        default_value = scansum_client::DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Summary type requested from the backend (detailed, brief, technical)
    #[arg(
        short = 't',
        long = "summary-type",
        value_name = "TYPE",
        default_value = scansum_client::DEFAULT_SUMMARY_TYPE
    )]
    pub summary_type: String,

    /// One-shot mode: summarize a local hosts JSON file and print the result
    #[arg(short = 'i', long = "input", value_name = "FILE", conflicts_with = "check")]
    pub input: Option<String>,

    /// One-shot mode: print the backend health payload and exit
    #[arg(long = "check")]
    pub check: bool,

    /// Log file for TUI sessions (structured logs cannot go to the terminal)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<String>,

    /// Increase verbosity level (use -v or -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
