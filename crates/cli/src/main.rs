// compare-winners - check a rank-ordered winners list against the reconciled table

mod compare;
mod exit_codes;
mod report;

use std::process::ExitCode;

use clap::Parser;

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "compare-winners")]
#[command(about = "Compare a ranked winners list against the reconciled table")]
#[command(long_version = long_version())]
#[command(version)]
#[command(after_help = "\
Examples:
  compare-winners reconciled.csv winners-rank.txt
  compare-winners reconciled.csv winners-rank.txt 21
  compare-winners reconciled.csv winners-rank.txt 5810 out/matched.csv
  compare-winners reconciled.csv winners-rank.txt out/matched.csv
  compare-winners reconciled.csv winners-rank.txt --json > result.json

Exit codes:
  0  all compared rows matched
  1  invalid invocation or run failure
  2  mismatches found")]
pub(crate) struct Cli {
    /// Reconciled table with rank, bidder and boostedAmount columns
    pub(crate) reconciled: String,

    /// Winners list, one ADDRESS|AMOUNT per line
    pub(crate) winners: String,

    /// Number of ranks to compare (default 5810), or the output path when not a number
    #[arg(value_name = "LIMIT|OUT", allow_negative_numbers = true)]
    pub(crate) limit_or_out: Option<String>,

    /// Output path for matched rows (default: matched-winners.csv beside the winners list)
    #[arg(value_name = "OUT", allow_negative_numbers = true)]
    pub(crate) out: Option<String>,

    /// TOML file overriding column names, delimiter, default limit and output name
    #[arg(long, env = "WINRANK_CONFIG", value_name = "FILE")]
    pub(crate) config: Option<String>,

    /// Print the comparison result as JSON on stdout; the summary goes to stderr
    #[arg(long)]
    pub(crate) json: bool,

    /// Print mismatch counts instead of every mismatch line
    #[arg(long, short = 'q')]
    pub(crate) quiet: bool,
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\ntarget:  ", env!("TARGET"),
    )
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders usage for missing arguments.
            let _ = e.print();
            return ExitCode::from(compare::usage_exit_code(&e));
        }
    };

    match compare::cmd_compare(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}
