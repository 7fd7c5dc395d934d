//! `compare-winners`: check a winners list against the reconciled table.

use std::io::{self, Write};
use std::path::PathBuf;

use winrank_recon::output::{default_output_path, write_matched_file};
use winrank_recon::reconciled::load_reconciled;
use winrank_recon::winners::load_winners;
use winrank_recon::{compare, CompareConfig};

use crate::exit_codes::{EXIT_ERROR, EXIT_MISMATCH, EXIT_USAGE};
use crate::report::write_summary;
use crate::{Cli, CliError};

fn run_err(msg: impl Into<String>) -> CliError {
    CliError { code: EXIT_ERROR, message: msg.into(), hint: None }
}

/// Expand a leading `~` the way a shell would, then anchor relative paths
/// at the working directory.
fn expand_path(raw: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    std::path::absolute(&expanded).unwrap_or(expanded)
}

/// Split the optional third and fourth positionals into a limit and an
/// output path. An all-digit third positional is the limit; anything else
/// is the output path unless a fourth positional is present, in which case
/// the fourth wins and the third is ignored.
pub(crate) fn resolve_trailing(
    limit_or_out: Option<&str>,
    out: Option<&str>,
) -> Result<(Option<usize>, Option<PathBuf>), CliError> {
    let Some(third) = limit_or_out else {
        return Ok((None, out.map(expand_path)));
    };

    if !third.is_empty() && third.bytes().all(|b| b.is_ascii_digit()) {
        let limit = third.parse::<usize>().map_err(|_| {
            CliError::args(format!("limit out of range: {third}"))
        })?;
        return Ok((Some(limit), out.map(expand_path)));
    }

    match out {
        Some(fourth) => {
            log::warn!("ignoring non-numeric limit '{third}'; output path taken from fourth argument");
            Ok((None, Some(expand_path(fourth))))
        }
        None => Ok((None, Some(expand_path(third)))),
    }
}

fn load_config(path: Option<&str>) -> Result<CompareConfig, CliError> {
    let Some(raw) = path else {
        return Ok(CompareConfig::default());
    };
    let path = expand_path(raw);
    let text = std::fs::read_to_string(&path)
        .map_err(|e| run_err(format!("cannot read config {}: {e}", path.display())))?;
    CompareConfig::from_toml(&text).map_err(|e| {
        run_err(e.to_string()).with_hint(format!("check {}", path.display()))
    })
}

pub(crate) fn cmd_compare(cli: Cli) -> Result<(), CliError> {
    let (limit_arg, out_arg) = resolve_trailing(cli.limit_or_out.as_deref(), cli.out.as_deref())?;
    let config = load_config(cli.config.as_deref())?;
    let limit = limit_arg.unwrap_or(config.limit);

    let reconciled_path = expand_path(&cli.reconciled);
    let winners_path = expand_path(&cli.winners);
    log::debug!(
        "reconciled={} winners={} limit={limit}",
        reconciled_path.display(),
        winners_path.display()
    );

    let reconciled = load_reconciled(&reconciled_path, &config).map_err(|e| run_err(e.to_string()))?;
    let winners = load_winners(&winners_path).map_err(|e| {
        run_err(format!("{}: {e}", winners_path.display()))
    })?;
    log::debug!("parsed {} reconciled rows, {} winners", reconciled.len(), winners.len());

    let result = compare(&reconciled, &winners, limit);

    let out_path = out_arg.unwrap_or_else(|| default_output_path(&winners_path, &config));
    write_matched_file(&out_path, &result.matched, &config).map_err(|e| run_err(e.to_string()))?;

    // With --json, stdout carries only the JSON document.
    let printed = if cli.json {
        let json = result
            .to_json_pretty()
            .map_err(|e| run_err(format!("JSON serialization error: {e}")))?;
        println!("{json}");
        write_summary(&mut io::stderr().lock(), &result, &out_path, cli.quiet)
    } else {
        let mut stdout = io::stdout().lock();
        write_summary(&mut stdout, &result, &out_path, cli.quiet).and_then(|_| stdout.flush())
    };
    printed.map_err(|e| run_err(format!("cannot write summary: {e}")))?;

    if result.is_clean() {
        Ok(())
    } else {
        // The summary already itemized the mismatches.
        Err(CliError { code: EXIT_MISMATCH, message: String::new(), hint: None })
    }
}

/// Exit code for clap parse failures. Help and version requests succeed.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    use clap::error::ErrorKind;
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => crate::exit_codes::EXIT_SUCCESS,
        _ => EXIT_USAGE,
    }
}
