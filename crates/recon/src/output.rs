//! Matched-table writer.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::CompareConfig;
use crate::error::ReconError;
use crate::model::MatchedRecord;

/// Default destination: `config.output_name` in the winners file's directory.
pub fn default_output_path(winners_path: &Path, config: &CompareConfig) -> PathBuf {
    winners_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&config.output_name)
}

/// Write `rank,address,amount` plus one row per matched record.
pub fn write_matched<W: Write>(
    writer: W,
    rows: &[MatchedRecord],
    delimiter: u8,
) -> Result<(), ReconError> {
    let mut w = csv::WriterBuilder::new().delimiter(delimiter).from_writer(writer);

    w.write_record(["rank", "address", "amount"])?;
    for row in rows {
        w.write_record([row.rank.to_string(), row.address.clone(), row.amount.to_string()])?;
    }
    w.flush().map_err(|e| ReconError::Io(e.to_string()))?;
    Ok(())
}

/// Create (or truncate) `path` and write the matched table into it.
pub fn write_matched_file(
    path: &Path,
    rows: &[MatchedRecord],
    config: &CompareConfig,
) -> Result<(), ReconError> {
    let file = File::create(path)
        .map_err(|e| ReconError::Io(format!("cannot write {}: {e}", path.display())))?;
    write_matched(file, rows, config.delimiter_byte())
}
