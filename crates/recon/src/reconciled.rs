//! Reconciled table parser.
//!
//! Structural problems (unreadable file, missing columns) are fatal. Data
//! rows that fail to parse are dropped without error so that dirty trailing
//! rows in an exported table do not block the run.

use std::path::Path;

use crate::config::CompareConfig;
use crate::error::ReconError;
use crate::model::ReconciledRecord;

/// Read and parse a reconciled table from disk.
pub fn load_reconciled(
    path: &Path,
    config: &CompareConfig,
) -> Result<Vec<ReconciledRecord>, ReconError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| ReconError::Io(format!("cannot read {}: {e}", path.display())))?;
    parse_reconciled(&data, config)
}

/// Parse reconciled table text into records sorted by rank ascending.
pub fn parse_reconciled(
    csv_data: &str,
    config: &CompareConfig,
) -> Result<Vec<ReconciledRecord>, ReconError> {
    let col = &config.columns;

    // The csv reader skips blank lines, which would promote the first data
    // line to header. A blank first line is an empty header.
    if csv_data.lines().next().is_some_and(|first| first.is_empty()) {
        return Err(ReconError::MissingColumns { expected: col.names() });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(config.delimiter_byte())
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let idx = |name: &str| -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        headers.iter().position(|h| *h == wanted)
    };

    let (rank_idx, bidder_idx, amount_idx) =
        match (idx(&col.rank), idx(&col.bidder), idx(&col.amount)) {
            (Some(r), Some(b), Some(a)) => (r, b, a),
            _ => {
                return Err(ReconError::MissingColumns { expected: col.names() });
            }
        };

    let mut rows = Vec::new();

    for (n, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        match parse_row(&record, rank_idx, bidder_idx, amount_idx) {
            Some(row) => rows.push(row),
            None => log::debug!("dropping malformed reconciled row {}", n + 1),
        }
    }

    rows.sort_by_key(|r| r.rank);
    Ok(rows)
}

fn parse_row(
    record: &csv::StringRecord,
    rank_idx: usize,
    bidder_idx: usize,
    amount_idx: usize,
) -> Option<ReconciledRecord> {
    let rank = record.get(rank_idx)?.trim().parse::<i64>().ok()?;
    let address = record.get(bidder_idx)?.trim().to_lowercase();
    let amount = record
        .get(amount_idx)?
        .replace(',', "")
        .trim()
        .parse::<i64>()
        .ok()?;

    Some(ReconciledRecord { rank, address, amount })
}
