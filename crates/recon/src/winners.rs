//! Winners list parser: one `ADDRESS|AMOUNT` pair per line.

use std::path::Path;

use crate::error::ReconError;
use crate::model::WinnerRecord;

/// Read and parse a winners list from disk.
pub fn load_winners(path: &Path) -> Result<Vec<WinnerRecord>, ReconError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ReconError::Io(format!("cannot read {}: {e}", path.display())))?;
    parse_winners(&text)
}

/// Parse winners text. Blank and `#` lines are skipped; any other malformed
/// line aborts the whole parse with its 1-based line number.
pub fn parse_winners(text: &str) -> Result<Vec<WinnerRecord>, ReconError> {
    let mut winners = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (address, amount) = line
            .split_once('|')
            .ok_or(ReconError::WinnersLine { line: line_no })?;

        let amount = parse_amount(amount).ok_or_else(|| ReconError::WinnersAmount {
            line: line_no,
            value: amount.trim().to_string(),
        })?;

        winners.push(WinnerRecord {
            address: address.trim().to_lowercase(),
            amount,
        });
    }

    Ok(winners)
}

/// Strip whitespace and thousands separators, then parse. Values with a
/// decimal point go through `f64` and are truncated toward zero.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let cleaned = raw.trim().replace(',', "");

    if !cleaned.contains('.') {
        return cleaned.parse::<i64>().ok();
    }

    let value = cleaned.parse::<f64>().ok()?.trunc();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes() {
        let text = "0xABC|1,000\n  0xDef | 250 \n";
        let winners = parse_winners(text).unwrap();
        assert_eq!(
            winners,
            vec![
                WinnerRecord { address: "0xabc".into(), amount: 1000 },
                WinnerRecord { address: "0xdef".into(), amount: 250 },
            ]
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let text = "# header comment\n\n0xa|1\n   \n  # indented comment\n0xb|2\n";
        let winners = parse_winners(text).unwrap();
        assert_eq!(winners.len(), 2);
        assert_eq!(winners[1].address, "0xb");
    }

    #[test]
    fn fractional_amount_truncates() {
        let winners = parse_winners("0xa|1,234.99\n0xb|0.5\n0xc|7.").unwrap();
        assert_eq!(winners[0].amount, 1234);
        assert_eq!(winners[1].amount, 0);
        assert_eq!(winners[2].amount, 7);
    }

    #[test]
    fn splits_on_first_pipe_only() {
        // Second pipe ends up in the amount field, which then fails to parse.
        let err = parse_winners("0xa|1|2").unwrap_err();
        assert!(matches!(err, ReconError::WinnersAmount { line: 1, .. }), "got {err}");
    }

    #[test]
    fn missing_separator_reports_physical_line() {
        let err = parse_winners("# c\n\n0xa|1\n0xb 2\n").unwrap_err();
        assert!(matches!(err, ReconError::WinnersLine { line: 4 }), "got {err}");
        assert_eq!(err.to_string(), "bad winners line 4");
    }

    #[test]
    fn bad_amount_reports_line() {
        let err = parse_winners("0xa|1\n0xb|lots\n").unwrap_err();
        assert!(matches!(err, ReconError::WinnersAmount { line: 2, .. }), "got {err}");
        assert!(err.to_string().starts_with("bad amount at line 2"));
    }

    #[test]
    fn empty_amount_is_an_error() {
        assert!(parse_winners("0xa|").is_err());
        assert!(parse_winners("0xa| , ").is_err());
    }

    #[test]
    fn negative_amounts_parse() {
        assert_eq!(parse_amount("-5"), Some(-5));
        assert_eq!(parse_amount("-1,000"), Some(-1000));
        // Truncation is toward zero.
        assert_eq!(parse_amount("-5.9"), Some(-5));
        assert_eq!(parse_amount("-0.5"), Some(0));

        let winners = parse_winners("0xa|-5\n").unwrap();
        assert_eq!(winners[0].amount, -5);
    }

    #[test]
    fn integer_amount_beyond_i64_is_an_error() {
        assert_eq!(parse_amount("9223372036854775807"), Some(i64::MAX));
        let err = parse_winners("0xa|9223372036854775808").unwrap_err();
        assert!(matches!(err, ReconError::WinnersAmount { line: 1, .. }), "got {err}");
    }

    #[test]
    fn parse_amount_edge_cases() {
        assert_eq!(parse_amount(" 1,000,000 "), Some(1_000_000));
        assert_eq!(parse_amount("+42"), Some(42));
        assert_eq!(parse_amount("1.5e3"), Some(1500));
        assert_eq!(parse_amount("nan"), None);
        assert_eq!(parse_amount("1e400.0"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn empty_input() {
        assert!(parse_winners("").unwrap().is_empty());
        assert!(parse_winners("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_winners(Path::new("/nonexistent/winners.txt")).unwrap_err();
        assert!(matches!(err, ReconError::Io(_)), "got {err}");
    }
}
