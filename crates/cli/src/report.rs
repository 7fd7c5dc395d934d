//! Human-readable run summary.

use std::io::{self, Write};
use std::path::Path;

use winrank_recon::ComparisonResult;

/// Write the console summary: output location, compared count, the
/// under-limit warning, then either the success line or every mismatch.
pub fn write_summary<W: Write>(
    w: &mut W,
    result: &ComparisonResult,
    out_path: &Path,
    quiet: bool,
) -> io::Result<()> {
    let s = &result.summary;

    writeln!(w, "Wrote {} matched rows to {}", s.matched, out_path.display())?;
    writeln!(w, "Compared first {} ranks.", s.compared)?;
    if s.under_limit {
        writeln!(
            w,
            "Warning: fewer than {} rows available (compared {}).",
            s.limit, s.compared
        )?;
    }

    if result.is_clean() {
        writeln!(w, "All rows match in order and amount.")?;
        return Ok(());
    }

    writeln!(w, "Found {} mismatches:", s.mismatches)?;
    if quiet {
        writeln!(
            w,
            "  ({} rank, {} address, {} amount; rerun without --quiet for details)",
            s.rank_mismatches, s.address_mismatches, s.amount_mismatches,
        )?;
    } else {
        for m in &result.mismatches {
            writeln!(w, "- {m}")?;
        }
    }
    Ok(())
}
