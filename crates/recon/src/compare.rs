use crate::model::{
    ComparisonMeta, ComparisonResult, ComparisonSummary, MatchedRecord, Mismatch, MismatchKind,
    ReconciledRecord, WinnerRecord,
};

/// Walk both sequences in lockstep for the first `min(limit, len, len)`
/// positions. Position `i` is expected to hold rank `i + 1`.
///
/// A row lands in `matched` only when rank, address and amount all agree.
/// Every failed check adds its own mismatch.
pub fn compare(
    reconciled: &[ReconciledRecord],
    winners: &[WinnerRecord],
    limit: usize,
) -> ComparisonResult {
    let n = limit.min(reconciled.len()).min(winners.len());

    let mut matched = Vec::new();
    let mut mismatches = Vec::new();

    for (i, (recon, winner)) in reconciled.iter().zip(winners).take(n).enumerate() {
        let expected = i + 1;
        let mut row_ok = true;

        if recon.rank != expected as i64 {
            mismatches.push(Mismatch::Rank {
                index: i,
                recon_rank: recon.rank,
                expected,
            });
            row_ok = false;
        }
        if recon.address != winner.address {
            mismatches.push(Mismatch::Address {
                rank: expected,
                recon: recon.address.clone(),
                winners: winner.address.clone(),
            });
            row_ok = false;
        }
        if recon.amount != winner.amount {
            mismatches.push(Mismatch::Amount {
                rank: expected,
                recon: recon.amount,
                winners: winner.amount,
            });
            row_ok = false;
        }

        if row_ok {
            matched.push(MatchedRecord::from(recon));
        }
    }

    if n < limit {
        log::info!("fewer than {limit} rows available (compared {n})");
    }

    let count = |kind: MismatchKind| mismatches.iter().filter(|m| m.kind() == kind).count();
    let summary = ComparisonSummary {
        limit,
        compared: n,
        under_limit: n < limit,
        reconciled_rows: reconciled.len(),
        winner_rows: winners.len(),
        matched: matched.len(),
        mismatches: mismatches.len(),
        rank_mismatches: count(MismatchKind::Rank),
        address_mismatches: count(MismatchKind::Address),
        amount_mismatches: count(MismatchKind::Amount),
    };

    ComparisonResult {
        meta: ComparisonMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        matched,
        mismatches,
    }
}
