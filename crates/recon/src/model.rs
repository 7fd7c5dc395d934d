use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One line of the winners list. Position in the list is the implicit rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerRecord {
    /// Lowercased at parse time.
    pub address: String,
    pub amount: i64,
}

/// One data row of the reconciled table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledRecord {
    pub rank: i64,
    /// Lowercased at parse time.
    pub address: String,
    pub amount: i64,
}

// ---------------------------------------------------------------------------
// Comparison output
// ---------------------------------------------------------------------------

/// A reconciled row that agreed with the winner at the same position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedRecord {
    pub rank: i64,
    pub address: String,
    pub amount: i64,
}

impl From<&ReconciledRecord> for MatchedRecord {
    fn from(r: &ReconciledRecord) -> Self {
        Self {
            rank: r.rank,
            address: r.address.clone(),
            amount: r.amount,
        }
    }
}

/// Category of a [`Mismatch`], used for per-category counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    Rank,
    Address,
    Amount,
}

/// A single disagreement between the two sources. One row can produce
/// up to three of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    Rank { index: usize, recon_rank: i64, expected: usize },
    Address { rank: usize, recon: String, winners: String },
    Amount { rank: usize, recon: i64, winners: i64 },
}

impl Mismatch {
    pub fn kind(&self) -> MismatchKind {
        match self {
            Self::Rank { .. } => MismatchKind::Rank,
            Self::Address { .. } => MismatchKind::Address,
            Self::Amount { .. } => MismatchKind::Amount,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank { index, recon_rank, expected } => write!(
                f,
                "Rank mismatch at index {index}: recon_rank={recon_rank}, expected={expected}"
            ),
            Self::Address { rank, recon, winners } => write!(
                f,
                "Address mismatch at rank {rank}: recon={recon}, winners={winners}"
            ),
            Self::Amount { rank, recon, winners } => write!(
                f,
                "Amount mismatch at rank {rank}: recon={recon}, winners={winners}"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub limit: usize,
    pub compared: usize,
    /// Fewer rows were available than `limit`. A warning, not a failure.
    pub under_limit: bool,
    pub reconciled_rows: usize,
    pub winner_rows: usize,
    pub matched: usize,
    pub mismatches: usize,
    pub rank_mismatches: usize,
    pub address_mismatches: usize,
    pub amount_mismatches: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonMeta {
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub meta: ComparisonMeta,
    pub summary: ComparisonSummary,
    pub matched: Vec<MatchedRecord>,
    pub mismatches: Vec<Mismatch>,
}

impl ComparisonResult {
    /// True when no compared row disagreed, regardless of `under_limit`.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
