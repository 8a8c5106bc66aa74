//! Top-N operator ranking by pieces.

use serde::Serialize;

use super::aggregate::OperatorSummary;
use super::error::ContractError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    /// 1-based position.
    pub rank: usize,
    pub operator: String,
    pub total_pieces: u64,
}

/// Order summaries by `total_pieces` descending and keep the first `n`.
///
/// Equal totals are ordered by operator name ascending.
pub fn top_by_pieces(
    summaries: &[OperatorSummary],
    n: i64,
) -> Result<Vec<RankingEntry>, ContractError> {
    let limit = usize::try_from(n).map_err(|_| ContractError::InvalidRankSize(n))?;
    Ok(top_n(summaries, limit))
}

/// Unchecked variant of [`top_by_pieces`] for callers holding a `usize` size.
pub fn top_n(summaries: &[OperatorSummary], limit: usize) -> Vec<RankingEntry> {
    ranked(summaries)
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, summary)| RankingEntry {
            rank: idx + 1,
            operator: summary.operator.clone(),
            total_pieces: summary.total_pieces,
        })
        .collect()
}

/// Summaries in ranking order, without truncation.
pub fn ranked(summaries: &[OperatorSummary]) -> Vec<&OperatorSummary> {
    let mut ordered: Vec<&OperatorSummary> = summaries.iter().collect();
    ordered.sort_by(|a, b| {
        b.total_pieces
            .cmp(&a.total_pieces)
            .then_with(|| a.operator.cmp(&b.operator))
    });
    ordered
}
