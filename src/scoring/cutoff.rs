//! Optimal exclusion cutoff over observed contig scores.
//!
//! Contigs are removed in ascending score order. After each removal the assembly
//! score of the remaining contigs is recomputed with their remaining good counts,
//! and recorded under the score just removed: "excluding everything at or below
//! this score leaves an assembly scoring X". The best cutoff trades the harmonic
//! mean gained by dropping weak contigs against the read support lost with them.

use crate::scoring::result::CutoffPoint;
use crate::utils::numeric::{count_to_f64, ratio};

/// Outcome of a cutoff search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutoffSearch {
    /// One row per distinct candidate score, ascending
    pub table: Vec<CutoffPoint>,

    /// Row with the highest resulting score. Ties go to the smallest cutoff.
    pub optimal: Option<CutoffPoint>,
}

/// Search over `(score, good)` pairs, one per contig.
///
/// Equal candidate scores collapse into one row that keeps the value recorded by the
/// last removal of that score. With no reads, or nothing left after a removal, the
/// recorded value is 0.0.
#[must_use]
pub fn search(contigs: &[(f64, u64)], read_count: u64) -> CutoffSearch {
    let mut sorted = contigs.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    // Positive-score counts and reciprocal sums of each suffix, so the harmonic
    // mean of what remains after step `i` is read from index `i + 1`.
    let n = sorted.len();
    let mut suffix_count = vec![0u64; n + 1];
    let mut suffix_reciprocal = vec![0.0f64; n + 1];
    for i in (0..n).rev() {
        let score = sorted[i].0;
        let positive = score > 0.0;
        suffix_count[i] = suffix_count[i + 1] + u64::from(positive);
        suffix_reciprocal[i] = suffix_reciprocal[i + 1] + if positive { 1.0 / score } else { 0.0 };
    }

    let mut remaining_good: u64 = sorted.iter().map(|(_, good)| good).sum();
    let mut table: Vec<CutoffPoint> = Vec::with_capacity(n);

    for (i, &(score, good)) in sorted.iter().enumerate() {
        remaining_good = remaining_good.saturating_sub(good);
        let remaining = n - i - 1;

        let resulting = if remaining > 0 && read_count > 0 {
            let mean = if suffix_count[i + 1] > 0 {
                count_to_f64(suffix_count[i + 1]) / suffix_reciprocal[i + 1]
            } else {
                0.0
            };
            mean * ratio(remaining_good, read_count)
        } else {
            0.0
        };

        match table.last_mut() {
            Some(last) if last.cutoff == score => last.score = resulting,
            _ => table.push(CutoffPoint {
                cutoff: score,
                score: resulting,
            }),
        }
    }

    let optimal = table.iter().fold(None, |best: Option<CutoffPoint>, point| match best {
        Some(b) if b.score >= point.score => Some(b),
        _ => Some(*point),
    });

    CutoffSearch { table, optimal }
}
