//! Assembly-level aggregation of contig scores.

use crate::utils::numeric::{count_to_f64, ratio};

/// Harmonic mean of the positive values; 0.0 when there are none
#[must_use]
pub fn harmonic_mean(scores: &[f64]) -> f64 {
    let (count, reciprocal_sum) = scores
        .iter()
        .filter(|&&s| s > 0.0)
        .fold((0u64, 0.0), |(n, sum), &s| (n + 1, sum + 1.0 / s));

    if count == 0 {
        0.0
    } else {
        count_to_f64(count) / reciprocal_sum
    }
}

/// Fraction of all reads that were counted as good evidence; 0.0 without reads
#[must_use]
pub fn read_support(good_total: u64, read_count: u64) -> f64 {
    ratio(good_total, read_count)
}

/// Harmonic mean scaled by read support. Without a read count the harmonic mean is
/// returned unscaled.
#[must_use]
pub fn assembly_score(scores: &[f64], good_total: u64, read_count: u64) -> f64 {
    let mean = harmonic_mean(scores);
    if read_count > 0 {
        mean * read_support(good_total, read_count)
    } else {
        mean
    }
}

/// Arithmetic mean of `score * abundance` over all contigs, scaled by read support.
///
/// Returns 0.0 for no contigs or no reads.
#[must_use]
pub fn weighted_score(scored: &[(f64, f64)], good_total: u64, read_count: u64) -> f64 {
    if scored.is_empty() {
        return 0.0;
    }
    let total: f64 = scored.iter().map(|(score, tpm)| score * tpm).sum();
    let mean = total / count_to_f64(scored.len() as u64);
    mean * read_support(good_total, read_count)
}
