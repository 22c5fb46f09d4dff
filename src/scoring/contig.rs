//! Per-contig sub-scores and the combined multiplicative score.

use crate::core::contig::ContigAttributes;
use crate::scoring::result::ContigScore;
use crate::utils::numeric::floor_score;

/// Nucleotide identity sub-score
#[inline]
#[must_use]
pub fn s_nuc(row: &ContigAttributes) -> f64 {
    floor_score(row.p_seq_true)
}

/// Coverage breadth sub-score
#[inline]
#[must_use]
pub fn s_cov(row: &ContigAttributes) -> f64 {
    floor_score(row.p_bases_covered)
}

/// Fragment order consistency sub-score
#[inline]
#[must_use]
pub fn s_ord(row: &ContigAttributes) -> f64 {
    floor_score(row.p_good)
}

/// Non-segmentation sub-score
#[inline]
#[must_use]
pub fn s_seg(row: &ContigAttributes) -> f64 {
    floor_score(row.p_not_segmented)
}

/// All four sub-scores and their floored product
#[must_use]
pub fn full_contig_score(row: &ContigAttributes) -> ContigScore {
    let s_nuc = s_nuc(row);
    let s_cov = s_cov(row);
    let s_ord = s_ord(row);
    let s_seg = s_seg(row);

    ContigScore {
        score: floor_score(s_nuc * s_cov * s_ord * s_seg),
        s_nuc,
        s_cov,
        s_ord,
        s_seg,
    }
}

/// Only the nucleotide and coverage sub-scores; everything else stays zero
#[must_use]
pub fn light_contig_score(row: &ContigAttributes) -> ContigScore {
    ContigScore {
        s_nuc: s_nuc(row),
        s_cov: s_cov(row),
        ..ContigScore::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::numeric::MIN_SCORE;

    #[test]
    fn test_full_contig_score() {
        let row = ContigAttributes::new("ctg1").with_fractions(0.9, 0.8, 0.5, 1.0);
        let score = full_contig_score(&row);

        assert!((score.s_nuc - 0.9).abs() < 1e-12);
        assert!((score.s_cov - 0.8).abs() < 1e-12);
        assert!((score.s_ord - 0.5).abs() < 1e-12);
        assert!((score.s_seg - 1.0).abs() < 1e-12);
        assert!((score.score - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_sub_scores_are_floored() {
        let row = ContigAttributes::new("ctg1").with_fractions(0.0, 0.0, 0.0, 0.0);
        let score = full_contig_score(&row);

        for value in [score.s_nuc, score.s_cov, score.s_ord, score.s_seg] {
            assert!(value >= MIN_SCORE);
        }
        // The product of floors is 1e-8, the combined score is floored again
        assert!((score.score - MIN_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_light_contig_score_leaves_other_fields_zero() {
        let row = ContigAttributes::new("ctg1").with_fractions(0.9, 0.005, 0.7, 0.6);
        let score = light_contig_score(&row);

        assert!((score.s_nuc - 0.9).abs() < 1e-12);
        assert!((score.s_cov - MIN_SCORE).abs() < f64::EPSILON);
        assert!(score.s_ord.abs() < f64::EPSILON);
        assert!(score.s_seg.abs() < f64::EPSILON);
        assert!(score.score.abs() < f64::EPSILON);
    }
}
