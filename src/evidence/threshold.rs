//! Robust insert-size threshold: `median + 2 * MAD`.

/// Number of median absolute deviations above the median that still count as concordant
pub const MAD_MULTIPLIER: f64 = 2.0;

/// Median of a sample; the mean of the two middle values for even sizes.
///
/// Returns None for an empty sample.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Median absolute deviation around `center`
#[must_use]
pub fn median_absolute_deviation(values: &[f64], center: f64) -> Option<f64> {
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    median(&deviations)
}

/// Integer span threshold from a pooled span sample, truncated toward zero.
///
/// Returns None when the sample is empty. The result does not depend on sample order.
#[must_use]
pub fn span_threshold(spans: &[i64]) -> Option<i64> {
    #[allow(clippy::cast_precision_loss)]
    let values: Vec<f64> = spans.iter().map(|&s| s as f64).collect();

    let center = median(&values)?;
    let mad = median_absolute_deviation(&values, center)?;

    #[allow(clippy::cast_possible_truncation)]
    let threshold = (center + MAD_MULTIPLIER * mad) as i64;
    Some(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[3.0]), Some(3.0));
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_mad() {
        // Deviations from 3: 2, 1, 0, 1, 97 -> median 1
        let values = [1.0, 2.0, 3.0, 4.0, 100.0];
        assert_eq!(median_absolute_deviation(&values, 3.0), Some(1.0));
    }

    #[test]
    fn test_span_threshold() {
        assert_eq!(span_threshold(&[]), None);

        // median 300, deviations 0,0,10,10,200 -> MAD 10 -> 320
        assert_eq!(span_threshold(&[300, 310, 290, 300, 500]), Some(320));

        // median 301.5, deviations 1.5,1.5,... -> 301.5 + 2*1.5 = 304.5 -> 304
        assert_eq!(span_threshold(&[300, 303, 300, 303]), Some(304));
    }

    #[test]
    fn test_span_threshold_order_independent() {
        let spans = vec![250, 410, 300, 320, 290, 1200, 305, 315];
        let mut reversed = spans.clone();
        reversed.reverse();
        let mut sorted = spans.clone();
        sorted.sort_unstable();

        let expected = span_threshold(&spans);
        assert_eq!(span_threshold(&reversed), expected);
        assert_eq!(span_threshold(&sorted), expected);
    }
}
