//! Small numeric helpers shared by the engines and the report writers.

/// Floor applied to every sub-score and combined contig score
pub const MIN_SCORE: f64 = 1e-2;

/// Decimal places kept in the cutoff report
pub const REPORT_DECIMALS: i32 = 5;

/// Convert a count to f64 with explicit precision loss allowance
#[inline]
#[must_use]
pub fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Clamp a score to [`MIN_SCORE`] from below. NaN collapses to the floor.
#[inline]
#[must_use]
pub fn floor_score(value: f64) -> f64 {
    if value >= MIN_SCORE {
        value
    } else {
        MIN_SCORE
    }
}

/// `numerator / denominator`, or 0.0 when the denominator is zero
#[inline]
#[must_use]
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        count_to_f64(numerator) / count_to_f64(denominator)
    }
}

/// Round to a fixed number of decimal places. Exact halves go to the even
/// neighbour, so `0.015625` becomes `0.01562`.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        2.0 * (scaled / 2.0).round()
    } else {
        scaled.round()
    };
    rounded / scale
}

/// Magnitudes outside `[1e-4, 1e16)` are printed in exponent form
const EXPONENT_BELOW: f64 = 1e-4;
const EXPONENT_FROM: f64 = 1e16;

/// Format a float the way tabular tools print it: shortest round-trip digits,
/// whole numbers keeping one decimal (`1.0`, not `1`), and very small or very
/// large magnitudes in exponent form with a signed two-digit exponent (`1e-05`).
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let magnitude = value.abs();
    if value != 0.0 && !(EXPONENT_BELOW..EXPONENT_FROM).contains(&magnitude) {
        return format_exponent(value);
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// `1.5e-5` becomes `1.5e-05`, `1e16` becomes `1e+16`
fn format_exponent(value: f64) -> String {
    let formatted = format!("{value:e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_score() {
        assert!((floor_score(0.5) - 0.5).abs() < f64::EPSILON);
        assert!((floor_score(0.0) - MIN_SCORE).abs() < f64::EPSILON);
        assert!((floor_score(-1.0) - MIN_SCORE).abs() < f64::EPSILON);
        assert!((floor_score(f64::NAN) - MIN_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert!((ratio(5, 10) - 0.5).abs() < f64::EPSILON);
        assert!(ratio(5, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_and_format() {
        assert!((round_to(0.666_666_7, 5) - 0.666_67).abs() < 1e-12);
        assert_eq!(format_decimal(round_to(0.666_666_7, 5)), "0.66667");
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(0.25), "0.25");
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(format_decimal(round_to(0.015_625, 5)), "0.01562");
        assert_eq!(format_decimal(round_to(0.5, 0)), "0.0");
        assert_eq!(format_decimal(round_to(1.5, 0)), "2.0");
        assert_eq!(format_decimal(round_to(2.5, 0)), "2.0");
        assert_eq!(format_decimal(round_to(-2.5, 0)), "-2.0");
        assert_eq!(format_decimal(round_to(0.046_875, 5)), "0.04688");
    }

    #[test]
    fn test_format_exponent_form() {
        assert_eq!(format_decimal(0.000_01), "1e-05");
        assert_eq!(format_decimal(0.000_015), "1.5e-05");
        assert_eq!(format_decimal(-0.000_02), "-2e-05");
        assert_eq!(format_decimal(1e-10), "1e-10");
        assert_eq!(format_decimal(1e16), "1e+16");
        assert_eq!(format_decimal(0.0001), "0.0001");
        assert_eq!(format_decimal(1e15), "1000000000000000.0");
    }
}
