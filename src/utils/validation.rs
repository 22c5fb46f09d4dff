//! Centralized validation of contig table values.

/// Validate that a value is a proportion in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use contig_score::utils::validation::is_valid_fraction;
///
/// assert!(is_valid_fraction(0.0));
/// assert!(is_valid_fraction(0.97));
/// assert!(!is_valid_fraction(1.5));
/// assert!(!is_valid_fraction(f64::NAN));
/// ```
#[must_use]
pub fn is_valid_fraction(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Validate that a value can serve as an abundance weight.
#[must_use]
pub fn is_valid_abundance(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Check a named fraction column value.
///
/// Returns a message describing the problem, None if the value is acceptable.
/// Out-of-range values are still scored; callers decide whether to warn.
#[must_use]
pub fn check_fraction(column: &str, value: f64) -> Option<String> {
    if is_valid_fraction(value) {
        None
    } else {
        Some(format!("{column} = {value} is outside [0, 1]"))
    }
}

/// Check an abundance column value.
#[must_use]
pub fn check_abundance(value: f64) -> Option<String> {
    if is_valid_abundance(value) {
        None
    } else {
        Some(format!("tpm = {value} is not a non-negative number"))
    }
}
