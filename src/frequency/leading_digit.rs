//! Leading significant digit extraction

/// First significant decimal digit of `value`, in `1..=9`
///
/// Values of 1 or more take the first digit of their shortest exact decimal
/// form, which truncates like repeated division by ten without its rounding
/// drift. Values between 0 and 1 take the first digit of their normalized
/// scientific form, rounded to six fractional digits like C's `%e`. Zero and non-finite values
/// have no leading digit. The sign is ignored.
///
/// # Example
///
/// ```
/// use nbstats::frequency::leading_digit;
///
/// assert_eq!(leading_digit(314.0), Some(3));
/// assert_eq!(leading_digit(0.0271), Some(2));
/// assert_eq!(leading_digit(0.0), None);
/// ```
pub fn leading_digit(value: f64) -> Option<u8> {
    let magnitude = value.abs();
    if !magnitude.is_finite() || magnitude == 0.0 {
        return None;
    }

    let normalized = if magnitude < 1.0 {
        format!("{:.6e}", magnitude)
    } else {
        format!("{:e}", magnitude)
    };
    first_digit(&normalized)
}

fn first_digit(normalized: &str) -> Option<u8> {
    normalized
        .bytes()
        .next()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .filter(|&d| d > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(leading_digit(1.0), Some(1));
        assert_eq!(leading_digit(5.0), Some(5));
        assert_eq!(leading_digit(9.99), Some(9));
        assert_eq!(leading_digit(10.0), Some(1));
        assert_eq!(leading_digit(15.0), Some(1));
        assert_eq!(leading_digit(999.0), Some(9));
        assert_eq!(leading_digit(1000.0), Some(1));
        assert_eq!(leading_digit(7_654_321.0), Some(7));
    }

    #[test]
    fn test_large_magnitudes() {
        assert_eq!(leading_digit(3e27), Some(3));
        assert_eq!(leading_digit(6e27), Some(6));
        assert_eq!(leading_digit(1e308), Some(1));
        assert_eq!(leading_digit(f64::MAX), Some(1));

        for d in 1..=9u8 {
            for k in 0..=300 {
                let value: f64 = format!("{}e{}", d, k).parse().unwrap();
                assert_eq!(leading_digit(value), Some(d), "{}e{}", d, k);
            }
        }
    }

    #[test]
    fn test_truncates_above_one() {
        assert_eq!(leading_digit(9.999_999_9), Some(9));
        assert_eq!(leading_digit(19.999_999_99), Some(1));
    }

    #[test]
    fn test_fractions() {
        assert_eq!(leading_digit(0.5), Some(5));
        assert_eq!(leading_digit(0.25), Some(2));
        assert_eq!(leading_digit(0.000_09), Some(9));
        assert_eq!(leading_digit(1e-300), Some(1));
    }

    #[test]
    fn test_rounding_below_one() {
        // %e rounds 0.99999999 up to 1.000000e+00
        assert_eq!(leading_digit(0.999_999_99), Some(1));
    }

    #[test]
    fn test_no_digit() {
        assert_eq!(leading_digit(0.0), None);
        assert_eq!(leading_digit(f64::INFINITY), None);
        assert_eq!(leading_digit(f64::NAN), None);
    }

    #[test]
    fn test_sign_ignored() {
        assert_eq!(leading_digit(-42.0), Some(4));
    }
}
