//! Permissive number conversion for raw tokens

/// Convert the longest numeric prefix of `text`, like C's `atof`
///
/// Leading whitespace and a single sign are allowed. The prefix may be a
/// decimal number with an optional fraction and exponent, or one of the words
/// `inf`, `infinity`, `nan` in any case. Text with no convertible prefix
/// yields `0.0`.
///
/// # Example
///
/// ```
/// use nbstats::tokenizer::permissive_parse;
///
/// assert_eq!(permissive_parse(b"12.5kg"), 12.5);
/// assert_eq!(permissive_parse(b"+3"), 3.0);
/// assert_eq!(permissive_parse(b"abc"), 0.0);
/// ```
pub fn permissive_parse(text: &[u8]) -> f64 {
    let start = text
        .iter()
        .position(|&b| !super::scanner::is_space(b))
        .unwrap_or(text.len());
    let text = &text[start..];

    let (negative, body) = match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, text),
    };

    let magnitude = match special_value(body) {
        Some(value) => value,
        None => {
            let len = numeric_prefix_len(body);
            core::str::from_utf8(&body[..len])
                .ok()
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(0.0)
        }
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Whether `text` is a zero written with a fractional part, e.g. `0.00`
///
/// One or more `0`, a decimal point, then one or more `0`.
pub fn is_decimal_zero(text: &[u8]) -> bool {
    let zeros = text.iter().take_while(|&&b| b == b'0').count();
    if zeros == 0 {
        return false;
    }

    match text[zeros..].split_first() {
        Some((b'.', fraction)) => {
            !fraction.is_empty() && fraction.iter().all(|&b| b == b'0')
        }
        _ => false,
    }
}

fn special_value(body: &[u8]) -> Option<f64> {
    let starts_with = |word: &[u8]| {
        body.len() >= word.len() && body[..word.len()].eq_ignore_ascii_case(word)
    };

    if starts_with(b"inf") {
        Some(f64::INFINITY)
    } else if starts_with(b"nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Length of the `digits [. digits] [e [sign] digits]` prefix, 0 if none
fn numeric_prefix_len(body: &[u8]) -> usize {
    let count_digits = |from: usize| {
        body[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let integer = count_digits(0);
    let mut len = integer;
    let mut fraction = 0;

    if body.get(len) == Some(&b'.') {
        fraction = count_digits(len + 1);
        if integer + fraction > 0 {
            len += 1 + fraction;
        }
    }

    if integer + fraction == 0 {
        return 0;
    }

    if matches!(body.get(len), Some(b'e' | b'E')) {
        let mut exp_start = len + 1;
        if matches!(body.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(exp_start.min(body.len()));
        if exp_digits > 0 {
            len = exp_start + exp_digits;
        }
    }

    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(permissive_parse(b"5"), 5.0);
        assert_eq!(permissive_parse(b"10.25"), 10.25);
        assert_eq!(permissive_parse(b".5"), 0.5);
        assert_eq!(permissive_parse(b"7."), 7.0);
        assert_eq!(permissive_parse(b"  42"), 42.0);
    }

    #[test]
    fn test_longest_prefix() {
        assert_eq!(permissive_parse(b"1.2.3"), 1.2);
        assert_eq!(permissive_parse(b"0.5abc"), 0.5);
        assert_eq!(permissive_parse(b"3e"), 3.0);
        assert_eq!(permissive_parse(b"3e+"), 3.0);
        assert_eq!(permissive_parse(b"2e3x"), 2000.0);
    }

    #[test]
    fn test_no_conversion_is_zero() {
        assert_eq!(permissive_parse(b""), 0.0);
        assert_eq!(permissive_parse(b"abc"), 0.0);
        assert_eq!(permissive_parse(b"."), 0.0);
        assert_eq!(permissive_parse(b"-"), 0.0);
        assert_eq!(permissive_parse(b"0.00"), 0.0);
    }

    #[test]
    fn test_signs() {
        assert_eq!(permissive_parse(b"-2.5"), -2.5);
        assert_eq!(permissive_parse(b"+8"), 8.0);
        assert_eq!(permissive_parse(b"+-8"), 0.0);
    }

    #[test]
    fn test_special_words() {
        assert_eq!(permissive_parse(b"inf"), f64::INFINITY);
        assert_eq!(permissive_parse(b"Infinity"), f64::INFINITY);
        assert_eq!(permissive_parse(b"-INF"), f64::NEG_INFINITY);
        assert!(permissive_parse(b"nan").is_nan());
        assert_eq!(permissive_parse(b"in"), 0.0);
    }

    #[test]
    fn test_overflow_is_infinite() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(permissive_parse(huge.as_bytes()), f64::INFINITY);
    }

    #[test]
    fn test_decimal_zero() {
        assert!(is_decimal_zero(b"0.00"));
        assert!(is_decimal_zero(b"0.0"));
        assert!(is_decimal_zero(b"00.000"));
        assert!(!is_decimal_zero(b"0"));
        assert!(!is_decimal_zero(b"0."));
        assert!(!is_decimal_zero(b".0"));
        assert!(!is_decimal_zero(b"0.0a"));
        assert!(!is_decimal_zero(b"0.5"));
    }
}
