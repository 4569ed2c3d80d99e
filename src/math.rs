//! Numeric helpers shared by the statistics and Benford stages

/// Neumaier compensated summation
///
/// Keeps a running compensation term so the low-order bits lost when adding
/// values of very different magnitude are recovered at the end.
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;

    for x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            compensation += (sum - t) + x;
        } else {
            compensation += (x - t) + sum;
        }
        sum = t;
    }

    sum + compensation
}

/// Power of two at or below the largest magnitude in `values`, 1.0 if none
///
/// Dividing by a power of two is exact, so values can be brought into
/// `[-2, 2]` before summing without overflowing.
pub fn power_of_two_scale(values: &[f64]) -> f64 {
    let largest = values.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if largest < f64::MIN_POSITIVE || !largest.is_finite() {
        return 1.0;
    }
    // Keep only the exponent bits of the largest value
    f64::from_bits(largest.to_bits() & 0x7FF0_0000_0000_0000)
}

/// Midpoint of `a` and `b` that cannot overflow
pub fn midpoint(a: f64, b: f64) -> f64 {
    if (a < 0.0) != (b < 0.0) {
        (a + b) / 2.0
    } else {
        a + (b - a) / 2.0
    }
}

/// Format a value like C's `%.*g`
///
/// Uses `precision` significant digits, switches to exponent notation for
/// very small or very large magnitudes and strips trailing zeros.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Let the formatter do the rounding, then read back the decimal exponent
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
