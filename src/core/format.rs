//! Locale-aware number rendering for prices and counters
//!
//! The page copy is Brazilian Portuguese, so numbers are grouped with `.`
//! and use `,` as the decimal separator (`12.500`, `49,9`).

/// Maximum number of fraction digits kept when rendering decimals
pub const MAX_FRACTION_DIGITS: u32 = 3;

/// Largest magnitude whose thousandths still fit exactly in an `f64` mantissa
const EXACT_FRACTION_LIMIT: f64 = 9_007_199_254_740.0;

/// Separator pair used when rendering numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Thousands group separator
    pub group: char,
    /// Decimal separator
    pub decimal: char,
}

impl NumberFormat {
    /// Brazilian Portuguese separators (`1.234,5`)
    pub const fn pt_br() -> Self {
        Self {
            group: '.',
            decimal: ',',
        }
    }

    /// Render an integer with group separators
    pub fn format_integer(&self, value: i64) -> String {
        let digits = group_digits(&value.unsigned_abs().to_string(), self.group);
        if value < 0 {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// Render a decimal with group separators and up to three fraction digits.
    ///
    /// Rounds half away from zero and drops trailing zeros, so `49.0` renders
    /// as `49` and `1234.5` as `1.234,5`. Non-finite input renders as `0`.
    /// Magnitudes past 2^53 / 1000 carry no fraction digits and render their
    /// whole part exactly.
    pub fn format_decimal(&self, value: f64) -> String {
        if !value.is_finite() {
            return "0".to_string();
        }

        let magnitude = value.abs();
        let (whole, fraction) = if magnitude < EXACT_FRACTION_LIMIT {
            let scale = 10u64.pow(MAX_FRACTION_DIGITS);
            let scaled = (magnitude * scale as f64).round() as u64;
            ((scaled / scale).to_string(), scaled % scale)
        } else {
            (format!("{:.0}", magnitude.trunc()), 0)
        };

        let mut out = String::new();
        if value < 0.0 && (whole != "0" || fraction != 0) {
            out.push('-');
        }
        out.push_str(&group_digits(&whole, self.group));

        if fraction != 0 {
            let fraction = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
            out.push(self.decimal);
            out.push_str(fraction.trim_end_matches('0'));
        }

        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::pt_br()
    }
}

fn group_digits(raw: &str, separator: char) -> String {
    let len = raw.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}

/// Parse a counter target from a `data-count` attribute.
///
/// Integers parse directly; decimals are truncated toward zero; anything
/// else (missing, empty, garbage) yields `0`. Targets outside the `i64`
/// range clamp to its bounds.
pub fn parse_count(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };

    if let Ok(value) = raw.parse::<i64>() {
        return value;
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}

/// Parse a price amount from a `data-monthly` / `data-yearly` attribute.
///
/// Missing, empty or non-numeric values yield `0.0`.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
