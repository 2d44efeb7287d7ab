//! Cell formatting for report tables.

use crate::metrics::SignificanceLevel;

/// Non-breaking space used to indent nested row titles.
pub const INDENT_UNIT: &str = "&nbsp;";

const DEFAULT_PRECISION: u32 = 1;

/// A raw table cell before formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

/// Formatting options for a row. Every field is optional so that call-site
/// overrides can be layered over a metric's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormatOptions {
    /// Decimal digits for values (default 1)
    pub precision: Option<u32>,
    /// Render values as percentages
    pub percentage: Option<bool>,
    /// Leave the diff column empty
    pub no_diff: Option<bool>,
    /// Nesting level of the row title
    pub indent: Option<usize>,
    /// Decimal digits for the percent diff column (default 1)
    pub diff_precision: Option<u32>,
}

impl FormatOptions {
    pub const NONE: FormatOptions = FormatOptions {
        precision: None,
        percentage: None,
        no_diff: None,
        indent: None,
        diff_precision: None,
    };

    pub const fn with_precision(precision: u32) -> Self {
        FormatOptions { precision: Some(precision), ..Self::NONE }
    }

    pub const fn with_indent(level: usize) -> Self {
        FormatOptions { indent: Some(level), ..Self::NONE }
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merged(&self, overrides: &FormatOptions) -> FormatOptions {
        FormatOptions {
            precision: overrides.precision.or(self.precision),
            percentage: overrides.percentage.or(self.percentage),
            no_diff: overrides.no_diff.or(self.no_diff),
            indent: overrides.indent.or(self.indent),
            diff_precision: overrides.diff_precision.or(self.diff_precision),
        }
    }

    pub fn is_percentage(&self) -> bool {
        self.percentage.unwrap_or(false)
    }

    pub fn is_no_diff(&self) -> bool {
        self.no_diff.unwrap_or(false)
    }

    pub fn indent_level(&self) -> usize {
        self.indent.unwrap_or(0)
    }
}

/// Format a cell with the unit implied by `options`.
pub fn format_value(value: Option<&CellValue>, options: &FormatOptions) -> String {
    let unit = if options.is_percentage() { "%" } else { "" };
    format_with_unit(value, options.precision, options.is_percentage(), unit, false)
}

/// Format a cell.
///
/// Absent values and non-finite numbers render as an empty string. A value
/// that rounds to zero never keeps its minus sign.
pub fn format_with_unit(
    value: Option<&CellValue>,
    precision: Option<u32>,
    percentage: bool,
    unit: &str,
    show_plus_sign: bool,
) -> String {
    match value {
        Some(CellValue::Text(text)) => format!("{text}{unit}"),
        Some(CellValue::Number(x)) => {
            let x = *x;
            if !x.is_finite() {
                return String::new();
            }
            let scaled = if percentage { x * 100.0 } else { x };
            let precision = precision.unwrap_or(DEFAULT_PRECISION) as usize;
            let mut num = to_fixed(scaled, precision);
            if num.starts_with('-') && is_zero_string(&num[1..]) {
                num.remove(0);
            }
            if show_plus_sign && x > 0.0 && !is_zero_string(&num) {
                num.insert(0, '+');
            }
            num + unit
        }
        None => String::new(),
    }
}

/// Largest integer below which every `f64` integer is exact.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Fixed-point rendering that rounds exact halves away from zero.
///
/// `{:.N}` already rounds to the nearest decimal using the exact binary value,
/// but breaks exact ties towards the even digit. A tie is only possible when
/// `x * 10^(precision + 1)` is an integer ending in 5, which `mul_add` lets us
/// check without rounding error.
fn to_fixed(x: f64, precision: usize) -> String {
    let Some(scale) = i32::try_from(precision + 1)
        .ok()
        .filter(|p| *p <= 22)
        .map(|p| 10f64.powi(p))
    else {
        return format!("{x:.precision$}");
    };
    let shifted = x * scale;
    let exact = x.mul_add(scale, -shifted) == 0.0;
    let tie = exact
        && shifted.fract() == 0.0
        && shifted.abs() < EXACT_INTEGER_LIMIT
        && (shifted % 10.0).abs() == 5.0;
    if !tie {
        return format!("{x:.precision$}");
    }

    let digits = (((shifted.abs() + 5.0) / 10.0) as u64).to_string();
    let digits = format!("{digits:0>width$}", width = precision + 1);
    let (int_part, frac_part) = digits.split_at(digits.len() - precision);
    let sign = if x < 0.0 { "-" } else { "" };
    if precision == 0 {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    }
}

/// Matches `0`, `0.`, `0.0`, `0.00`, ...
fn is_zero_string(s: &str) -> bool {
    match s.strip_prefix('0') {
        Some("") => true,
        Some(rest) => rest.strip_prefix('.').is_some_and(|digits| digits.chars().all(|c| c == '0')),
        None => false,
    }
}

/// Relative change of `after` from `before`; positive means growth.
pub fn percent_diff(after: f64, before: f64) -> f64 {
    (after - before) / before
}

/// Render a percent diff, emphasized and tagged when it is significant.
pub fn format_diff(
    percent_diff: f64,
    significance: Option<SignificanceLevel>,
    precision: Option<u32>,
) -> String {
    let percent = format_with_unit(
        Some(&CellValue::Number(percent_diff)),
        precision,
        true,
        "%",
        true,
    );
    let Some(significance) = significance else {
        return percent;
    };
    if percent.is_empty() {
        return percent;
    }

    match significance {
        SignificanceLevel::Warning => format!("**{percent}**&nbsp;🔸"),
        SignificanceLevel::Alert => format!("**{percent}**&nbsp;🚨"),
        SignificanceLevel::Awesome => format!("**{percent}**&nbsp;🌟"),
    }
}

/// Prefix `text` with four non-breaking spaces per nesting level.
pub fn indent(text: &str, level: usize) -> String {
    let mut out = INDENT_UNIT.repeat(4 * level);
    out.push_str(text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(x: f64) -> CellValue {
        CellValue::Number(x)
    }

    #[test]
    fn test_format_rounds_to_precision() {
        let opts = FormatOptions::with_precision(2);
        assert_eq!(format_value(Some(&num(3.14159)), &opts), "3.14");
        assert_eq!(format_value(Some(&num(100.0)), &FormatOptions::with_precision(0)), "100");
        assert_eq!(format_value(Some(&num(2.0)), &FormatOptions::default()), "2.0");
    }

    #[test]
    fn test_format_rounds_exact_halves_away_from_zero() {
        let p0 = FormatOptions::with_precision(0);
        assert_eq!(format_value(Some(&num(2.5)), &p0), "3");
        assert_eq!(format_value(Some(&num(0.5)), &p0), "1");
        assert_eq!(format_value(Some(&num(-2.5)), &p0), "-3");
        assert_eq!(format_value(Some(&num(52_690_944.0 / 1_048_576.0)), &FormatOptions::default()), "50.3");
        assert_eq!(format_value(Some(&num(0.125)), &FormatOptions::with_precision(2)), "0.13");

        let pct = FormatOptions { percentage: Some(true), ..FormatOptions::NONE };
        assert_eq!(format_value(Some(&num(0.0125)), &pct), "1.3%");
        assert_eq!(format_diff(0.0125, None, Some(1)), "+1.3%");
    }

    #[test]
    fn test_format_near_halves_follow_binary_value() {
        // 0.15 is stored slightly below the half, 0.45 slightly above
        assert_eq!(format_value(Some(&num(0.15)), &FormatOptions::default()), "0.1");
        assert_eq!(format_value(Some(&num(0.45)), &FormatOptions::default()), "0.5");
        assert_eq!(format_value(Some(&num(1.005)), &FormatOptions::with_precision(2)), "1.00");
    }

    #[test]
    fn test_format_collapses_negative_zero() {
        assert_eq!(format_value(Some(&num(-0.00001)), &FormatOptions::with_precision(2)), "0.00");
        assert_eq!(format_value(Some(&num(-0.0)), &FormatOptions::with_precision(0)), "0");
        assert_eq!(format_value(Some(&num(-0.04)), &FormatOptions::default()), "0.0");
        assert_eq!(format_value(Some(&num(-0.06)), &FormatOptions::default()), "-0.1");
    }

    #[test]
    fn test_format_non_finite_is_empty() {
        let opts = FormatOptions::default();
        assert_eq!(format_value(Some(&num(f64::NAN)), &opts), "");
        assert_eq!(format_value(Some(&num(f64::INFINITY)), &opts), "");
        assert_eq!(format_value(Some(&num(f64::NEG_INFINITY)), &opts), "");
        assert_eq!(format_value(None, &opts), "");
    }

    #[test]
    fn test_format_percentage() {
        let opts = FormatOptions { percentage: Some(true), precision: Some(0), ..FormatOptions::NONE };
        assert_eq!(format_value(Some(&num(0.5)), &opts), "50%");
    }

    #[test]
    fn test_format_text_keeps_value_and_appends_unit() {
        let text = CellValue::from("v12.16.1");
        assert_eq!(format_value(Some(&text), &FormatOptions::default()), "v12.16.1");
        let pct = FormatOptions { percentage: Some(true), ..FormatOptions::NONE };
        assert_eq!(format_value(Some(&CellValue::from("n/a")), &pct), "n/a%");
    }

    #[test]
    fn test_format_diff_plain() {
        assert_eq!(format_diff(0.10, None, Some(1)), "+10.0%");
        assert_eq!(format_diff(-0.10, None, Some(1)), "-10.0%");
        assert_eq!(format_diff(0.0, None, Some(1)), "0.0%");
        assert_eq!(format_diff(0.00001, None, Some(1)), "0.0%");
    }

    #[test]
    fn test_format_diff_significance_suffixes() {
        assert_eq!(format_diff(0.10, Some(SignificanceLevel::Alert), Some(1)), "**+10.0%**&nbsp;🚨");
        assert_eq!(format_diff(0.25, Some(SignificanceLevel::Warning), Some(0)), "**+25%**&nbsp;🔸");
        assert_eq!(format_diff(-0.5, Some(SignificanceLevel::Awesome), None), "**-50.0%**&nbsp;🌟");
    }

    #[test]
    fn test_format_diff_non_finite_is_empty_even_when_significant() {
        assert_eq!(format_diff(f64::INFINITY, Some(SignificanceLevel::Alert), Some(1)), "");
        assert_eq!(format_diff(f64::NAN, None, Some(1)), "");
    }

    #[test]
    fn test_percent_diff() {
        assert_eq!(percent_diff(120.0, 100.0), 0.2);
        assert_eq!(percent_diff(80.0, 100.0), -0.2);
        assert!(percent_diff(5.0, 0.0).is_infinite());
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("Mean", 0), "Mean");
        assert_eq!(indent("Mean", 1), "&nbsp;&nbsp;&nbsp;&nbsp;Mean");
        let nested = indent("Mean", 2);
        assert_eq!(nested.matches(INDENT_UNIT).count(), 8);
        assert!(nested.ends_with("&nbsp;Mean"));
    }

    #[test]
    fn test_merged_prefers_overrides() {
        let defaults = FormatOptions { precision: Some(0), no_diff: Some(true), ..FormatOptions::NONE };
        let merged = defaults.merged(&FormatOptions { indent: Some(1), no_diff: Some(false), ..FormatOptions::NONE });
        assert_eq!(merged.precision, Some(0));
        assert_eq!(merged.indent_level(), 1);
        assert!(!merged.is_no_diff());
    }
}
