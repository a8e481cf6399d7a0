//! Currency and percentage formatting.
//!
//! Non-finite inputs format as zero. Callers are expected to have dropped
//! such values already; the formatter only guarantees it never prints `NaN`.

use l2_config::FormatConfig;

/// Ascending, so the smallest unit that keeps the mantissa under 1000 wins.
const COMPACT_UNITS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// Format a USD amount according to `config`.
///
/// ```
/// use l2_config::FormatConfig;
/// use l2_view::format_currency;
///
/// assert_eq!(format_currency(1_000_000.0, &FormatConfig::default()), "$1,000,000");
/// ```
#[must_use]
pub fn format_currency(value: f64, config: &FormatConfig) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let decimals = usize::from(config.decimals);

    let plain = format!("{magnitude:.decimals$}");
    if config.compact && integer_digits(&plain) > 3 {
        let (scaled, unit) = compact(magnitude);
        return format!("{sign}{}{}{unit}", config.symbol, localize(&scaled, config));
    }

    let amount = localize(&plain, config);
    if amount.chars().all(|c| c == '0' || !c.is_ascii_digit()) {
        // Avoid "-$0" for tiny negatives that round away.
        return format!("{}{amount}", config.symbol);
    }
    format!("{sign}{}{amount}", config.symbol)
}

/// Two-decimal mantissa and unit, picked after rounding: `999_999` gives
/// `1.00M`.
fn compact(magnitude: f64) -> (String, &'static str) {
    let mut last = (format!("{magnitude:.2}"), "");
    for (divisor, unit) in COMPACT_UNITS {
        last = (format!("{:.2}", magnitude / divisor), unit);
        if integer_digits(&last.0) <= 3 {
            break;
        }
    }
    last
}

fn integer_digits(raw: &str) -> usize {
    raw.split('.').next().map_or(0, str::len)
}

/// Signed relative change with two decimals: `0.05` → `+5.00%`.
#[must_use]
pub fn format_percentage_change(change: f64) -> String {
    let percent = if change.is_finite() { change * 100.0 } else { 0.0 };
    let rounded = format!("{:.2}", percent.abs());
    if rounded == "0.00" {
        return "0.00%".to_string();
    }
    let sign = if percent > 0.0 { '+' } else { '-' };
    format!("{sign}{rounded}%")
}

/// Unsigned share with two decimals: `0.6` → `60.00%`.
#[must_use]
pub fn format_percentage(share: f64) -> String {
    let percent = if share.is_finite() { share * 100.0 } else { 0.0 };
    format!("{percent:.2}%")
}

/// Apply the configured separators to a `{:.N}`-formatted non-negative
/// number.
fn localize(raw: &str, config: &FormatConfig) -> String {
    let (integer, fraction) = raw.split_once('.').unwrap_or((raw, ""));

    let mut out = group_digits(integer, &config.grouping);
    if !fraction.is_empty() {
        out.push_str(&config.decimal_point);
        out.push_str(fraction);
    }
    out
}

fn group_digits(integer: &str, separator: &str) -> String {
    if separator.is_empty() || integer.len() <= 3 {
        return integer.to_string();
    }
    let head = integer.len() % 3;
    let mut out = String::with_capacity(integer.len() + integer.len() / 3 * separator.len());
    for (index, digit) in integer.chars().enumerate() {
        if index != 0 && index % 3 == head {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}
