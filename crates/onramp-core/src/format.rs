//! Display Formatting
//!
//! USD, percent, and compact-notation formatting for the price table and
//! market stats. Mirrors the site's `en-US` number formatting: two decimals
//! for prices at or above a dollar, four below, short-scale suffixes for
//! large aggregates.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a USD amount: `$97,350.00`, `$0.5234`. Missing values render `-`.
pub fn format_usd(value: Option<Decimal>) -> String {
    let Some(v) = value else { return "-".into() };
    let dp = if v.abs() >= Decimal::ONE { 2 } else { 4 };
    let rounded = v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let fixed = format!("{:.*}", dp as usize, rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Short-scale compact notation: `72.4B`, `1.92T`, `950`. Missing values
/// render `-`.
pub fn format_compact(value: Option<Decimal>) -> String {
    let Some(v) = value else { return "-".into() };
    let abs = v.abs();
    let (scaled, suffix) = if abs >= Decimal::from(1_000_000_000_000u64) {
        (v / Decimal::from(1_000_000_000_000u64), "T")
    } else if abs >= Decimal::from(1_000_000_000u64) {
        (v / Decimal::from(1_000_000_000u64), "B")
    } else if abs >= Decimal::from(1_000_000u64) {
        (v / Decimal::from(1_000_000u64), "M")
    } else if abs >= Decimal::from(1_000u64) {
        (v / Decimal::from(1_000u64), "K")
    } else {
        (v, "")
    };
    let rounded = scaled
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{rounded}{suffix}")
}

/// Signed percentage with two decimals: `+3.24%`, `-1.12%`. Missing values
/// render `-`.
pub fn format_percent(value: Option<Decimal>) -> String {
    let Some(v) = value else { return "-".into() };
    let rounded = v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() { "" } else { "+" };
    format!("{sign}{rounded:.2}%")
}

/// Compact USD for market caps and volumes: `$1.92T`.
pub fn format_large_usd(value: Decimal) -> String {
    if value.is_sign_negative() {
        format!("-${}", format_compact(Some(value.abs())))
    } else {
        format!("${}", format_compact(Some(value)))
    }
}

/// Insert `,` thousands separators into a plain digit string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
