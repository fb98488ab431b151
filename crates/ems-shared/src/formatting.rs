//! Helpers used when rendering values into pages

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::const_config::display::{
    DISPLAY_CURRENCY_PREFIX, DISPLAY_DATE_FORMAT, DISPLAY_PLACEHOLDER,
};

/// Escapes the characters that are significant in HTML, including both kinds
/// of quotes so the output is also safe inside attribute values
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    result
}

/// Renders a date like "Jan 2, 2024"
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and RFC 3339. Absent, empty or
/// unparseable input renders [`DISPLAY_PLACEHOLDER`].
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|x| !x.is_empty()) else {
        return DISPLAY_PLACEHOLDER.to_string();
    };
    match parse_date(value) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => {
            tracing::debug!(?value, "unable to parse date for display");
            DISPLAY_PLACEHOLDER.to_string()
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|x| x.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|x| x.date_naive()))
}

/// Renders an amount with the currency prefix, thousands separators and two
/// decimal places. Eg. "K 1,234.50"
///
/// Rounding is half away from zero on the shortest decimal form of `amount`,
/// so `1.005` is "K 1.01" even though the nearest `f64` is slightly below it.
/// Non-finite amounts and amounts too large to count in cents (about 7.9e26)
/// render [`DISPLAY_PLACEHOLDER`].
pub fn format_currency(amount: f64) -> String {
    let Some(cents) = to_cents(amount) else {
        tracing::debug!(?amount, "unable to format amount for display");
        return format!("{DISPLAY_CURRENCY_PREFIX} {DISPLAY_PLACEHOLDER}");
    };
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{DISPLAY_CURRENCY_PREFIX} {sign}{}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn to_cents(amount: f64) -> Option<i128> {
    if !amount.is_finite() {
        return None;
    }
    // Far below half a cent, also keeps the scale within what `Decimal` holds
    if amount.abs() < 1e-6 {
        return Some(0);
    }
    Decimal::from_scientific(&format!("{amount:e}"))
        .ok()?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .trunc()
        .to_i128()
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Joins the configured base path and a path relative to it with exactly one
/// `/` between them
pub fn build_redirect_path(base: &str, relative_path: &str) -> String {
    let base = base.trim_end_matches('/');
    if relative_path.starts_with('/') {
        format!("{base}{relative_path}")
    } else {
        format!("{base}/{relative_path}")
    }
}
