//! Display formatting helpers.
//!
//! Monetary values render in the Brazilian convention (`R$ 1.234,56` with a
//! thousands dot and a decimal comma, two fixed places) and dates in
//! day/month/year order. Calling code (result cards, reports, exports)
//! depends on these for consistent rendering.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Formats a monetary value as Brazilian currency.
///
/// # Example
///
/// ```
/// use benefit_engine::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(123456, 2)), "R$ 1.234,56");
/// assert_eq!(format_currency(Decimal::new(-50, 1)), "-R$ 5,00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    // The mantissa is 96 bits, so total cents always fit an i128.
    let total_cents = (abs * Decimal::from(100)).trunc().to_i128().unwrap_or(0);
    let units = total_cents / 100;
    let cents = total_cents % 100;

    let units_str = units.to_string();
    let mut grouped = String::new();
    for (i, c) in units_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let units_grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-R$ {},{:02}", units_grouped, cents)
    } else {
        format!("R$ {},{:02}", units_grouped, cents)
    }
}

/// Parses a string produced by [`format_currency`] back into a value.
///
/// # Example
///
/// ```
/// use benefit_engine::format::parse_currency;
/// use rust_decimal::Decimal;
///
/// let value = parse_currency("R$ 1.234,56").unwrap();
/// assert_eq!(value, Decimal::new(123456, 2));
/// ```
pub fn parse_currency(text: &str) -> EngineResult<Decimal> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('-')
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let mut value: Decimal = cleaned
        .parse()
        .map_err(|_| EngineError::InvalidInput {
            field: "currency".to_string(),
            message: format!("'{}' is not a valid currency string", text),
        })?;

    if text.trim_start().starts_with('-') {
        value.set_sign_negative(true);
    }
    Ok(value)
}

/// Formats a rate as a percentage with a fixed number of decimal places.
///
/// # Example
///
/// ```
/// use benefit_engine::format::format_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percent(Decimal::from(8), 1), "8.0%");
/// ```
pub fn format_percent(value: Decimal, decimals: u32) -> String {
    format!("{}%", fixed_point(value, decimals))
}

/// Formats a date in day/month/year order.
///
/// # Example
///
/// ```
/// use benefit_engine::format::format_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2041, 6, 15).unwrap();
/// assert_eq!(format_date(date), "15/06/2041");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Renders a value with exactly `decimals` fractional digits.
fn fixed_point(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let mut s = rounded.to_string();
    if decimals == 0 {
        return s;
    }
    let fraction_len = match s.find('.') {
        Some(pos) => s.len() - pos - 1,
        None => {
            s.push('.');
            0
        }
    };
    for _ in fraction_len..decimals as usize {
        s.push('0');
    }
    s
}
