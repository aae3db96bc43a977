use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::domain::{FloorValue, PriceValue, QuantityValue, YearValue};

/// Everything that is not a digit or a locale separator.
static NON_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\d.,]").expect("valid numeric strip regex"));

/// First embedded run of digits in a floor label.
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit run regex"));

/// Parse a price like "CHF 1.200.000,00" or "1,234.56" into whole currency
/// units, tolerating both US and EU separator conventions.
///
/// Never fails: unreadable text degrades to 0 so one malformed price cannot
/// abort a whole batch.
pub fn parse_price(raw: &PriceValue) -> i64 {
    match raw {
        PriceValue::Number(n) => round_half_away(*n),
        PriceValue::Text(text) => {
            let stripped = NON_NUMERIC.replace_all(text, "");
            let cleaned = resolve_separators(&stripped);
            match cleaned.parse::<f64>() {
                Ok(value) => round_half_away(value),
                Err(_) => {
                    warn!("parse_price: unreadable price '{}', falling back to 0", text);
                    0
                }
            }
        }
    }
}

/// Extract the floor level from values like 3, "5" or "level 3".
///
/// Labels without digits (ground-floor markers such as "EG" or "G") map
/// to 0, as does a missing floor.
pub fn parse_floor(raw: Option<&FloorValue>) -> i32 {
    match raw {
        None => 0,
        Some(FloorValue::Integer(n)) => *n as i32,
        Some(FloorValue::Float(f)) => *f as i32,
        Some(FloorValue::Text(text)) => {
            let label = text.trim().to_lowercase();
            DIGIT_RUN
                .find(&label)
                .and_then(|m| m.as_str().parse::<i32>().ok())
                .unwrap_or(0)
        }
    }
}

/// Room count from values like 3.5 or "3.5 rooms". 0.0 when unreadable.
pub fn parse_rooms(raw: Option<&QuantityValue>) -> f64 {
    parse_quantity(raw)
}

/// Living space from values like 120 or "120 m²". 0.0 when unreadable.
pub fn parse_living_space(raw: Option<&QuantityValue>) -> f64 {
    parse_quantity(raw)
}

/// Ancillary costs, numeric or free text. 0.0 when unreadable.
pub fn parse_additional_costs(raw: Option<&QuantityValue>) -> f64 {
    parse_quantity(raw)
}

/// Build year as an integer. `None` (never 0) when absent or unreadable, so
/// a missing year cannot masquerade as a meaningful input to the age
/// computation.
pub fn parse_build_year(raw: Option<&YearValue>) -> Option<i32> {
    match raw {
        None => None,
        Some(YearValue::Integer(n)) => Some(*n as i32),
        Some(YearValue::Float(f)) => Some(*f as i32),
        Some(YearValue::Text(text)) => text.trim().parse::<i32>().ok(),
    }
}

/// Shared float extraction for rooms, living space and additional costs:
/// keep digits and separators, decimal comma becomes a decimal point.
fn parse_quantity(raw: Option<&QuantityValue>) -> f64 {
    match raw {
        None => 0.0,
        Some(QuantityValue::Number(n)) => *n,
        Some(QuantityValue::Text(text)) => {
            let cleaned = NON_NUMERIC.replace_all(text, "").replace(',', ".");
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
    }
}

/// Decide which separator is the decimal point and drop thousands grouping.
///
/// With both separators present, the one occurring earlier is the thousands
/// separator. A lone comma is a decimal comma unless followed by exactly
/// three digits. Surplus dots are thousands separators; only the last
/// survives as the decimal point.
fn resolve_separators(stripped: &str) -> String {
    let resolved = match (stripped.find('.'), stripped.find(',')) {
        (Some(dot), Some(comma)) => {
            if comma < dot {
                stripped.replace(',', "")
            } else {
                stripped.replace('.', "").replace(',', ".")
            }
        }
        (None, Some(comma)) => {
            let left = &stripped[..comma];
            let right = &stripped[comma + 1..];
            if right.len() == 3 && right.bytes().all(|b| b.is_ascii_digit()) {
                format!("{}{}", left, right)
            } else {
                format!("{}.{}", left, right)
            }
        }
        _ => stripped.to_string(),
    };

    if resolved.matches('.').count() > 1 {
        if let Some(last) = resolved.rfind('.') {
            return format!("{}{}", resolved[..last].replace('.', ""), &resolved[last..]);
        }
    }

    resolved
}

/// Round to the nearest integer, halves away from zero.
fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}
