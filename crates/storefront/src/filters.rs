//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Symbol shown in front of every price.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats a price for display, e.g. `₹ 51,500`.
///
/// The input is anything whose `Display` is the grouped amount, normally an
/// `emporium_core::Price`.
///
/// Usage in templates: `{{ card.price|currency }}`
#[askama::filter_fn]
pub fn currency(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_currency(value))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

fn format_currency(value: impl Display) -> String {
    format!("{CURRENCY_SYMBOL} {value}")
}

#[cfg(test)]
mod tests {
    use emporium_core::Price;

    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(Price::new(51_500)), "₹ 51,500");
        assert_eq!(format_currency(Price::new(124_500)), "₹ 124,500");
        assert_eq!(format_currency(Price::ZERO), "₹ 0");
    }
}
