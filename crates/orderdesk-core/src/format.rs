//! Polish-locale display helpers for dates, amounts and names

use crate::config::CurrencyConfig;
use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Genitive month names, as used in "5 marca 2024"
const MONTHS_GENITIVE: [&str; 12] = [
    "stycznia",
    "lutego",
    "marca",
    "kwietnia",
    "maja",
    "czerwca",
    "lipca",
    "sierpnia",
    "września",
    "października",
    "listopada",
    "grudnia",
];

/// Format a date as day, long month and year ("5 marca 2024")
pub fn format_date_pl(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE
        .get(date.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!("{} {month} {}", date.day(), date.year())
}

/// Format an amount with two decimals, grouped thousands and a currency suffix
///
/// Grouping uses a no-break space and the decimal separator is a comma,
/// so `1234.5` in PLN becomes `1 234,50 zł`.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let symbol = if currency.eq_ignore_ascii_case("PLN") {
        "zł"
    } else {
        currency
    };

    format!("{sign}{grouped},{fraction}\u{a0}{symbol}")
}

/// An amount ready for a table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountDisplay {
    /// Formatted amount
    pub text: String,
    /// Set when the requested display currency could not be honoured
    pub warning: Option<String>,
}

impl CurrencyConfig {
    /// Currency amounts are shown in, after any conversion
    ///
    /// # Errors
    ///
    /// Returns [`Error::RateSourceNotConfigured`] when a display currency other
    /// than the base is requested; no exchange-rate source exists.
    pub fn display_currency(&self) -> Result<&str> {
        match self.display.as_deref() {
            Some(display) if !display.eq_ignore_ascii_case(&self.base) => {
                Err(Error::RateSourceNotConfigured {
                    from: self.base.clone(),
                    to: display.to_string(),
                })
            }
            _ => Ok(&self.base),
        }
    }

    /// Render a stored amount for display
    ///
    /// Amounts are never converted: without a rate source the stored value is
    /// shown in the base currency and the warning carries the reason.
    pub fn display_amount(&self, amount: Decimal) -> AmountDisplay {
        match self.display_currency() {
            Ok(currency) => AmountDisplay {
                text: format_amount(amount, currency),
                warning: None,
            },
            Err(e) => AmountDisplay {
                text: format_amount(amount, &self.base),
                warning: Some(e.to_string()),
            },
        }
    }
}

/// Avatar fallback initials: first letters of up to two words, or the first two letters of one
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let letters: String = match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };
    letters.to_uppercase()
}
