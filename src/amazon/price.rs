//! Locale-aware price text normalization.

use crate::amazon::locales::{LocaleConfig, LocaleTable};

/// Converts raw wishlist price text into a number.
///
/// Strips every currency symbol known to the locale table, not only the
/// current locale's, since wishlist markup can mix currencies.
#[derive(Debug, Clone)]
pub struct PriceNormalizer {
    currency_symbols: Vec<String>,
}

impl PriceNormalizer {
    pub fn new(table: &LocaleTable) -> Self {
        let mut currency_symbols: Vec<String> =
            table.currency_symbols().into_iter().map(String::from).collect();
        currency_symbols.retain(|s| !s.is_empty());
        Self { currency_symbols }
    }

    /// Normalizes `raw` using `locale`'s decimal delimiter.
    ///
    /// Malformed or empty text yields `0.0`; this never fails.
    pub fn normalize(&self, raw: &str, locale: &LocaleConfig) -> f64 {
        let mut text = raw.trim().to_string();
        for symbol in &self.currency_symbols {
            text = text.replace(symbol.as_str(), "");
        }

        let text = text.replace(locale.decimal_delimiter, ".");
        parse_leading_float(text.trim())
    }
}

/// Parses the longest numeric prefix of `text`, or `0.0` if there is none.
///
/// Accepts an optional sign, digits, a single fractional part and an
/// exponent, so `"12.99 - 15.99"` reads as `12.99`.
fn parse_leading_float(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    // Overflowing exponents parse to infinity; treat them as malformed.
    text[..end].parse().ok().filter(|v: &f64| v.is_finite()).unwrap_or(0.0)
}
