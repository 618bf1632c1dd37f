//! Price display.
//!
//! The card renderer only depends on [`CurrencyFormatter`]; the default
//! [`IsoCurrencyFormatter`] follows en-US conventions (`$1,234.50`,
//! `¥1,200`, `CHF 12.00`).

/// Currency used when a card has a price but no code
pub const DEFAULT_CURRENCY: &str = "USD";

/// Formats an amount in major units for display
pub trait CurrencyFormatter: Send + Sync {
    /// Must not panic for any input.
    fn format(&self, amount: f64, currency: &str) -> String;
}

struct CurrencyInfo {
    code: &'static str,
    symbol: Option<&'static str>,
    minor_digits: usize,
}

const fn info(code: &'static str, symbol: Option<&'static str>, minor_digits: usize) -> CurrencyInfo {
    CurrencyInfo {
        code,
        symbol,
        minor_digits,
    }
}

const CURRENCIES: &[CurrencyInfo] = &[
    info("USD", Some("$"), 2),
    info("EUR", Some("€"), 2),
    info("GBP", Some("£"), 2),
    info("JPY", Some("¥"), 0),
    info("CNY", Some("CN¥"), 2),
    info("KRW", Some("₩"), 0),
    info("INR", Some("₹"), 2),
    info("CAD", Some("CA$"), 2),
    info("AUD", Some("A$"), 2),
    info("NZD", Some("NZ$"), 2),
    info("HKD", Some("HK$"), 2),
    info("TWD", Some("NT$"), 2),
    info("MXN", Some("MX$"), 2),
    info("BRL", Some("R$"), 2),
    info("ILS", Some("₪"), 2),
    info("PHP", Some("₱"), 2),
    info("VND", Some("₫"), 0),
    info("CHF", None, 2),
    info("SEK", None, 2),
    info("NOK", None, 2),
    info("DKK", None, 2),
    info("PLN", None, 2),
    info("CLP", None, 0),
    info("ISK", None, 0),
    info("BHD", None, 3),
    info("KWD", None, 3),
    info("OMR", None, 3),
];

/// Symbol-table formatter for ISO 4217 codes
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCurrencyFormatter;

impl CurrencyFormatter for IsoCurrencyFormatter {
    fn format(&self, amount: f64, currency: &str) -> String {
        let code = currency.trim().to_ascii_uppercase();
        if !amount.is_finite() {
            return format!("{} {}", code, amount);
        }

        let known = CURRENCIES.iter().find(|c| c.code == code);
        let digits = known.map(|c| c.minor_digits).unwrap_or(2);
        let number = group_thousands(&format!("{:.*}", digits, amount.abs()));
        // -0.00 after rounding shouldn't carry a sign
        let negative = amount < 0.0 && number.chars().any(|c| c.is_ascii_digit() && c != '0');
        let sign = if negative { "-" } else { "" };

        match known.and_then(|c| c.symbol) {
            Some(symbol) => format!("{}{}{}", sign, symbol, number),
            None => format!("{}{}\u{a0}{}", sign, code, number),
        }
    }
}

fn group_thousands(fixed: &str) -> String {
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
