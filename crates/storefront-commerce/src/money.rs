//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Prices arrive as
//! display strings (`"₹1,200"`), so this module also owns parsing them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., paise for
/// INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a whole number of major units.
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a formatted price string such as `"₹1,200"` or `"$49.99"`.
    ///
    /// The first numeric literal in the text is used: a run of digits that
    /// may contain `,` thousands separators and one `.` before the fraction.
    /// Currency symbols and any other text around it are ignored. Text with
    /// no digits, or a number too large to represent, yields zero.
    ///
    /// ```
    /// use storefront_commerce::money::{Currency, Money};
    /// assert_eq!(Money::parse_display("₹1,200", Currency::INR).amount_minor, 120_000);
    /// assert!(Money::parse_display("Free", Currency::INR).is_zero());
    /// ```
    pub fn parse_display(text: &str, currency: Currency) -> Self {
        let amount = parse_minor_units(text, currency.decimal_places()).unwrap_or(0);
        Self::new(amount, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_major() as f64
    }

    /// Format for display, e.g. `"₹2,450"` or `"$10.50"`.
    ///
    /// Thousands are grouped with commas and the fraction is only shown when
    /// it is non-zero.
    pub fn display(&self) -> String {
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let abs = self.amount_minor.unsigned_abs();
        let sign = if self.amount_minor < 0 { "-" } else { "" };

        let mut out = format!(
            "{}{}{}",
            sign,
            self.currency.symbol(),
            group_thousands(abs / per_major)
        );
        let fraction = abs % per_major;
        if fraction != 0 {
            let places = self.currency.decimal_places() as usize;
            out.push_str(&format!(".{:0places$}", fraction));
        }
        out
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, clamping at the representable range.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor), self.currency)
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns None on a currency mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Extract the first numeric literal in `text` as minor units.
fn parse_minor_units(text: &str, places: u32) -> Option<i64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let mut chars = text[start..].chars().peekable();

    let mut whole: i64 = 0;
    let mut fraction: i64 = 0;
    let mut fraction_digits = 0u32;
    let mut in_fraction = false;

    while let Some(c) = chars.next() {
        match c {
            '0'..='9' => {
                let digit = i64::from(c as u8 - b'0');
                if in_fraction {
                    // Digits past the currency's precision are dropped.
                    if fraction_digits < places {
                        fraction = fraction * 10 + digit;
                        fraction_digits += 1;
                    }
                } else {
                    whole = whole.checked_mul(10)?.checked_add(digit)?;
                }
            }
            ',' if !in_fraction && chars.peek().is_some_and(|n| n.is_ascii_digit()) => {}
            '.' if !in_fraction && places > 0 && chars.peek().is_some_and(|n| n.is_ascii_digit()) => {
                in_fraction = true;
            }
            _ => break,
        }
    }

    let scale = 10_i64.pow(places);
    let fraction = fraction * 10_i64.pow(places - fraction_digits);
    whole.checked_mul(scale)?.checked_add(fraction)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rupee_with_separator() {
        let m = Money::parse_display("₹1,200", Currency::INR);
        assert_eq!(m.amount_minor, 120_000);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_parse_with_fraction() {
        assert_eq!(Money::parse_display("$49.99", Currency::USD).amount_minor, 4999);
        assert_eq!(Money::parse_display("₹10.5", Currency::INR).amount_minor, 1050);
        assert_eq!(Money::parse_display("£3.999", Currency::GBP).amount_minor, 399);
    }

    #[test]
    fn test_parse_ignores_surrounding_text() {
        assert_eq!(Money::parse_display("Rs. 2,499 only", Currency::INR).amount_minor, 249_900);
        assert_eq!(Money::parse_display("  ₹ 50 ", Currency::INR).amount_minor, 5000);
    }

    #[test]
    fn test_parse_unparsable_is_zero() {
        assert!(Money::parse_display("Free", Currency::INR).is_zero());
        assert!(Money::parse_display("", Currency::INR).is_zero());
        assert!(Money::parse_display("₹", Currency::INR).is_zero());
    }

    #[test]
    fn test_parse_overflow_is_zero() {
        assert!(Money::parse_display("99999999999999999999999", Currency::INR).is_zero());
    }

    #[test]
    fn test_parse_zero_decimal_currency() {
        assert_eq!(Money::parse_display("¥1,500", Currency::JPY).amount_minor, 1500);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_major(2450, Currency::INR).display(), "₹2,450");
        assert_eq!(Money::from_major(1_234_567, Currency::INR).display(), "₹1,234,567");
        assert_eq!(Money::new(1050, Currency::USD).display(), "$10.50");
        assert_eq!(Money::zero(Currency::INR).display(), "₹0");
        assert_eq!(Money::new(-500, Currency::USD).display(), "-$5");
    }

    #[test]
    fn test_to_decimal() {
        let m = Money::new(245_000, Currency::INR);
        assert!((m.to_decimal() - 2450.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_try_sum() {
        let values = [
            Money::from_major(2400, Currency::INR),
            Money::from_major(50, Currency::INR),
        ];
        let total = Money::try_sum(values.iter(), Currency::INR).unwrap();
        assert_eq!(total, Money::from_major(2450, Currency::INR));
    }

    #[test]
    fn test_try_sum_currency_mismatch() {
        let values = [Money::new(100, Currency::INR), Money::new(100, Currency::USD)];
        assert!(Money::try_sum(values.iter(), Currency::INR).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        assert!(Money::new(i64::MAX, Currency::INR).try_multiply(2).is_none());
        assert_eq!(
            Money::new(i64::MAX, Currency::INR).saturating_multiply(2).amount_minor,
            i64::MAX
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
