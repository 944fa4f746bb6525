//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront sells
//! in a single currency, so a value carries no currency tag.

use crate::error::CartError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol used for display.
pub const CURRENCY_SYMBOL: &str = "$";

/// Number of fractional digits in a price.
pub const DECIMAL_PLACES: u32 = 2;

const MINOR_PER_MAJOR: i64 = 10_i64.pow(DECIMAL_PLACES);

/// A monetary value in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn from_cents(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.amount_cents
    }

    /// Parse a catalog price such as `"$15"` or `"$8.50"`.
    ///
    /// The string must start with exactly one currency marker (any character
    /// that is not a digit, sign, dot or whitespace) followed by a
    /// non-negative decimal. Either side of the dot may be empty, but not
    /// both (`"$15."`, `"$.5"`). Fractions finer than a cent are rounded half
    /// up, once, here.
    ///
    /// ```
    /// use nursery_cart::money::Money;
    /// let price = Money::parse_price("$8.50").unwrap();
    /// assert_eq!(price.cents(), 850);
    /// assert_eq!(Money::parse_price("$0.125").unwrap().cents(), 13);
    /// ```
    pub fn parse_price(cost: &str) -> Result<Money, CartError> {
        let trimmed = cost.trim();
        let mut chars = trimmed.chars();

        let marker = chars
            .next()
            .ok_or_else(|| CartError::malformed_price(cost, "empty price"))?;
        if marker.is_ascii_digit() || matches!(marker, '.' | '+' | '-') || marker.is_whitespace()
        {
            return Err(CartError::malformed_price(cost, "missing currency marker"));
        }

        let amount = chars.as_str();
        if amount.is_empty() {
            return Err(CartError::malformed_price(cost, "missing amount"));
        }

        let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(CartError::malformed_price(cost, "amount is not a decimal number"));
        }

        let places = DECIMAL_PLACES as usize;
        let (kept, dropped) = fraction.split_at(fraction.len().min(places));

        // "5" means 50 cents, "05" means 5 cents.
        let mut fraction_cents: i64 = 0;
        for digit in kept.bytes().chain(std::iter::repeat(b'0')).take(places) {
            fraction_cents = fraction_cents * 10 + i64::from(digit - b'0');
        }
        let round_up = dropped.bytes().next().is_some_and(|d| d >= b'5');

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| CartError::malformed_price(cost, "amount is too large"))?
        };

        let cents = whole_units
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|c| c.checked_add(fraction_cents))
            .and_then(|c| c.checked_add(i64::from(round_up)))
            .ok_or_else(|| CartError::malformed_price(cost, "amount is too large"))?;

        Ok(Money::from_cents(cents))
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let per = MINOR_PER_MAJOR as u64;
        format!(
            "{}{}.{:0width$}",
            sign,
            abs / per,
            abs % per,
            width = DECIMAL_PLACES as usize
        )
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        if self.amount_cents < 0 {
            let positive = Money::from_cents(self.amount_cents.saturating_neg());
            format!("-{}{}", CURRENCY_SYMBOL, positive.display_amount())
        } else {
            format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
        }
    }

    /// Add another Money value, returning None on overflow.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(Money::from_cents)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn checked_mul(&self, quantity: u32) -> Option<Money> {
        self.amount_cents
            .checked_mul(i64::from(quantity))
            .map(Money::from_cents)
    }

    /// Sum an iterator of Money values, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
