//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float prices drifts:                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  A cart that is added to / decremented hundreds of times accumulates    │
//! │  that drift into its running total.                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    109.95 is parsed from its decimal text → 10995 cents, exactly        │
//! │    total = Σ cents × quantity, integer arithmetic only                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The catalog endpoint and the persisted cart both carry prices as JSON
//! numbers in major units (`109.95`). `Money` serializes the same way and
//! deserializes from a number, an integer or a decimal string. Parsing goes
//! through the shortest decimal text of the number, never through float
//! multiplication.
//!
//! ```rust
//! use shopfront_core::money::Money;
//!
//! let price: Money = "109.95".parse().unwrap();
//! assert_eq!(price.cents(), 10995);
//!
//! let total = price * 3u32;
//! assert_eq!(total.to_string(), "$329.85");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 cents**: decoded prices are bounded to `0..=MAX_PRICE`; sums saturate
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Custom serde**: JSON carries major units, memory carries cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Largest unit price accepted from the catalog or the stored cart
    /// ($10,000,000.00).
    pub const MAX_PRICE: Money = Money(1_000_000_000);

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies a unit price by a cart quantity.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    ///
    /// Saturates at `i64::MAX` cents instead of wrapping.
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Accepts `self` as a unit price decoded from JSON.
    ///
    /// Prices are non-negative and at most [`Money::MAX_PRICE`], so a line
    /// total (price × `u32` quantity) always fits in `i64` cents.
    fn check_price(self, input: impl Into<String>) -> CoreResult<Self> {
        if self.0 < 0 {
            return Err(CoreError::invalid_amount(input, "negative price"));
        }
        if self.0 > Self::MAX_PRICE.0 {
            return Err(CoreError::invalid_amount(input, "price above the supported maximum"));
        }
        Ok(self)
    }

    /// Parses a decimal amount in major units.
    ///
    /// ## Rules
    /// - Optional leading sign, digits, optional `.` and fraction
    /// - More than two fractional digits round half away from zero
    /// - Exponent notation, blanks and non-digits are rejected
    fn parse_decimal(input: &str) -> CoreResult<Self> {
        let text = input.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(CoreError::invalid_amount(input, "no digits"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CoreError::invalid_amount(input, "not a decimal number"));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| CoreError::invalid_amount(input, "amount too large"))?
        };

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(|| CoreError::invalid_amount(input, "amount too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_decimal(s)
    }
}

/// Saturating addition; totals never wrap.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Serde (major-unit JSON numbers)
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            // Division is correctly rounded, so the shortest representation
            // of the result is exactly the two-decimal amount.
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a number or string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| CoreError::invalid_amount(v.to_string(), "amount too large"))
            .and_then(|m| m.check_price(v.to_string()))
            .map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money)
            .ok_or_else(|| CoreError::invalid_amount(v.to_string(), "amount too large"))
            .and_then(|m| m.check_price(v.to_string()))
            .map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() {
            return Err(E::custom(CoreError::invalid_amount(
                v.to_string(),
                "not a finite number",
            )));
        }
        // `Display` for f64 prints the shortest round-trip text without an
        // exponent, e.g. 109.95 -> "109.95".
        let text = v.to_string();
        Money::parse_decimal(&text)
            .and_then(|m| m.check_price(text))
            .map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse_decimal(v)
            .and_then(|m| m.check_price(v))
            .map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
