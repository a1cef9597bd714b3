//! Unit price in decimal currency.

use serde::{Deserialize, Serialize};

use ecosprout_core::{DomainError, ValueObject};

/// Non-negative unit price, held in whole cents.
///
/// The wire format is a JSON decimal number (`2.99`), rounded to the nearest
/// cent on the way in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl ValueObject for Price {}

/// Largest decimal price whose cent count still fits in a `u64`.
const MAX_DECIMAL: f64 = (u64::MAX / 100) as f64;

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be non-negative, got {value}"
            )));
        }
        if value > MAX_DECIMAL {
            return Err(DomainError::validation(format!(
                "price must not exceed {MAX_DECIMAL}, got {value}"
            )));
        }
        Ok(Self {
            cents: (value * 100.0).round() as u64,
        })
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.as_decimal()
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}
