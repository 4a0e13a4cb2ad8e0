//! Checked amount arithmetic.
//!
//! Every amount that flows through coin selection, payment planning and
//! trade metadata is an [`Amount`]: a non-negative count of native-token
//! atomic units. The only way to combine amounts is through the checked
//! operations here, which fail with [`AmountError`] instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced by the amount ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("amount overflow")]
    Overflow,

    #[error("amount underflow")]
    Underflow,
}

/// A non-negative amount in atomic units.
///
/// Backed by `u128` so sums of many `u64`-sized coin values cannot overflow
/// at any realistic supply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u128);

/// 2^128 as an `f64`; anything at or above it cannot be represented.
const F64_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

impl Amount {
    pub const ZERO: Amount = Amount(0);
    pub const MAX: Amount = Amount(u128::MAX);

    pub const fn new(atomic: u128) -> Self {
        Amount(atomic)
    }

    /// The raw atomic-unit value.
    pub const fn atomic(self) -> u128 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `self + other`, failing with [`AmountError::Overflow`].
    pub fn checked_add(self, other: Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    /// `self - other`, failing with [`AmountError::Underflow`] when `other > self`.
    pub fn checked_sub(self, other: Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or(AmountError::Underflow)
    }

    /// Checked sum of a sequence of amounts.
    pub fn sum<I>(amounts: I) -> Result<Amount, AmountError>
    where
        I: IntoIterator<Item = Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, |acc, a| acc.checked_add(a))
    }

    /// Convert a floating-point value coming from an external source.
    ///
    /// Rejects NaN, infinities, negative values, fractional values and
    /// anything too large for `u128`.
    pub fn from_f64(value: f64) -> Result<Amount, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::InvalidAmount(format!("{} is not finite", value)));
        }
        if value < 0.0 {
            return Err(AmountError::InvalidAmount(format!("{} is negative", value)));
        }
        if value.fract() != 0.0 {
            return Err(AmountError::InvalidAmount(format!("{} is not an integer", value)));
        }
        if value >= F64_LIMIT {
            return Err(AmountError::InvalidAmount(format!("{} is out of range", value)));
        }
        Ok(Amount(value as u128))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(value as u128)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount(value as u128)
    }
}

impl TryFrom<i128> for Amount {
    type Error = AmountError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        u128::try_from(value)
            .map(Amount)
            .map_err(|_| AmountError::InvalidAmount(format!("{} is negative", value)))
    }
}

impl TryFrom<i64> for Amount {
    type Error = AmountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Amount::try_from(value as i128)
    }
}

impl TryFrom<Amount> for u64 {
    type Error = AmountError;

    fn try_from(value: Amount) -> Result<Self, Self::Error> {
        u64::try_from(value.0).map_err(|_| AmountError::Overflow)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parse a plain decimal string of atomic units (no sign, no fraction).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::InvalidAmount(format!("{:?} is not a decimal integer", s)));
        }
        s.parse::<u128>()
            .map(Amount)
            .map_err(|_| AmountError::InvalidAmount(format!("{} is out of range", s)))
    }
}
