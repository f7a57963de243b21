//! Fixed-point token amounts.

use std::fmt;
use std::str;

use thiserror::Error;

/// Number of fractional digits carried by an [`Amount`].
pub const AMOUNT_DECIMALS: usize = 8;

/// Base units in one whole token.
pub const UNITS_PER_TOKEN: u64 = 100_000_000;

/// Non-negative fixed-point decimal with [`AMOUNT_DECIMALS`] fractional
/// digits, stored as a count of base units.
///
/// Displays with exactly eight fractional digits (`600.50000000`).  That text
/// form is part of the leaf preimage, so it must never change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize, borsh::BorshDeserialize))]
pub struct Amount(u64);

impl Amount {
    /// Zero tokens.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates an amount from a count of base units.
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Creates an amount of whole tokens, if it fits.
    pub const fn from_tokens(tokens: u64) -> Option<Self> {
        match tokens.checked_mul(UNITS_PER_TOKEN) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Returns the count of base units.
    pub const fn units(self) -> u64 {
        self.0
    }

    /// Returns if this is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtracts `other`, returning `None` if it would go negative.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / UNITS_PER_TOKEN;
        let frac = self.0 % UNITS_PER_TOKEN;
        write!(f, "{whole}.{frac:0width$}", width = AMOUNT_DECIMALS)
    }
}

impl str::FromStr for Amount {
    type Err = InvalidAmount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if whole.is_empty() {
            return Err(InvalidAmount::Empty);
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(InvalidAmount::NotDecimal);
        }
        if frac.len() > AMOUNT_DECIMALS {
            return Err(InvalidAmount::TooPrecise(frac.len()));
        }

        let whole: u64 = whole.parse().map_err(|_| InvalidAmount::Overflow)?;
        let frac_units: u64 = if frac.is_empty() {
            0
        } else {
            // right-pad to exactly AMOUNT_DECIMALS digits
            format!("{frac:0<width$}", width = AMOUNT_DECIMALS)
                .parse()
                .map_err(|_| InvalidAmount::NotDecimal)?
        };

        whole
            .checked_mul(UNITS_PER_TOKEN)
            .and_then(|u| u.checked_add(frac_units))
            .map(Self)
            .ok_or(InvalidAmount::Overflow)
    }
}

/// Error type for unparseable amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidAmount {
    /// No integer digits.
    #[error("amount is empty")]
    Empty,

    /// The input is not a plain non-negative decimal.
    #[error("amount must be a non-negative decimal")]
    NotDecimal,

    /// More fractional digits than an amount carries.
    #[error("amount has {0} fractional digits, at most {max} allowed", max = AMOUNT_DECIMALS)]
    TooPrecise(usize),

    /// The value does not fit.
    #[error("amount out of range")]
    Overflow,
}
