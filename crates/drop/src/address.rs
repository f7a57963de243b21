use std::fmt;
use std::str;

use thiserror::Error;

/// Length of an account address in bytes.
pub const ADDRESS_LEN: usize = 8;

/// Account address on the host ledger.
///
/// The canonical text form, which is what gets hashed into leaves, is `0x`
/// followed by lowercase hex with leading zeros stripped (`0x1cf0e2f2f715450`).
/// The zero address renders as `0x0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0; ADDRESS_LEN]);

    /// Creates a new address from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates an address from its integer value.
    pub const fn from_u64(v: u64) -> Self {
        Self(v.to_be_bytes())
    }

    /// Returns the address as a byte slice.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Converts to the inner byte array.
    pub const fn into_inner(self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Returns the zero-padded `0x` form, always `2 * ADDRESS_LEN` hex digits.
    pub fn to_padded_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LEN] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = hex::encode(self.0);
        match hex.trim_start_matches('0') {
            "" => f.write_str("0x0"),
            digits => write!(f, "0x{digits}"),
        }
    }
}

impl str::FromStr for Address {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(InvalidAddress::Empty);
        }
        if digits.len() > 2 * ADDRESS_LEN {
            return Err(InvalidAddress::TooLong(digits.len()));
        }

        let padded = format!("{digits:0>width$}", width = 2 * ADDRESS_LEN);
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(&padded, &mut bytes).map_err(|_| InvalidAddress::NotHex)?;
        Ok(Self(bytes))
    }
}

/// Error type for unparseable addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidAddress {
    /// No hex digits after the optional prefix.
    #[error("address is empty")]
    Empty,

    /// More hex digits than fit in an address.
    #[error("address has {0} hex digits, at most {max} allowed", max = 2 * ADDRESS_LEN)]
    TooLong(usize),

    /// The input contains non-hex characters.
    #[error("address must be hex")]
    NotHex,
}
