use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Serialize};

use crate::address::{ADDRESS_LEN, Address};
use crate::amount::Amount;

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&self.to_string())
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = Address;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "a hex address of at most {} digits", 2 * ADDRESS_LEN)
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Address, E> {
                    Address::from_str(v).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            struct BytesVisitor;

            impl<'de> de::Visitor<'de> for BytesVisitor {
                type Value = Address;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{ADDRESS_LEN} bytes")
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Address, E> {
                    let bytes: [u8; ADDRESS_LEN] = v
                        .try_into()
                        .map_err(|_| E::invalid_length(v.len(), &self))?;
                    Ok(Address::new(bytes))
                }
            }

            d.deserialize_bytes(BytesVisitor)
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&self.to_string())
        } else {
            s.serialize_u64(self.units())
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = Amount;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "a decimal amount string")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
                    Amount::from_str(v).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            u64::deserialize(d).map(Amount::from_units)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_json() {
        let addr = Address::from_u64(0x01cf0e2f2f715450);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x1cf0e2f2f715450\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_amount_json() {
        let json = serde_json::to_string(&Amount::from_units(60_050_000_000)).unwrap();
        assert_eq!(json, "\"600.50000000\"");
        let back: Amount = serde_json::from_str("\"600.5\"").unwrap();
        assert_eq!(back, Amount::from_units(60_050_000_000));
    }

    #[test]
    fn test_invalid_json() {
        assert!(serde_json::from_str::<Address>("\"0xnothex\"").is_err());
        assert!(serde_json::from_str::<Amount>("\"-1\"").is_err());
    }
}
