use borsh::{BorshDeserialize, BorshSerialize};

use crate::address::{ADDRESS_LEN, Address};

impl BorshSerialize for Address {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.as_bytes())
    }
}

impl BorshDeserialize for Address {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let bytes = <[u8; ADDRESS_LEN]>::deserialize_reader(reader)?;
        Ok(Address::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;

    #[test]
    fn test_address_borsh_is_raw_bytes() {
        let addr = Address::from_u64(0x01cf0e2f2f715450);
        let encoded = borsh::to_vec(&addr).unwrap();
        assert_eq!(encoded, 0x01cf0e2f2f715450u64.to_be_bytes());
        let back: Address = borsh::from_slice(&encoded).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_address_borsh_too_short() {
        assert!(borsh::from_slice::<Address>(&[0x01, 0x02]).is_err());
    }

    #[test]
    fn test_amount_borsh_is_units() {
        let encoded = borsh::to_vec(&Amount::from_units(5)).unwrap();
        assert_eq!(encoded, 5u64.to_le_bytes());
    }
}
