//! Leaf encoding for claim entries.
//!
//! A claim leaf is `H("{address}:{amount}")` where the address is in its
//! canonical stripped form and the amount carries exactly eight fractional
//! digits.  Whoever builds the distribution tree must produce byte-identical
//! preimages, any disagreement on zero padding or precision yields a
//! different leaf and the claimant's proof stops verifying.

use merkledrop_proof::{Hash32, HashAlgorithm};

use crate::address::Address;
use crate::amount::Amount;

/// Separator between the address and amount in a leaf preimage.
pub const LEAF_SEPARATOR: char = ':';

/// Returns the text a claim leaf is hashed from.
///
/// Under [`LeafFormat::Utf8`] the leaf is the hash of these bytes.  Some JS
/// tree builders instead hash the lowercase hex spelling of the payload
/// (`keccak256(Buffer.from(payload).toString('hex'))`), which hashes the hex
/// text itself.  Trees built that way only verify with
/// [`LeafFormat::HexText`].
pub fn leaf_preimage(address: &Address, amount: Amount) -> String {
    format!("{address}{LEAF_SEPARATOR}{amount}")
}

/// How the leaf preimage is turned into hash input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LeafFormat {
    /// Hash the preimage's UTF-8 bytes.
    #[default]
    Utf8,

    /// Hash the lowercase hex text of the preimage's UTF-8 bytes.
    HexText,
}

/// Encodes `(address, amount)` pairs into leaf digests.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LeafEncoder {
    algorithm: HashAlgorithm,
    format: LeafFormat,
}

impl LeafEncoder {
    /// Constructs a new instance hashing with `algorithm`.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            format: LeafFormat::default(),
        }
    }

    /// Sets how the preimage is fed to the hash.
    pub fn with_format(mut self, format: LeafFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the hash function used.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Returns the preimage format.
    pub fn format(&self) -> LeafFormat {
        self.format
    }

    /// Computes the leaf digest for a claim entry.
    pub fn encode(&self, address: &Address, amount: Amount) -> Hash32 {
        let preimage = leaf_preimage(address, amount);
        match self.format {
            LeafFormat::Utf8 => self.algorithm.hash(preimage.as_bytes()),
            LeafFormat::HexText => self.algorithm.hash(hex::encode(preimage).as_bytes()),
        }
    }

    /// Computes leaf digests for a whole distribution list, in order.
    pub fn encode_all<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a (Address, Amount)>,
    ) -> Vec<Hash32> {
        entries
            .into_iter()
            .map(|(addr, amt)| self.encode(addr, *amt))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use sha3::{Digest, Keccak256};

    use super::*;

    fn alice() -> Address {
        "0x01cf0e2f2f715450".parse().unwrap()
    }

    #[test]
    fn preimage_format() {
        let amount: Amount = "600.5".parse().unwrap();
        assert_eq!(
            leaf_preimage(&alice(), amount),
            "0x1cf0e2f2f715450:600.50000000"
        );
    }

    #[test]
    fn leaf_is_keccak_of_preimage() {
        let amount: Amount = "100".parse().unwrap();
        let expected: Hash32 = Keccak256::digest(b"0x1cf0e2f2f715450:100.00000000").into();
        assert_eq!(LeafEncoder::default().encode(&alice(), amount), expected);
    }

    #[test]
    fn encoding_drift_changes_leaf() {
        let amount: Amount = "600.5".parse().unwrap();
        let leaf = LeafEncoder::default().encode(&alice(), amount);

        // zero-padded address
        let padded = Keccak256::digest(b"0x01cf0e2f2f715450:600.50000000");
        assert_ne!(leaf, Hash32::from(padded));

        // shorter precision
        let short = Keccak256::digest(b"0x1cf0e2f2f715450:600.5");
        assert_ne!(leaf, Hash32::from(short));

        let same = Keccak256::digest(b"0x1cf0e2f2f715450:600.50000000");
        assert_eq!(leaf, Hash32::from(same));
    }

    #[test]
    fn algorithm_changes_leaf() {
        let amount = Amount::from_units(1);
        let k = LeafEncoder::new(HashAlgorithm::Keccak256).encode(&alice(), amount);
        let s = LeafEncoder::new(HashAlgorithm::Sha3_256).encode(&alice(), amount);
        assert_ne!(k, s);
    }

    #[test]
    fn hex_text_format_hashes_hex_spelling() {
        let amount: Amount = "600.5".parse().unwrap();
        let enc = LeafEncoder::default().with_format(LeafFormat::HexText);
        assert_eq!(enc.format(), LeafFormat::HexText);

        let hex_text = hex::encode(b"0x1cf0e2f2f715450:600.50000000");
        let expected: Hash32 = Keccak256::digest(hex_text.as_bytes()).into();
        assert_eq!(enc.encode(&alice(), amount), expected);
        assert_ne!(enc.encode(&alice(), amount), LeafEncoder::default().encode(&alice(), amount));
    }

    #[test]
    fn encode_all_preserves_order() {
        let entries = [
            (Address::from_u64(1), Amount::from_units(5)),
            (Address::from_u64(2), Amount::from_units(5)),
        ];
        let enc = LeafEncoder::default();
        let leaves = enc.encode_all(&entries);
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0], enc.encode(&entries[0].0, entries[0].1));
        assert_eq!(leaves[1], enc.encode(&entries[1].0, entries[1].1));
    }
}
