//! Hash algorithm identifiers.
//!
//! Callers select the hash function for a proof with a small integer using
//! the host ledger's numbering.  Only the 256-bit hashes can back a
//! sorted-pair tree over 32-byte digests, the remaining identifiers are
//! recognized but rejected.

use core::fmt;
use std::str::FromStr;

use crate::error::{ProofError, ProofResult};
use crate::hasher::MerkleHasher;
use crate::proof::SortedPairProof;
use crate::tree::SortedPairTree;
use crate::{Hash32, Keccak256SortedHasher, Sha256SortedHasher, Sha3_256SortedHasher};

/// Identifier of SHA2-384 in the host numbering.
pub const SHA2_384_ID: u8 = 2;
/// Identifier of SHA3-384 in the host numbering.
pub const SHA3_384_ID: u8 = 4;
/// Identifier of KMAC128 in the host numbering.
pub const KMAC128_ID: u8 = 5;

/// Hash functions usable for sorted-pair trees.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashAlgorithm {
    /// SHA2-256.
    #[cfg_attr(feature = "serde", serde(rename = "sha2_256"))]
    Sha2_256 = 1,

    /// SHA3-256 (FIPS 202 padding).
    #[cfg_attr(feature = "serde", serde(rename = "sha3_256"))]
    Sha3_256 = 3,

    /// Keccak-256 (original Keccak padding), as used by most EVM tooling.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "keccak256"))]
    Keccak256 = 6,
}

/// Runs `$body` with `$mh` bound to the sorted-pair hasher of `$alg`.
macro_rules! with_hasher {
    ($alg:expr, $mh:ident => $body:expr) => {
        match $alg {
            HashAlgorithm::Sha2_256 => {
                type $mh = Sha256SortedHasher;
                $body
            }
            HashAlgorithm::Sha3_256 => {
                type $mh = Sha3_256SortedHasher;
                $body
            }
            HashAlgorithm::Keccak256 => {
                type $mh = Keccak256SortedHasher;
                $body
            }
        }
    };
}

impl HashAlgorithm {
    /// Converts the enum to its underlying u8 value.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Hashes an arbitrary message.
    pub fn hash(self, buf: &[u8]) -> Hash32 {
        with_hasher!(self, MH => MH::hash_leaf(buf))
    }

    /// Combines two digests as a sorted pair.
    pub fn combine(self, a: Hash32, b: Hash32) -> Hash32 {
        with_hasher!(self, MH => MH::hash_node(a, b))
    }

    /// Folds `proof` over `leaf`, returning the implied root.
    pub fn compute_root(self, leaf: &Hash32, proof: &SortedPairProof<Hash32>) -> Hash32 {
        with_hasher!(self, MH => proof.compute_root::<MH>(leaf))
    }

    /// Builds a sorted-pair tree over `leaves` with this hash function.
    pub fn build_tree(
        self,
        leaves: impl Into<Vec<Hash32>>,
    ) -> ProofResult<SortedPairTree<Hash32>> {
        with_hasher!(self, MH => SortedPairTree::from_leaves::<MH>(leaves))
    }
}

impl From<HashAlgorithm> for u8 {
    fn from(alg: HashAlgorithm) -> Self {
        alg as u8
    }
}

impl TryFrom<u8> for HashAlgorithm {
    type Error = ProofError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HashAlgorithm::Sha2_256),
            3 => Ok(HashAlgorithm::Sha3_256),
            6 => Ok(HashAlgorithm::Keccak256),
            unsupported => Err(ProofError::UnsupportedHashAlgorithm(unsupported)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashAlgorithm::Sha2_256 => "SHA2_256",
            HashAlgorithm::Sha3_256 => "SHA3_256",
            HashAlgorithm::Keccak256 => "KECCAK_256",
        };
        f.write_str(name)
    }
}

impl FromStr for HashAlgorithm {
    type Err = ProofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SHA2_256" => Ok(HashAlgorithm::Sha2_256),
            "SHA3_256" => Ok(HashAlgorithm::Sha3_256),
            "KECCAK_256" | "KECCAK256" => Ok(HashAlgorithm::Keccak256),
            "SHA2_384" => Err(ProofError::UnsupportedHashAlgorithm(SHA2_384_ID)),
            "SHA3_384" => Err(ProofError::UnsupportedHashAlgorithm(SHA3_384_ID)),
            "KMAC128" => Err(ProofError::UnsupportedHashAlgorithm(KMAC128_ID)),
            other => other
                .parse::<u8>()
                .map_err(|_| ProofError::UnsupportedHashAlgorithm(0))
                .and_then(HashAlgorithm::try_from),
        }
    }
}

#[cfg(test)]
mod tests {
    use sha2::{Digest, Sha256};

    use super::*;

    #[test]
    fn ids_roundtrip() {
        for alg in [
            HashAlgorithm::Sha2_256,
            HashAlgorithm::Sha3_256,
            HashAlgorithm::Keccak256,
        ] {
            assert_eq!(HashAlgorithm::try_from(alg.as_u8()), Ok(alg));
            assert_eq!(alg.to_string().parse::<HashAlgorithm>(), Ok(alg));
        }
    }

    #[test]
    fn unsupported_ids_rejected() {
        for id in [0, SHA2_384_ID, SHA3_384_ID, KMAC128_ID, 7, 255] {
            assert_eq!(
                HashAlgorithm::try_from(id),
                Err(ProofError::UnsupportedHashAlgorithm(id))
            );
        }
        assert_eq!(
            "SHA3_384".parse::<HashAlgorithm>(),
            Err(ProofError::UnsupportedHashAlgorithm(SHA3_384_ID))
        );
    }

    #[test]
    fn parses_numeric_ids() {
        assert_eq!("6".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Keccak256));
        assert!("nope".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn default_is_keccak() {
        assert_eq!(HashAlgorithm::default().as_u8(), 6);
    }

    #[test]
    fn dispatches_to_the_right_digest() {
        let expected: Hash32 = Sha256::digest(b"abc").into();
        assert_eq!(HashAlgorithm::Sha2_256.hash(b"abc"), expected);
        assert_ne!(
            HashAlgorithm::Sha3_256.hash(b"abc"),
            HashAlgorithm::Keccak256.hash(b"abc")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&HashAlgorithm::Keccak256).unwrap();
        assert_eq!(json, "\"keccak256\"");
        let back: HashAlgorithm = serde_json::from_str("\"sha3_256\"").unwrap();
        assert_eq!(back, HashAlgorithm::Sha3_256);
    }

    #[test]
    fn build_tree_matches_combine() {
        let alg = HashAlgorithm::Sha3_256;
        let a = alg.hash(b"a");
        let b = alg.hash(b"b");
        let tree = alg.build_tree(vec![a, b]).unwrap();
        assert_eq!(tree.root(), &alg.combine(b, a));
        let proof = tree.gen_proof(1).unwrap();
        assert_eq!(&alg.compute_root(&b, &proof), tree.root());
    }
}
