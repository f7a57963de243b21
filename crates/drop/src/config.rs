//! Per-drop configuration.

use merkledrop_proof::{DEFAULT_MAX_DEPTH, HashAlgorithm, ProofVerifier};

use crate::leaf::{LeafEncoder, LeafFormat};

/// Parameters fixed when a drop is created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DropConfig {
    /// Hash function for leaves and internal nodes.
    hash_algorithm: HashAlgorithm,

    /// Longest proof accepted for a claim.
    max_proof_depth: usize,

    /// How claim leaves are hashed from their preimage.
    leaf_format: LeafFormat,
}

impl DropConfig {
    /// Constructs a new instance.
    pub fn new(hash_algorithm: HashAlgorithm, max_proof_depth: usize) -> Self {
        Self {
            hash_algorithm,
            max_proof_depth,
            leaf_format: LeafFormat::default(),
        }
    }

    /// Sets the hash function.
    pub fn with_hash_algorithm(mut self, hash_algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = hash_algorithm;
        self
    }

    /// Sets the longest proof accepted.
    pub fn with_max_proof_depth(mut self, max_proof_depth: usize) -> Self {
        self.max_proof_depth = max_proof_depth;
        self
    }

    /// Sets the leaf preimage format.
    pub fn with_leaf_format(mut self, leaf_format: LeafFormat) -> Self {
        self.leaf_format = leaf_format;
        self
    }

    /// Returns the hash function.
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    /// Returns the longest proof accepted.
    pub fn max_proof_depth(&self) -> usize {
        self.max_proof_depth
    }

    /// Returns the leaf preimage format.
    pub fn leaf_format(&self) -> LeafFormat {
        self.leaf_format
    }

    /// Builds the proof verifier for this configuration.
    pub fn verifier(&self) -> ProofVerifier {
        ProofVerifier::new(self.hash_algorithm).with_max_depth(self.max_proof_depth)
    }

    /// Builds the leaf encoder for this configuration.
    pub fn leaf_encoder(&self) -> LeafEncoder {
        LeafEncoder::new(self.hash_algorithm).with_format(self.leaf_format)
    }
}

impl Default for DropConfig {
    fn default() -> Self {
        Self::new(HashAlgorithm::Keccak256, DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DropConfig::default();
        assert_eq!(config.hash_algorithm(), HashAlgorithm::Keccak256);
        assert_eq!(config.max_proof_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(config.verifier().max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn builders() {
        let config = DropConfig::default()
            .with_hash_algorithm(HashAlgorithm::Sha2_256)
            .with_max_proof_depth(6)
            .with_leaf_format(LeafFormat::HexText);
        assert_eq!(config.verifier().algorithm(), HashAlgorithm::Sha2_256);
        assert_eq!(config.verifier().max_depth(), 6);
        assert_eq!(config.leaf_encoder().algorithm(), HashAlgorithm::Sha2_256);
        assert_eq!(config.leaf_encoder().format(), LeafFormat::HexText);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json() {
        let config: DropConfig =
            serde_json::from_str(r#"{"hash_algorithm":"sha3_256","max_proof_depth":16}"#)
                .unwrap();
        assert_eq!(config, DropConfig::new(HashAlgorithm::Sha3_256, 16));

        let partial: DropConfig = serde_json::from_str(r#"{"max_proof_depth":6}"#).unwrap();
        assert_eq!(partial.hash_algorithm(), HashAlgorithm::Keccak256);
        assert_eq!(partial.leaf_format(), LeafFormat::Utf8);

        let hex: DropConfig = serde_json::from_str(r#"{"leaf_format":"hex_text"}"#).unwrap();
        assert_eq!(hex.leaf_format(), LeafFormat::HexText);
    }
}
