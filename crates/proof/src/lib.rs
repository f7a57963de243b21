//! Sorted-pair Merkle proofs.
//!
//! Trees built here hash every internal node as `H(min(l, r) || max(l, r))`.
//! Because the pair is ordered before hashing, a proof is just the list of
//! sibling digests from leaf to root, with no direction bits.
//!
//! ```rust,ignore
//! use merkledrop_proof::{HashAlgorithm, verify_proof_bytes};
//!
//! let tree = HashAlgorithm::Keccak256.build_tree(leaves)?;
//! let proof = tree.gen_proof(0).expect("leaf exists");
//! assert!(verify_proof_bytes(proof.cohashes(), tree.root(), &leaves[0], 6)?);
//! ```
//!
//! # Modules
//!
//! - `hasher`: hash traits and the [`SortedPairHasher`] combiner
//! - `algorithm`: [`HashAlgorithm`] identifiers and runtime dispatch
//! - `proof`: [`SortedPairProof`] cohash paths
//! - `tree`: [`SortedPairTree`] builder and proof generation
//! - `verifier`: [`ProofVerifier`] shape checks and the byte-level entry point

// stupid linter issue
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use serde_json as _;

pub mod algorithm;
mod error;
pub mod hasher;
pub mod proof;
pub mod tree;
pub mod verifier;

use hasher::SortedPairHasher;
use sha2::Sha256;
use sha3::{Keccak256, Sha3_256};

/// 32-byte digest used for leaves, nodes and roots.
pub type Hash32 = [u8; 32];

/// Sorted-pair hasher over Keccak-256.
pub type Keccak256SortedHasher = SortedPairHasher<Keccak256, 32>;

/// Sorted-pair hasher over SHA2-256.
pub type Sha256SortedHasher = SortedPairHasher<Sha256, 32>;

/// Sorted-pair hasher over SHA3-256.
pub type Sha3_256SortedHasher = SortedPairHasher<Sha3_256, 32>;

pub use algorithm::HashAlgorithm;
pub use error::{ProofError, ProofResult};
pub use hasher::{MerkleHash, MerkleHasher, combine, sort_pair};
pub use proof::SortedPairProof;
pub use tree::SortedPairTree;
pub use verifier::{
    DEFAULT_MAX_DEPTH, ExpectedDepth, ProofVerifier, digest_from_slice, proof_from_bytes,
    verify_proof_bytes,
};
