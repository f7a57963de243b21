//! Structural proof checks and verification.
//!
//! [`SortedPairProof::verify_with_root`] answers "does this path fold to the
//! root", nothing more.  [`ProofVerifier`] adds the shape checks a public entry
//! point needs: a proof that is longer than any tree we accept, or one that was
//! obviously truncated, is rejected with [`ProofError::InvalidProofLength`]
//! instead of silently returning `false`.

use tracing::*;

use crate::algorithm::HashAlgorithm;
use crate::error::{ProofError, ProofResult};
use crate::hasher::MerkleHash;
use crate::proof::SortedPairProof;
use crate::Hash32;

/// Default cap on the number of cohashes in a proof.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Depth a proof is expected to have, with slack for promoted odd nodes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpectedDepth {
    /// Depth of the tree the proof was generated from.
    pub depth: usize,

    /// How many levels shorter than `depth` a proof may be.
    pub tolerance: usize,
}

/// Verifies sorted-pair proofs for a fixed hash function and shape policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProofVerifier {
    algorithm: HashAlgorithm,
    max_depth: usize,
    expected_depth: Option<ExpectedDepth>,
}

impl ProofVerifier {
    /// Constructs a new instance with the default depth cap.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            max_depth: DEFAULT_MAX_DEPTH,
            expected_depth: None,
        }
    }

    /// Sets the maximum number of cohashes accepted.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Requires proofs to be between `depth - tolerance` and `depth` long.
    pub fn with_expected_depth(mut self, depth: usize, tolerance: usize) -> Self {
        self.expected_depth = Some(ExpectedDepth { depth, tolerance });
        self
    }

    /// Returns the hash function used.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Returns the maximum number of cohashes accepted.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the inclusive range of proof lengths acceptable for `leaf`
    /// under `root`.
    pub fn length_bounds(&self, leaf: &Hash32, root: &Hash32) -> (usize, usize) {
        let (mut min, mut max) = (0, self.max_depth);
        if let Some(exp) = self.expected_depth {
            min = exp.depth.saturating_sub(exp.tolerance);
            max = max.min(exp.depth);
        }

        // An empty path only makes sense for a single-leaf tree.
        if min == 0 && !<Hash32 as MerkleHash>::eq_ct(leaf, root) {
            min = 1;
        }

        (min, max)
    }

    /// Checks the proof's shape without hashing anything.
    pub fn check_shape(
        &self,
        leaf: &Hash32,
        proof: &SortedPairProof<Hash32>,
        root: &Hash32,
    ) -> ProofResult<()> {
        let (min, max) = self.length_bounds(leaf, root);
        let len = proof.len();
        if len < min || len > max {
            return Err(ProofError::InvalidProofLength { len, min, max });
        }
        Ok(())
    }

    /// Checks the proof's shape, then folds it over `leaf` and compares the
    /// result with `root`.
    ///
    /// Returns `Ok(false)` for a well-formed proof that belongs to some other
    /// tree or leaf.
    pub fn verify(
        &self,
        leaf: &Hash32,
        proof: &SortedPairProof<Hash32>,
        root: &Hash32,
    ) -> ProofResult<bool> {
        self.check_shape(leaf, proof, root)?;

        let computed = self.algorithm.compute_root(leaf, proof);
        let ok = <Hash32 as MerkleHash>::eq_ct(&computed, root);
        debug!(
            alg = %self.algorithm,
            len = proof.len(),
            leaf = %hex::encode(leaf),
            ok,
            "verified proof"
        );
        Ok(ok)
    }
}

impl Default for ProofVerifier {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

/// Converts a byte slice into a 32-byte digest.
pub fn digest_from_slice(buf: &[u8]) -> ProofResult<Hash32> {
    buf.try_into().map_err(|_| ProofError::InvalidDigestLength {
        expected: <Hash32 as MerkleHash>::HASH_LEN,
        found: buf.len(),
    })
}

/// Verifies a proof given as raw byte strings, selecting the hash function
/// by its numeric identifier.
///
/// This is the entry point exposed to the host environment.  Every digest
/// must be 32 bytes long; `hash_algorithm_id` uses the numbering of
/// [`HashAlgorithm`].
pub fn verify_proof_bytes<P: AsRef<[u8]>>(
    proof: &[P],
    root: &[u8],
    leaf: &[u8],
    hash_algorithm_id: u8,
) -> ProofResult<bool> {
    let algorithm = HashAlgorithm::try_from(hash_algorithm_id)?;
    let root = digest_from_slice(root)?;
    let leaf = digest_from_slice(leaf)?;
    let proof = proof_from_bytes(proof)?;

    ProofVerifier::new(algorithm).verify(&leaf, &proof, &root)
}

/// Parses a cohash path given as raw byte strings.
pub fn proof_from_bytes<P: AsRef<[u8]>>(proof: &[P]) -> ProofResult<SortedPairProof<Hash32>> {
    let cohashes = proof
        .iter()
        .map(|p| digest_from_slice(p.as_ref()))
        .collect::<ProofResult<Vec<_>>>()?;
    Ok(SortedPairProof::new(cohashes))
}
