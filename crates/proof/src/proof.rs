//! Sorted-pair inclusion proofs.

use crate::hasher::{MerkleHash, MerkleHasher};

/// Proof for an entry in a sorted-pair tree.
///
/// Unlike an indexed proof this carries only the cohash path from the leaf up
/// to the root.  Each step combines the running digest with the next cohash
/// through a commutative hasher, so the position of the leaf never matters.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize, borsh::BorshDeserialize))]
pub struct SortedPairProof<H>
where
    H: MerkleHash,
{
    cohashes: Vec<H>,
}

impl<H: MerkleHash> SortedPairProof<H> {
    /// Creates a new proof from a cohash path, ordered leaf to root.
    pub fn new(cohashes: Vec<H>) -> Self {
        Self { cohashes }
    }

    /// Creates an empty proof.  This only validates for single-leaf trees,
    /// where the leaf is the root.
    pub fn new_empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the cohash path in this proof.
    pub fn cohashes(&self) -> &[H] {
        &self.cohashes
    }

    /// Number of cohashes in the path.
    pub fn len(&self) -> usize {
        self.cohashes.len()
    }

    /// Returns if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.cohashes.is_empty()
    }

    /// Drops cohashes past `len`, keeping the first ones.
    pub fn truncate(&mut self, len: usize) {
        self.cohashes.truncate(len);
    }

    /// Consumes the proof, returning the cohash path.
    pub fn into_cohashes(self) -> Vec<H> {
        self.cohashes
    }

    /// Computes the root obtained by applying this proof to `leaf`.
    ///
    /// The caller specifies the merkle hasher implementation via `MH`.
    pub fn compute_root<MH>(&self, leaf: &H) -> H
    where
        MH: MerkleHasher<Hash = H>,
    {
        self.cohashes
            .iter()
            .fold(*leaf, |acc, co| MH::hash_node(acc, *co))
    }

    /// Verifies this proof for `leaf` against the expected `root`.
    pub fn verify_with_root<MH>(&self, root: &H, leaf: &H) -> bool
    where
        MH: MerkleHasher<Hash = H>,
    {
        let computed = self.compute_root::<MH>(leaf);
        <H as MerkleHash>::eq_ct(&computed, root)
    }
}

impl<H: MerkleHash> From<Vec<H>> for SortedPairProof<H> {
    fn from(cohashes: Vec<H>) -> Self {
        Self::new(cohashes)
    }
}

impl<H: MerkleHash> AsRef<[H]> for SortedPairProof<H> {
    fn as_ref(&self) -> &[H] {
        &self.cohashes
    }
}
