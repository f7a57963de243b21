//! Sorted-pair binary Merkle tree.
//!
//! This is the producer side of the verifier: it builds a tree over leaf
//! digests, hands out inclusion proofs and computes the root a drop is
//! deployed with.  Any leaf count is accepted.  When a level has an odd number
//! of nodes the trailing node is promoted to the next level unchanged, so the
//! proofs of some leaves are shorter than the tree's depth.
use crate::error::{ProofError, ProofResult};
use crate::hasher::{MerkleHash, MerkleHasher};
use crate::proof::SortedPairProof;

/// Binary Merkle tree whose nodes are hashed as sorted pairs.
#[derive(Clone, Debug)]
pub struct SortedPairTree<H: MerkleHash> {
    /// Levels from the leaves (index 0) up to the root level, which always
    /// holds exactly one node.
    levels: Vec<Vec<H>>,
}

impl<H: MerkleHash> SortedPairTree<H> {
    /// Builds a tree from leaf digests.
    ///
    /// Leaves are used as given, they are neither re-hashed nor sorted.  An
    /// empty leaf set returns `Err(ProofError::NoLeaves)`.
    pub fn from_leaves<MH>(leaves: impl Into<Vec<H>>) -> ProofResult<Self>
    where
        MH: MerkleHasher<Hash = H>,
    {
        let leaves = leaves.into();
        if leaves.is_empty() {
            return Err(ProofError::NoLeaves);
        }

        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|l| l.len() > 1) {
            let parents = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => MH::hash_node(*left, *right),
                    // odd node out is carried up as is
                    [single] => *single,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            levels.push(parents);
        }

        Ok(Self { levels })
    }

    /// Returns the number of leaves in the tree.
    pub fn num_leaves(&self) -> usize {
        self.levels[0].len()
    }

    /// Returns a slice of the leaf nodes.
    pub fn leaves(&self) -> &[H] {
        &self.levels[0]
    }

    /// Returns the depth of the tree, the number of hashing levels between
    /// the leaves and the root.  This is the length of the longest proof.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Returns the tree root.
    pub fn root(&self) -> &H {
        // construction rejects empty leaf sets and stops at a single node
        &self.levels[self.depth()][0]
    }

    /// Returns the position of the first leaf equal to `leaf`.
    pub fn index_of(&self, leaf: &H) -> Option<usize> {
        self.leaves()
            .iter()
            .position(|l| <H as MerkleHash>::eq_ct(l, leaf))
    }

    /// Generates an inclusion proof for `index` if it exists.
    pub fn gen_proof(&self, index: usize) -> Option<SortedPairProof<H>> {
        if index >= self.num_leaves() {
            return None;
        }

        let mut local_idx = index;
        let mut path = Vec::with_capacity(self.depth());
        for level in &self.levels[..self.depth()] {
            // promoted nodes have no sibling and contribute no cohash
            if let Some(sibling) = level.get(local_idx ^ 1) {
                path.push(*sibling);
            }
            local_idx >>= 1;
        }

        Some(SortedPairProof::new(path))
    }

    /// Generates an inclusion proof for the first leaf equal to `leaf`.
    pub fn gen_proof_for(&self, leaf: &H) -> Option<SortedPairProof<H>> {
        self.index_of(leaf).and_then(|i| self.gen_proof(i))
    }

    /// Verifies a `proof` for `leaf` against this tree's root.
    pub fn verify_proof<MH>(&self, proof: &SortedPairProof<H>, leaf: &H) -> bool
    where
        MH: MerkleHasher<Hash = H>,
    {
        proof.verify_with_root::<MH>(self.root(), leaf)
    }
}
