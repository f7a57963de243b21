//! Hashing primitives: hash types and the sorted-pair hashing strategy.

use digest::Digest;

/// Hash wrapper trait used by the proof verifier and tree builder.
pub trait MerkleHash: Copy + Clone + Ord + 'static {
    /// Length of the hash in bytes.
    const HASH_LEN: usize;

    /// Checks if two hashes are equal, attempting to do it in constant time.
    fn eq_ct(a: &Self, b: &Self) -> bool;
}

impl<const LEN: usize> MerkleHash for [u8; LEN] {
    const HASH_LEN: usize = LEN;

    fn eq_ct(a: &Self, b: &Self) -> bool {
        // Accumulate every differing bit instead of returning early.  This is
        // mostly used to compare a root folded from a proof against the
        // trusted root of a drop.
        let mut acc: u8 = 0;
        for i in 0..LEN {
            acc |= a[i] ^ b[i];
        }

        acc == 0
    }
}

/// Generic merkle hashing trait.
pub trait MerkleHasher {
    /// Hash value.
    type Hash: MerkleHash;

    /// Hashes an arbitrary message, such as a leaf preimage.
    fn hash_leaf(buf: &[u8]) -> Self::Hash;

    /// Hashes a pair of child digests to compute their parent's digest.
    fn hash_node(left: Self::Hash, right: Self::Hash) -> Self::Hash;
}

/// Orders a pair of digests byte-lexicographically, smallest first.
pub fn sort_pair<H: MerkleHash>(a: H, b: H) -> (H, H) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Merkle hasher over an arbitrary [`Digest`] that canonicalizes child pairs.
///
/// Nodes are computed as `H(min(l, r) || max(l, r))`, so `hash_node` is
/// commutative and proofs carry no left/right direction bits.  Leaf inputs are
/// hashed as `H(buf)` with no domain-separation prefix, which keeps digests
/// compatible with trees built by other sorted-pair tooling.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortedPairHasher<D: Digest, const N: usize>(std::marker::PhantomData<D>);

impl<D: Digest, const N: usize> MerkleHasher for SortedPairHasher<D, N> {
    type Hash = [u8; N];

    fn hash_leaf(buf: &[u8]) -> Self::Hash {
        let result = D::digest(buf);
        result
            .as_ref()
            .try_into()
            .expect("digest output length mismatch")
    }

    fn hash_node(left: Self::Hash, right: Self::Hash) -> Self::Hash {
        let (lo, hi) = sort_pair(left, right);

        let mut context = D::new();
        context.update(lo);
        context.update(hi);

        let result = context.finalize();
        result
            .as_ref()
            .try_into()
            .expect("digest output length mismatch")
    }
}

/// Combines two digests with the given hasher.  Alias for
/// [`MerkleHasher::hash_node`] that reads better at call sites.
pub fn combine<MH: MerkleHasher>(a: MH::Hash, b: MH::Hash) -> MH::Hash {
    MH::hash_node(a, b)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sha3::{Digest, Keccak256};

    use super::*;
    use crate::{Keccak256SortedHasher, Sha256SortedHasher};

    type H = [u8; 32];

    #[test]
    fn hash_leaf_is_plain_keccak() {
        let expected: H = Keccak256::digest(b"a").into();
        assert_eq!(Keccak256SortedHasher::hash_leaf(b"a"), expected);
    }

    #[test]
    fn hash_node_sorts_before_concatenating() {
        let lo = [0x01; 32];
        let hi = [0xf0; 32];

        let mut ctx = Keccak256::new();
        ctx.update(lo);
        ctx.update(hi);
        let expected: H = ctx.finalize().into();

        assert_eq!(Keccak256SortedHasher::hash_node(hi, lo), expected);
        assert_eq!(Keccak256SortedHasher::hash_node(lo, hi), expected);
    }

    #[test]
    fn sort_pair_orders_lexicographically() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        a[0] = 1;
        b[31] = 0xff;
        assert_eq!(sort_pair(a, b), (b, a));
    }

    #[test]
    fn eq_ct_matches_eq() {
        let a = [7u8; 32];
        let mut b = a;
        assert!(<H as MerkleHash>::eq_ct(&a, &b));
        b[17] ^= 0x80;
        assert!(!<H as MerkleHash>::eq_ct(&a, &b));
    }

    proptest! {
        #[test]
        fn combine_is_commutative(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            prop_assert_eq!(
                combine::<Keccak256SortedHasher>(a, b),
                combine::<Keccak256SortedHasher>(b, a)
            );
            prop_assert_eq!(
                combine::<Sha256SortedHasher>(a, b),
                combine::<Sha256SortedHasher>(b, a)
            );
        }
    }
}
