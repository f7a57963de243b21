//! Verification through the byte-level entry point, as a host would call it.

#![expect(unused_crate_dependencies, reason = "deps used by the library only")]

use merkledrop_proof::{Hash32, HashAlgorithm, ProofError, verify_proof_bytes};

const KECCAK_256: u8 = 6;

fn keccak_leaves(items: &[&str]) -> Vec<Hash32> {
    items
        .iter()
        .map(|s| HashAlgorithm::Keccak256.hash(s.as_bytes()))
        .collect()
}

fn to_bytes(cohashes: &[Hash32]) -> Vec<Vec<u8>> {
    cohashes.iter().map(|c| c.to_vec()).collect()
}

#[test]
fn valid_proof_returns_true() {
    let leaves = keccak_leaves(&["e", "a", "b", "c", "d"]);
    let tree = HashAlgorithm::Keccak256.build_tree(leaves.clone()).unwrap();

    let proof = tree.gen_proof(0).unwrap();
    let res = verify_proof_bytes(&to_bytes(proof.cohashes()), tree.root(), &leaves[0], KECCAK_256);
    assert_eq!(res, Ok(true));
}

#[test]
fn every_leaf_of_odd_tree_verifies() {
    let leaves = keccak_leaves(&["e", "a", "b", "c", "d"]);
    let tree = HashAlgorithm::Keccak256.build_tree(leaves.clone()).unwrap();

    for (i, leaf) in leaves.iter().enumerate() {
        let proof = tree.gen_proof(i).unwrap();
        let res = verify_proof_bytes(&to_bytes(proof.cohashes()), tree.root(), leaf, KECCAK_256);
        assert_eq!(res, Ok(true), "leaf {i}");
    }
}

#[test]
fn proof_from_other_tree_returns_false() {
    let correct = keccak_leaves(&["a", "b", "c"]);
    let correct_tree = HashAlgorithm::Keccak256.build_tree(correct.clone()).unwrap();

    let bad = keccak_leaves(&["d", "e", "f"]);
    let bad_tree = HashAlgorithm::Keccak256.build_tree(bad).unwrap();
    let bad_proof = bad_tree.gen_proof(0).unwrap();

    let res = verify_proof_bytes(
        &to_bytes(bad_proof.cohashes()),
        correct_tree.root(),
        &correct[0],
        KECCAK_256,
    );
    assert_eq!(res, Ok(false));
}

#[test]
fn truncated_proof_is_an_error() {
    let leaves = keccak_leaves(&["a", "b", "c"]);
    let tree = HashAlgorithm::Keccak256.build_tree(leaves.clone()).unwrap();

    let proof = tree.gen_proof(0).unwrap();
    let keep = proof.len().saturating_sub(5);
    let bad_proof = &proof.cohashes()[..keep];

    let res = verify_proof_bytes(&to_bytes(bad_proof), tree.root(), &leaves[0], KECCAK_256);
    assert!(matches!(res, Err(ProofError::InvalidProofLength { len: 0, .. })));
}

#[test]
fn unsupported_algorithm_is_an_error() {
    let leaves = keccak_leaves(&["a", "b"]);
    let tree = HashAlgorithm::Keccak256.build_tree(leaves.clone()).unwrap();
    let proof = tree.gen_proof(0).unwrap();

    let res = verify_proof_bytes(&to_bytes(proof.cohashes()), tree.root(), &leaves[0], 5);
    assert_eq!(res, Err(ProofError::UnsupportedHashAlgorithm(5)));
}
