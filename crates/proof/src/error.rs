use thiserror::Error;

/// Errors raised while building sorted-pair trees or checking proofs.
///
/// A proof that is well-formed but folds to the wrong root is not an error,
/// verification just returns `false`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProofError {
    /// The proof has a structurally impossible number of cohashes.
    #[error("invalid proof length {len} (expected {min}..={max})")]
    InvalidProofLength {
        /// Number of cohashes in the submitted proof.
        len: usize,
        /// Smallest acceptable length.
        min: usize,
        /// Largest acceptable length.
        max: usize,
    },

    /// A digest (leaf, root or proof element) had the wrong width.
    #[error("invalid digest length {found} (expected {expected})")]
    InvalidDigestLength {
        /// Required digest width.
        expected: usize,
        /// Width that was provided.
        found: usize,
    },

    /// The hash algorithm identifier is unknown or not a 256-bit hash.
    #[error("unsupported hash algorithm {0}")]
    UnsupportedHashAlgorithm(u8),

    /// A tree was requested over an empty leaf set.
    #[error("no leaves to build a tree from")]
    NoLeaves,
}

/// Wrapper result type.
pub type ProofResult<T> = Result<T, ProofError>;
