//! Error types for drop operations.
//!
//! Every rejection is deterministic, so none of these are worth retrying.  A
//! claim that fails for any reason leaves the pool and claim set untouched.
use merkledrop_proof::ProofError;
use thiserror::Error;

use crate::address::Address;
use crate::amount::Amount;
use crate::types::DropId;

/// Errors raised by the external account ledger.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The account cannot cover a withdrawal.
    #[error("account {account} has {available}, needs {requested}")]
    InsufficientFunds {
        /// Account being debited.
        account: Address,
        /// Its current balance.
        available: Amount,
        /// Amount that was requested.
        requested: Amount,
    },

    /// Crediting the account would overflow its balance.
    #[error("balance overflow for account {0}")]
    Overflow(Address),

    /// The ledger could not process the transfer.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when depositing into or claiming from a drop.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DropError {
    /// The proof is well-formed but does not lead from the claim's leaf to
    /// the drop's root.
    #[error("invalid proof")]
    InvalidProof,

    /// The proof is structurally unusable (bad length or digest width).
    #[error(transparent)]
    Proof(#[from] ProofError),

    /// The leaf has already been paid out.
    #[error("already claimed")]
    AlreadyClaimed,

    /// The pool cannot cover the claim.
    #[error("insufficient pool balance: available {available}, requested {requested}")]
    InsufficientPool {
        /// Current pool balance.
        available: Amount,
        /// Amount being claimed.
        requested: Amount,
    },

    /// Deposits must move a positive amount.
    #[error("amount must be positive")]
    ZeroAmount,

    /// The pool balance would exceed the representable range.
    #[error("pool balance overflow")]
    AmountOverflow,

    /// No drop with this id exists.
    #[error("unknown drop {0}")]
    UnknownDrop(DropId),

    /// The external transfer failed.
    #[error("ledger: {0}")]
    Ledger(#[from] LedgerError),
}

/// Result type alias for drop operations.
pub type DropResult<T> = Result<T, DropError>;
