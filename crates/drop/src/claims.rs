//! Claim bookkeeping for a single drop.
//!
//! [`ClaimLedger`] is the mutable half of a drop: the pool balance and the set
//! of spent leaves.  It performs no hashing, callers verify proofs first and
//! hand over the leaf.  Every mutating method checks all of its preconditions
//! and runs the external transfer before touching any field, so a failure at
//! any step leaves the ledger exactly as it was.

use std::collections::HashSet;

use merkledrop_proof::Hash32;

use crate::amount::Amount;
use crate::errors::{DropError, DropResult, LedgerError};

/// Pool balance and spent-leaf set of a drop.
#[derive(Clone, Debug, Default)]
pub struct ClaimLedger {
    pool: Amount,
    claimed: HashSet<Hash32>,
}

impl ClaimLedger {
    /// Creates an empty ledger with no funds and no claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pool balance.
    pub fn pool(&self) -> Amount {
        self.pool
    }

    /// Number of leaves redeemed so far.
    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }

    /// Returns if `leaf` has been redeemed.
    pub fn is_claimed(&self, leaf: &Hash32) -> bool {
        self.claimed.contains(leaf)
    }

    /// Checks whether `leaf` could be paid `amount` right now, returning the
    /// pool balance that would remain.
    pub fn check_claim(&self, leaf: &Hash32, amount: Amount) -> DropResult<Amount> {
        if self.is_claimed(leaf) {
            return Err(DropError::AlreadyClaimed);
        }

        self.pool
            .checked_sub(amount)
            .ok_or(DropError::InsufficientPool {
                available: self.pool,
                requested: amount,
            })
    }

    /// Redeems `leaf` for `amount`.
    ///
    /// `payout` performs the external transfer once every check has passed.
    /// Only if it succeeds is the leaf marked spent and the pool debited.
    pub fn apply_claim<F>(
        &mut self,
        leaf: Hash32,
        amount: Amount,
        payout: F,
    ) -> DropResult<Amount>
    where
        F: FnOnce() -> Result<(), LedgerError>,
    {
        let remaining = self.check_claim(&leaf, amount)?;
        payout()?;

        self.claimed.insert(leaf);
        self.pool = remaining;
        Ok(remaining)
    }

    /// Adds `amount` to the pool.
    ///
    /// `fund` pulls the tokens from the depositor once the new balance is
    /// known to fit.
    pub fn apply_deposit<F>(&mut self, amount: Amount, fund: F) -> DropResult<Amount>
    where
        F: FnOnce() -> Result<(), LedgerError>,
    {
        if amount.is_zero() {
            return Err(DropError::ZeroAmount);
        }
        let balance = self
            .pool
            .checked_add(amount)
            .ok_or(DropError::AmountOverflow)?;
        fund()?;

        self.pool = balance;
        Ok(balance)
    }
}
