//! Account ledger boundary.
//!
//! Token balances live outside the drop engine.  A drop only asks the ledger
//! to move funds in (deposits) and out (payouts); the host environment
//! provides the real implementation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::*;

use crate::address::Address;
use crate::amount::Amount;
use crate::errors::LedgerError;

/// External account ledger used to fund pools and pay out claims.
pub trait Ledger: Send + Sync {
    /// Removes `amount` from `from`'s balance.
    fn withdraw(&self, from: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Adds `amount` to `to`'s balance.
    fn credit(&self, to: &Address, amount: Amount) -> Result<(), LedgerError>;
}

/// Ledger kept in process memory, for tests and local tooling.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: Mutex<HashMap<Address, Amount>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    fn balances(&self) -> MutexGuard<'_, HashMap<Address, Amount>> {
        // Each mutation is a single insert, so the map is consistent even if
        // a holder panicked.
        self.balances.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates `amount` new tokens in `to`'s account.
    pub fn mint(&self, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        debug!(%to, %amount, "minting");
        self.credit(to, amount)
    }

    /// Returns the balance of `account`, zero if it was never funded.
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances().get(account).copied().unwrap_or_default()
    }
}

impl Ledger for InMemoryLedger {
    fn withdraw(&self, from: &Address, amount: Amount) -> Result<(), LedgerError> {
        let mut balances = self.balances();
        let available = balances.get(from).copied().unwrap_or_default();
        let rest = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds {
                account: *from,
                available,
                requested: amount,
            })?;
        balances.insert(*from, rest);
        Ok(())
    }

    fn credit(&self, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        let mut balances = self.balances();
        let current = balances.get(to).copied().unwrap_or_default();
        let next = current
            .checked_add(amount)
            .ok_or(LedgerError::Overflow(*to))?;
        balances.insert(*to, next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn mint_and_withdraw() {
        let ledger = InMemoryLedger::new();
        let alice = Address::from_u64(1);
        ledger.mint(&alice, amt("1000")).unwrap();
        ledger.withdraw(&alice, amt("700")).unwrap();
        assert_eq!(ledger.balance_of(&alice), amt("300"));
    }

    #[test]
    fn overdraw_rejected() {
        let ledger = InMemoryLedger::new();
        let bob = Address::from_u64(2);
        ledger.mint(&bob, amt("0.001")).unwrap();
        let err = ledger.withdraw(&bob, amt("1")).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                account: bob,
                available: amt("0.001"),
                requested: amt("1"),
            }
        );
        assert_eq!(ledger.balance_of(&bob), amt("0.001"));
    }

    #[test]
    fn credit_overflow_rejected() {
        let ledger = InMemoryLedger::new();
        let carl = Address::from_u64(3);
        ledger.mint(&carl, Amount::MAX).unwrap();
        assert_eq!(
            ledger.credit(&carl, Amount::from_units(1)),
            Err(LedgerError::Overflow(carl))
        );
    }

    #[test]
    fn unknown_account_is_empty() {
        let ledger = InMemoryLedger::new();
        assert_eq!(ledger.balance_of(&Address::from_u64(9)), Amount::ZERO);
    }
}
