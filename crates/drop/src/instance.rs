//! A single Merkle drop: an immutable root plus a funded pool.

use std::sync::{Mutex, MutexGuard, PoisonError};

use merkledrop_proof::{Hash32, ProofVerifier, SortedPairProof};
use tracing::*;

use crate::address::Address;
use crate::amount::Amount;
use crate::claims::ClaimLedger;
use crate::config::DropConfig;
use crate::errors::{DropError, DropResult};
use crate::event::{DepositReceipt, PayoutReceipt};
use crate::leaf::LeafEncoder;
use crate::ledger::Ledger;
use crate::types::DropId;

/// Drop instance.
///
/// The root is fixed at construction.  Proof verification runs without any
/// lock held; the spent-leaf check, the pool check, the payout and the state
/// update all happen under the instance's state lock, so two claims for the
/// same leaf can never both succeed.
#[derive(Debug)]
pub struct MerkleDrop {
    id: DropId,
    root: Hash32,
    config: DropConfig,
    verifier: ProofVerifier,
    encoder: LeafEncoder,
    state: Mutex<ClaimLedger>,
}

impl MerkleDrop {
    /// Creates an unfunded drop over `root`.
    pub fn new(id: DropId, root: Hash32, config: DropConfig) -> Self {
        Self {
            id,
            root,
            config,
            verifier: config.verifier(),
            encoder: config.leaf_encoder(),
            state: Mutex::new(ClaimLedger::new()),
        }
    }

    /// Returns the drop's id.
    pub fn id(&self) -> DropId {
        self.id
    }

    /// Returns the Merkle root claims are verified against.
    pub fn root(&self) -> &Hash32 {
        &self.root
    }

    /// Returns the drop's configuration.
    pub fn config(&self) -> &DropConfig {
        &self.config
    }

    /// Returns the encoder used for claim leaves.
    pub fn leaf_encoder(&self) -> &LeafEncoder {
        &self.encoder
    }

    fn lock_state(&self) -> MutexGuard<'_, ClaimLedger> {
        // `ClaimLedger` runs the ledger call before writing any field, so a
        // panic inside the critical section leaves it consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current pool balance.
    pub fn balance(&self) -> Amount {
        self.lock_state().pool()
    }

    /// Number of claims paid out so far.
    pub fn claimed_count(&self) -> usize {
        self.lock_state().claimed_count()
    }

    /// Returns if the entry `(address, amount)` has been claimed.
    pub fn is_claimed(&self, address: &Address, amount: Amount) -> bool {
        let leaf = self.encoder.encode(address, amount);
        self.is_leaf_claimed(&leaf)
    }

    /// Returns if `leaf` has been claimed.
    pub fn is_leaf_claimed(&self, leaf: &Hash32) -> bool {
        self.lock_state().is_claimed(leaf)
    }

    /// Encodes the claim's leaf and checks `proof` against the root.
    ///
    /// This is pure and takes no lock.  Returns the leaf on success.
    pub fn verify_claim(
        &self,
        address: &Address,
        amount: Amount,
        proof: &SortedPairProof<Hash32>,
    ) -> DropResult<Hash32> {
        let leaf = self.encoder.encode(address, amount);
        if !self.verifier.verify(&leaf, proof, &self.root)? {
            return Err(DropError::InvalidProof);
        }
        Ok(leaf)
    }

    /// Moves `amount` from `from`'s account into the pool.
    pub fn deposit<L: Ledger + ?Sized>(
        &self,
        from: &Address,
        amount: Amount,
        ledger: &L,
    ) -> DropResult<DepositReceipt> {
        let balance = self
            .lock_state()
            .apply_deposit(amount, || ledger.withdraw(from, amount))?;

        let receipt = DepositReceipt {
            drop_id: self.id,
            from: *from,
            amount,
            balance,
        };
        info!(drop = %self.id, %from, %amount, %balance, "deposited");
        Ok(receipt)
    }

    /// Pays `amount` to `recipient` if `proof` shows `(recipient, amount)` is
    /// in the tree and the entry has not been claimed before.
    pub fn claim<L: Ledger + ?Sized>(
        &self,
        recipient: &Address,
        amount: Amount,
        proof: &SortedPairProof<Hash32>,
        ledger: &L,
    ) -> DropResult<PayoutReceipt> {
        let span = debug_span!("claim", drop = %self.id, %recipient, %amount);
        let _g = span.enter();

        let res = self.claim_inner(recipient, amount, proof, ledger);
        match &res {
            Ok(receipt) => info!(
                leaf = %hex::encode(receipt.leaf),
                remaining = %receipt.remaining_pool,
                "claimed"
            ),
            Err(e) => warn!(%e, "claim rejected"),
        }
        res
    }

    fn claim_inner<L: Ledger + ?Sized>(
        &self,
        recipient: &Address,
        amount: Amount,
        proof: &SortedPairProof<Hash32>,
        ledger: &L,
    ) -> DropResult<PayoutReceipt> {
        let leaf = self.verify_claim(recipient, amount, proof)?;

        let remaining_pool = self
            .lock_state()
            .apply_claim(leaf, amount, || ledger.credit(recipient, amount))?;

        Ok(PayoutReceipt {
            drop_id: self.id,
            recipient: *recipient,
            amount,
            leaf,
            remaining_pool,
        })
    }
}
