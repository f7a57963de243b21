//! Registry of drop instances.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use merkledrop_proof::{Hash32, SortedPairProof};
use tracing::*;

use crate::address::Address;
use crate::amount::Amount;
use crate::config::DropConfig;
use crate::errors::{DropError, DropResult};
use crate::event::{DepositReceipt, PayoutReceipt};
use crate::instance::MerkleDrop;
use crate::ledger::Ledger;
use crate::types::DropId;

/// Holds every drop created through it, keyed by [`DropId`].
///
/// Instances are shared behind `Arc`, and each one serializes its own
/// mutations, so operations on different drops never contend beyond a short
/// read of the index.
#[derive(Debug, Default)]
pub struct DropRegistry {
    drops: RwLock<HashMap<DropId, Arc<MerkleDrop>>>,
    next_id: AtomicU64,
    default_config: DropConfig,
}

impl DropRegistry {
    /// Creates an empty registry using the default drop configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry whose drops use `config` unless told
    /// otherwise.
    pub fn with_default_config(config: DropConfig) -> Self {
        Self {
            default_config: config,
            ..Self::default()
        }
    }

    /// Creates a new unfunded drop over `root` with the default configuration.
    pub fn create(&self, root: Hash32) -> DropId {
        self.create_with_config(root, self.default_config)
    }

    /// Creates a new unfunded drop over `root`.
    pub fn create_with_config(&self, root: Hash32, config: DropConfig) -> DropId {
        let id = DropId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let drop = Arc::new(MerkleDrop::new(id, root, config));

        // Single inserts only, so a poisoned index is still consistent.
        self.drops
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, drop);

        info!(
            drop = %id,
            root = %hex::encode(root),
            alg = %config.hash_algorithm(),
            "created drop"
        );
        id
    }

    fn index(&self) -> RwLockReadGuard<'_, HashMap<DropId, Arc<MerkleDrop>>> {
        self.drops.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Looks up a drop.
    pub fn get(&self, id: DropId) -> DropResult<Arc<MerkleDrop>> {
        self.index()
            .get(&id)
            .cloned()
            .ok_or(DropError::UnknownDrop(id))
    }

    /// Number of drops created.
    pub fn len(&self) -> usize {
        self.index().len()
    }

    /// Returns if no drops have been created.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves `amount` from `from` into drop `id`'s pool.
    pub fn deposit<L: Ledger + ?Sized>(
        &self,
        id: DropId,
        from: &Address,
        amount: Amount,
        ledger: &L,
    ) -> DropResult<DepositReceipt> {
        self.get(id)?.deposit(from, amount, ledger)
    }

    /// Claims `amount` for `recipient` from drop `id`.
    pub fn claim<L: Ledger + ?Sized>(
        &self,
        id: DropId,
        recipient: &Address,
        amount: Amount,
        proof: &SortedPairProof<Hash32>,
        ledger: &L,
    ) -> DropResult<PayoutReceipt> {
        self.get(id)?.claim(recipient, amount, proof, ledger)
    }
}
