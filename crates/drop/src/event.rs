//! Events and receipts emitted by drop operations.

use merkledrop_proof::Hash32;

use crate::address::Address;
use crate::amount::Amount;
use crate::types::DropId;

/// Observable effect of a successful drop operation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropEvent {
    /// Funds were added to the pool.
    Deposited {
        /// Drop that was funded.
        drop_id: DropId,
        /// Account the funds came from.
        from: Address,
        /// Amount deposited.
        amount: Amount,
        /// Pool balance after the deposit.
        balance: Amount,
    },

    /// A leaf was redeemed and paid out.
    Claimed {
        /// Drop that paid out.
        drop_id: DropId,
        /// Account that received the payout.
        recipient: Address,
        /// Amount paid.
        amount: Amount,
        /// Leaf that is now spent.
        leaf: Hash32,
        /// Pool balance after the payout.
        balance: Amount,
    },
}

impl DropEvent {
    /// Returns the event type name.
    pub fn name(&self) -> &'static str {
        match self {
            DropEvent::Deposited { .. } => "Deposited",
            DropEvent::Claimed { .. } => "Claimed",
        }
    }

    /// Returns the drop the event belongs to.
    pub fn drop_id(&self) -> DropId {
        match self {
            DropEvent::Deposited { drop_id, .. } | DropEvent::Claimed { drop_id, .. } => *drop_id,
        }
    }
}

/// Receipt for a successful claim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutReceipt {
    /// Drop that paid out.
    pub drop_id: DropId,
    /// Account that was credited.
    pub recipient: Address,
    /// Amount credited.
    pub amount: Amount,
    /// Leaf that was marked claimed.
    pub leaf: Hash32,
    /// Pool balance left after the payout.
    pub remaining_pool: Amount,
}

impl PayoutReceipt {
    /// Returns the `Claimed` event for this payout.
    pub fn event(&self) -> DropEvent {
        DropEvent::Claimed {
            drop_id: self.drop_id,
            recipient: self.recipient,
            amount: self.amount,
            leaf: self.leaf,
            balance: self.remaining_pool,
        }
    }
}

/// Receipt for a successful deposit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositReceipt {
    /// Drop that was funded.
    pub drop_id: DropId,
    /// Account that was debited.
    pub from: Address,
    /// Amount moved into the pool.
    pub amount: Amount,
    /// Pool balance after the deposit.
    pub balance: Amount,
}

impl DepositReceipt {
    /// Returns the `Deposited` event for this deposit.
    pub fn event(&self) -> DropEvent {
        DropEvent::Deposited {
            drop_id: self.drop_id,
            from: self.from,
            amount: self.amount,
            balance: self.balance,
        }
    }
}
