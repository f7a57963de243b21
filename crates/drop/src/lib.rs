//! One-time token claims gated by sorted-pair Merkle proofs.
//!
//! A drop is created with the root of a tree whose leaves are
//! `H("{address}:{amount}")`.  Depositors fund the drop's pool through the
//! external [`Ledger`]; claimants present `(address, amount, proof)` and, if
//! the proof folds to the root and the leaf is unspent, get paid from the
//! pool.  Each leaf pays out at most once.
//!
//! ```rust,ignore
//! use merkledrop_drop::{DropRegistry, InMemoryLedger, LeafEncoder};
//!
//! let leaves = LeafEncoder::default().encode_all(&entries);
//! let tree = HashAlgorithm::Keccak256.build_tree(leaves)?;
//!
//! let registry = DropRegistry::new();
//! let id = registry.create(*tree.root());
//! registry.deposit(id, &funder, "700".parse()?, &ledger)?;
//! let receipt = registry.claim(id, &alice, "600.5".parse()?, &proof, &ledger)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for addresses, amounts, events and
//!   [`DropConfig`]
//! - `borsh`: Borsh encoding for addresses, amounts and ids

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use sha3 as _;

mod address;
mod amount;
#[cfg(feature = "borsh")]
mod borsh;
mod claims;
mod config;
mod errors;
mod event;
mod instance;
mod leaf;
mod ledger;
mod registry;
#[cfg(feature = "serde")]
mod serde;
mod types;

pub use address::{ADDRESS_LEN, Address, InvalidAddress};
pub use amount::{AMOUNT_DECIMALS, Amount, InvalidAmount, UNITS_PER_TOKEN};
pub use claims::ClaimLedger;
pub use config::DropConfig;
pub use errors::{DropError, DropResult, LedgerError};
pub use event::{DepositReceipt, DropEvent, PayoutReceipt};
pub use instance::MerkleDrop;
pub use leaf::{LEAF_SEPARATOR, LeafEncoder, LeafFormat, leaf_preimage};
pub use ledger::{InMemoryLedger, Ledger};
pub use registry::DropRegistry;
pub use types::DropId;

pub use merkledrop_proof as proof;
