// Collectible Launchpad - Operations Module
// This module contains the core business logic for launchpad operations.
//
// The operations are designed to be runtime-agnostic:
// - Ownership, balances and royalties are abstracted via traits
// - Caller identity and the current time are passed as a context
// - State is an explicit store passed by reference, never ambient
//
// Each operation validates everything it can before its first mutation,
// so a returned error leaves the state and the ledger untouched.

mod burn;
mod collection;
mod freeze;
mod mint;
mod properties;
mod query;
mod token;
mod validation;

pub use burn::*;
pub use collection::*;
pub use freeze::*;
pub use mint::*;
pub use properties::*;
pub use query::*;
pub use token::*;
pub use validation::*;

use crate::crypto::{Hash, PublicKey};
use crate::time::{self, TimestampSeconds};

use super::error::{LaunchError, LaunchResult};
use super::state::LaunchState;
use super::types::{AssetId, Collection};

// ========================================
// Ledger Collaborator Traits
// ========================================

/// Ownership registry executing asset creation and transfers.
/// The launchpad never stores who owns a token; it asks this trait.
pub trait AssetLedger {
    /// Create a new addressable asset owned by `owner`, counted against
    /// the supply of `collection`.
    fn create_asset(
        &mut self,
        owner: &PublicKey,
        collection: &Hash,
        seed: &[u8],
    ) -> LaunchResult<AssetId>;

    /// Move an asset to a new owner. Fails when transfers are disabled.
    fn transfer(&mut self, id: &AssetId, new_owner: &PublicKey) -> LaunchResult<()>;

    /// Current owner of an asset.
    fn owner_of(&self, id: &AssetId) -> LaunchResult<PublicKey>;

    /// Live supply of a collection.
    fn supply_of(&self, collection: &Hash) -> u64;

    /// Block transfers of an asset until re-enabled.
    fn disable_transfer(&mut self, id: &AssetId) -> LaunchResult<()>;

    /// Re-enable transfers of an asset.
    fn enable_transfer(&mut self, id: &AssetId) -> LaunchResult<()>;

    fn is_transfer_disabled(&self, id: &AssetId) -> bool;

    /// Remove an asset from the registry, decrementing the supply.
    fn destroy(&mut self, id: &AssetId) -> LaunchResult<()>;
}

/// Fungible value transfers used for fee collection.
pub trait ValueLedger {
    /// Move `amount` from one account to another.
    fn transfer_value(
        &mut self,
        from: &PublicKey,
        to: &PublicKey,
        amount: u64,
    ) -> LaunchResult<()>;

    fn balance_of(&self, who: &PublicKey) -> u64;
}

/// Royalty bookkeeping collaborator: numerator/denominator plus payee.
pub trait RoyaltyRegistry {
    fn set_royalty(
        &mut self,
        collection: &Hash,
        numerator: u64,
        denominator: u64,
        payee: &PublicKey,
    ) -> LaunchResult<()>;

    fn royalty_of(&self, collection: &Hash) -> Option<(u64, u64, PublicKey)>;
}

// ========================================
// Runtime Context
// ========================================

/// Runtime context providing the caller and the current time.
pub struct RuntimeContext {
    /// Current caller (transaction signer)
    pub caller: PublicKey,
    /// Current time in unix seconds
    pub now: TimestampSeconds,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: PublicKey, now: TimestampSeconds) -> Self {
        Self { caller, now }
    }

    /// Context stamped with the system clock.
    pub fn current(caller: PublicKey) -> Self {
        Self::new(caller, time::get_current_time_in_seconds())
    }
}

// ========================================
// Permission Checking Utilities
// ========================================

/// Check that the caller is the creator controlling a collection.
pub fn check_controller(collection: &Collection, caller: &PublicKey) -> LaunchResult<()> {
    if collection.controller != *caller {
        return Err(LaunchError::PermissionDenied);
    }
    Ok(())
}

/// Resolve the collection owning a token, with the controller check
/// shared by every token-level mutation.
pub(crate) fn controlled_collection<'a>(
    state: &'a LaunchState,
    collection_id: &Hash,
    caller: &PublicKey,
) -> LaunchResult<&'a Collection> {
    let collection = state.collection(collection_id)?;
    check_controller(collection, caller)?;
    Ok(collection)
}
