// Collectible Launchpad - Query Operations
// Side-effect-free read views over the state and the ledger.

use crate::crypto::{Hash, PublicKey};

use crate::collectible::config::ConfigRecord;
use crate::collectible::error::LaunchResult;
use crate::collectible::properties::PropertyValue;
use crate::collectible::state::LaunchState;
use crate::collectible::types::{AssetId, Collection, Token};

use super::collection::derive_collection_id;
use super::AssetLedger;

/// Look up a collection by id.
pub fn get_collection<'a>(state: &'a LaunchState, id: &Hash) -> LaunchResult<&'a Collection> {
    state.collection(id)
}

/// Look up a collection by its creator and name.
pub fn get_collection_by_name<'a>(
    state: &'a LaunchState,
    creator: &PublicKey,
    name: &str,
) -> LaunchResult<&'a Collection> {
    let identity = state.custodians.resolve(creator)?;
    state.collection(&derive_collection_id(identity.address(), name))
}

/// Read the config record of a creator's collection.
pub fn get_config<'a>(
    state: &'a LaunchState,
    creator: &PublicKey,
    name: &str,
) -> LaunchResult<&'a ConfigRecord> {
    let identity = state.custodians.resolve(creator)?;
    state.configs.get(identity.address(), name)
}

/// Read one token.
pub fn get_token<'a>(state: &'a LaunchState, id: &AssetId) -> LaunchResult<&'a Token> {
    state.token(id)
}

/// Read one property of a token.
pub fn get_property<'a>(
    state: &'a LaunchState,
    id: &AssetId,
    key: &str,
) -> LaunchResult<Option<&'a PropertyValue>> {
    Ok(state.token(id)?.properties.get(key))
}

/// Live supply of a collection, as the ledger sees it.
pub fn get_supply<L: AssetLedger>(ledger: &L, collection: &Hash) -> u64 {
    ledger.supply_of(collection)
}

/// Whether a token's transfers are currently disabled.
pub fn is_frozen<L: AssetLedger>(ledger: &L, id: &AssetId) -> bool {
    ledger.is_transfer_disabled(id)
}
