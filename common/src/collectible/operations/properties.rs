// Collectible Launchpad - Property Operations
//
// Mutations of a token's typed key/value metadata. Properties are gated
// by the live `mutable_token_properties` flag and the controller check,
// not by the token's mutate handle: the property map is always present,
// its mutability is policy-only.

use crate::collectible::error::{LaunchError, LaunchResult};
use crate::collectible::properties::{PropertyType, PropertyValue};
use crate::collectible::state::LaunchState;
use crate::collectible::types::AssetId;

use super::{controlled_collection, RuntimeContext};

/// Shared gate: controller check first, then the live policy flag.
fn check_properties_mutable(
    state: &LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
) -> LaunchResult<()> {
    let token = state.token(token_id)?;
    let collection = controlled_collection(state, &token.collection, &ctx.caller)?;
    if !collection.policy.mutable_token_properties {
        return Err(LaunchError::PropertiesNotMutable);
    }
    Ok(())
}

/// Add a property from an externally produced (type tag, raw bytes)
/// pair. Fails if the key already exists.
pub fn add_property(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
    key: String,
    ty: PropertyType,
    raw: Vec<u8>,
) -> LaunchResult<()> {
    check_properties_mutable(state, ctx, token_id)?;
    let value = PropertyValue::new(ty, raw)?;
    state.token_mut(token_id)?.properties.add(key, value)
}

/// Add an already-typed property value. Fails if the key already exists.
pub fn add_typed_property(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
    key: String,
    value: PropertyValue,
) -> LaunchResult<()> {
    check_properties_mutable(state, ctx, token_id)?;
    state.token_mut(token_id)?.properties.add(key, value)
}

/// Replace a property from a (type tag, raw bytes) pair. Fails if the
/// key does not exist.
pub fn update_property(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
    key: &str,
    ty: PropertyType,
    raw: Vec<u8>,
) -> LaunchResult<()> {
    check_properties_mutable(state, ctx, token_id)?;
    let value = PropertyValue::new(ty, raw)?;
    state.token_mut(token_id)?.properties.update(key, value)
}

/// Replace a property with an already-typed value. Fails if the key
/// does not exist.
pub fn update_typed_property(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
    key: &str,
    value: PropertyValue,
) -> LaunchResult<()> {
    check_properties_mutable(state, ctx, token_id)?;
    state.token_mut(token_id)?.properties.update(key, value)
}

/// Remove a property. Fails if the key does not exist.
pub fn remove_property(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
    key: &str,
) -> LaunchResult<PropertyValue> {
    check_properties_mutable(state, ctx, token_id)?;
    state.token_mut(token_id)?.properties.remove(key)
}
