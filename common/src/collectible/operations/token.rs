// Collectible Launchpad - Token Field Setters
//
// Every setter runs the same gate sequence: controller check, capability
// handle presence, live policy flag, value validation, then the write.

use crate::collectible::error::{LaunchError, LaunchResult};
use crate::collectible::state::LaunchState;
use crate::collectible::types::AssetId;

use super::validation::{validate_description, validate_name, validate_uri};
use super::{controlled_collection, RuntimeContext};

/// Rewrite a token's description.
pub fn set_token_description(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
    description: String,
) -> LaunchResult<()> {
    {
        let token = state.token(token_id)?;
        let collection = controlled_collection(state, &token.collection, &ctx.caller)?;
        if !token.mutate.is_granted() {
            return Err(LaunchError::PermissionDenied);
        }
        if !collection.policy.mutable_token_description {
            return Err(LaunchError::FieldNotMutable);
        }
    }
    validate_description(&description)?;

    state.token_mut(token_id)?.description = description;
    Ok(())
}

/// Rewrite a token's name.
pub fn set_token_name(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
    name: String,
) -> LaunchResult<()> {
    {
        let token = state.token(token_id)?;
        let collection = controlled_collection(state, &token.collection, &ctx.caller)?;
        if !token.mutate.is_granted() {
            return Err(LaunchError::PermissionDenied);
        }
        if !collection.policy.mutable_token_name {
            return Err(LaunchError::FieldNotMutable);
        }
    }
    validate_name(&name)?;

    state.token_mut(token_id)?.name = name;
    Ok(())
}

/// Rewrite a token's metadata URI.
pub fn set_token_uri(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
    uri: String,
) -> LaunchResult<()> {
    {
        let token = state.token(token_id)?;
        let collection = controlled_collection(state, &token.collection, &ctx.caller)?;
        if !token.mutate.is_granted() {
            return Err(LaunchError::PermissionDenied);
        }
        if !collection.policy.mutable_token_uri {
            return Err(LaunchError::FieldNotMutable);
        }
    }
    validate_uri(&uri)?;

    state.token_mut(token_id)?.uri = uri;
    Ok(())
}
