// Collectible Launchpad - Transfer Freeze Operations
//
// Freezing blocks ownership transfers of one token until thawed. Only
// tokens minted with the freeze handle can ever be frozen; soul-bound
// tokens are transfer-disabled for good and cannot be thawed.

use crate::collectible::error::{LaunchError, LaunchResult};
use crate::collectible::state::LaunchState;
use crate::collectible::types::AssetId;

use super::{controlled_collection, AssetLedger, RuntimeContext};

/// Shared gate for freeze and thaw.
fn check_freezable(
    state: &LaunchState,
    ctx: &RuntimeContext,
    token_id: &AssetId,
) -> LaunchResult<()> {
    let token = state.token(token_id)?;
    let collection = controlled_collection(state, &token.collection, &ctx.caller)?;
    if !token.freeze.is_granted() {
        return Err(LaunchError::NotFreezable);
    }
    if !collection.policy.tokens_freezable_by_creator {
        return Err(LaunchError::NotFreezable);
    }
    Ok(())
}

/// Freeze a token's transfers.
///
/// # Returns
/// - `Ok(())` on success
/// - `Err(LaunchError::TokenNotFound)` if the token doesn't exist
/// - `Err(LaunchError::PermissionDenied)` if the caller is not the controller
/// - `Err(LaunchError::NotFreezable)` if the freeze handle was withheld
/// - `Err(LaunchError::TokenFrozen)` if already frozen
pub fn freeze_transfer<L: AssetLedger>(
    state: &LaunchState,
    ledger: &mut L,
    ctx: &RuntimeContext,
    token_id: &AssetId,
) -> LaunchResult<()> {
    check_freezable(state, ctx, token_id)?;

    if ledger.is_transfer_disabled(token_id) {
        return Err(LaunchError::TokenFrozen);
    }
    ledger.disable_transfer(token_id)
}

/// Thaw a token's transfers.
///
/// # Returns
/// - `Ok(())` on success
/// - `Err(LaunchError::TokenNotFrozen)` if the token is not frozen
/// - `Err(LaunchError::TokenSoulBound)` for soul-bound tokens
pub fn unfreeze_transfer<L: AssetLedger>(
    state: &LaunchState,
    ledger: &mut L,
    ctx: &RuntimeContext,
    token_id: &AssetId,
) -> LaunchResult<()> {
    check_freezable(state, ctx, token_id)?;

    if state.token(token_id)?.soul_bound {
        return Err(LaunchError::TokenSoulBound);
    }
    if !ledger.is_transfer_disabled(token_id) {
        return Err(LaunchError::TokenNotFrozen);
    }
    ledger.enable_transfer(token_id)
}

#[cfg(test)]
mod tests {
    use super::super::collection::{create_collection, CreateCollectionParams};
    use super::super::mint::reserve;
    use super::*;
    use crate::collectible::ledger::MemoryLedger;
    use crate::collectible::policy::CollectionPolicy;
    use crate::crypto::{PublicKey, KEY_SIZE};

    fn key(seed: u8) -> PublicKey {
        PublicKey::new([seed; KEY_SIZE])
    }

    fn setup(policy: CollectionPolicy) -> (LaunchState, MemoryLedger, AssetId) {
        let mut state = LaunchState::new();
        let mut ledger = MemoryLedger::new();
        let ctx = RuntimeContext::new(key(1), 100);
        create_collection(
            &mut state,
            &mut ledger,
            &ctx,
            CreateCollectionParams {
                name: "Apes".to_string(),
                description: String::new(),
                uri: String::new(),
                symbol: "APE".to_string(),
                token_uri_template: "ipfs://apes/".to_string(),
                policy,
                supply_limit: 10,
                mint_per_tx: 5,
                mint_fee: 0,
                dev_fee: 0,
                withdraw_wallet: key(50),
                dev_wallet: key(51),
                sale_time: 0,
                royalty: None,
            },
        )
        .unwrap();
        let ids = reserve(&mut state, &mut ledger, &ctx, "Apes", 1).unwrap();
        (state, ledger, ids[0].clone())
    }

    #[test]
    fn test_freeze_blocks_transfer_then_thaw_allows_it() {
        let (state, mut ledger, token_id) = setup(CollectionPolicy::fully_mutable());
        let ctx = RuntimeContext::new(key(1), 200);

        freeze_transfer(&state, &mut ledger, &ctx, &token_id).unwrap();
        assert_eq!(
            ledger.transfer(&token_id, &key(9)),
            Err(LaunchError::TokenFrozen)
        );

        unfreeze_transfer(&state, &mut ledger, &ctx, &token_id).unwrap();
        ledger.transfer(&token_id, &key(9)).unwrap();
        assert_eq!(ledger.owner_of(&token_id).unwrap(), key(9));
    }

    #[test]
    fn test_freeze_without_handle() {
        let (state, mut ledger, token_id) = setup(CollectionPolicy::immutable());
        let ctx = RuntimeContext::new(key(1), 200);

        assert_eq!(
            freeze_transfer(&state, &mut ledger, &ctx, &token_id),
            Err(LaunchError::NotFreezable)
        );
    }

    #[test]
    fn test_freeze_twice_fails() {
        let (state, mut ledger, token_id) = setup(CollectionPolicy::fully_mutable());
        let ctx = RuntimeContext::new(key(1), 200);

        freeze_transfer(&state, &mut ledger, &ctx, &token_id).unwrap();
        assert_eq!(
            freeze_transfer(&state, &mut ledger, &ctx, &token_id),
            Err(LaunchError::TokenFrozen)
        );
    }

    #[test]
    fn test_thaw_unfrozen_fails() {
        let (state, mut ledger, token_id) = setup(CollectionPolicy::fully_mutable());
        let ctx = RuntimeContext::new(key(1), 200);

        assert_eq!(
            unfreeze_transfer(&state, &mut ledger, &ctx, &token_id),
            Err(LaunchError::TokenNotFrozen)
        );
    }

    #[test]
    fn test_freeze_wrong_caller() {
        let (state, mut ledger, token_id) = setup(CollectionPolicy::fully_mutable());
        let ctx = RuntimeContext::new(key(9), 200);

        assert_eq!(
            freeze_transfer(&state, &mut ledger, &ctx, &token_id),
            Err(LaunchError::PermissionDenied)
        );
    }

    #[test]
    fn test_soul_bound_cannot_be_thawed() {
        use super::super::mint::mint_soul_bound;

        let (mut state, mut ledger, _) = setup(CollectionPolicy::fully_mutable());
        let ctx = RuntimeContext::new(key(1), 200);
        let id = mint_soul_bound(
            &mut state,
            &mut ledger,
            &ctx,
            "Apes",
            String::new(),
            "Badge".to_string(),
            "ipfs://badge".to_string(),
            &key(2),
        )
        .unwrap();

        assert_eq!(
            unfreeze_transfer(&state, &mut ledger, &ctx, &id),
            Err(LaunchError::TokenSoulBound)
        );
    }
}
