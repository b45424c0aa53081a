// Collectible Launchpad - Burn Operation
// Destroying a token requires the burn handle issued at mint time.

use log::debug;

use crate::collectible::error::{LaunchError, LaunchResult};
use crate::collectible::state::LaunchState;
use crate::collectible::types::AssetId;

use super::{controlled_collection, AssetLedger, RuntimeContext};

/// Burn (destroy) a token.
///
/// The token is removed from the registry and from the ledger; the
/// collection supply drops by one. Tokens minted without the burn
/// handle can never be burned.
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(LaunchError)`: Error code
pub fn burn<L: AssetLedger>(
    state: &mut LaunchState,
    ledger: &mut L,
    ctx: &RuntimeContext,
    token_id: &AssetId,
) -> LaunchResult<()> {
    // Step 1: Fetch the token and check the controller
    {
        let token = state.token(token_id)?;
        let collection = controlled_collection(state, &token.collection, &ctx.caller)?;

        // Step 2: Handle gate, then live flag
        if !token.burn.is_granted() {
            return Err(LaunchError::NotBurnable);
        }
        if !collection.policy.tokens_burnable_by_creator {
            return Err(LaunchError::NotBurnable);
        }
    }

    // Step 3: Execute: ledger first, then the registry record
    ledger.destroy(token_id)?;
    state.remove_token(token_id)?;

    debug!("burned token {}", token_id);
    Ok(())
}
