// Collectible Launchpad - Mint Engine
// Fee-charging purchases, creator reservations and direct mints.
//
// Sequential numbering reads the collection supply once per call and
// derives every index of the batch from that single read; the exclusive
// borrows taken by these functions are what keep concurrent calls from
// issuing duplicate suffixes. All checks, including the fee-balance
// precheck, run before the first transfer or mint, so a failing call
// charges nothing and mints nothing.

use log::debug;

use crate::crypto::{Hash, PublicKey};
use crate::time::TimestampSeconds;

use crate::collectible::config::ConfigRecord;
use crate::collectible::error::{LaunchError, LaunchResult};
use crate::collectible::policy::issue_token_handles;
use crate::collectible::properties::PropertyMap;
use crate::collectible::state::LaunchState;
use crate::collectible::types::{AssetId, Token};

use super::collection::derive_collection_id;
use super::validation::{validate_description, validate_name, validate_recipient, validate_uri};
use super::{check_controller, AssetLedger, RuntimeContext, ValueLedger};

// ========================================
// Decimal Helper
// ========================================

/// Render a number as its decimal digits for name and URI suffixes.
///
/// Zero renders as the empty string. Batch indices start at one, so the
/// engine never feeds zero through here; callers formatting arbitrary
/// values must handle that case themselves.
pub fn decimal(mut value: u64) -> String {
    let mut out = String::new();
    while value != 0 {
        let digit = (value % 10) as u8;
        out.insert(0, char::from(b'0' + digit));
        value /= 10;
    }
    out
}

// ========================================
// Purchase Operations
// ========================================

/// Buy `amount` tokens from a creator's collection.
///
/// Fees are charged to the caller and split between the collection's
/// withdraw and dev wallets; the minted tokens are transferred to the
/// caller with strictly increasing sequential suffixes.
///
/// # Returns
/// - `Ok(Vec<AssetId>)`: Ids of the minted tokens, in mint order
/// - `Err(LaunchError)`: Error code
pub fn buy<L: AssetLedger + ValueLedger>(
    state: &mut LaunchState,
    ledger: &mut L,
    ctx: &RuntimeContext,
    creator: &PublicKey,
    collection_name: &str,
    amount: u64,
) -> LaunchResult<Vec<AssetId>> {
    // Step 1: Resolve the creator's delegate identity
    let identity = state.custodians.resolve(creator)?;

    // Step 2: Load the config record
    let config = state
        .configs
        .get(identity.address(), collection_name)?
        .clone();

    // Step 3: Per-transaction limit
    if amount == 0 {
        return Err(LaunchError::InvalidAmount);
    }
    if amount > config.mint_per_tx {
        return Err(LaunchError::OverMintLimit);
    }

    // Step 4: Sale window
    if ctx.now < config.sale_time {
        return Err(LaunchError::SaleInactive);
    }

    // Step 5: Supply bound, from a single supply read
    let collection_id = derive_collection_id(identity.address(), collection_name);
    let supply = ledger.supply_of(&collection_id);
    let end = supply.checked_add(amount).ok_or(LaunchError::Overflow)?;
    if end > config.supply_limit {
        return Err(LaunchError::SupplyExhausted);
    }

    // Step 6: Collect fees. The balance is checked up front so that the
    // second transfer cannot fail after the first succeeded.
    let mint_total = amount
        .checked_mul(config.mint_fee)
        .ok_or(LaunchError::Overflow)?;
    let dev_total = amount
        .checked_mul(config.dev_fee)
        .ok_or(LaunchError::Overflow)?;
    let fee_total = mint_total.checked_add(dev_total).ok_or(LaunchError::Overflow)?;
    if ledger.balance_of(&ctx.caller) < fee_total {
        return Err(LaunchError::InsufficientFunds);
    }
    ledger.transfer_value(&ctx.caller, &config.withdraw_wallet, mint_total)?;
    ledger.transfer_value(&ctx.caller, &config.dev_wallet, dev_total)?;

    // Step 7: Mint the batch to the buyer
    let ids = issue_batch(
        state,
        ledger,
        &collection_id,
        &config,
        supply,
        amount,
        &ctx.caller,
        ctx.now,
    )?;

    debug!(
        "buy: {} tokens of {} for {} (fees {})",
        amount, collection_id, ctx.caller, fee_total
    );
    Ok(ids)
}

/// Reserve `amount` tokens of the caller's own collection, without
/// charging fees. Intended for creator self-allocation; the tokens are
/// delivered to the caller's own key.
pub fn reserve<L: AssetLedger>(
    state: &mut LaunchState,
    ledger: &mut L,
    ctx: &RuntimeContext,
    collection_name: &str,
    amount: u64,
) -> LaunchResult<Vec<AssetId>> {
    // Step 1: Resolve the caller's delegate identity
    let identity = state.custodians.resolve(&ctx.caller)?;

    // Step 2: Load the config record
    let config = state
        .configs
        .get(identity.address(), collection_name)?
        .clone();

    // Step 3: Per-transaction limit
    if amount == 0 {
        return Err(LaunchError::InvalidAmount);
    }
    if amount > config.mint_per_tx {
        return Err(LaunchError::OverMintLimit);
    }

    // Step 4: Sale window
    if ctx.now < config.sale_time {
        return Err(LaunchError::SaleInactive);
    }

    // Step 5: Supply bound
    let collection_id = derive_collection_id(identity.address(), collection_name);
    let supply = ledger.supply_of(&collection_id);
    let end = supply.checked_add(amount).ok_or(LaunchError::Overflow)?;
    if end > config.supply_limit {
        return Err(LaunchError::SupplyExhausted);
    }

    // Step 6: Mint the batch to the creator, fee-free
    let ids = issue_batch(
        state,
        ledger,
        &collection_id,
        &config,
        supply,
        amount,
        &ctx.caller,
        ctx.now,
    )?;

    debug!("reserve: {} tokens of {} for {}", amount, collection_id, ctx.caller);
    Ok(ids)
}

/// Mint a batch of sequentially numbered tokens to one destination.
///
/// Token handles are derived from the collection policy as it stands at
/// mint time; every property map starts empty.
#[allow(clippy::too_many_arguments)]
fn issue_batch<L: AssetLedger + ?Sized>(
    state: &mut LaunchState,
    ledger: &mut L,
    collection_id: &Hash,
    config: &ConfigRecord,
    supply: u64,
    amount: u64,
    destination: &PublicKey,
    now: TimestampSeconds,
) -> LaunchResult<Vec<AssetId>> {
    let (policy, identity) = {
        let collection = state.collection(collection_id)?;
        (collection.policy, collection.creator.clone())
    };

    let mut ids = Vec::with_capacity(amount as usize);
    for i in 1..=amount {
        let index = supply + i;
        let suffix = decimal(index);

        let mut name = config.symbol.clone();
        name.push_str(" #");
        name.push_str(&suffix);

        let mut uri = config.token_uri_template.clone();
        uri.push_str(&suffix);

        let id = ledger.create_asset(&identity, collection_id, name.as_bytes())?;
        let (mutate, burn, freeze) = issue_token_handles(&policy, &id);
        state.insert_token(Token {
            id: id.clone(),
            collection: collection_id.clone(),
            name,
            description: String::new(),
            uri,
            creator: identity.clone(),
            mutate,
            burn,
            freeze,
            properties: PropertyMap::new(),
            soul_bound: false,
            created_at: now,
        })?;

        if destination != &identity {
            ledger.transfer(&id, destination)?;
        }
        ids.push(id);
    }
    Ok(ids)
}

// ========================================
// Direct Mint Operations
// ========================================

/// Mint a single token with explicit metadata, uncharged. The token
/// stays owned by the caller's delegate identity.
pub fn mint<L: AssetLedger>(
    state: &mut LaunchState,
    ledger: &mut L,
    ctx: &RuntimeContext,
    collection_name: &str,
    description: String,
    name: String,
    uri: String,
) -> LaunchResult<AssetId> {
    // Step 1: Resolve identity and collection
    let identity = state.custodians.resolve(&ctx.caller)?;
    let supply_limit = state
        .configs
        .get(identity.address(), collection_name)?
        .supply_limit;
    let collection_id = derive_collection_id(identity.address(), collection_name);

    // Step 2: Validate inputs
    validate_name(&name)?;
    validate_description(&description)?;
    validate_uri(&uri)?;

    // Step 3: Supply bound
    let supply = ledger.supply_of(&collection_id);
    if supply.checked_add(1).ok_or(LaunchError::Overflow)? > supply_limit {
        return Err(LaunchError::SupplyExhausted);
    }

    // Step 4: Create the token under the delegate identity
    let (policy, owner) = {
        let collection = state.collection(&collection_id)?;
        check_controller(collection, &ctx.caller)?;
        (collection.policy, collection.creator.clone())
    };
    let id = ledger.create_asset(&owner, &collection_id, name.as_bytes())?;
    let (mutate, burn, freeze) = issue_token_handles(&policy, &id);
    state.insert_token(Token {
        id: id.clone(),
        collection: collection_id.clone(),
        name,
        description,
        uri,
        creator: owner,
        mutate,
        burn,
        freeze,
        properties: PropertyMap::new(),
        soul_bound: false,
        created_at: ctx.now,
    })?;

    debug!("mint: token {} in {}", id, collection_id);
    Ok(id)
}

/// Mint a token bound to its recipient: delivered once, then transfers
/// are disabled for good.
#[allow(clippy::too_many_arguments)]
pub fn mint_soul_bound<L: AssetLedger>(
    state: &mut LaunchState,
    ledger: &mut L,
    ctx: &RuntimeContext,
    collection_name: &str,
    description: String,
    name: String,
    uri: String,
    to: &PublicKey,
) -> LaunchResult<AssetId> {
    validate_recipient(to)?;

    let id = mint(state, ledger, ctx, collection_name, description, name, uri)?;
    ledger.transfer(&id, to)?;
    ledger.disable_transfer(&id)?;
    state.token_mut(&id)?.soul_bound = true;

    debug!("mint_soul_bound: token {} delivered to {}", id, to);
    Ok(id)
}
