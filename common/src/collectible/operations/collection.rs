// Collectible Launchpad - Collection Operations
// Collection creation plus the collection-level setters.

use log::debug;

use crate::crypto::{hash, Hash, PublicKey};
use crate::time::TimestampSeconds;

use crate::collectible::config::ConfigRecord;
use crate::collectible::error::{LaunchError, LaunchResult};
use crate::collectible::policy::{issue_collection_handles, CollectionPolicy};
use crate::collectible::state::LaunchState;
use crate::collectible::types::Collection;

use super::validation::{
    validate_description, validate_name, validate_recipient, validate_symbol, validate_uri,
};
use super::{check_controller, RoyaltyRegistry, RuntimeContext};

// ========================================
// Create Collection Parameters
// ========================================

/// Initial royalty of a collection, registered with the royalty
/// collaborator at creation.
#[derive(Clone, Debug)]
pub struct RoyaltyConfig {
    pub numerator: u64,
    pub denominator: u64,
    pub payee: PublicKey,
    /// When true, a royalty mutate handle is issued to the collection
    pub mutable: bool,
}

/// Parameters for creating a new collection.
#[derive(Clone, Debug)]
pub struct CreateCollectionParams {
    /// Collection name, unique per creator (1-64 bytes)
    pub name: String,
    /// Collection description (0-512 bytes)
    pub description: String,
    /// Collection URI (0-512 bytes)
    pub uri: String,
    /// Symbol used as the token name prefix (1-8 bytes, uppercase ASCII)
    pub symbol: String,
    /// Token URI template; sequential suffixes are appended per mint
    pub token_uri_template: String,
    /// Mutability policy, fixed forever
    pub policy: CollectionPolicy,
    /// Maximum number of tokens that may ever exist
    pub supply_limit: u64,
    /// Maximum tokens minted by one call
    pub mint_per_tx: u64,
    /// Fee per token paid to the withdraw wallet
    pub mint_fee: u64,
    /// Fee per token paid to the dev wallet
    pub dev_fee: u64,
    /// Recipient of mint fees
    pub withdraw_wallet: PublicKey,
    /// Recipient of dev fees
    pub dev_wallet: PublicKey,
    /// Unix seconds at which the sale opens
    pub sale_time: TimestampSeconds,
    /// Optional royalty registration
    pub royalty: Option<RoyaltyConfig>,
}

impl CreateCollectionParams {
    /// Validate all parameters
    pub fn validate(&self) -> LaunchResult<()> {
        validate_name(&self.name)?;
        validate_description(&self.description)?;
        validate_uri(&self.uri)?;
        validate_symbol(&self.symbol)?;
        validate_uri(&self.token_uri_template)?;
        validate_recipient(&self.withdraw_wallet)?;
        validate_recipient(&self.dev_wallet)?;
        if self.supply_limit == 0 || self.mint_per_tx == 0 {
            return Err(LaunchError::InvalidAmount);
        }
        if let Some(royalty) = &self.royalty {
            if royalty.denominator == 0 || royalty.numerator > royalty.denominator {
                return Err(LaunchError::InvalidAmount);
            }
            validate_recipient(&royalty.payee)?;
        }
        Ok(())
    }
}

// ========================================
// Collection Id
// ========================================

/// Deterministic collection id from (delegate identity, name).
pub fn derive_collection_id(identity: &PublicKey, name: &str) -> Hash {
    let mut material = Vec::with_capacity(32 + 32 + name.len());
    material.extend_from_slice(b"galleria:collection:v1::");
    material.extend_from_slice(identity.as_bytes());
    material.extend_from_slice(name.as_bytes());
    hash(&material)
}

// ========================================
// Create Collection Operation
// ========================================

/// Create a new collection owned by the caller's delegate identity.
///
/// The delegate identity is derived and persisted on first use. The
/// mutability policy decides, once and permanently, which capability
/// handles the collection and its future tokens receive.
///
/// # Returns
/// - `Ok(Hash)`: The new collection id
/// - `Err(LaunchError)`: Error code
pub fn create_collection<R: RoyaltyRegistry>(
    state: &mut LaunchState,
    royalties: &mut R,
    ctx: &RuntimeContext,
    params: CreateCollectionParams,
) -> LaunchResult<Hash> {
    // Step 1: Validate parameters
    params.validate()?;

    // Step 2: Resolve the delegate identity (created on first use; the
    // entry is idempotent, so it survives a failure further down)
    let identity = state.custodians.resolve_or_create(&ctx.caller);

    // Step 3: Derive the id and refuse duplicates
    let collection_id = derive_collection_id(identity.address(), &params.name);
    if state.has_collection(&collection_id) {
        return Err(LaunchError::CollectionAlreadyExists);
    }

    // Step 4: Issue collection-level handles from the policy
    let royalty_mutable = params
        .royalty
        .as_ref()
        .map(|royalty| royalty.mutable)
        .unwrap_or(false);
    let (mutate, royalty_mutate) =
        issue_collection_handles(&params.policy, royalty_mutable, &collection_id);

    // Step 5: Create the config record under the identity
    let record = ConfigRecord {
        symbol: params.symbol,
        token_uri_template: params.token_uri_template,
        supply_limit: params.supply_limit,
        mint_per_tx: params.mint_per_tx,
        mint_fee: params.mint_fee,
        dev_fee: params.dev_fee,
        withdraw_wallet: params.withdraw_wallet,
        dev_wallet: params.dev_wallet,
        sale_time: params.sale_time,
    };
    state
        .configs
        .create(identity.address(), &ctx.caller, &params.name, record)?;

    // Step 6: Register the initial royalty
    if let Some(royalty) = &params.royalty {
        royalties.set_royalty(
            &collection_id,
            royalty.numerator,
            royalty.denominator,
            &royalty.payee,
        )?;
    }

    // Step 7: Store the collection
    let collection = Collection {
        id: collection_id.clone(),
        name: params.name,
        description: params.description,
        uri: params.uri,
        creator: identity.address().clone(),
        controller: ctx.caller.clone(),
        policy: params.policy,
        mutate,
        royalty_mutate,
        created_at: ctx.now,
    };
    state.insert_collection(collection)?;

    debug!(
        "created collection {} for creator {}",
        collection_id, ctx.caller
    );
    Ok(collection_id)
}

// ========================================
// Collection Setters
// ========================================

/// Rewrite the collection description.
///
/// Requires the caller to control the collection, the mutate handle to
/// be present, and the description flag to still be enabled.
pub fn set_collection_description(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    collection_id: &Hash,
    description: String,
) -> LaunchResult<()> {
    {
        let collection = state.collection(collection_id)?;
        check_controller(collection, &ctx.caller)?;
        if !collection.mutate.is_granted() {
            return Err(LaunchError::PermissionDenied);
        }
        if !collection.policy.mutable_description {
            return Err(LaunchError::FieldNotMutable);
        }
    }
    validate_description(&description)?;

    state.collection_mut(collection_id)?.description = description;
    Ok(())
}

/// Rewrite the collection URI. Same gates as the description, against
/// the URI flag.
pub fn set_collection_uri(
    state: &mut LaunchState,
    ctx: &RuntimeContext,
    collection_id: &Hash,
    uri: String,
) -> LaunchResult<()> {
    {
        let collection = state.collection(collection_id)?;
        check_controller(collection, &ctx.caller)?;
        if !collection.mutate.is_granted() {
            return Err(LaunchError::PermissionDenied);
        }
        if !collection.policy.mutable_uri {
            return Err(LaunchError::FieldNotMutable);
        }
    }
    validate_uri(&uri)?;

    state.collection_mut(collection_id)?.uri = uri;
    Ok(())
}

/// Rewrite the royalty entry through the royalty collaborator.
/// Requires the royalty mutate handle issued at creation.
pub fn set_royalty<R: RoyaltyRegistry>(
    state: &LaunchState,
    royalties: &mut R,
    ctx: &RuntimeContext,
    collection_id: &Hash,
    numerator: u64,
    denominator: u64,
    payee: &PublicKey,
) -> LaunchResult<()> {
    let collection = state.collection(collection_id)?;
    check_controller(collection, &ctx.caller)?;
    if !collection.royalty_mutate.is_granted() {
        return Err(LaunchError::PermissionDenied);
    }
    if denominator == 0 || numerator > denominator {
        return Err(LaunchError::InvalidAmount);
    }
    validate_recipient(payee)?;

    royalties.set_royalty(collection_id, numerator, denominator, payee)
}
