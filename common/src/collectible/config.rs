// Collectible Launchpad - Per-Collection Business Configuration
//
// One ConfigRecord per (delegate identity, collection name): fees,
// wallets, sale window and mint limits. Records are created exactly once
// at collection creation and mutated only through per-field setters
// authenticated against the owning creator. A missing name is reported
// as not found, never silently inserted.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::crypto::PublicKey;
use crate::time::TimestampSeconds;

use super::error::{LaunchError, LaunchResult};

// ========================================
// Config Record
// ========================================

/// Business parameters of one collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Collection symbol, used as the token name prefix
    pub symbol: String,

    /// Token URI template; the sequential suffix is appended per mint
    pub token_uri_template: String,

    /// Maximum number of tokens that may ever exist
    pub supply_limit: u64,

    /// Maximum tokens minted by one call
    pub mint_per_tx: u64,

    /// Fee per token, paid to the withdraw wallet
    pub mint_fee: u64,

    /// Fee per token, paid to the dev wallet
    pub dev_fee: u64,

    /// Recipient of mint fees
    pub withdraw_wallet: PublicKey,

    /// Recipient of dev fees
    pub dev_wallet: PublicKey,

    /// Unix seconds; minting is allowed once now >= sale_time
    pub sale_time: TimestampSeconds,
}

/// All records of one delegate identity, with the creator key that is
/// allowed to mutate them.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CreatorConfigs {
    owner: PublicKey,
    records: IndexMap<String, ConfigRecord>,
}

// ========================================
// Config Table
// ========================================

/// Table of config records keyed by (delegate identity, collection name).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigTable {
    tables: HashMap<PublicKey, CreatorConfigs>,
}

impl ConfigTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self, identity: &PublicKey) -> bool {
        self.tables.contains_key(identity)
    }

    /// Creator key owning the records of an identity.
    pub fn owner_of(&self, identity: &PublicKey) -> LaunchResult<&PublicKey> {
        self.tables
            .get(identity)
            .map(|configs| &configs.owner)
            .ok_or(LaunchError::NotInitialized)
    }

    /// Insert the record for a new collection. The per-identity table is
    /// created on first use; a duplicate name fails.
    pub fn create(
        &mut self,
        identity: &PublicKey,
        owner: &PublicKey,
        name: &str,
        record: ConfigRecord,
    ) -> LaunchResult<()> {
        let configs = self
            .tables
            .entry(identity.clone())
            .or_insert_with(|| CreatorConfigs {
                owner: owner.clone(),
                records: IndexMap::new(),
            });
        if configs.records.contains_key(name) {
            return Err(LaunchError::RecordAlreadyExists);
        }
        configs.records.insert(name.to_string(), record);
        Ok(())
    }

    /// Read the record for (identity, name).
    pub fn get(&self, identity: &PublicKey, name: &str) -> LaunchResult<&ConfigRecord> {
        let configs = self
            .tables
            .get(identity)
            .ok_or(LaunchError::NotInitialized)?;
        configs
            .records
            .get(name)
            .ok_or(LaunchError::CollectionNotFound)
    }

    /// Fetch a record for mutation, checking the caller against the
    /// owning creator first.
    fn get_mut_authenticated(
        &mut self,
        caller: &PublicKey,
        identity: &PublicKey,
        name: &str,
    ) -> LaunchResult<&mut ConfigRecord> {
        let configs = self
            .tables
            .get_mut(identity)
            .ok_or(LaunchError::NotInitialized)?;
        if configs.owner != *caller {
            return Err(LaunchError::PermissionDenied);
        }
        configs
            .records
            .get_mut(name)
            .ok_or(LaunchError::CollectionNotFound)
    }
}

macro_rules! config_setter {
    ($(#[$doc:meta])* $setter:ident, $field:ident, $ty:ty) => {
        impl ConfigTable {
            $(#[$doc])*
            pub fn $setter(
                &mut self,
                caller: &PublicKey,
                identity: &PublicKey,
                name: &str,
                value: $ty,
            ) -> LaunchResult<()> {
                let record = self.get_mut_authenticated(caller, identity, name)?;
                record.$field = value;
                Ok(())
            }
        }
    };
}

config_setter!(set_symbol, symbol, String);
config_setter!(set_token_uri_template, token_uri_template, String);
config_setter!(set_supply_limit, supply_limit, u64);
config_setter!(set_mint_per_tx, mint_per_tx, u64);
config_setter!(set_mint_fee, mint_fee, u64);
config_setter!(set_dev_fee, dev_fee, u64);
config_setter!(set_withdraw_wallet, withdraw_wallet, PublicKey);
config_setter!(set_dev_wallet, dev_wallet, PublicKey);
config_setter!(set_sale_time, sale_time, TimestampSeconds);
