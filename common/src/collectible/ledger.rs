// Collectible Launchpad - In-Memory Ledger
//
// Reference implementation of the ledger collaborators: asset ownership,
// per-collection supply, transfer locks, coin balances and royalty
// entries. Used by the test suites and by embedders that do not bring a
// transactional host of their own.

use std::collections::{HashMap, HashSet};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::crypto::{hash, Hash, PublicKey};

use super::error::{LaunchError, LaunchResult};
use super::operations::{AssetLedger, RoyaltyRegistry, ValueLedger};
use super::types::AssetId;

/// Royalty entry kept per collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoyaltyEntry {
    pub numerator: u64,
    pub denominator: u64,
    pub payee: PublicKey,
}

/// In-memory ledger backing the collaborator traits.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    owners: HashMap<AssetId, PublicKey>,
    collections: HashMap<AssetId, Hash>,
    supplies: HashMap<Hash, u64>,
    disabled: HashSet<AssetId>,
    balances: HashMap<PublicKey, u64>,
    royalties: HashMap<Hash, RoyaltyEntry>,
    nonce: u64,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit an account, for funding test buyers and wallets.
    pub fn credit(&mut self, who: &PublicKey, amount: u64) {
        *self.balances.entry(who.clone()).or_insert(0) += amount;
    }
}

impl AssetLedger for MemoryLedger {
    fn create_asset(
        &mut self,
        owner: &PublicKey,
        collection: &Hash,
        seed: &[u8],
    ) -> LaunchResult<AssetId> {
        // Address = digest of (owner, collection, seed, nonce); the nonce
        // keeps identically-seeded assets distinct.
        let mut material = Vec::with_capacity(64 + seed.len() + 8);
        material.extend_from_slice(owner.as_bytes());
        material.extend_from_slice(collection.as_bytes());
        material.extend_from_slice(seed);
        material.extend_from_slice(&self.nonce.to_le_bytes());
        self.nonce = self.nonce.checked_add(1).ok_or(LaunchError::Overflow)?;

        let id = hash(&material);
        if self.owners.contains_key(&id) {
            return Err(LaunchError::TokenAlreadyExists);
        }

        let supply = self.supplies.entry(collection.clone()).or_insert(0);
        *supply = supply.checked_add(1).ok_or(LaunchError::Overflow)?;

        self.owners.insert(id.clone(), owner.clone());
        self.collections.insert(id.clone(), collection.clone());
        trace!("created asset {} for {}", id, owner);
        Ok(id)
    }

    fn transfer(&mut self, id: &AssetId, new_owner: &PublicKey) -> LaunchResult<()> {
        if self.disabled.contains(id) {
            return Err(LaunchError::TokenFrozen);
        }
        let owner = self.owners.get_mut(id).ok_or(LaunchError::TokenNotFound)?;
        *owner = new_owner.clone();
        Ok(())
    }

    fn owner_of(&self, id: &AssetId) -> LaunchResult<PublicKey> {
        self.owners.get(id).cloned().ok_or(LaunchError::TokenNotFound)
    }

    fn supply_of(&self, collection: &Hash) -> u64 {
        self.supplies.get(collection).copied().unwrap_or(0)
    }

    fn disable_transfer(&mut self, id: &AssetId) -> LaunchResult<()> {
        if !self.owners.contains_key(id) {
            return Err(LaunchError::TokenNotFound);
        }
        self.disabled.insert(id.clone());
        Ok(())
    }

    fn enable_transfer(&mut self, id: &AssetId) -> LaunchResult<()> {
        if !self.owners.contains_key(id) {
            return Err(LaunchError::TokenNotFound);
        }
        self.disabled.remove(id);
        Ok(())
    }

    fn is_transfer_disabled(&self, id: &AssetId) -> bool {
        self.disabled.contains(id)
    }

    fn destroy(&mut self, id: &AssetId) -> LaunchResult<()> {
        self.owners.remove(id).ok_or(LaunchError::TokenNotFound)?;
        self.disabled.remove(id);
        if let Some(collection) = self.collections.remove(id) {
            if let Some(supply) = self.supplies.get_mut(&collection) {
                *supply = supply.saturating_sub(1);
            }
        }
        Ok(())
    }
}

impl ValueLedger for MemoryLedger {
    fn transfer_value(
        &mut self,
        from: &PublicKey,
        to: &PublicKey,
        amount: u64,
    ) -> LaunchResult<()> {
        let source = self.balances.get_mut(from).ok_or(LaunchError::InsufficientFunds)?;
        *source = source
            .checked_sub(amount)
            .ok_or(LaunchError::InsufficientFunds)?;
        *self.balances.entry(to.clone()).or_insert(0) += amount;
        trace!("transferred {} from {} to {}", amount, from, to);
        Ok(())
    }

    fn balance_of(&self, who: &PublicKey) -> u64 {
        self.balances.get(who).copied().unwrap_or(0)
    }
}

impl RoyaltyRegistry for MemoryLedger {
    fn set_royalty(
        &mut self,
        collection: &Hash,
        numerator: u64,
        denominator: u64,
        payee: &PublicKey,
    ) -> LaunchResult<()> {
        if denominator == 0 {
            return Err(LaunchError::InvalidAmount);
        }
        self.royalties.insert(
            collection.clone(),
            RoyaltyEntry {
                numerator,
                denominator,
                payee: payee.clone(),
            },
        );
        Ok(())
    }

    fn royalty_of(&self, collection: &Hash) -> Option<(u64, u64, PublicKey)> {
        self.royalties
            .get(collection)
            .map(|entry| (entry.numerator, entry.denominator, entry.payee.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KEY_SIZE;

    fn key(seed: u8) -> PublicKey {
        PublicKey::new([seed; KEY_SIZE])
    }

    #[test]
    fn test_create_asset_increments_supply() {
        let mut ledger = MemoryLedger::new();
        let collection = hash(b"col");

        let a = ledger.create_asset(&key(1), &collection, b"seed").unwrap();
        let b = ledger.create_asset(&key(1), &collection, b"seed").unwrap();
        assert_ne!(a, b);
        assert_eq!(ledger.supply_of(&collection), 2);
        assert_eq!(ledger.owner_of(&a).unwrap(), key(1));
    }

    #[test]
    fn test_transfer_changes_owner() {
        let mut ledger = MemoryLedger::new();
        let collection = hash(b"col");
        let id = ledger.create_asset(&key(1), &collection, b"s").unwrap();

        ledger.transfer(&id, &key(2)).unwrap();
        assert_eq!(ledger.owner_of(&id).unwrap(), key(2));
    }

    #[test]
    fn test_disabled_transfer_blocks() {
        let mut ledger = MemoryLedger::new();
        let collection = hash(b"col");
        let id = ledger.create_asset(&key(1), &collection, b"s").unwrap();

        ledger.disable_transfer(&id).unwrap();
        assert!(ledger.is_transfer_disabled(&id));
        assert_eq!(ledger.transfer(&id, &key(2)), Err(LaunchError::TokenFrozen));

        ledger.enable_transfer(&id).unwrap();
        ledger.transfer(&id, &key(2)).unwrap();
        assert_eq!(ledger.owner_of(&id).unwrap(), key(2));
    }

    #[test]
    fn test_destroy_decrements_supply() {
        let mut ledger = MemoryLedger::new();
        let collection = hash(b"col");
        let id = ledger.create_asset(&key(1), &collection, b"s").unwrap();

        ledger.destroy(&id).unwrap();
        assert_eq!(ledger.supply_of(&collection), 0);
        assert_eq!(ledger.owner_of(&id), Err(LaunchError::TokenNotFound));
        assert_eq!(ledger.destroy(&id), Err(LaunchError::TokenNotFound));
    }

    #[test]
    fn test_value_transfer_insufficient_funds() {
        let mut ledger = MemoryLedger::new();
        ledger.credit(&key(1), 50);

        assert_eq!(
            ledger.transfer_value(&key(1), &key(2), 51),
            Err(LaunchError::InsufficientFunds)
        );
        // Unknown account has no balance at all
        assert_eq!(
            ledger.transfer_value(&key(3), &key(2), 1),
            Err(LaunchError::InsufficientFunds)
        );

        ledger.transfer_value(&key(1), &key(2), 50).unwrap();
        assert_eq!(ledger.balance_of(&key(1)), 0);
        assert_eq!(ledger.balance_of(&key(2)), 50);
    }

    #[test]
    fn test_royalty_entry() {
        let mut ledger = MemoryLedger::new();
        let collection = hash(b"col");

        assert_eq!(
            ledger.set_royalty(&collection, 5, 0, &key(1)),
            Err(LaunchError::InvalidAmount)
        );
        ledger.set_royalty(&collection, 5, 100, &key(1)).unwrap();
        assert_eq!(ledger.royalty_of(&collection), Some((5, 100, key(1))));
    }
}
