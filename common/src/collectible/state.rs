// Collectible Launchpad - Service-Owned State
//
// All launchpad state lives in one explicit store passed by mutable
// reference into every operation: collection records (policy store),
// token records (capability registry + property store), the config
// table and the custodian vault. The exclusive borrow taken by each
// operation is what serializes calls; embedders running operations from
// several threads must wrap the state and the ledger in one lock.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::crypto::Hash;

use super::config::ConfigTable;
use super::custodian::CustodianVault;
use super::error::{LaunchError, LaunchResult};
use super::types::{AssetId, Collection, Token};

/// The launchpad's own records. Asset ownership and coin balances live
/// in the ledger collaborators, not here.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LaunchState {
    collections: HashMap<Hash, Collection>,
    tokens: HashMap<AssetId, Token>,
    pub configs: ConfigTable,
    pub custodians: CustodianVault,
}

impl LaunchState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================
    // Collections
    // ========================================

    pub fn has_collection(&self, id: &Hash) -> bool {
        self.collections.contains_key(id)
    }

    pub fn collection(&self, id: &Hash) -> LaunchResult<&Collection> {
        self.collections
            .get(id)
            .ok_or(LaunchError::CollectionNotFound)
    }

    pub fn collection_mut(&mut self, id: &Hash) -> LaunchResult<&mut Collection> {
        self.collections
            .get_mut(id)
            .ok_or(LaunchError::CollectionNotFound)
    }

    pub fn insert_collection(&mut self, collection: Collection) -> LaunchResult<()> {
        if self.collections.contains_key(&collection.id) {
            return Err(LaunchError::CollectionAlreadyExists);
        }
        self.collections.insert(collection.id.clone(), collection);
        Ok(())
    }

    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    // ========================================
    // Tokens
    // ========================================

    pub fn has_token(&self, id: &AssetId) -> bool {
        self.tokens.contains_key(id)
    }

    pub fn token(&self, id: &AssetId) -> LaunchResult<&Token> {
        self.tokens.get(id).ok_or(LaunchError::TokenNotFound)
    }

    pub fn token_mut(&mut self, id: &AssetId) -> LaunchResult<&mut Token> {
        self.tokens.get_mut(id).ok_or(LaunchError::TokenNotFound)
    }

    pub fn insert_token(&mut self, token: Token) -> LaunchResult<()> {
        if self.tokens.contains_key(&token.id) {
            return Err(LaunchError::TokenAlreadyExists);
        }
        self.tokens.insert(token.id.clone(), token);
        Ok(())
    }

    pub fn remove_token(&mut self, id: &AssetId) -> LaunchResult<Token> {
        self.tokens.remove(id).ok_or(LaunchError::TokenNotFound)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectible::policy::{issue_collection_handles, CollectionPolicy};
    use crate::crypto::{hash, PublicKey, KEY_SIZE};

    fn sample_collection(id: Hash) -> Collection {
        let policy = CollectionPolicy::immutable();
        let (mutate, royalty_mutate) = issue_collection_handles(&policy, false, &id);
        Collection {
            id,
            name: "Apes".to_string(),
            description: String::new(),
            uri: String::new(),
            creator: PublicKey::new([1; KEY_SIZE]),
            controller: PublicKey::new([2; KEY_SIZE]),
            policy,
            mutate,
            royalty_mutate,
            created_at: 0,
        }
    }

    #[test]
    fn test_missing_collection_not_found() {
        let state = LaunchState::new();
        assert_eq!(
            state.collection(&hash(b"missing")).err(),
            Some(LaunchError::CollectionNotFound)
        );
    }

    #[test]
    fn test_insert_collection_twice_fails() {
        let mut state = LaunchState::new();
        let id = hash(b"col");
        state.insert_collection(sample_collection(id.clone())).unwrap();
        assert_eq!(
            state.insert_collection(sample_collection(id)),
            Err(LaunchError::CollectionAlreadyExists)
        );
        assert_eq!(state.collection_count(), 1);
    }

    #[test]
    fn test_missing_token_not_found() {
        let mut state = LaunchState::new();
        assert_eq!(
            state.token(&hash(b"missing")).err(),
            Some(LaunchError::TokenNotFound)
        );
        assert_eq!(
            state.remove_token(&hash(b"missing")).err(),
            Some(LaunchError::TokenNotFound)
        );
    }
}
