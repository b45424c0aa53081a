// Collectible Launchpad - Core Types
// This module defines the collection and token records plus protocol limits.

use serde::{Deserialize, Serialize};

use crate::crypto::{Hash, PublicKey};
use crate::time::TimestampSeconds;

use super::policy::{BurnHandle, Capability, CollectionPolicy, FreezeHandle, MutateHandle, RoyaltyHandle};
use super::properties::PropertyMap;

// ========================================
// Protocol Constants
// ========================================

/// Maximum collection name length (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum symbol length (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 8;

/// Maximum description length (bytes)
pub const MAX_DESCRIPTION_LENGTH: usize = 512;

/// Maximum URI length (bytes)
pub const MAX_URI_LENGTH: usize = 512;

// ========================================
// Ids
// ========================================

/// Ledger-assigned asset identifier.
pub type AssetId = Hash;

// ========================================
// Collection
// ========================================

/// A creator-owned collection. The policy and the presence of each
/// capability slot never change after creation; only the values behind
/// granted handles may.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Collection {
    /// Deterministic id derived from (delegate identity, name)
    pub id: Hash,

    /// Collection name, unique per creator
    pub name: String,

    /// Collection description
    pub description: String,

    /// Collection URI
    pub uri: String,

    /// Delegate identity owning the collection
    pub creator: PublicKey,

    /// Creator key allowed to administer the collection
    pub controller: PublicKey,

    /// Immutable mutability policy
    pub policy: CollectionPolicy,

    /// Collection-field mutate handle, fixed at creation
    pub mutate: Capability<MutateHandle>,

    /// Royalty mutate handle, fixed at creation
    pub royalty_mutate: Capability<RoyaltyHandle>,

    /// Creation time (unix seconds)
    pub created_at: TimestampSeconds,
}

// ========================================
// Token
// ========================================

/// One minted collectible. Capability slots are decided at mint time
/// from the owning collection's policy; the property map is always
/// present and starts empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    /// Ledger-assigned id
    pub id: AssetId,

    /// Owning collection id
    pub collection: Hash,

    /// Token name (symbol plus sequential suffix for batch mints)
    pub name: String,

    /// Token description
    pub description: String,

    /// Token metadata URI
    pub uri: String,

    /// Delegate identity recorded as the token's creator
    pub creator: PublicKey,

    /// Token-field mutate handle
    pub mutate: Capability<MutateHandle>,

    /// Burn handle
    pub burn: Capability<BurnHandle>,

    /// Transfer-freeze handle
    pub freeze: Capability<FreezeHandle>,

    /// Typed key/value metadata
    pub properties: PropertyMap,

    /// Soul-bound tokens are permanently transfer-disabled
    pub soul_bound: bool,

    /// Mint time (unix seconds)
    pub created_at: TimestampSeconds,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{hash, KEY_SIZE};
    use crate::collectible::policy::issue_token_handles;

    #[test]
    fn test_token_capability_slots_follow_policy() {
        let id = hash(b"token");
        let mut policy = CollectionPolicy::immutable();
        policy.tokens_burnable_by_creator = true;

        let (mutate, burn, freeze) = issue_token_handles(&policy, &id);
        let token = Token {
            id: id.clone(),
            collection: hash(b"col"),
            name: "APE #1".to_string(),
            description: String::new(),
            uri: "https://example.com/1".to_string(),
            creator: PublicKey::new([1; KEY_SIZE]),
            mutate,
            burn,
            freeze,
            properties: PropertyMap::new(),
            soul_bound: false,
            created_at: 0,
        };

        assert!(!token.mutate.is_granted());
        assert!(token.burn.is_granted());
        assert!(!token.freeze.is_granted());
        assert!(token.properties.is_empty());
    }
}
