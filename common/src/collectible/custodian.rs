// Collectible Launchpad - Custodial Identity Vault
//
// Collections and tokens are not owned by the creator's own key but by a
// delegate identity derived from it. The vault stores one re-derivable
// seed per creator, created lazily on first use; everything minted for
// that creator afterwards is executed as the derived identity. Whoever
// can invoke against a stored seed controls every collection under it,
// so the vault is the single custody point for a creator's catalogue.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{PublicKey, KEY_SIZE};

use super::error::{LaunchError, LaunchResult};

/// Domain separation contexts for seed and address derivation.
const SEED_CONTEXT: &str = "galleria delegate seed v1";
const ADDRESS_CONTEXT: &str = "galleria delegate address v1";

// ========================================
// Delegate Seed
// ========================================

/// Stored signing capability for one creator's delegate identity.
/// Re-derivable from the creator key, zeroized when dropped.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct DelegateSeed {
    bytes: [u8; KEY_SIZE],
}

impl DelegateSeed {
    /// Deterministically derive the seed for a creator key.
    fn derive(creator: &PublicKey) -> Self {
        Self {
            bytes: blake3::derive_key(SEED_CONTEXT, creator.as_bytes()),
        }
    }

    /// Re-derive the signing identity controlled by this seed.
    pub fn identity(&self) -> DelegateIdentity {
        DelegateIdentity {
            address: PublicKey::new(blake3::derive_key(ADDRESS_CONTEXT, &self.bytes)),
        }
    }
}

impl std::fmt::Debug for DelegateSeed {
    // Never print seed material
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DelegateSeed(..)")
    }
}

// ========================================
// Delegate Identity
// ========================================

/// Usable signing context for a creator's delegate. Operations that mint
/// or mutate on behalf of a creator execute as this identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateIdentity {
    address: PublicKey,
}

impl DelegateIdentity {
    /// Address owning the creator's collections and tokens.
    pub fn address(&self) -> &PublicKey {
        &self.address
    }
}

// ========================================
// Custodian Vault
// ========================================

/// Per-creator store of delegate seeds. One entry per creator, created
/// exactly once; entries are never shared across creators.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustodianVault {
    seeds: HashMap<PublicKey, DelegateSeed>,
}

impl CustodianVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, creator: &PublicKey) -> bool {
        self.seeds.contains_key(creator)
    }

    /// Resolve the delegate identity for a creator, deriving and storing
    /// the seed on first use.
    pub fn resolve_or_create(&mut self, creator: &PublicKey) -> DelegateIdentity {
        self.seeds
            .entry(creator.clone())
            .or_insert_with(|| DelegateSeed::derive(creator))
            .identity()
    }

    /// Resolve the delegate identity for a creator that must already be
    /// registered.
    pub fn resolve(&self, creator: &PublicKey) -> LaunchResult<DelegateIdentity> {
        self.seeds
            .get(creator)
            .map(DelegateSeed::identity)
            .ok_or(LaunchError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator(seed: u8) -> PublicKey {
        PublicKey::new([seed; KEY_SIZE])
    }

    #[test]
    fn test_resolve_before_create_fails() {
        let vault = CustodianVault::new();
        assert_eq!(vault.resolve(&creator(1)), Err(LaunchError::NotInitialized));
    }

    #[test]
    fn test_resolve_or_create_is_stable() {
        let mut vault = CustodianVault::new();
        let first = vault.resolve_or_create(&creator(1));
        let second = vault.resolve_or_create(&creator(1));
        assert_eq!(first, second);
        assert_eq!(vault.resolve(&creator(1)).unwrap(), first);
    }

    #[test]
    fn test_distinct_creators_get_distinct_identities() {
        let mut vault = CustodianVault::new();
        let a = vault.resolve_or_create(&creator(1));
        let b = vault.resolve_or_create(&creator(2));
        assert_ne!(a.address(), b.address());
    }

    #[test]
    fn test_identity_differs_from_creator_key() {
        let mut vault = CustodianVault::new();
        let identity = vault.resolve_or_create(&creator(1));
        assert_ne!(identity.address(), &creator(1));
    }
}
