// Collectible Launchpad - Mutability Policy & Capability Handles
//
// A collection's policy is a set of booleans fixed forever at creation.
// The policy decides which capability handles get issued, and a handle
// that was withheld at creation can never be issued later: the issuing
// constructors are crate-private and only called from the creation paths.
//
// Mutation therefore passes two independent gates:
// 1. the capability handle for the operation is present
// 2. the live policy flag for the specific field is still true
// Both are checked even where redundant, since one shared mutate handle
// governs several fields of differing intended mutability.

use serde::{Deserialize, Serialize};

use crate::crypto::Hash;

// ========================================
// Collection Policy
// ========================================

/// Immutable mutability flags, fixed at collection creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPolicy {
    /// Collection description can be rewritten
    pub mutable_description: bool,

    /// Collection URI can be rewritten
    pub mutable_uri: bool,

    /// Token descriptions can be rewritten
    pub mutable_token_description: bool,

    /// Token names can be rewritten
    pub mutable_token_name: bool,

    /// Token property maps can be mutated
    pub mutable_token_properties: bool,

    /// Token URIs can be rewritten
    pub mutable_token_uri: bool,

    /// Creator may burn tokens
    pub tokens_burnable_by_creator: bool,

    /// Creator may freeze token transfers
    pub tokens_freezable_by_creator: bool,
}

impl CollectionPolicy {
    /// Policy with every flag disabled: nothing is ever mutable.
    pub fn immutable() -> Self {
        Self {
            mutable_description: false,
            mutable_uri: false,
            mutable_token_description: false,
            mutable_token_name: false,
            mutable_token_properties: false,
            mutable_token_uri: false,
            tokens_burnable_by_creator: false,
            tokens_freezable_by_creator: false,
        }
    }

    /// Policy with every flag enabled.
    pub fn fully_mutable() -> Self {
        Self {
            mutable_description: true,
            mutable_uri: true,
            mutable_token_description: true,
            mutable_token_name: true,
            mutable_token_properties: true,
            mutable_token_uri: true,
            tokens_burnable_by_creator: true,
            tokens_freezable_by_creator: true,
        }
    }

    /// A collection-level mutate handle is issued when any collection
    /// field is mutable.
    pub fn grants_collection_mutate(&self) -> bool {
        self.mutable_description || self.mutable_uri
    }

    /// A token-level mutate handle is issued when any token field is
    /// mutable. Properties are gated by their own flag, not the handle.
    pub fn grants_token_mutate(&self) -> bool {
        self.mutable_token_description || self.mutable_token_name || self.mutable_token_uri
    }
}

// ========================================
// Capability Handles
// ========================================

/// One-shot permission slot. `Withheld` is permanent: there is no public
/// path from `Withheld` to `Granted` after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability<H> {
    Granted(H),
    Withheld,
}

impl<H> Capability<H> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Capability::Granted(_))
    }

    pub fn handle(&self) -> Option<&H> {
        match self {
            Capability::Granted(handle) => Some(handle),
            Capability::Withheld => None,
        }
    }

    pub(crate) fn issue_if(granted: bool, handle: H) -> Self {
        if granted {
            Capability::Granted(handle)
        } else {
            Capability::Withheld
        }
    }
}

macro_rules! capability_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            entity: Hash,
        }

        impl $name {
            pub(crate) fn issue(entity: Hash) -> Self {
                Self { entity }
            }

            /// Id of the single entity this handle governs.
            pub fn entity(&self) -> &Hash {
                &self.entity
            }
        }
    };
}

capability_handle!(
    /// Grants mutation of descriptive fields (description, name, URI).
    MutateHandle
);
capability_handle!(
    /// Grants rewriting the royalty entry of a collection.
    RoyaltyHandle
);
capability_handle!(
    /// Grants burning a token.
    BurnHandle
);
capability_handle!(
    /// Grants freezing and thawing a token's transfers.
    FreezeHandle
);

// ========================================
// Issuance
// ========================================

/// Handles issued to a collection at creation time.
pub(crate) fn issue_collection_handles(
    policy: &CollectionPolicy,
    royalty_mutable: bool,
    collection: &Hash,
) -> (Capability<MutateHandle>, Capability<RoyaltyHandle>) {
    (
        Capability::issue_if(
            policy.grants_collection_mutate(),
            MutateHandle::issue(collection.clone()),
        ),
        Capability::issue_if(royalty_mutable, RoyaltyHandle::issue(collection.clone())),
    )
}

/// Handles issued to a token at mint time, from the current policy of its
/// owning collection.
pub(crate) fn issue_token_handles(
    policy: &CollectionPolicy,
    token: &Hash,
) -> (
    Capability<MutateHandle>,
    Capability<BurnHandle>,
    Capability<FreezeHandle>,
) {
    (
        Capability::issue_if(
            policy.grants_token_mutate(),
            MutateHandle::issue(token.clone()),
        ),
        Capability::issue_if(
            policy.tokens_burnable_by_creator,
            BurnHandle::issue(token.clone()),
        ),
        Capability::issue_if(
            policy.tokens_freezable_by_creator,
            FreezeHandle::issue(token.clone()),
        ),
    )
}
