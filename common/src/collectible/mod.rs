// Collectible Launchpad for Galleria
// This module provides creator-owned collectible collections with a
// custodial batch-minting engine.
//
// Features:
// - Collections with an immutable mutability policy fixed at creation
// - One-shot capability handles gating every mutation path
// - Custodial ownership through a derived delegate identity per creator
// - Fee-charging batch purchases with sale window and sequential numbering
// - Typed per-token property store
// - Burn and transfer-freeze, when the policy issued the handles
//
// Module Structure:
// - error: Error codes and types
// - policy: Mutability flags and capability handles
// - types: Core data structures (Collection, Token)
// - properties: Typed key/value property store
// - custodian: Delegate identity vault
// - config: Per-collection business configuration
// - state: Service-owned store passed into operations
// - ledger: In-memory reference ledger
// - operations: Core operation logic (create, buy, reserve, mint, ...)

mod config;
mod custodian;
mod error;
mod ledger;
pub mod operations;
mod policy;
mod properties;
mod state;
mod types;

pub use config::*;
pub use custodian::*;
pub use error::*;
pub use ledger::*;
pub use operations::*;
pub use policy::*;
pub use properties::*;
pub use state::*;
pub use types::*;
