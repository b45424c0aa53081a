// Collectible Launchpad - Input Validation Helpers
// This module provides validation functions for operation inputs.

use crate::crypto::PublicKey;

use crate::collectible::error::{LaunchError, LaunchResult};
use crate::collectible::types::{
    MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH,
};

/// Validate a collection or token name
pub fn validate_name(name: &str) -> LaunchResult<()> {
    if name.is_empty() {
        return Err(LaunchError::InvalidAmount);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(LaunchError::NameTooLong);
    }
    Ok(())
}

/// Validate a collection symbol
pub fn validate_symbol(symbol: &str) -> LaunchResult<()> {
    if symbol.is_empty() {
        return Err(LaunchError::InvalidAmount);
    }
    if symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(LaunchError::SymbolTooLong);
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(LaunchError::SymbolInvalidChar);
    }
    Ok(())
}

/// Validate a description
pub fn validate_description(description: &str) -> LaunchResult<()> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(LaunchError::NameTooLong);
    }
    Ok(())
}

/// Validate a URI
pub fn validate_uri(uri: &str) -> LaunchResult<()> {
    if uri.len() > MAX_URI_LENGTH {
        return Err(LaunchError::UriTooLong);
    }
    Ok(())
}

/// Validate a recipient address (must be non-zero)
pub fn validate_recipient(recipient: &PublicKey) -> LaunchResult<()> {
    if recipient.is_zero() {
        return Err(LaunchError::InvalidAmount);
    }
    Ok(())
}
