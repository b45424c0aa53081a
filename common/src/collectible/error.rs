// Collectible Launchpad - Error Codes
// This module defines all error codes for launchpad operations.
//
// Error Code Ranges:
// - 0: Success
// - 1-99: Collection errors
// - 100-199: Token errors
// - 200-299: Permission errors
// - 300-399: Policy errors
// - 400-499: Sale errors
// - 500-599: Input validation errors
// - 900-999: System errors

use thiserror::Error;

/// Launchpad operation result type
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Launchpad error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum LaunchError {
    // ========================================
    // Collection errors (1-99)
    // ========================================
    #[error("Collection not found")]
    CollectionNotFound = 1,

    #[error("Collection already exists")]
    CollectionAlreadyExists = 2,

    #[error("Config record already exists")]
    RecordAlreadyExists = 3,

    #[error("Supply limit exhausted")]
    SupplyExhausted = 4,

    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token not found")]
    TokenNotFound = 100,

    #[error("Token already exists")]
    TokenAlreadyExists = 101,

    #[error("Token transfer is frozen")]
    TokenFrozen = 102,

    #[error("Token transfer is not frozen")]
    TokenNotFrozen = 103,

    #[error("Token is soul bound")]
    TokenSoulBound = 104,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Permission denied")]
    PermissionDenied = 200,

    #[error("Creator is not initialized")]
    NotInitialized = 201,

    // ========================================
    // Policy errors (300-399)
    // ========================================
    #[error("Field is not mutable")]
    FieldNotMutable = 300,

    #[error("Tokens are not burnable")]
    NotBurnable = 301,

    #[error("Tokens are not freezable")]
    NotFreezable = 302,

    #[error("Token properties are not mutable")]
    PropertiesNotMutable = 303,

    // ========================================
    // Sale errors (400-499)
    // ========================================
    #[error("Sale has not started")]
    SaleInactive = 400,

    #[error("Amount exceeds per-transaction mint limit")]
    OverMintLimit = 401,

    #[error("Insufficient funds")]
    InsufficientFunds = 402,

    // ========================================
    // Input validation errors (500-599)
    // ========================================
    #[error("Name too long")]
    NameTooLong = 500,

    #[error("Symbol too long")]
    SymbolTooLong = 501,

    #[error("Invalid symbol character")]
    SymbolInvalidChar = 502,

    #[error("URI too long")]
    UriTooLong = 503,

    #[error("Invalid amount")]
    InvalidAmount = 504,

    #[error("Property already exists")]
    PropertyAlreadyExists = 505,

    #[error("Property not found")]
    PropertyNotFound = 506,

    #[error("Property key too long")]
    PropertyKeyTooLong = 507,

    #[error("Too many properties")]
    TooManyProperties = 508,

    #[error("Property type mismatch")]
    TypeMismatch = 509,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,
}

impl LaunchError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::CollectionNotFound),
            2 => Some(Self::CollectionAlreadyExists),
            3 => Some(Self::RecordAlreadyExists),
            4 => Some(Self::SupplyExhausted),
            100 => Some(Self::TokenNotFound),
            101 => Some(Self::TokenAlreadyExists),
            102 => Some(Self::TokenFrozen),
            103 => Some(Self::TokenNotFrozen),
            104 => Some(Self::TokenSoulBound),
            200 => Some(Self::PermissionDenied),
            201 => Some(Self::NotInitialized),
            300 => Some(Self::FieldNotMutable),
            301 => Some(Self::NotBurnable),
            302 => Some(Self::NotFreezable),
            303 => Some(Self::PropertiesNotMutable),
            400 => Some(Self::SaleInactive),
            401 => Some(Self::OverMintLimit),
            402 => Some(Self::InsufficientFunds),
            500 => Some(Self::NameTooLong),
            501 => Some(Self::SymbolTooLong),
            502 => Some(Self::SymbolInvalidChar),
            503 => Some(Self::UriTooLong),
            504 => Some(Self::InvalidAmount),
            505 => Some(Self::PropertyAlreadyExists),
            506 => Some(Self::PropertyNotFound),
            507 => Some(Self::PropertyKeyTooLong),
            508 => Some(Self::TooManyProperties),
            509 => Some(Self::TypeMismatch),
            900 => Some(Self::Overflow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_unique() {
        // Verify all error codes are unique
        let codes = [
            LaunchError::CollectionNotFound,
            LaunchError::CollectionAlreadyExists,
            LaunchError::RecordAlreadyExists,
            LaunchError::SupplyExhausted,
            LaunchError::TokenNotFound,
            LaunchError::TokenAlreadyExists,
            LaunchError::TokenFrozen,
            LaunchError::TokenNotFrozen,
            LaunchError::TokenSoulBound,
            LaunchError::PermissionDenied,
            LaunchError::NotInitialized,
            LaunchError::FieldNotMutable,
            LaunchError::NotBurnable,
            LaunchError::NotFreezable,
            LaunchError::PropertiesNotMutable,
            LaunchError::SaleInactive,
            LaunchError::OverMintLimit,
            LaunchError::InsufficientFunds,
            LaunchError::NameTooLong,
            LaunchError::SymbolTooLong,
            LaunchError::SymbolInvalidChar,
            LaunchError::UriTooLong,
            LaunchError::InvalidAmount,
            LaunchError::PropertyAlreadyExists,
            LaunchError::PropertyNotFound,
            LaunchError::PropertyKeyTooLong,
            LaunchError::TooManyProperties,
            LaunchError::TypeMismatch,
            LaunchError::Overflow,
        ];

        let mut seen = std::collections::HashSet::new();
        for err in codes {
            let code = err.code();
            assert!(
                seen.insert(code),
                "Duplicate error code: {} for {:?}",
                code,
                err
            );
        }
    }

    #[test]
    fn test_error_code_roundtrip() {
        let err = LaunchError::SaleInactive;
        let code = err.code();
        let recovered = LaunchError::from_code(code);
        assert_eq!(recovered, Some(err));
    }

    #[test]
    fn test_unknown_error_code() {
        assert_eq!(LaunchError::from_code(9999), None);
    }
}
