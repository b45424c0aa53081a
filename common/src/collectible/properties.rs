// Collectible Launchpad - Token Property Store
//
// Per-token key/type/value metadata. Values are kept as a type tag plus
// the raw encoded bytes; typed constructors and decoders round-trip
// through that encoding. Keys are unique and insertion order is kept.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{LaunchError, LaunchResult};

// ========================================
// Limits
// ========================================

/// Maximum properties per token
pub const MAX_PROPERTIES_COUNT: usize = 32;

/// Maximum property key length (bytes)
pub const MAX_PROPERTY_KEY_LENGTH: usize = 64;

/// Maximum raw property value length (bytes)
pub const MAX_PROPERTY_VALUE_LENGTH: usize = 256;

// ========================================
// Property Value
// ========================================

/// Type tag carried with every property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Bool,
    U8,
    U64,
    U128,
    String,
    Bytes,
}

impl PropertyType {
    /// Get type identifier for serialization
    pub fn type_id(&self) -> u8 {
        match self {
            PropertyType::Bool => 0,
            PropertyType::U8 => 1,
            PropertyType::U64 => 2,
            PropertyType::U128 => 3,
            PropertyType::String => 4,
            PropertyType::Bytes => 5,
        }
    }

    pub fn from_type_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(PropertyType::Bool),
            1 => Some(PropertyType::U8),
            2 => Some(PropertyType::U64),
            3 => Some(PropertyType::U128),
            4 => Some(PropertyType::String),
            5 => Some(PropertyType::Bytes),
            _ => None,
        }
    }

    /// Expected raw length for fixed-size types, None for variable ones.
    fn fixed_len(&self) -> Option<usize> {
        match self {
            PropertyType::Bool => Some(1),
            PropertyType::U8 => Some(1),
            PropertyType::U64 => Some(8),
            PropertyType::U128 => Some(16),
            PropertyType::String | PropertyType::Bytes => None,
        }
    }
}

/// A typed property value: tag plus raw little-endian encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValue {
    ty: PropertyType,
    raw: Vec<u8>,
}

impl PropertyValue {
    /// Build a value from an externally produced encoding, validating the
    /// shape against the type tag.
    pub fn new(ty: PropertyType, raw: Vec<u8>) -> LaunchResult<Self> {
        if raw.len() > MAX_PROPERTY_VALUE_LENGTH {
            return Err(LaunchError::InvalidAmount);
        }
        if let Some(expected) = ty.fixed_len() {
            if raw.len() != expected {
                return Err(LaunchError::TypeMismatch);
            }
        }
        if ty == PropertyType::Bool && raw[0] > 1 {
            return Err(LaunchError::TypeMismatch);
        }
        if ty == PropertyType::String && std::str::from_utf8(&raw).is_err() {
            return Err(LaunchError::TypeMismatch);
        }
        Ok(Self { ty, raw })
    }

    pub fn bool(value: bool) -> Self {
        Self {
            ty: PropertyType::Bool,
            raw: vec![value as u8],
        }
    }

    pub fn u8(value: u8) -> Self {
        Self {
            ty: PropertyType::U8,
            raw: vec![value],
        }
    }

    pub fn u64(value: u64) -> Self {
        Self {
            ty: PropertyType::U64,
            raw: value.to_le_bytes().to_vec(),
        }
    }

    pub fn u128(value: u128) -> Self {
        Self {
            ty: PropertyType::U128,
            raw: value.to_le_bytes().to_vec(),
        }
    }

    pub fn string(value: String) -> LaunchResult<Self> {
        Self::new(PropertyType::String, value.into_bytes())
    }

    pub fn bytes(value: Vec<u8>) -> LaunchResult<Self> {
        Self::new(PropertyType::Bytes, value)
    }

    pub fn ty(&self) -> PropertyType {
        self.ty
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn as_bool(&self) -> LaunchResult<bool> {
        match self.ty {
            PropertyType::Bool => Ok(self.raw[0] == 1),
            _ => Err(LaunchError::TypeMismatch),
        }
    }

    pub fn as_u8(&self) -> LaunchResult<u8> {
        match self.ty {
            PropertyType::U8 => Ok(self.raw[0]),
            _ => Err(LaunchError::TypeMismatch),
        }
    }

    pub fn as_u64(&self) -> LaunchResult<u64> {
        match self.ty {
            PropertyType::U64 => {
                let bytes: [u8; 8] = self.raw.as_slice().try_into().expect("validated length");
                Ok(u64::from_le_bytes(bytes))
            }
            _ => Err(LaunchError::TypeMismatch),
        }
    }

    pub fn as_u128(&self) -> LaunchResult<u128> {
        match self.ty {
            PropertyType::U128 => {
                let bytes: [u8; 16] = self.raw.as_slice().try_into().expect("validated length");
                Ok(u128::from_le_bytes(bytes))
            }
            _ => Err(LaunchError::TypeMismatch),
        }
    }

    pub fn as_str(&self) -> LaunchResult<&str> {
        match self.ty {
            PropertyType::String => {
                Ok(std::str::from_utf8(&self.raw).expect("validated utf-8"))
            }
            _ => Err(LaunchError::TypeMismatch),
        }
    }

    pub fn as_bytes(&self) -> LaunchResult<&[u8]> {
        match self.ty {
            PropertyType::Bytes => Ok(&self.raw),
            _ => Err(LaunchError::TypeMismatch),
        }
    }
}

// ========================================
// Property Map
// ========================================

/// Ordered map of unique property keys attached to one token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMap {
    entries: IndexMap<String, PropertyValue>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.entries.iter()
    }

    /// Insert a new key. Fails if the key is already present.
    pub fn add(&mut self, key: String, value: PropertyValue) -> LaunchResult<()> {
        validate_property_key(&key)?;
        if self.entries.len() >= MAX_PROPERTIES_COUNT {
            return Err(LaunchError::TooManyProperties);
        }
        if self.entries.contains_key(&key) {
            return Err(LaunchError::PropertyAlreadyExists);
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Replace an existing key. Fails if the key is absent.
    pub fn update(&mut self, key: &str, value: PropertyValue) -> LaunchResult<()> {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(LaunchError::PropertyNotFound),
        }
    }

    /// Remove an existing key, returning its value. Fails if absent.
    pub fn remove(&mut self, key: &str) -> LaunchResult<PropertyValue> {
        self.entries
            .shift_remove(key)
            .ok_or(LaunchError::PropertyNotFound)
    }
}

/// Validate a property key
pub fn validate_property_key(key: &str) -> LaunchResult<()> {
    if key.is_empty() {
        return Err(LaunchError::InvalidAmount);
    }
    if key.len() > MAX_PROPERTY_KEY_LENGTH {
        return Err(LaunchError::PropertyKeyTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_roundtrips() {
        assert!(PropertyValue::bool(true).as_bool().unwrap());
        assert_eq!(PropertyValue::u8(7).as_u8().unwrap(), 7);
        assert_eq!(PropertyValue::u64(42).as_u64().unwrap(), 42);
        assert_eq!(PropertyValue::u128(1 << 100).as_u128().unwrap(), 1 << 100);
        assert_eq!(
            PropertyValue::string("rare".to_string())
                .unwrap()
                .as_str()
                .unwrap(),
            "rare"
        );
        assert_eq!(
            PropertyValue::bytes(vec![1, 2, 3]).unwrap().as_bytes().unwrap(),
            &[1, 2, 3]
        );
    }

    #[test]
    fn test_type_mismatch() {
        let value = PropertyValue::u64(42);
        assert_eq!(value.as_bool(), Err(LaunchError::TypeMismatch));
        assert_eq!(value.as_str(), Err(LaunchError::TypeMismatch));
    }

    #[test]
    fn test_raw_shape_validation() {
        // Wrong length for the tag
        assert_eq!(
            PropertyValue::new(PropertyType::U64, vec![1, 2]),
            Err(LaunchError::TypeMismatch)
        );
        // Bool must be 0 or 1
        assert_eq!(
            PropertyValue::new(PropertyType::Bool, vec![2]),
            Err(LaunchError::TypeMismatch)
        );
        // Non-utf8 string
        assert_eq!(
            PropertyValue::new(PropertyType::String, vec![0xff, 0xfe]),
            Err(LaunchError::TypeMismatch)
        );
        // Raw bytes of a valid u64
        let value = PropertyValue::new(PropertyType::U64, 9u64.to_le_bytes().to_vec()).unwrap();
        assert_eq!(value.as_u64().unwrap(), 9);
    }

    #[test]
    fn test_value_too_long() {
        let raw = vec![0u8; MAX_PROPERTY_VALUE_LENGTH + 1];
        assert_eq!(
            PropertyValue::new(PropertyType::Bytes, raw),
            Err(LaunchError::InvalidAmount)
        );
    }

    #[test]
    fn test_type_id_roundtrip() {
        for ty in [
            PropertyType::Bool,
            PropertyType::U8,
            PropertyType::U64,
            PropertyType::U128,
            PropertyType::String,
            PropertyType::Bytes,
        ] {
            assert_eq!(PropertyType::from_type_id(ty.type_id()), Some(ty));
        }
        assert_eq!(PropertyType::from_type_id(99), None);
    }

    #[test]
    fn test_map_add_update_remove() {
        let mut map = PropertyMap::new();
        map.add("power".to_string(), PropertyValue::u64(100)).unwrap();

        // Duplicate add fails
        assert_eq!(
            map.add("power".to_string(), PropertyValue::u64(200)),
            Err(LaunchError::PropertyAlreadyExists)
        );

        // Update of a present key succeeds
        map.update("power", PropertyValue::u64(200)).unwrap();
        assert_eq!(map.get("power").unwrap().as_u64().unwrap(), 200);

        // Update of an absent key fails
        assert_eq!(
            map.update("rarity", PropertyValue::u64(1)),
            Err(LaunchError::PropertyNotFound)
        );

        // Remove returns the value, second remove fails
        let removed = map.remove("power").unwrap();
        assert_eq!(removed.as_u64().unwrap(), 200);
        assert_eq!(map.remove("power"), Err(LaunchError::PropertyNotFound));
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_limits() {
        let mut map = PropertyMap::new();
        for i in 0..MAX_PROPERTIES_COUNT {
            map.add(format!("key{}", i), PropertyValue::u64(i as u64))
                .unwrap();
        }
        assert_eq!(
            map.add("overflow".to_string(), PropertyValue::u64(0)),
            Err(LaunchError::TooManyProperties)
        );

        let long_key = "k".repeat(MAX_PROPERTY_KEY_LENGTH + 1);
        let mut map = PropertyMap::new();
        assert_eq!(
            map.add(long_key, PropertyValue::u64(0)),
            Err(LaunchError::PropertyKeyTooLong)
        );
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let mut map = PropertyMap::new();
        map.add("b".to_string(), PropertyValue::u64(1)).unwrap();
        map.add("a".to_string(), PropertyValue::u64(2)).unwrap();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
    }
}
