//! Resource identifiers.

use plural_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 12-byte resource id, rendered as 24 lowercase hex characters.
///
/// Members, groups, and latch targets are all keyed by ids of this shape.
/// The text form is what travels on the wire; the byte form is kept so ids
/// stay cheap to copy and compare.
///
/// # Examples
///
/// ```
/// use plural_core::ObjectId;
///
/// let id: ObjectId = "5eb7cf5a86d9755df3a6c593".parse().unwrap();
/// assert_eq!(id.to_string(), "5eb7cf5a86d9755df3a6c593");
/// assert!("not-an-id".parse::<ObjectId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Wrap raw id bytes.
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// The raw id bytes.
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

impl std::str::FromStr for ObjectId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 12];
        if s.len() != 24 || hex::decode_to_slice(s, &mut bytes).is_err() {
            return Err(ValidationError::new(ValidationErrorKind::ObjectId {
                value: s.to_string(),
            }));
        }
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
