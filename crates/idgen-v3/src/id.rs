//! The identifier value type.

use crate::{IdError, IdResult};
use std::{fmt, str::FromStr};
use uuid::{Uuid, Variant};

/// Name space for fully-qualified domain names.
pub const NAMESPACE_DNS: UniqueId = UniqueId(Uuid::NAMESPACE_DNS);
/// Name space for URLs.
pub const NAMESPACE_URL: UniqueId = UniqueId(Uuid::NAMESPACE_URL);
/// Name space for ISO OIDs.
pub const NAMESPACE_OID: UniqueId = UniqueId(Uuid::NAMESPACE_OID);
/// Name space for X.500 distinguished names.
pub const NAMESPACE_X500: UniqueId = UniqueId(Uuid::NAMESPACE_X500);

/// A 128-bit unique identifier.
///
/// Values are immutable once created. [`Display`](fmt::Display) always renders the canonical
/// 36-character lowercase hyphenated form.
///
/// # Construction
/// - [`Generator`](crate::Generator) creates new random or name-based identifiers.
/// - [`UniqueId::parse`] (or [`FromStr`]) reads an existing identifier.
/// - [`UniqueId::from_bytes`] wraps raw bytes without validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UniqueId(Uuid);

impl UniqueId {
    /// The nil identifier (all bits zero).
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Wraps 16 raw bytes in big-endian field order.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parses an identifier in any common textual form.
    ///
    /// Accepted forms (case-insensitive):
    /// - hyphenated: `6fa459ea-ee8a-3ca4-894e-db77e160355e`
    /// - simple: `6fa459eaee8a3ca4894edb77e160355e`
    /// - braced: `{6fa459ea-ee8a-3ca4-894e-db77e160355e}`
    /// - URN: `urn:uuid:6fa459ea-ee8a-3ca4-894e-db77e160355e`
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is none of the above.
    pub fn parse(input: &str) -> IdResult<Self> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| IdError::InvalidInput(format!("invalid identifier '{}': {}", input, e)))
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Returns the version nibble, or `None` for identifiers outside the RFC 4122 layout.
    pub fn version(&self) -> Option<u8> {
        if !self.is_rfc4122() {
            return None;
        }
        match self.0.as_bytes()[6] >> 4 {
            0 => None,
            v => Some(v),
        }
    }

    /// Returns true if the variant bits carry the RFC 4122 pattern (`10`).
    pub fn is_rfc4122(&self) -> bool {
        self.0.get_variant() == Variant::RFC4122
    }

    /// Returns the 32-character lowercase hex form without hyphens.
    pub fn simple(&self) -> String {
        self.0.simple().to_string()
    }
}

impl Default for UniqueId {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<Uuid> for UniqueId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<UniqueId> for Uuid {
    fn from(id: UniqueId) -> Self {
        id.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for UniqueId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UniqueId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UniqueId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UniqueId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UniqueId::parse(&s).map_err(serde::de::Error::custom)
    }
}
