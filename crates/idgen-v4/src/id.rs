//! The identifier value type.

use crate::{IdError, IdResult};
use chrono::{DateTime, Utc};
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
/// Once constructed the value is immutable. It displays in the canonical 36-character
/// lowercase hyphenated form and orders by its raw bytes, which for version 7 identifiers means
/// by creation time.
///
/// # Construction
/// - [`Generator`](crate::Generator) generates new identifiers.
/// - [`UniqueId::parse`] reads any common textual form.
/// - [`UniqueId::parse_canonical`] reads the canonical form only.
///
/// # Errors
/// Both parse functions return [`IdError::InvalidInput`] for unacceptable input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniqueId(Uuid);

impl UniqueId {
    /// The nil identifier (all bits zero).
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// The max identifier (all bits one).
    pub const fn max() -> Self {
        Self(Uuid::from_bytes([0xff; 16]))
    }

    /// Wraps 16 raw bytes in big-endian field order.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parses an identifier in any common textual form.
    ///
    /// Hyphenated, simple (32 hex), braced (`{...}`) and URN (`urn:uuid:...`) forms are
    /// accepted in any letter case.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not a recognisable identifier.
    pub fn parse(input: &str) -> IdResult<Self> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| IdError::InvalidInput(format!("invalid identifier '{}': {}", input, e)))
    }

    /// Parses an identifier that must already be in canonical form.
    ///
    /// This does **not** normalise other forms (uppercase, simple, braced, URN). Use it where
    /// identifiers are stored or compared as text.
    ///
    /// # Arguments
    ///
    /// * `input` - Identifier string. Must be 36 characters of lowercase hex in 8-4-4-4-12
    ///   groups.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse_canonical(input: &str) -> IdResult<Self> {
        if !Self::is_canonical(input) {
            return Err(IdError::InvalidInput(format!(
                "identifier must be 36 lowercase hex characters in 8-4-4-4-12 groups, got: '{}'",
                input
            )));
        }
        Self::parse(input)
    }

    /// Returns true if `input` is in canonical form.
    ///
    /// This is a purely syntactic check that validates:
    /// - Exactly 36 bytes long
    /// - Hyphens at offsets 8, 13, 18 and 23
    /// - Lowercase hex characters (`0-9` and `a-f`) everywhere else
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 36
            && input.bytes().enumerate().all(|(i, b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => matches!(b, b'0'..=b'9' | b'a'..=b'f'),
            })
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

    /// Returns the embedded creation time of a version 7 identifier.
    ///
    /// Returns `None` for every other version.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if self.version() != Some(7) {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(self.unix_millis() as i64)
    }

    /// Leading 48 bits as an unsigned integer.
    pub(crate) fn unix_millis(&self) -> u64 {
        let b = self.0.as_bytes();
        b[..6].iter().fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
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
    /// Formats the identifier in canonical form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for UniqueId {
    type Err = IdError;

    /// Equivalent to [`UniqueId::parse`].
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
