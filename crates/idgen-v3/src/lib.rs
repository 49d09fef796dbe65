//! Identifier generation, major version 3.
//!
//! Produces RFC 4122 unique identifiers and renders them in the canonical lowercase hyphenated
//! form (`xxxxxxxx-xxxx-Mxxx-Nxxx-xxxxxxxxxxxx`, `M` = version nibble, `N` = variant).
//!
//! This crate provides:
//! - [`UniqueId`], an immutable 128-bit identifier with canonical formatting and lenient
//!   parsing.
//! - [`Generator`], which creates random (version 4) identifiers from an injected
//!   [`RandomSource`], plus name-based (version 3 and 5) identifiers.
//! - Free functions ([`new_v4`], [`new_v3`], [`new_v5`]) backed by the operating system CSPRNG.
//!
//! ## Randomness
//! Random identifiers draw all 122 non-fixed bits from the generator's source. If the source
//! fails, generation fails with [`IdError::RandomnessSource`]; no fallback value is ever
//! produced.
//!
//! ## Parsing
//! [`UniqueId::parse`] accepts the hyphenated, simple (32 hex), braced and `urn:uuid:` forms in
//! any letter case. Output is always the canonical hyphenated lowercase form.

mod generator;
mod id;

pub use generator::{new_v3, new_v4, new_v5, Generator};
pub use id::{UniqueId, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};
pub use idkit_entropy::{
    EntropyError, OsRandom, RandomSource, SeededRandom, ThreadLocalRandom,
};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// The randomness source could not supply bytes
    #[error("randomness source error: {0}")]
    RandomnessSource(#[from] EntropyError),
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type IdResult<T> = Result<T, IdError>;
