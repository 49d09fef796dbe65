//! Identifier generation, major version 4.
//!
//! Generates RFC 4122 identifiers and renders them in a single *canonical* form.
//!
//! ## Canonical form
//! - Length: 36
//! - Layout: `xxxxxxxx-xxxx-Mxxx-Nxxx-xxxxxxxxxxxx` (8-4-4-4-12 groups)
//! - Characters: `0-9`, `a-f` and hyphens at positions 8, 13, 18 and 23
//! - `M` is the version nibble, `N` carries the variant bits (`8`, `9`, `a` or `b`)
//! - Example: `6fa459ea-ee8a-3ca4-894e-db77e160355e`
//!
//! [`UniqueId::parse`] is lenient and accepts any common textual form.
//! [`UniqueId::parse_canonical`] accepts only the canonical form above, for callers that need
//! stored identifiers to compare byte-for-byte.
//!
//! ## Versions
//! - **4**: random. All 122 non-fixed bits come from the generator's [`RandomSource`].
//! - **7**: time-ordered. A 48-bit Unix millisecond timestamp followed by 74 random bits, so
//!   identifiers sort by creation time. [`Generator::new_v7_after`] keeps the sequence strictly
//!   increasing even when the clock stalls or steps backwards.
//! - **3** and **5**: name-based (MD5 and SHA-1). Deterministic, no randomness involved.
//!
//! ## Randomness
//! Generators never substitute a fixed value. When the source fails, generation returns
//! [`IdError::RandomnessSource`].

mod generator;
mod id;

pub use generator::{new_v3, new_v4, new_v5, new_v7, Generator};
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
