//! Identifier generation backed by an injected randomness source.

use crate::{IdResult, UniqueId};
use idkit_entropy::{OsRandom, RandomSource};
use uuid::{Builder, Uuid};

/// Creates identifiers.
///
/// The generator owns its [`RandomSource`]. Use [`Generator::new`] for the operating system
/// CSPRNG, or [`Generator::with_source`] to inject another source (for example a
/// [`SeededRandom`](idkit_entropy::SeededRandom) in tests).
#[derive(Clone, Debug)]
pub struct Generator<R = OsRandom> {
    source: R,
}

impl Generator<OsRandom> {
    /// Creates a generator reading from the operating system CSPRNG.
    pub fn new() -> Self {
        Self { source: OsRandom }
    }
}

impl Default for Generator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Generator<R> {
    /// Creates a generator reading from `source`.
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Generates a random (version 4) identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::RandomnessSource`](crate::IdError::RandomnessSource) if the source
    /// cannot supply 16 bytes.
    pub fn new_v4(&self) -> IdResult<UniqueId> {
        let mut bytes = [0u8; 16];
        self.source.fill(&mut bytes)?;

        let id = UniqueId::from(Builder::from_random_bytes(bytes).into_uuid());
        tracing::debug!(%id, "generated v4 identifier");
        Ok(id)
    }

    /// Generates a name-based identifier using MD5 (version 3).
    pub fn new_v3(&self, namespace: &UniqueId, name: impl AsRef<[u8]>) -> UniqueId {
        new_v3(namespace, name)
    }

    /// Generates a name-based identifier using SHA-1 (version 5).
    pub fn new_v5(&self, namespace: &UniqueId, name: impl AsRef<[u8]>) -> UniqueId {
        new_v5(namespace, name)
    }
}

/// Generates a random (version 4) identifier from the operating system CSPRNG.
///
/// # Errors
///
/// Returns [`IdError::RandomnessSource`](crate::IdError::RandomnessSource) if the operating
/// system cannot supply bytes.
pub fn new_v4() -> IdResult<UniqueId> {
    Generator::new().new_v4()
}

/// Generates a name-based identifier using MD5 (version 3).
pub fn new_v3(namespace: &UniqueId, name: impl AsRef<[u8]>) -> UniqueId {
    UniqueId::from(Uuid::new_v3(&namespace.uuid(), name.as_ref()))
}

/// Generates a name-based identifier using SHA-1 (version 5).
pub fn new_v5(namespace: &UniqueId, name: impl AsRef<[u8]>) -> UniqueId {
    UniqueId::from(Uuid::new_v5(&namespace.uuid(), name.as_ref()))
}
