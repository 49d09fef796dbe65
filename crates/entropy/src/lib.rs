//! Randomness sources for identifier generation.
//!
//! Generators never reach for a hidden global RNG. Instead they are handed a [`RandomSource`]
//! when constructed, which keeps the process-wide entropy dependency explicit and lets tests
//! substitute a deterministic source.
//!
//! Provided sources:
//! - [`OsRandom`] reads from the operating system CSPRNG. This is the default for generators.
//! - [`ThreadLocalRandom`] uses the per-thread CSPRNG from `rand`.
//! - [`SeededRandom`] is a deterministic generator seeded from a `u64`. It is suitable for
//!   reproducible runs and tests, never for identifiers that must be unpredictable.
//!
//! All sources are `Send + Sync`, so a generator built on any of them can be shared between
//! threads.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex};

/// Error type for randomness sources.
#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    /// The underlying source could not supply the requested bytes
    #[error("randomness source unavailable: {0}")]
    Unavailable(String),
    /// A previous holder of the source's lock panicked
    #[error("randomness source lock poisoned")]
    Poisoned,
}

/// Result type for randomness operations.
pub type EntropyResult<T> = Result<T, EntropyError>;

/// A capability that fills buffers with random bytes.
pub trait RandomSource: Send + Sync {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if the source cannot supply bytes. Callers must propagate the
    /// error and must not fall back to a fixed value.
    fn fill(&self, dest: &mut [u8]) -> EntropyResult<()>;
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn fill(&self, dest: &mut [u8]) -> EntropyResult<()> {
        (**self).fill(dest)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn fill(&self, dest: &mut [u8]) -> EntropyResult<()> {
        (**self).fill(dest)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn fill(&self, dest: &mut [u8]) -> EntropyResult<()> {
        (**self).fill(dest)
    }
}

/// Operating system CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> EntropyResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// Per-thread CSPRNG, reseeded periodically from the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadLocalRandom;

impl RandomSource for ThreadLocalRandom {
    fn fill(&self, dest: &mut [u8]) -> EntropyResult<()> {
        rand::thread_rng()
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// Deterministic source seeded from a `u64`.
///
/// Two sources built from the same seed yield the same byte stream. The inner generator sits
/// behind a mutex so one seeded source can be shared by several generators or threads.
#[derive(Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Creates a deterministic source from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Returns the seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn fill(&self, dest: &mut [u8]) -> EntropyResult<()> {
        let mut rng = self.rng.lock().map_err(|_| EntropyError::Poisoned)?;
        rng.try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}
