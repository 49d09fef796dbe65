//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the demo and CLI
//! commands. Binaries read the environment; nothing below this module does.

use crate::{CoreError, CoreResult};
use idkit_entropy::{OsRandom, RandomSource, SeededRandom};
use idkit_numparse::parse_uint;

/// Log filter applied when `RUST_LOG` does not override it.
pub const DEFAULT_LOG_DIRECTIVE: &str = "idkit=info";

/// Environment variable holding an optional generator seed.
pub const SEED_ENV_VAR: &str = "IDKIT_SEED";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    seed: Option<u64>,
    log_directive: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_directive: DEFAULT_LOG_DIRECTIVE.into(),
        }
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(seed: Option<u64>, log_directive: String) -> CoreResult<Self> {
        if log_directive.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "log_directive cannot be empty".into(),
            ));
        }

        Ok(Self {
            seed,
            log_directive,
        })
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn log_directive(&self) -> &str {
        &self.log_directive
    }

    /// Build the randomness source for one generator.
    ///
    /// Without a seed every call returns the operating system CSPRNG. With a seed, each
    /// `stream` gets its own deterministic source (`seed + stream`), so two generators never
    /// share state or repeat each other's output.
    pub fn random_source(&self, stream: u64) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed.wrapping_add(stream))),
            None => Box::new(OsRandom),
        }
    }
}

/// Parse the generator seed from an optional string value.
///
/// `None` or empty/whitespace means no seed. Otherwise the value is parsed as an unsigned
/// 64-bit integer with its base inferred from the prefix, so `42`, `0x2a` and `0b101010` are
/// all accepted.
pub fn seed_from_env_value(value: Option<String>) -> CoreResult<Option<u64>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    value
        .map(|v| {
            parse_uint(&v, 0, 64).map_err(|e| {
                CoreError::InvalidConfig(format!("{} is not a valid seed: {}", SEED_ENV_VAR, e))
            })
        })
        .transpose()
}
