//! # idkit Core
//!
//! Shared runtime pieces for the idkit binaries:
//! - Startup configuration resolved once and passed into the demo (`config`)
//! - The identifier and parsing demo flow (`demo`)
//! - A unified error type wrapping every library failure
//!
//! Identifier generation itself lives in the two generator crates, which this crate links side
//! by side as `idgen_v3` and `idgen_v4`. Integer parsing lives in `idkit-numparse`.

pub mod config;
pub mod demo;
mod error;

pub use config::CoreConfig;
pub use demo::Demo;
pub use error::{CoreError, CoreResult};
