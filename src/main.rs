use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idkit_core::{Demo, config::DEFAULT_LOG_DIRECTIVE};

/// Main entry point for the idkit demo
///
/// Prints two random identifiers (one from each major version of the generator) and then the
/// results of parsing `"2A"` in base 16 and `"0x2A"` with an inferred base.
///
/// Stdout carries only those four lines; logs go to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: log filter (default: "idkit=info")
///
/// # Returns
/// * `Ok(())` - If all four lines were printed
/// * `Err(anyhow::Error)` - If generation, parsing or writing fails; the process exits non-zero
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    Demo::new().run(&mut out)?;

    Ok(())
}
