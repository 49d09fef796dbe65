//! Command execution.
//!
//! Every command writes its results to the supplied writer so it can be driven from tests.

use crate::{Commands, Module, UuidArgs};
use anyhow::{bail, Context};
use idkit_core::{CoreConfig, Demo};
use idkit_numparse::{format_int, parse_int, parse_uint};
use std::fmt::Display;
use std::io::Write;

/// Randomness stream for each generator module; see [`CoreConfig::random_source`].
const V4_STREAM: u64 = 0;
const V3_STREAM: u64 = 1;

/// Upper bound on `uuid --count`.
pub(crate) const MAX_UUID_COUNT: usize = 100_000;

pub(crate) fn execute<W: Write>(
    command: Commands,
    config: &CoreConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Commands::Uuid(args) => {
            for line in generate(&args, config)? {
                writeln!(out, "{}", line)?;
            }
        }
        Commands::Parse {
            text,
            base,
            bits,
            unsigned,
        } => {
            if unsigned {
                writeln!(out, "{}", parse_uint(&text, base, bits)?)?;
            } else {
                writeln!(out, "{}", parse_int(&text, base, bits)?)?;
            }
        }
        Commands::Format { value, base } => {
            let value = parse_int(&value, 0, 64)?;
            writeln!(out, "{}", format_int(value, base)?)?;
        }
        Commands::Demo => {
            Demo::from_config(config).run(out)?;
        }
    }

    Ok(())
}

fn generate(args: &UuidArgs, config: &CoreConfig) -> anyhow::Result<Vec<String>> {
    if !(1..=MAX_UUID_COUNT).contains(&args.count) {
        bail!("--count must be between 1 and {}", MAX_UUID_COUNT);
    }

    match (args.module, args.id_version) {
        (_, 3 | 4 | 5) | (Module::V4, 7) => {}
        (Module::V3, 7) => bail!("identifier version 7 needs --module v4"),
        (_, other) => bail!("unsupported identifier version {}", other),
    }

    match args.module {
        Module::V4 => generate_v4(args, config),
        Module::V3 => generate_v3(args, config),
    }
}

fn generate_v4(args: &UuidArgs, config: &CoreConfig) -> anyhow::Result<Vec<String>> {
    let generator = idgen_v4::Generator::with_source(config.random_source(V4_STREAM));
    let mut ids = Vec::with_capacity(args.count);
    let mut last: Option<idgen_v4::UniqueId> = None;

    for _ in 0..args.count {
        let id = match args.id_version {
            3 => generator.new_v3(&namespace_v4(&args.namespace)?, name(args)?),
            5 => generator.new_v5(&namespace_v4(&args.namespace)?, name(args)?),
            7 => generator.new_v7_after(last.as_ref())?,
            _ => generator.new_v4()?,
        };
        last = Some(id);
        ids.push(id);
    }

    render(&ids, args.json)
}

fn generate_v3(args: &UuidArgs, config: &CoreConfig) -> anyhow::Result<Vec<String>> {
    let generator = idgen_v3::Generator::with_source(config.random_source(V3_STREAM));
    let mut ids = Vec::with_capacity(args.count);

    for _ in 0..args.count {
        let id = match args.id_version {
            3 => generator.new_v3(&namespace_v3(&args.namespace)?, name(args)?),
            5 => generator.new_v5(&namespace_v3(&args.namespace)?, name(args)?),
            _ => generator.new_v4()?,
        };
        ids.push(id);
    }

    render(&ids, args.json)
}

fn name(args: &UuidArgs) -> anyhow::Result<&str> {
    args.name
        .as_deref()
        .context("identifier versions 3 and 5 need --name")
}

fn namespace_v4(value: &str) -> anyhow::Result<idgen_v4::UniqueId> {
    Ok(match value.to_ascii_lowercase().as_str() {
        "dns" => idgen_v4::NAMESPACE_DNS,
        "url" => idgen_v4::NAMESPACE_URL,
        "oid" => idgen_v4::NAMESPACE_OID,
        "x500" => idgen_v4::NAMESPACE_X500,
        _ => idgen_v4::UniqueId::parse(value)?,
    })
}

fn namespace_v3(value: &str) -> anyhow::Result<idgen_v3::UniqueId> {
    Ok(match value.to_ascii_lowercase().as_str() {
        "dns" => idgen_v3::NAMESPACE_DNS,
        "url" => idgen_v3::NAMESPACE_URL,
        "oid" => idgen_v3::NAMESPACE_OID,
        "x500" => idgen_v3::NAMESPACE_X500,
        _ => idgen_v3::UniqueId::parse(value)?,
    })
}

fn render<T: Display + serde::Serialize>(ids: &[T], json: bool) -> anyhow::Result<Vec<String>> {
    if json {
        return Ok(vec![serde_json::to_string(ids)?]);
    }
    Ok(ids.iter().map(ToString::to_string).collect())
}
