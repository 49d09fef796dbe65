use clap::{Args, Parser, Subcommand, ValueEnum};
use idkit_core::config::{seed_from_env_value, DEFAULT_LOG_DIRECTIVE, SEED_ENV_VAR};
use idkit_core::CoreConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "idkit")]
#[command(about = "Identifier generation and integer parsing tools")]
struct Cli {
    /// Seed for reproducible identifiers (decimal, or 0x/0o/0b prefixed)
    #[arg(long, global = true, env = SEED_ENV_VAR)]
    seed: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate identifiers
    Uuid(UuidArgs),
    /// Parse an integer and print it in decimal
    Parse {
        /// Token to parse, optionally signed
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Base 2-36, or 0 to infer it from a 0x/0o/0b/0 prefix
        #[arg(long, default_value_t = 0)]
        base: u32,
        /// Bit width the result must fit (0 means 64)
        #[arg(long, default_value_t = 64)]
        bits: u32,
        /// Parse as unsigned
        #[arg(long)]
        unsigned: bool,
    },
    /// Print an integer in another base
    Format {
        /// Value to format (decimal, or 0x/0o/0b prefixed)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Target base 2-36
        #[arg(long, default_value_t = 16)]
        base: u32,
    },
    /// Print two identifiers and two parsed integers
    Demo,
}

/// Generator major version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Module {
    V3,
    V4,
}

#[derive(Args, Debug)]
struct UuidArgs {
    /// Generator major version to use
    #[arg(long, value_enum, default_value_t = Module::V4)]
    module: Module,
    /// Identifier version: 3, 4, 5 or 7 (7 needs --module v4)
    #[arg(long = "version", default_value_t = 4)]
    id_version: u8,
    /// Namespace for versions 3 and 5: dns, url, oid, x500 or an identifier
    #[arg(long, default_value = "dns")]
    namespace: String,
    /// Name for versions 3 and 5
    #[arg(long)]
    name: Option<String>,
    /// Number of identifiers to generate
    #[arg(
        long,
        short = 'n',
        default_value_t = 1,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(1..=commands::MAX_UUID_COUNT as u64)
    )]
    count: usize,
    /// Print a JSON array instead of one identifier per line
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CoreConfig::new(
        seed_from_env_value(cli.seed)?,
        DEFAULT_LOG_DIRECTIVE.into(),
    )?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_directive().parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if config.seed().is_some() {
        tracing::warn!("using seeded randomness; identifiers are predictable");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(command) => commands::execute(command, &config, &mut out),
        None => {
            println!("Use 'idkit --help' for commands");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["idkit"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_uuid_defaults() {
        let cli = Cli::try_parse_from(["idkit", "uuid"]).unwrap();

        match cli.command {
            Some(Commands::Uuid(args)) => {
                assert_eq!(args.module, Module::V4);
                assert_eq!(args.id_version, 4);
                assert_eq!(args.count, 1);
                assert_eq!(args.namespace, "dns");
                assert!(!args.json);
            }
            _ => panic!("Expected uuid command"),
        }
    }

    #[test]
    fn test_uuid_flags() {
        let cli = Cli::try_parse_from([
            "idkit", "uuid", "--module", "v3", "--version", "5", "--name", "example.org", "-n",
            "3", "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Uuid(args)) => {
                assert_eq!(args.module, Module::V3);
                assert_eq!(args.id_version, 5);
                assert_eq!(args.name.as_deref(), Some("example.org"));
                assert_eq!(args.count, 3);
                assert!(args.json);
            }
            _ => panic!("Expected uuid command"),
        }
    }

    #[test]
    fn test_parse_accepts_negative_token() {
        let cli = Cli::try_parse_from(["idkit", "parse", "-0x2A", "--bits", "8"]).unwrap();

        match cli.command {
            Some(Commands::Parse {
                text,
                base,
                bits,
                unsigned,
            }) => {
                assert_eq!(text, "-0x2A");
                assert_eq!(base, 0);
                assert_eq!(bits, 8);
                assert!(!unsigned);
            }
            _ => panic!("Expected parse command"),
        }
    }

    #[test]
    fn test_global_seed_flag() {
        let cli = Cli::try_parse_from(["idkit", "demo", "--seed", "0x2A"]).unwrap();
        assert_eq!(cli.seed.as_deref(), Some("0x2A"));
        assert!(matches!(cli.command, Some(Commands::Demo)));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["idkit", "unknown"]).is_err());
    }

    #[test]
    fn test_uuid_count_is_bounded() {
        assert!(Cli::try_parse_from(["idkit", "uuid", "-n", "18446744073709551615"]).is_err());
        assert!(Cli::try_parse_from(["idkit", "uuid", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["idkit", "uuid", "-n", "100001"]).is_err());

        let cli = Cli::try_parse_from(["idkit", "uuid", "-n", "100000"]).unwrap();
        match cli.command {
            Some(Commands::Uuid(args)) => assert_eq!(args.count, 100_000),
            _ => panic!("Expected uuid command"),
        }
    }

    #[test]
    fn test_unknown_module_is_rejected() {
        assert!(Cli::try_parse_from(["idkit", "uuid", "--module", "v5"]).is_err());
    }
}
