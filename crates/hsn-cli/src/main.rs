//! # hsn CLI entry point
//!
//! Parses command-line arguments, installs logging, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hsn_cli::classify::{run_classify, ClassifyArgs};
use hsn_cli::context::RunContext;
use hsn_cli::lookup::{run_lookup, LookupArgs};
use hsn_cli::stats::{run_stats, StatsArgs};
use hsn_cli::tool::{run_describe, run_tool, ToolArgs};

/// HSN code lookup and GST rate classification.
///
/// Loads an HSN sheet (CSV with columns containing "HSN" and "Description")
/// and answers code lookups with zero-padding and suffix fallbacks.
#[derive(Parser, Debug)]
#[command(name = "hsn", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// HSN data file (CSV). Overrides HSN_DATA_PATH and the config file.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up an HSN code and report its description and GST rate.
    Lookup(LookupArgs),

    /// Classify an HSN code into a GST rate without loading data.
    Classify(ClassifyArgs),

    /// Summarise the loaded HSN data.
    Stats(StatsArgs),

    /// Serve get_info requests as JSON lines on stdin/stdout.
    Tool(ToolArgs),

    /// Print the get_info tool descriptor.
    Describe,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("hsn CLI starting");

    match dispatch(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Run the selected subcommand. Config and data flags are only resolved for
/// subcommands that read the HSN sheet.
fn dispatch(cli: &Cli) -> anyhow::Result<u8> {
    let context = || RunContext::from_flags(cli.config.as_deref(), cli.data.clone());
    match &cli.command {
        Commands::Lookup(args) => run_lookup(args, &context()?),
        Commands::Classify(args) => run_classify(args),
        Commands::Stats(args) => run_stats(args, &context()?),
        Commands::Tool(args) => run_tool(args, &context()?),
        Commands::Describe => run_describe(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_lookup() {
        let cli = Cli::try_parse_from(["hsn", "lookup", "0101"]).unwrap();
        if let Commands::Lookup(args) = cli.command {
            assert_eq!(args.code, "0101");
            assert!(!args.json);
        } else {
            panic!("expected lookup");
        }
    }

    #[test]
    fn cli_parse_lookup_json_with_global_data() {
        let cli =
            Cli::try_parse_from(["hsn", "lookup", "101", "--json", "--data", "HSN_SAC.csv"])
                .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("HSN_SAC.csv")));
        if let Commands::Lookup(args) = cli.command {
            assert!(args.json);
        }
    }

    #[test]
    fn cli_parse_lookup_keeps_leading_zeros() {
        let cli = Cli::try_parse_from(["hsn", "lookup", "0001"]).unwrap();
        if let Commands::Lookup(args) = cli.command {
            assert_eq!(args.code, "0001");
        }
    }

    #[test]
    fn cli_parse_classify() {
        let cli = Cli::try_parse_from(["hsn", "classify", "2203", "--json"]).unwrap();
        if let Commands::Classify(args) = cli.command {
            assert_eq!(args.code, "2203");
            assert!(args.json);
        } else {
            panic!("expected classify");
        }
    }

    #[test]
    fn cli_parse_tool_max_requests() {
        let cli = Cli::try_parse_from(["hsn", "tool", "--max-requests", "3"]).unwrap();
        if let Commands::Tool(args) = cli.command {
            assert_eq!(args.max_requests, Some(3));
        }
    }

    #[test]
    fn cli_parse_describe_and_stats() {
        let cli = Cli::try_parse_from(["hsn", "describe"]).unwrap();
        assert!(matches!(cli.command, Commands::Describe));
        let cli = Cli::try_parse_from(["hsn", "stats", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["hsn", "describe"]).unwrap();
        assert_eq!(cli0.verbose, 0);
        let cli2 = Cli::try_parse_from(["hsn", "-vv", "describe"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_config_option() {
        let cli = Cli::try_parse_from(["hsn", "--config", "hsn.yaml", "describe"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("hsn.yaml")));
    }

    #[test]
    fn bad_config_only_fails_data_commands() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("hsn.yaml");
        std::fs::write(&yaml, "unknown_key: 1\n").unwrap();
        let config = yaml.to_str().unwrap();

        let cli = Cli::try_parse_from(["hsn", "--config", config, "classify", "2203"]).unwrap();
        assert_eq!(dispatch(&cli).unwrap(), 0);
        let cli = Cli::try_parse_from(["hsn", "--config", config, "describe"]).unwrap();
        assert_eq!(dispatch(&cli).unwrap(), 0);

        let cli = Cli::try_parse_from(["hsn", "--config", config, "lookup", "0101"]).unwrap();
        let err = dispatch(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("loading config"));
    }

    #[test]
    fn cli_parse_lookup_requires_code() {
        assert!(Cli::try_parse_from(["hsn", "lookup"]).is_err());
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["hsn"]).is_err());
    }
}
