//! termdiff: Semantic terminology diff tool
//!
//! Compares two versions of a coded terminology and explores the
//! neighborhood of any code across both versions.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use termdiff::{
    cli::{self, exit_codes, DiffOptions, GraphPaths, NeighborhoodOptions},
    config::{AppConfig, ConfigOverrides, OutputFormat, Validatable},
    diff::DiffFilter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "termdiff")]
#[command(version)]
#[command(about = "Semantic terminology diff tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or no --fail-on-change)
    1  Changes detected
    2  Error occurred

EXAMPLES:
    # Summary of what changed between two releases
    termdiff diff v1.yaml v2.yaml

    # Codes present only in the new release
    termdiff diff v1.yaml v2.yaml --filter only-right

    # Two layers around one code, as JSON
    termdiff neighborhood v1.yaml v2.yaml --focus C0023884 --layers 2 -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the left (old) concept graph
    left: PathBuf,

    /// Path to the right (new) concept graph
    right: PathBuf,

    /// Output format
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Print only the codes selected by this filter
    #[arg(long, value_enum)]
    filter: Option<DiffFilter>,

    /// Treat differing display text as a change
    #[arg(long)]
    compare_display: bool,

    /// Property code to leave out of the comparison (repeatable)
    #[arg(long = "ignore-property", value_name = "CODE")]
    ignored_properties: Vec<String>,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `neighborhood` subcommand
#[derive(Parser)]
struct NeighborhoodArgs {
    /// Path to the left (old) concept graph
    left: PathBuf,

    /// Path to the right (new) concept graph
    right: PathBuf,

    /// Code to center the neighborhood on
    #[arg(short, long)]
    focus: String,

    /// Number of layers around the focus
    #[arg(short, long)]
    layers: Option<u32>,

    /// Show everything reachable from the focus
    #[arg(long, conflicts_with = "layers")]
    all: bool,

    /// Output format
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Treat differing display text as a change
    #[arg(long)]
    compare_display: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two concept graphs
    Diff(DiffArgs),

    /// Show the diff around one code
    Neighborhood(NeighborhoodArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Generate an example .termdiff.yaml in the current directory
    Init,
}

/// Merge file config with command-line overrides and validate the result.
fn effective_config(cli: &Cli, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }
    Ok(config)
}

fn no_color(cli: &Cli) -> bool {
    cli.no_color || std::env::var_os("NO_COLOR").is_some()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match &cli.command {
        Commands::Diff(args) => {
            let overrides = ConfigOverrides {
                compare_display: args.compare_display,
                ignored_properties: args.ignored_properties.clone(),
                output_format: args.output,
                no_color: no_color(&cli),
                ..ConfigOverrides::default()
            };
            let config = effective_config(&cli, &overrides)?;

            let options = DiffOptions {
                paths: GraphPaths {
                    left: args.left.clone(),
                    right: args.right.clone(),
                },
                filter: args.filter,
                fail_on_change: args.fail_on_change,
            };
            let exit_code = match cli::run_diff(&options, &config) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    exit_codes::ERROR
                }
            };
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Neighborhood(args) => {
            let overrides = ConfigOverrides {
                compare_display: args.compare_display,
                initial_layers: args.layers,
                output_format: args.output,
                no_color: no_color(&cli),
                ..ConfigOverrides::default()
            };
            let config = effective_config(&cli, &overrides)?;

            let options = NeighborhoodOptions {
                paths: GraphPaths {
                    left: args.left.clone(),
                    right: args.right.clone(),
                },
                focus: args.focus.clone(),
                all_layers: args.all,
            };
            if let Err(e) = cli::run_neighborhood(&options, &config) {
                eprintln!("Error: {e:#}");
                std::process::exit(exit_codes::ERROR);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "termdiff", &mut io::stdout());
            Ok(())
        }

        Commands::Schema { output } => {
            let schema = termdiff::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    termdiff::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".termdiff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = termdiff::config::generate_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
