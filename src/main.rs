//! Harmonia - UI color palette generator
//!
//! Command-line front end for the palette engine: generate palettes around
//! locked colors, derive harmonies and ramps, check contrast, score palettes
//! and export them.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use harmonia::cli::{
    common::load_config, AnalyzeArgs, CliResult, ContrastArgs, ExportArgs, GenerateArgs,
    HarmonyArgs, ScaleArgs, SuggestArgs,
};
use harmonia::constants::{APP_BINARY_NAME, APP_NAME};

/// Harmonia - UI color palette generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read settings from this file instead of the default config location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a UI palette around optional locked colors
    Generate(GenerateArgs),
    /// Derive harmony colors from a base color
    Harmony(HarmonyArgs),
    /// Generate shades, tints or a monochromatic ramp
    Scale(ScaleArgs),
    /// Check WCAG contrast between two colors
    Contrast(ContrastArgs),
    /// Score a set of colors and describe each one
    Analyze(AnalyzeArgs),
    /// Rank harmony types for a set of locked colors
    Suggest(SuggestArgs),
    /// Export a palette JSON file to another format
    Export(ExportArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    // Only commands with configurable defaults touch the config file
    let config = || load_config(cli.config.as_deref());

    match &cli.command {
        Commands::Generate(args) => args.execute(&config()?),
        Commands::Harmony(args) => args.execute(&config()?),
        Commands::Suggest(args) => args.execute(&config()?),
        Commands::Export(args) => args.execute(&config()?),
        Commands::Scale(args) => args.execute(),
        Commands::Contrast(args) => args.execute(),
        Commands::Analyze(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so palette output on stdout stays pipeable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
