//! CLI command handlers for harmonia.
//!
//! Each subcommand lives in its own module as a clap `Args` struct with an
//! `execute` method. Handlers print results to stdout and report failures as
//! [`CliError`], which `main` maps to an exit code.

pub mod analyze;
pub mod common;
pub mod contrast;
pub mod export;
pub mod generate;
pub mod harmony;
pub mod scale;
pub mod suggest;

// Re-export types used by main.rs and tests
pub use analyze::AnalyzeArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use contrast::ContrastArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use harmony::HarmonyArgs;
pub use scale::ScaleArgs;
pub use suggest::SuggestArgs;
