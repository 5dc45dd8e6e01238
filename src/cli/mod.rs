//! CLI interface for flip-scout
//!
//! Provides subcommands for:
//! - `analyze`: run a listing through the full pipeline
//! - `styles`: list the style catalog for a vehicle, optionally price one
//! - `config`: show current configuration

mod analyze;
mod styles;

pub use analyze::AnalyzeArgs;
pub use styles::StylesArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flip-scout")]
#[command(about = "Used-car flip analyzer for marketplace listings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a listing end to end
    Analyze(AnalyzeArgs),
    /// List styles for a vehicle, optionally pricing one
    Styles(StylesArgs),
    /// Show current configuration
    Config,
}
