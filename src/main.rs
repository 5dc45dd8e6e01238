use clap::Parser;
use flip_scout::cli::{Cli, Commands};
use flip_scout::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = flip_scout::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            tracing::info!("Starting listing analysis");
            args.execute(&config).await?;
        }
        Commands::Styles(args) => {
            tracing::info!("Looking up styles");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Decoder: {}", config.decoder.base_url);
            println!("  Valuation: {}", config.valuation.base_url);
            println!("  Catalog: {}", config.catalog.path.display());
            println!(
                "  Conditions: trade-in={}, private-party={}",
                config.analysis.trade_in_condition, config.analysis.private_party_condition
            );
            println!("  Assumed mileage: {}", config.analysis.assumed_mileage);
        }
    }

    Ok(())
}
