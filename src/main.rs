use anyhow::Result;
use clap::{Parser, Subcommand};

/// portfolio - personal portfolio site with a relayed contact form
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Serve a single-page portfolio with a working contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,

        /// Page content TOML file (overrides config file)
        #[arg(long)]
        profile: Option<String>,
    },
    /// Validate configuration, profile and relay settings
    Check {
        /// Page content TOML file (overrides config file)
        #[arg(long)]
        profile: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            profile,
        } => portfolio::cli::server::serve(config, host, port, profile).await,
        Commands::Check { profile } => portfolio::cli::check::check(&config, profile),
    }
}
