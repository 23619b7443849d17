use anyhow::Result;
use clap::{Parser, Subcommand};

/// jungmarker - contact form relay
#[derive(Parser)]
#[command(name = "jungmarker")]
#[command(about = "Relays website contact forms to Airtable, email and SMS", long_about = None)]
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
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Credentials may live in a .env file in the working directory
    jungmarker::Config::load_env_file(None)?;

    let config = jungmarker::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    jungmarker::observability::init_observability(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => jungmarker::cli::serve(config, host, port).await,
    }
}
