//! cellrepair - ask the CellRepair.AI agent network from the terminal

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{ask_command, init_command, schema_command, status_command, AskArgs};

/// CellRepair.AI collaborate client
#[derive(Parser)]
#[command(name = "cellrepair")]
#[command(about = "◆ Query the CellRepair.AI agent network")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config
    Init,
    /// Send a query to the collaborate endpoint
    Ask {
        /// Question or problem statement
        query: String,
        /// Context as a JSON object
        #[arg(short, long)]
        context: Option<String>,
        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<f64>,
        /// API key (overrides CELLREPAIR_API_KEY and config)
        #[arg(long)]
        api_key: Option<String>,
        /// Endpoint URL (overrides config)
        #[arg(long)]
        endpoint: Option<String>,
        /// Fail instead of answering with an error when no key is set
        #[arg(long)]
        strict: bool,
        /// Include implementation time and ROI estimate
        #[arg(long)]
        detailed: bool,
    },
    /// Show configuration status
    Status,
    /// Print the tool definition for agent frameworks
    Schema,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init => {
            if let Err(e) = init_command().await {
                error!("Init failed: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Ask {
            query,
            context,
            timeout,
            api_key,
            endpoint,
            strict,
            detailed,
        } => {
            let args = AskArgs {
                query,
                context,
                timeout,
                api_key,
                endpoint,
                strict,
                detailed,
            };
            match ask_command(args).await {
                Ok(output) => {
                    println!("{}", output);
                    if output.starts_with("Error: ") {
                        std::process::exit(2);
                    }
                }
                Err(e) => {
                    error!("Ask failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Status => {
            if let Err(e) = status_command().await {
                error!("Status failed: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Schema => {
            if let Err(e) = schema_command().await {
                error!("Schema failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}
