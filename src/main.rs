use clap::Parser;
use tracing::{error, info};

use propertyhub_api::config::AppConfig;
use propertyhub_api::server::AppState;
use propertyhub_api::{db, logging, server};

#[derive(Parser)]
#[command(name = "propertyhub_api")]
#[command(about = "PropertyHub real-estate platform API server")]
#[command(version)]
struct Cli {
    /// Override the PORT environment variable
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env, if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let _log_guard = logging::init_logging();

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Some(port) = cli.port {
        config.port = port;
    }

    info!("Connecting to MongoDB");
    let db = match db::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            // Fatal at startup, no retry or backoff
            error!("{e}");
            std::process::exit(1);
        }
    };

    let state = AppState { db, config };
    if let Err(e) = server::start_server(state).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
