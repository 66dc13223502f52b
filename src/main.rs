//! Items API - CRUD operations over an in-memory item collection

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use items_api::api::{self, ApiDoc, AppState};
use items_api::config::Config;
use items_api::store::ItemStore;

#[derive(Parser)]
#[command(name = "items-api")]
#[command(about = "CRUD operations over an in-memory item collection")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the OpenAPI document
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("items_api={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = Config::load(cli.config.as_deref())?;
            config.apply_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let state = AppState::new(ItemStore::new());
            let router = api::create_router(state, &config);

            let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
            tracing::info!("Server is running on {}", listener.local_addr()?);

            println!("Items API running at http://localhost:{}", config.port);
            println!("  Items:    http://localhost:{}/items", config.port);
            println!("  API Docs: http://localhost:{}/docs", config.port);
            println!("  Health:   http://localhost:{}/health", config.port);

            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    tokio::signal::ctrl_c().await.ok();
                    tracing::info!("Shutting down...");
                })
                .await?;
        }

        Commands::Openapi => {
            println!("{}", ApiDoc::openapi().to_pretty_json()?);
        }
    }

    Ok(())
}
