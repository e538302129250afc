// src/main.rs
//! User Registry Server Entry Point
//! This binary is responsible for starting the HTTP API server.
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use user_registry::api::server::RegistryServer;
use user_registry::core::config::RegistryConfig;

#[derive(Parser)]
#[command(name = "user_registry")]
#[command(about = "User Registry Server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the registry server
    Server {
        /// Port to bind the server to
        #[arg(long, default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging()?;

    info!("Starting User Registry v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from config.toml or use defaults
    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using default configuration", e);
        RegistryConfig::default()
    });

    let server = RegistryServer::new(
        config.server.host.clone(),
        config.server.port,
        config.clone(),
    );

    match args.command {
        Some(Commands::Server { port }) => {
            info!("Starting server on port {}", port);
            let server_with_port = RegistryServer { port, ..server };
            server_with_port.start().await?;
        }
        None => {
            // Default behavior: start the server on the configured address
            info!(
                "No command specified, starting server on default port {}",
                server.port
            );
            server.start().await?;
        }
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=info,h2=info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Load configuration from config.toml (path overridable via CONFIG_PATH)
fn load_config() -> Result<RegistryConfig> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config = RegistryConfig::load(&config_path)?;
    info!("Loaded configuration from {}", config_path);
    Ok(config)
}
