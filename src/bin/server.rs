//! RecordCat Server Binary
//!
//! Starts the HTTP server for RecordCat.

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use recordcat::network::Server;
use recordcat::{CatalogService, CatalogStore, Config, SeedMode};
use tracing_subscriber::{fmt, EnvFilter};

/// RecordCat Server
#[derive(Parser, Debug)]
#[command(name = "recordcat-server")]
#[command(about = "In-memory record catalog over HTTP")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Per-request timeout in milliseconds (0 disables)
    #[arg(short, long, default_value = "10000")]
    timeout_ms: u64,

    /// Maximum in-flight requests (0 means unlimited)
    #[arg(short = 'c', long, default_value = "1024")]
    concurrency_limit: usize,

    /// Initial catalog contents
    #[arg(short, long, value_enum, default_value = "default")]
    seed: Seed,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Seed {
    /// The built-in records
    Default,
    /// Start with no records
    Empty,
}

impl From<Seed> for SeedMode {
    fn from(seed: Seed) -> Self {
        match seed {
            Seed::Default => SeedMode::Default,
            Seed::Empty => SeedMode::Empty,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,recordcat=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("RecordCat Server v{}", recordcat::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .request_timeout_ms(args.timeout_ms)
        .concurrency_limit(args.concurrency_limit)
        .seed(args.seed.into())
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // Composition root: one store, shared by every request handler
    let store = match config.seed {
        SeedMode::Default => CatalogStore::seeded(),
        SeedMode::Empty => CatalogStore::empty(),
    };
    tracing::info!("Catalog initialized with {} records", store.len());

    let service = CatalogService::new(Arc::new(store));

    let server = Server::new(config, service);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
