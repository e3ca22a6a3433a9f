//! Address book resource server.
//!
//! Serves a shared, in-memory collection of people over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http::server (request id, trace, timeout)  │
//!                           │        │                                     │
//!                           │        ▼                                     │
//!                           │   contacts router (verb + path → handler)    │
//!                           │        │                                     │
//!                           │        ▼                                     │
//!                           │   store::SharedAddressBook (one mutex)       │
//!                           │        │                                     │
//!     Client Response       │        ▼                                     │
//!     ◀─────────────────────┼── http::response (status, Location, JSON)   │
//!                           └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use address_book::config::validation::validate_config;
use address_book::config::{load_config, ConfigError, ServiceConfig};
use address_book::lifecycle::startup;
use address_book::observability::logging;

#[derive(Parser)]
#[command(name = "address-book")]
#[command(about = "In-memory address book served over HTTP", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability);
    tracing::info!("address-book v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await
}
