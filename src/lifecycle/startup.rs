//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the address book (seeded from config)
//! - Start the metrics endpoint when enabled
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::store::{AddressBook, Person, SharedAddressBook};

/// Build the process-wide address book from config.
pub fn build_address_book(config: &ServiceConfig) -> SharedAddressBook {
    let people = config
        .address_book
        .seed
        .iter()
        .map(Person::named)
        .collect();
    let book = AddressBook::with_people(people);
    metrics::record_people(book.len());
    SharedAddressBook::new(book)
}

/// Run the service until SIGINT/SIGTERM.
pub async fn run(config: ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        public_base_url = ?config.listener.public_base_url,
        request_timeout_secs = config.timeouts.request_secs,
        seeded = config.address_book.seed.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let book = build_address_book(&config);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    HttpServer::new(config, book)
        .run(listener, shutdown.subscribe())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
