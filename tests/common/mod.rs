//! Shared utilities for integration testing.

use address_book::config::ServiceConfig;
use address_book::http::HttpServer;
use address_book::lifecycle::Shutdown;
use address_book::store::{AddressBook, Person, SharedAddressBook};
use tokio::net::TcpListener;

/// A running server on an ephemeral port. Shuts down on drop.
pub struct TestServer {
    pub base_url: String,
    pub book: SharedAddressBook,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server over `book` with default configuration.
pub async fn spawn_server(book: AddressBook) -> TestServer {
    spawn_server_with(ServiceConfig::default(), book).await
}

/// Start a server over `book` with the given configuration.
/// The configured bind address is ignored in favour of `127.0.0.1:0`.
pub async fn spawn_server_with(config: ServiceConfig, book: AddressBook) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let book = SharedAddressBook::new(book);
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, book.clone());
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        base_url: format!("http://{}", addr),
        book,
        shutdown,
    }
}

/// Client that never goes through an environment proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// A book holding the given names under ids 1..=n.
#[allow(dead_code)]
pub fn seeded(names: &[&str]) -> AddressBook {
    AddressBook::with_people(names.iter().map(|name| Person::named(*name)).collect())
}
