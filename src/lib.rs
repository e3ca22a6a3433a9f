//! Address book resource server library.

pub mod config;
pub mod contacts;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{AddressBook, Person, SharedAddressBook};
