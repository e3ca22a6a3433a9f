//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → contacts routing table (verb + path → handler)
//!     → response.rs (status, Location, JSON body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id_of, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
