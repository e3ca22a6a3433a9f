//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Seed address book → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! The address book lives exactly as long as the process; nothing is
//! persisted on shutdown.

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
