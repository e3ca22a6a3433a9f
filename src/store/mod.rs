//! In-memory contact storage.
//!
//! # Data Flow
//! ```text
//! contacts handler
//!     → SharedAddressBook::lock() (one mutex for people + id counter)
//!     → AddressBook operation (find / add / replace / remove)
//!     → guard dropped before the response is rendered
//! ```
//!
//! # Design Decisions
//! - Ids are minted by the book and never reused, even after deletion
//! - Insertion order is preserved; lookups are linear scans
//! - The store performs no I/O, so every operation either applies fully or not at all

pub mod address_book;
pub mod person;

pub use address_book::{AddressBook, SharedAddressBook};
pub use person::Person;
