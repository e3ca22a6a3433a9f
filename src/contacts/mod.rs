//! Contacts resource: the HTTP face of the address book.
//!
//! | Verb   | Path                   | Success               | Failure            |
//! |--------|------------------------|-----------------------|--------------------|
//! | GET    | /contacts              | 200 + address book    |                    |
//! | POST   | /contacts              | 201 + Location + body | 400 malformed      |
//! | GET    | /contacts/person/{id}  | 200 + person          | 404                |
//! | PUT    | /contacts/person/{id}  | 200 + person          | 400 unknown id     |
//! | DELETE | /contacts/person/{id}  | 204                   | 404                |

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod uri;

use axum::{routing::get, Router};

use crate::http::AppState;
use self::handlers::*;

pub use error::ContactsError;
pub use uri::RequestUri;

/// Routing table for the contacts resource.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_people).post(create_person))
        .route(
            "/contacts/person/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
}
