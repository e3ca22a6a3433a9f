//! Contacts resource handlers.
//!
//! Each handler takes the store lock once, performs one store operation and
//! releases the lock before rendering. Nothing read from the store outlives
//! the request.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Response,
};

use crate::contacts::error::ContactsError;
use crate::contacts::uri::RequestUri;
use crate::http::response;
use crate::http::AppState;
use crate::observability::metrics;
use crate::store::Person;

/// Decode a request body into a person. `id` and `href` are left as sent;
/// callers overwrite them.
pub fn decode_person(body: &[u8]) -> Result<Person, ContactsError> {
    Ok(serde_json::from_slice(body)?)
}

/// Parse a path id. Anything that is not an unsigned integer names no
/// resource.
pub fn parse_id(raw: &str) -> Result<u64, ContactsError> {
    raw.parse()
        .map_err(|_| ContactsError::NotFound(raw.to_string()))
}

/// GET /contacts
pub async fn list_people(State(state): State<AppState>) -> Response {
    let book = state.book.snapshot();
    response::ok(&book)
}

/// POST /contacts
///
/// Always appends, even for a payload identical to an earlier one.
pub async fn create_person(
    State(state): State<AppState>,
    uri: RequestUri,
    body: Bytes,
) -> Result<Response, ContactsError> {
    let mut person = decode_person(&body)?;

    let mut book = state.book.lock();
    person.id = book.next_id();
    person.href = Some(uri.child(&format!("person/{}", person.id)));
    book.add(person.clone());
    metrics::record_people(book.len());
    drop(book);

    tracing::info!(id = person.id, href = ?person.href, "Person created");
    Ok(response::created(person))
}

/// GET /contacts/person/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, ContactsError> {
    let id = parse_id(&raw)?;
    state
        .book
        .lock()
        .find_by_id(id)
        .cloned()
        .map(response::ok)
        .ok_or(ContactsError::NotFound(raw))
}

/// PUT /contacts/person/{id}
///
/// Replaces the whole record. The path id wins over any id in the body and
/// a missing target is rejected rather than created. The stored `href` is
/// rebuilt from the parsed id, whatever spelling the path used.
pub async fn update_person(
    State(state): State<AppState>,
    uri: RequestUri,
    Path(raw): Path<String>,
    body: Bytes,
) -> Result<Response, ContactsError> {
    let id = parse_id(&raw)?;
    let mut person = decode_person(&body)?;
    person.id = id;
    person.href = Some(uri.with_last_segment(&id.to_string()));

    if !state.book.lock().replace_by_id(id, person.clone()) {
        return Err(ContactsError::UpdateTargetMissing(id));
    }

    tracing::info!(id, "Person updated");
    Ok(response::ok(person))
}

/// DELETE /contacts/person/{id}
///
/// Deletes are not tombstoned: repeating one answers 404.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, ContactsError> {
    let id = parse_id(&raw)?;

    let mut book = state.book.lock();
    if !book.remove_by_id(id) {
        return Err(ContactsError::NotFound(raw));
    }
    metrics::record_people(book.len());
    drop(book);

    tracing::info!(id, "Person deleted");
    Ok(response::no_content())
}
