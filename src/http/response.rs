//! Response shaping for the contacts resource.
//!
//! # Design Decisions
//! - Successful bodies are JSON; `Content-Type: application/json` via `axum::Json`
//! - Error and 204 responses carry no body

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::store::Person;

/// 201 Created with `Location` set to the person's `href`.
pub fn created(person: Person) -> Response {
    let location = person
        .href
        .as_deref()
        .and_then(|href| HeaderValue::from_str(href).ok());

    match location {
        Some(location) => (
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(person),
        )
            .into_response(),
        None => {
            tracing::warn!(id = person.id, "Created person has no usable href for Location");
            (StatusCode::CREATED, Json(person)).into_response()
        }
    }
}

/// 200 OK with a JSON body.
pub fn ok<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// 204 No Content.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
