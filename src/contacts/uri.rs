//! Absolute request URI, used to derive person `href`s.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap, Uri};
use std::convert::Infallible;

use crate::http::AppState;

/// The absolute form of the request path, without query.
///
/// Scheme and authority come from the configured public base URL when set,
/// otherwise from the request target or its `Host` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUri {
    absolute_path: String,
}

impl RequestUri {
    pub fn resolve(public_base_url: Option<&str>, headers: &HeaderMap, uri: &Uri) -> Self {
        let origin = match public_base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => {
                let scheme = uri.scheme_str().unwrap_or("http");
                let authority = uri
                    .authority()
                    .map(|a| a.as_str())
                    .or_else(|| headers.get(header::HOST).and_then(|h| h.to_str().ok()))
                    .unwrap_or("localhost");
                format!("{}://{}", scheme, authority)
            }
        };

        Self {
            absolute_path: format!("{}{}", origin, uri.path()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.absolute_path
    }

    /// Replace the last path segment with `segment`.
    ///
    /// Used to canonicalize item URIs: `/person/+2`, `/person/02` and
    /// `/person/%32` all name person 2.
    pub fn with_last_segment(&self, segment: &str) -> String {
        match self.absolute_path.rsplit_once('/') {
            Some((parent, _)) => format!("{}/{}", parent, segment),
            None => self.child(segment),
        }
    }

    /// Append `segment` below this path, tolerating a trailing slash.
    pub fn child(&self, segment: &str) -> String {
        format!("{}/{}", self.absolute_path.trim_end_matches('/'), segment)
    }
}

impl FromRequestParts<AppState> for RequestUri {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self::resolve(
            state.public_base_url.as_deref(),
            &parts.headers,
            &parts.uri,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn host(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_uses_host_header() {
        let uri: Uri = "/contacts?verbose=1".parse().unwrap();
        let resolved = RequestUri::resolve(None, &host("localhost:8282"), &uri);
        assert_eq!(resolved.as_str(), "http://localhost:8282/contacts");
        assert_eq!(resolved.child("person/1"), "http://localhost:8282/contacts/person/1");
    }

    #[test]
    fn test_trailing_slash() {
        let uri: Uri = "/contacts/".parse().unwrap();
        let resolved = RequestUri::resolve(None, &host("localhost:8282"), &uri);
        assert_eq!(resolved.child("person/2"), "http://localhost:8282/contacts/person/2");
    }

    #[test]
    fn test_item_uri_is_canonical() {
        for path in ["/contacts/person/2", "/contacts/person/+2", "/contacts/person/02", "/contacts/person/%32"] {
            let uri: Uri = path.parse().unwrap();
            let resolved = RequestUri::resolve(None, &host("localhost:8282"), &uri);
            assert_eq!(
                resolved.with_last_segment("2"),
                "http://localhost:8282/contacts/person/2",
                "{}",
                path
            );
        }
    }

    #[test]
    fn test_public_base_url_wins() {
        let uri: Uri = "/contacts/person/2".parse().unwrap();
        let resolved = RequestUri::resolve(
            Some("https://contacts.example.com/"),
            &host("10.0.0.5:8282"),
            &uri,
        );
        assert_eq!(resolved.as_str(), "https://contacts.example.com/contacts/person/2");
    }

    #[test]
    fn test_absolute_form_target() {
        let uri: Uri = "http://example.org:8080/contacts".parse().unwrap();
        let resolved = RequestUri::resolve(None, &HeaderMap::new(), &uri);
        assert_eq!(resolved.as_str(), "http://example.org:8080/contacts");
    }

    #[test]
    fn test_missing_host() {
        let uri: Uri = "/contacts".parse().unwrap();
        let resolved = RequestUri::resolve(None, &HeaderMap::new(), &uri);
        assert_eq!(resolved.as_str(), "http://localhost/contacts");
    }
}
