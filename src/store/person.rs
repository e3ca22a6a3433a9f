//! Person record.

use serde::{Deserialize, Serialize};

/// A single contact in the address book.
///
/// `id` 0 means "not yet assigned"; the store assigns ids on create.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Person {
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub name: String,

    /// Canonical location of this record, derived from the request URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Person {
    /// Create an unassigned person with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            href: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.id != 0
    }
}
