// src/value_objects.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::slugify::{generate_slug, is_valid_slug};

/// A validated URL path segment publicly identifying an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct EventSlug(String);

impl EventSlug {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when the value fails
    /// [`is_valid_slug`].
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if is_valid_slug(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(format!("invalid slug: {value:?}")))
        }
    }

    /// Derives a slug from a raw event name; never fails.
    ///
    /// Two different names can derive the same slug. Enforcing uniqueness is
    /// the job of whatever store the slug ends up in.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(generate_slug(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EventSlug> for String {
    fn from(value: EventSlug) -> Self {
        value.0
    }
}

impl TryFrom<String> for EventSlug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
