//! Slug generation and validation for Gatherly event URLs.
//!
//! Event names are arbitrary user text; public event URLs need a constrained
//! path segment. [`generate_slug`] maps any name onto a token of lowercase
//! ASCII letters, digits and hyphens, 3 to 100 characters long, falling back
//! to a fixed literal when the name reduces to nothing. [`is_valid_slug`]
//! checks the same constraint set, and [`EventSlug`] wraps a checked token as
//! a domain value object.
//!
//! Slug uniqueness is deliberately out of scope: two names can collide, and
//! the store that persists slugs is responsible for detecting that.

pub mod errors;
pub mod slugify;
pub mod util;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
pub use slugify::{FALLBACK_SLUG, MAX_SLUG_LEN, MIN_SLUG_LEN, generate_slug, is_valid_slug};
pub use util::{DefaultSlugGenerator, SlugGenerator};
pub use value_objects::EventSlug;
