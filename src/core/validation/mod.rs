//! Validation for mutation input
//!
//! Form payloads are checked declaratively before any write: reusable field
//! validators in [`validators`], the invoice schema that applies them and
//! collects every offending field in [`schema`].

pub mod schema;
pub mod validators;

pub use schema::parse_invoice;
