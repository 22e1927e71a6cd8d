//! Request shapers, one module per backend capability.
//!
//! Every module follows the same pattern: a typed wire record whose field
//! names are exactly what the backend expects, a pure function mapping caller
//! arguments onto that record and into a [`RequestEnvelope`], and a
//! `KnotClient` method that dispatches the envelope.
//!
//! [`RequestEnvelope`]: crate::domain::model::RequestEnvelope

pub mod corporate;
pub mod fto;
pub mod health;
pub mod landscape;
pub mod patents;
pub mod products;
pub mod query;
pub mod validity;

/// Percent-encodes one path segment so identifiers containing `/`, `?` or
/// spaces can't escape their slot in the URL. A bare `.` or `..` is escaped
/// too, otherwise it would read as a dot segment.
pub(crate) fn path_segment(raw: &str) -> String {
    match raw {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => urlencoding::encode(raw).into_owned(),
    }
}
