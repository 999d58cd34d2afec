//! Domain services used by the HTML and JSON routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the backend calls and the user-facing wording of
//! their outcomes so route handlers can stay focused on protocol
//! translation.

pub mod fichaje;
pub mod listado;
pub mod registro;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Stand-in when a timestamp cannot be formatted; still valid RFC 3339.
const EPOCH_RFC3339: &str = "1970-01-01T00:00:00Z";

/// Current UTC time as RFC 3339, the format every timestamp column expects.
pub(crate) fn now_rfc3339() -> String {
    format_rfc3339(OffsetDateTime::now_utc())
}

fn format_rfc3339(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_else(|_| EPOCH_RFC3339.to_owned())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
