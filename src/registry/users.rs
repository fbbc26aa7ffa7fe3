//! Credential record schema
//!
//! Credential files are named-column rows of username, password, and role
//! triples. Unknown role strings are kept as-is; they authenticate but are
//! granted nothing.

use crate::error::Result;
use crate::models::{Role, User};
use crate::registry::{RawRecord, require_column};

/// Convert one credential row into a user
pub fn from_record(record: &RawRecord) -> Result<User> {
    Ok(User::new(
        require_column(record, "username")?.to_string(),
        require_column(record, "password")?.to_string(),
        Role::from(require_column(record, "role")?),
    ))
}

/// Ingest credential rows in file order
///
/// Duplicate usernames are kept; the authentication scan resolves them by
/// first match.
pub fn ingest<I>(rows: I) -> Result<Vec<User>>
where
    I: IntoIterator<Item = RawRecord>,
{
    rows.into_iter().map(|row| from_record(&row)).collect()
}
