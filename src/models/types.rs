//! Common domain type definitions
//!
//! Shared enum types used across the record model.

use serde::{Deserialize, Serialize};

/// Role attached to a credential entry
///
/// The four known roles gate which store operations the menu may invoke.
/// Any other role string is kept verbatim: it still authenticates, but is
/// granted no operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Statistics reporting only
    Management,
    /// Date-scoped visit counting only
    Admin,
    /// Full patient record loop
    Nurse,
    /// Full patient record loop
    Clinician,
    /// Unrecognized role string, preserved as loaded
    Other(String),
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        // Exact match; role strings are not trimmed or case-folded
        match s {
            "management" => Self::Management,
            "admin" => Self::Admin,
            "nurse" => Self::Nurse,
            "clinician" => Self::Clinician,
            other => Self::Other(other.to_string()),
        }
    }
}
