//! Credential checks and role-gated operation permissions
//!
//! Authentication is a linear scan over the loaded credential list; a miss
//! is an ordinary `None`, never an error. Authorization is a static
//! per-role permission table over the five store operations.

use crate::models::{Role, User};

/// The operations the surrounding menu can ask the store to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Create a patient, or append a visit to an existing one
    AddPatient,
    /// Remove a patient and all owned records
    RemovePatient,
    /// Look up a patient field, visit list, or full record
    RetrievePatient,
    /// Count visits on a calendar date
    CountVisits,
    /// Produce the aggregation reports
    GenerateStatistics,
}

impl Role {
    /// Whether this role may invoke the given operation
    ///
    /// Unknown roles authenticate but are permitted nothing.
    #[must_use]
    pub fn permits(&self, action: Action) -> bool {
        match self {
            Self::Management => matches!(action, Action::GenerateStatistics),
            Self::Admin => matches!(action, Action::CountVisits),
            Self::Nurse | Self::Clinician => matches!(
                action,
                Action::AddPatient
                    | Action::RemovePatient
                    | Action::RetrievePatient
                    | Action::CountVisits
            ),
            Self::Other(_) => false,
        }
    }
}

/// Match a credential pair against the user list
///
/// First exact (username, password) match wins, so duplicate usernames
/// shadow later entries.
#[must_use]
pub fn authenticate<'a>(users: &'a [User], username: &str, password: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|user| user.username == username && user.password == password)
}
