//! Note entity model

use serde::{Deserialize, Serialize};

/// A clinical note attached to a visit
///
/// Notes carry no behavior; no operation in this system queries them, but
/// the entity graph models them for completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Note identifier
    pub note_id: String,
    /// Free-form note type label
    pub note_type: String,
}

impl Note {
    /// Create a new note
    #[must_use]
    pub const fn new(note_id: String, note_type: String) -> Self {
        Self { note_id, note_type }
    }
}
