//! Visit entity model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::note::Note;

/// A single clinical visit owned by exactly one patient
///
/// Visits are append-only: once attached to a patient they are never
/// mutated or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    /// Visit identifier, unique only within the owning patient's visit list
    pub visit_id: String,
    /// Calendar date of the visit; time of day is not modeled
    pub visit_time: NaiveDate,
    /// Department the visit was registered under
    pub department: String,
    /// Chief complaint recorded at intake
    pub chief_complaint: String,
    /// Notes attached to the visit, in the order they were added
    pub notes: Vec<Note>,
}

impl Visit {
    /// Create a visit with no notes
    #[must_use]
    pub const fn new(
        visit_id: String,
        visit_time: NaiveDate,
        department: String,
        chief_complaint: String,
    ) -> Self {
        Self {
            visit_id,
            visit_time,
            department,
            chief_complaint,
            notes: Vec::new(),
        }
    }

    /// Append a note to the end of the note list
    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }
}
