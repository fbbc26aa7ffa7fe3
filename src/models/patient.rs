//! Patient entity model

use serde::{Deserialize, Serialize};

use crate::models::visit::Visit;

/// Core patient record
///
/// Demographic fields stay the raw strings they were ingested with;
/// aggregation groups on exact string equality, so no normalization is
/// applied here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Unique patient identifier, the store key
    pub patient_id: String,
    /// Gender as recorded in the source
    pub gender: String,
    /// Race as recorded in the source
    pub race: String,
    /// Age in whole years
    pub age: u32,
    /// Ethnicity as recorded in the source
    pub ethnicity: String,
    /// Insurance carrier or payment category
    pub insurance: String,
    /// Postal code as recorded in the source
    pub zip_code: String,
    /// Visits in the order they were recorded
    pub visits: Vec<Visit>,
}

impl Patient {
    /// Create a patient with no visits
    #[must_use]
    pub const fn new(
        patient_id: String,
        gender: String,
        race: String,
        age: u32,
        ethnicity: String,
        insurance: String,
        zip_code: String,
    ) -> Self {
        Self {
            patient_id,
            gender,
            race,
            age,
            ethnicity,
            insurance,
            zip_code,
            visits: Vec::new(),
        }
    }

    /// Append a visit to the end of the visit list
    ///
    /// No deduplication and no reordering; callers wanting a fresh visit id
    /// go through the id generator first.
    pub fn add_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    /// Number of visits on record
    #[must_use]
    pub fn visit_count(&self) -> usize {
        self.visits.len()
    }

    /// Whether any of this patient's visits carries the given id
    #[must_use]
    pub fn has_visit_id(&self, visit_id: &str) -> bool {
        self.visits.iter().any(|visit| visit.visit_id == visit_id)
    }
}
