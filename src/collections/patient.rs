//! Patient collection, the in-memory store
//!
//! Patients are keyed by their id. Insertion order is tracked alongside the
//! map so aggregation reports iterate patients deterministically; a
//! re-inserted id keeps its original slot.

use chrono::NaiveDate;
use log::warn;
use rustc_hash::FxHashMap;

use crate::models::{Patient, Visit};

/// Outcome of a remove operation
///
/// Absence is advisory, not an error; removing a missing patient is an
/// idempotent no-op the caller may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Patient and all owned visits and notes were dropped
    Removed,
    /// No patient with the given id
    NotFound,
}

/// Field selector for patient retrieval
///
/// Parsed case-insensitively from the caller's field name; exact match
/// only, no prefix or fuzzy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoRequest {
    /// The `gender` field
    Gender,
    /// The `race` field
    Race,
    /// The `age` field
    Age,
    /// The `ethnicity` field
    Ethnicity,
    /// The `insurance` field
    Insurance,
    /// The `zip_code` field
    ZipCode,
    /// The full visit list
    Visits,
    /// The whole record
    All,
}

impl InfoRequest {
    /// Parse a requested field name
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "gender" => Some(Self::Gender),
            "race" => Some(Self::Race),
            "age" => Some(Self::Age),
            "ethnicity" => Some(Self::Ethnicity),
            "insurance" => Some(Self::Insurance),
            "zip_code" => Some(Self::ZipCode),
            "visits" => Some(Self::Visits),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// A successfully retrieved piece of patient information
#[derive(Debug, Clone, Copy)]
pub enum PatientInfo<'a> {
    /// Gender of the patient
    Gender(&'a str),
    /// Race of the patient
    Race(&'a str),
    /// Age of the patient
    Age(u32),
    /// Ethnicity of the patient
    Ethnicity(&'a str),
    /// Insurance of the patient
    Insurance(&'a str),
    /// Postal code of the patient
    ZipCode(&'a str),
    /// All visits on record, in recording order
    Visits(&'a [Visit]),
    /// The whole patient record
    All(&'a Patient),
}

/// Outcome of a retrieve operation
#[derive(Debug)]
pub enum RetrieveOutcome<'a> {
    /// The requested information
    Info(PatientInfo<'a>),
    /// The field name is not one the store recognizes
    InvalidField,
    /// No patient with the given id
    NotFound,
}

/// In-memory store of all patients, keyed by patient id
#[derive(Debug, Default)]
pub struct PatientCollection {
    /// Patients indexed by id
    patients: FxHashMap<String, Patient>,
    /// Patient ids in first-insert order
    order: Vec<String>,
}

impl PatientCollection {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of patients in the store
    #[must_use]
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Whether the store holds no patients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Whether a patient with the given id is present
    #[must_use]
    pub fn contains(&self, patient_id: &str) -> bool {
        self.patients.contains_key(patient_id)
    }

    /// Look up a patient by id
    #[must_use]
    pub fn get(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    /// Look up a patient by id for mutation
    pub fn get_mut(&mut self, patient_id: &str) -> Option<&mut Patient> {
        self.patients.get_mut(patient_id)
    }

    /// Iterate patients in first-insert order
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.order.iter().filter_map(|id| self.patients.get(id))
    }

    /// Insert a patient, replacing any existing record with the same id
    ///
    /// Replacement is silent to the caller and drops the previous record's
    /// visits. The replaced id keeps its original report position.
    pub fn add_patient(&mut self, patient: Patient) {
        let patient_id = patient.patient_id.clone();
        if self.patients.insert(patient_id.clone(), patient).is_some() {
            warn!("replacing existing patient record {patient_id}");
        } else {
            self.order.push(patient_id);
        }
    }

    /// Remove a patient and all owned visits and notes
    pub fn remove_patient(&mut self, patient_id: &str) -> RemoveOutcome {
        if self.patients.remove(patient_id).is_some() {
            self.order.retain(|id| id != patient_id);
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        }
    }

    /// Retrieve a single field, the visit list, or the whole record
    ///
    /// An unknown patient id takes precedence over an unrecognized field
    /// name. Field names are matched per [`InfoRequest::parse`].
    #[must_use]
    pub fn retrieve_patient(&self, patient_id: &str, field: &str) -> RetrieveOutcome<'_> {
        let Some(patient) = self.patients.get(patient_id) else {
            return RetrieveOutcome::NotFound;
        };
        let Some(request) = InfoRequest::parse(field) else {
            return RetrieveOutcome::InvalidField;
        };
        let info = match request {
            InfoRequest::Gender => PatientInfo::Gender(&patient.gender),
            InfoRequest::Race => PatientInfo::Race(&patient.race),
            InfoRequest::Age => PatientInfo::Age(patient.age),
            InfoRequest::Ethnicity => PatientInfo::Ethnicity(&patient.ethnicity),
            InfoRequest::Insurance => PatientInfo::Insurance(&patient.insurance),
            InfoRequest::ZipCode => PatientInfo::ZipCode(&patient.zip_code),
            InfoRequest::Visits => PatientInfo::Visits(&patient.visits),
            InfoRequest::All => PatientInfo::All(patient),
        };
        RetrieveOutcome::Info(info)
    }

    /// Count visits across all patients whose calendar date equals `date`
    ///
    /// O(total visits); time of day is not modeled, so equality is plain
    /// date equality.
    #[must_use]
    pub fn count_visits_on_date(&self, date: NaiveDate) -> usize {
        self.patients
            .values()
            .map(|patient| {
                patient
                    .visits
                    .iter()
                    .filter(|visit| visit.visit_time == date)
                    .count()
            })
            .sum()
    }

    /// Total number of visits across all patients
    #[must_use]
    pub fn total_visits(&self) -> usize {
        self.patients.values().map(Patient::visit_count).sum()
    }
}
