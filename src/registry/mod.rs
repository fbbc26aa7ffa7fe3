//! Ingestion of raw records into the record model
//!
//! Each source format owns its column mapping and row conversion. All
//! formats normalize into the same [`VisitRecord`] shape before the store
//! is built, so equivalent data produces an identical in-memory store
//! regardless of which format delivered it.
//!
//! The registry consumes already-tokenized rows; file access and line
//! splitting live in the loader.

pub mod users;
pub mod visit_csv;
pub mod visit_txt;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::collections::PatientCollection;
use crate::error::{ClinicStoreError, Result};
use crate::models::{Patient, Visit};

/// A tokenized input row: column name to raw string value
pub type RawRecord = HashMap<String, String>;

/// Date format shared by both record schemas
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The two supported patient record schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Tabular form with named columns
    VisitCsv,
    /// Positional delimited form with a fixed column order
    VisitTxt,
}

/// One normalized row: patient demographics plus a single visit
#[derive(Debug, Clone)]
pub struct VisitRecord {
    /// Patient identifier
    pub patient_id: String,
    /// Gender string
    pub gender: String,
    /// Race string
    pub race: String,
    /// Age in whole years
    pub age: u32,
    /// Ethnicity string
    pub ethnicity: String,
    /// Insurance string
    pub insurance: String,
    /// Postal code string
    pub zip_code: String,
    /// Visit identifier
    pub visit_id: String,
    /// Calendar date of the visit
    pub visit_time: NaiveDate,
    /// Department of the visit
    pub department: String,
    /// Chief complaint of the visit
    pub chief_complaint: String,
}

impl VisitRecord {
    /// Build the patient this record describes, without any visits yet
    fn to_patient(&self) -> Patient {
        Patient::new(
            self.patient_id.clone(),
            self.gender.clone(),
            self.race.clone(),
            self.age,
            self.ethnicity.clone(),
            self.insurance.clone(),
            self.zip_code.clone(),
        )
    }

    /// Build the visit this record describes
    fn to_visit(&self) -> Visit {
        Visit::new(
            self.visit_id.clone(),
            self.visit_time,
            self.department.clone(),
            self.chief_complaint.clone(),
        )
    }
}

/// Fetch a required column from a raw record
pub(crate) fn require_column<'a>(record: &'a RawRecord, column: &str) -> Result<&'a str> {
    record
        .get(column)
        .map(String::as_str)
        .ok_or_else(|| ClinicStoreError::malformed(column, "required column missing"))
}

/// Parse a required non-negative integer age
pub(crate) fn parse_age(raw: &str, column: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| {
        ClinicStoreError::malformed(column, format!("`{raw}` is not a non-negative integer"))
    })
}

/// Ingest tokenized rows in file order into a patient store
///
/// The first row seen for a patient id fixes the demographics; later rows
/// for the same id only append visits. A malformed row aborts the
/// ingestion with the row's error.
pub fn ingest<I>(rows: I, format: SourceFormat) -> Result<PatientCollection>
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut collection = PatientCollection::new();
    for row in rows {
        let record = match format {
            SourceFormat::VisitCsv => visit_csv::from_record(&row)?,
            SourceFormat::VisitTxt => visit_txt::from_record(&row)?,
        };
        ingest_record(&mut collection, &record);
    }
    Ok(collection)
}

/// Fold one normalized record into the store
pub fn ingest_record(collection: &mut PatientCollection, record: &VisitRecord) {
    if !collection.contains(&record.patient_id) {
        collection.add_patient(record.to_patient());
    }
    if let Some(patient) = collection.get_mut(&record.patient_id) {
        patient.add_visit(record.to_visit());
    }
}
