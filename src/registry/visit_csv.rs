//! Named-column patient record schema
//!
//! The tabular form: a header line names the columns and every row carries
//! demographics plus one visit. Column names follow the source header.

use chrono::NaiveDate;

use crate::error::{ClinicStoreError, Result};
use crate::registry::{DATE_FORMAT, RawRecord, VisitRecord, parse_age, require_column};

/// Columns a named-column row must carry
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Patient_ID",
    "Gender",
    "Race",
    "Age",
    "Ethnicity",
    "Insurance",
    "Zip_code",
    "Visit_ID",
    "Visit_time",
    "Visit_department",
    "Chief_complaint",
];

/// Convert one named-column row into a normalized record
///
/// Every column is required. An unparsable age or visit date fails the
/// row; this schema has no date fallback.
pub fn from_record(record: &RawRecord) -> Result<VisitRecord> {
    let raw_date = require_column(record, "Visit_time")?;
    let visit_time = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|e| {
        ClinicStoreError::malformed("Visit_time", format!("invalid date `{raw_date}`: {e}"))
    })?;

    Ok(VisitRecord {
        patient_id: require_column(record, "Patient_ID")?.to_string(),
        gender: require_column(record, "Gender")?.to_string(),
        race: require_column(record, "Race")?.to_string(),
        age: parse_age(require_column(record, "Age")?, "Age")?,
        ethnicity: require_column(record, "Ethnicity")?.to_string(),
        insurance: require_column(record, "Insurance")?.to_string(),
        zip_code: require_column(record, "Zip_code")?.to_string(),
        visit_id: require_column(record, "Visit_ID")?.to_string(),
        visit_time,
        department: require_column(record, "Visit_department")?.to_string(),
        chief_complaint: require_column(record, "Chief_complaint")?.to_string(),
    })
}
