//! Positional patient record schema
//!
//! The delimited-line form: a fixed column order with one leading record
//! number, and a header line the loader skips. Positional tokens are named
//! via [`COLUMNS`] before conversion so both schemas converge on the same
//! raw-record shape.

use chrono::{Local, NaiveDate};
use log::warn;

use crate::error::Result;
use crate::registry::{DATE_FORMAT, RawRecord, VisitRecord, parse_age, require_column};

/// Column order of the positional format
pub const COLUMNS: [&str; 12] = [
    "record_id",
    "patient_id",
    "visit_id",
    "visit_time",
    "visit_department",
    "race",
    "gender",
    "ethnicity",
    "age",
    "zip_code",
    "insurance",
    "chief_complaint",
];

/// Name a line's positional tokens using the fixed column order
///
/// Extra trailing tokens are ignored; a short line leaves its remaining
/// columns absent, which conversion reports as a malformed record.
#[must_use]
pub fn name_fields<S: AsRef<str>>(tokens: &[S]) -> RawRecord {
    COLUMNS
        .iter()
        .zip(tokens)
        .map(|(name, value)| ((*name).to_string(), value.as_ref().to_string()))
        .collect()
}

/// Convert one positional row into a normalized record
///
/// An unparsable visit date is not fatal: the current date is substituted
/// and a warning logged. A missing column or unparsable age still fails
/// the row.
pub fn from_record(record: &RawRecord) -> Result<VisitRecord> {
    let raw_date = require_column(record, "visit_time")?;
    let visit_time = match NaiveDate::parse_from_str(raw_date, DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            let today = Local::now().date_naive();
            warn!("unparsable visit date `{raw_date}`, substituting {today}");
            today
        }
    };

    Ok(VisitRecord {
        patient_id: require_column(record, "patient_id")?.to_string(),
        gender: require_column(record, "gender")?.to_string(),
        race: require_column(record, "race")?.to_string(),
        age: parse_age(require_column(record, "age")?, "age")?,
        ethnicity: require_column(record, "ethnicity")?.to_string(),
        insurance: require_column(record, "insurance")?.to_string(),
        zip_code: require_column(record, "zip_code")?.to_string(),
        visit_id: require_column(record, "visit_id")?.to_string(),
        visit_time,
        department: require_column(record, "visit_department")?.to_string(),
        chief_complaint: require_column(record, "chief_complaint")?.to_string(),
    })
}
