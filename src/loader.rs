//! Delimited file loading
//!
//! Thin wrappers that tokenize the two patient record formats and the
//! credential file into raw rows for the registry. Fields are split on
//! bare commas, matching the source data; no quoting is interpreted.

use std::fs;
use std::path::Path;

use log::info;

use crate::collections::PatientCollection;
use crate::error::{ClinicStoreError, Result};
use crate::models::User;
use crate::registry::{self, RawRecord, SourceFormat};

/// Read a patient record file, picking the schema from the extension
///
/// `.csv` files are read as named-column records; `.txt` files as
/// positional records with a header line to skip. Anything else is
/// rejected as unsupported.
pub fn read_patient_records(path: &Path) -> Result<PatientCollection> {
    let format = detect_format(path)?;
    let content = read_file(path)?;
    let collection = registry::ingest(tokenize(&content, format), format)?;
    info!(
        "loaded {} patients ({} visits) from {}",
        collection.patient_count(),
        collection.total_visits(),
        path.display()
    );
    Ok(collection)
}

/// Read the credential file: named-column username/password/role triples
pub fn read_user_credentials(path: &Path) -> Result<Vec<User>> {
    let content = read_file(path)?;
    let users = registry::users::ingest(named_rows(&content))?;
    info!("loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

fn detect_format(path: &Path) -> Result<SourceFormat> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match extension.as_deref() {
        Some("csv") => Ok(SourceFormat::VisitCsv),
        Some("txt") => Ok(SourceFormat::VisitTxt),
        _ => Err(ClinicStoreError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ClinicStoreError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn tokenize(content: &str, format: SourceFormat) -> Vec<RawRecord> {
    match format {
        SourceFormat::VisitCsv => named_rows(content),
        SourceFormat::VisitTxt => data_lines(content)
            .map(|line| registry::visit_txt::name_fields(&split_fields(line)))
            .collect(),
    }
}

/// Tokenize header-driven rows: the first line names the columns
fn named_rows(content: &str) -> Vec<RawRecord> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns = split_fields(header);
    lines
        .map(|line| {
            columns
                .iter()
                .zip(split_fields(line))
                .map(|(column, field)| ((*column).to_string(), field.to_string()))
                .collect()
        })
        .collect()
}

/// Non-empty data lines after the header
fn data_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
}

/// Split a line on bare commas; fields keep their spacing
fn split_fields(line: &str) -> Vec<&str> {
    line.trim().split(',').collect()
}
