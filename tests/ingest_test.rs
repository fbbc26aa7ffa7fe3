//! Tests for dual-format ingestion
//!
//! Both record schemas must normalize equivalent data into an identical
//! in-memory store: one patient per distinct id, visits merged in row
//! order, demographics fixed by the first row seen.

use clinic_store::error::ClinicStoreError;
use clinic_store::registry::{self, RawRecord, SourceFormat, visit_csv, visit_txt};

fn csv_row(patient_id: &str, age: &str, visit_id: &str, visit_time: &str) -> RawRecord {
    [
        ("Patient_ID", patient_id),
        ("Gender", "female"),
        ("Race", "white"),
        ("Age", age),
        ("Ethnicity", "hispanic"),
        ("Insurance", "medicare"),
        ("Zip_code", "90210"),
        ("Visit_ID", visit_id),
        ("Visit_time", visit_time),
        ("Visit_department", "ER"),
        ("Chief_complaint", "fever"),
    ]
    .into_iter()
    .map(|(column, value)| (column.to_string(), value.to_string()))
    .collect()
}

fn txt_row(patient_id: &str, age: &str, visit_id: &str, visit_time: &str) -> RawRecord {
    visit_txt::name_fields(&[
        "0",
        patient_id,
        visit_id,
        visit_time,
        "ER",
        "white",
        "female",
        "hispanic",
        age,
        "90210",
        "medicare",
        "fever",
    ])
}

#[test]
fn repeated_patient_id_merges_into_one_patient() {
    let store = registry::ingest(
        vec![
            csv_row("P1", "42", "V1", "2024-01-05"),
            csv_row("P1", "42", "V2", "2024-01-06"),
            csv_row("P2", "7", "A1", "2024-01-05"),
        ],
        SourceFormat::VisitCsv,
    )
    .unwrap();

    assert_eq!(store.patient_count(), 2);
    assert_eq!(store.total_visits(), 3);

    let p1 = store.get("P1").unwrap();
    let ids: Vec<&str> = p1.visits.iter().map(|v| v.visit_id.as_str()).collect();
    assert_eq!(ids, ["V1", "V2"]);
}

#[test]
fn first_row_wins_for_demographics() {
    let store = registry::ingest(
        vec![
            csv_row("P1", "42", "V1", "2024-01-05"),
            // Later row for the same id carries different demographics
            csv_row("P1", "99", "V2", "2024-01-06"),
        ],
        SourceFormat::VisitCsv,
    )
    .unwrap();

    let p1 = store.get("P1").unwrap();
    assert_eq!(p1.age, 42);
    assert_eq!(p1.visit_count(), 2);
}

#[test]
fn both_formats_produce_an_identical_store() {
    let from_csv = registry::ingest(
        vec![
            csv_row("P1", "42", "V1", "2024-01-05"),
            csv_row("P1", "42", "V2", "2024-01-06"),
            csv_row("P2", "7", "A1", "2024-01-05"),
        ],
        SourceFormat::VisitCsv,
    )
    .unwrap();
    let from_txt = registry::ingest(
        vec![
            txt_row("P1", "42", "V1", "2024-01-05"),
            txt_row("P1", "42", "V2", "2024-01-06"),
            txt_row("P2", "7", "A1", "2024-01-05"),
        ],
        SourceFormat::VisitTxt,
    )
    .unwrap();

    assert_eq!(from_csv.patient_count(), from_txt.patient_count());
    assert_eq!(from_csv.total_visits(), from_txt.total_visits());

    for (a, b) in from_csv.patients().zip(from_txt.patients()) {
        assert_eq!(a.patient_id, b.patient_id);
        assert_eq!(a.age, b.age);
        assert_eq!(a.insurance, b.insurance);
        assert_eq!(a.visit_count(), b.visit_count());
        for (va, vb) in a.visits.iter().zip(b.visits.iter()) {
            assert_eq!(va.visit_id, vb.visit_id);
            assert_eq!(va.visit_time, vb.visit_time);
            assert_eq!(va.department, vb.department);
        }
    }
}

#[test]
fn missing_required_column_fails_the_ingestion() {
    let mut row = csv_row("P1", "42", "V1", "2024-01-05");
    row.remove("Insurance");

    let err = registry::ingest(vec![row], SourceFormat::VisitCsv).unwrap_err();
    assert!(matches!(
        err,
        ClinicStoreError::MalformedRecord { ref column, .. } if column == "Insurance"
    ));
}

#[test]
fn every_named_column_is_required() {
    for column in visit_csv::REQUIRED_COLUMNS {
        let mut row = csv_row("P1", "42", "V1", "2024-01-05");
        row.remove(column);
        assert!(
            registry::ingest(vec![row], SourceFormat::VisitCsv).is_err(),
            "column {column} should be required"
        );
    }
}

#[test]
fn non_numeric_age_fails_in_either_format() {
    let err = registry::ingest(
        vec![csv_row("P1", "forty", "V1", "2024-01-05")],
        SourceFormat::VisitCsv,
    )
    .unwrap_err();
    assert!(matches!(err, ClinicStoreError::MalformedRecord { .. }));

    let err = registry::ingest(
        vec![txt_row("P1", "-3", "V1", "2024-01-05")],
        SourceFormat::VisitTxt,
    )
    .unwrap_err();
    assert!(matches!(err, ClinicStoreError::MalformedRecord { .. }));
}

#[test]
fn unparsable_date_is_fatal_only_for_the_named_column_format() {
    // Named-column rows have no date fallback
    let err = registry::ingest(
        vec![csv_row("P1", "42", "V1", "05/01/2024")],
        SourceFormat::VisitCsv,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ClinicStoreError::MalformedRecord { ref column, .. } if column == "Visit_time"
    ));

    // Positional rows substitute the current date and survive
    let store = registry::ingest(
        vec![txt_row("P1", "42", "V1", "05/01/2024")],
        SourceFormat::VisitTxt,
    )
    .unwrap();
    assert_eq!(store.patient_count(), 1);
    assert_eq!(store.get("P1").unwrap().visit_count(), 1);
}
