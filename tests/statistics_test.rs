//! Tests for the aggregation queries
//!
//! The patient-level counters (insurance, demographics) and the visit-level
//! department counter reconcile against the store totals, and buckets come
//! back in first-seen store order.

use std::str::FromStr;

use chrono::NaiveDate;
use clinic_store::algorithm::statistics::{self, DemographicAttribute};
use clinic_store::collections::PatientCollection;
use clinic_store::error::ClinicStoreError;
use clinic_store::models::{Patient, Visit};

fn patient(patient_id: &str, age: u32, insurance: &str) -> Patient {
    Patient::new(
        patient_id.to_string(),
        "female".to_string(),
        "white".to_string(),
        age,
        "hispanic".to_string(),
        insurance.to_string(),
        "90210".to_string(),
    )
}

fn visit(visit_id: &str, department: &str) -> Visit {
    Visit::new(
        visit_id.to_string(),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        department.to_string(),
        "fever".to_string(),
    )
}

fn sample_store() -> PatientCollection {
    let mut store = PatientCollection::new();
    let mut a = patient("A", 42, "X");
    a.add_visit(visit("V1", "ER"));
    a.add_visit(visit("V2", "ER"));
    a.add_visit(visit("V3", "ER"));
    store.add_patient(a);
    store.add_patient(patient("B", 42, "X"));
    let mut c = patient("C", 7, "Y");
    c.add_visit(visit("W1", "ICU"));
    store.add_patient(c);
    store
}

#[test]
fn insurance_counts_patients_in_first_seen_order() {
    let store = sample_store();
    let counts = statistics::count_by_insurance(&store);
    assert_eq!(
        counts,
        vec![("X".to_string(), 2), ("Y".to_string(), 1)]
    );
}

#[test]
fn insurance_counts_sum_to_patient_count() {
    let store = sample_store();
    let total: usize = statistics::count_by_insurance(&store)
        .iter()
        .map(|(_, count)| count)
        .sum();
    assert_eq!(total, store.patient_count());
}

#[test]
fn department_counts_visits_not_patients() {
    let store = sample_store();
    let counts = statistics::count_by_department(&store);
    // Patient A alone contributes 3 to the ER bucket
    assert_eq!(
        counts,
        vec![("ER".to_string(), 3), ("ICU".to_string(), 1)]
    );

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    assert_eq!(total, store.total_visits());
}

#[test]
fn demographic_counts_group_patients_by_attribute() {
    let store = sample_store();
    let by_age = statistics::count_by_demographics(&store, DemographicAttribute::Age);
    assert_eq!(
        by_age,
        vec![("42".to_string(), 2), ("7".to_string(), 1)]
    );

    let by_gender = statistics::count_by_demographics(&store, DemographicAttribute::Gender);
    assert_eq!(by_gender, vec![("female".to_string(), 3)]);
}

#[test]
fn grouping_keys_are_exact_strings() {
    let mut store = PatientCollection::new();
    store.add_patient(patient("A", 42, "Medicare"));
    store.add_patient(patient("B", 42, "medicare"));

    // No case normalization: the two spellings are distinct buckets
    let counts = statistics::count_by_insurance(&store);
    assert_eq!(
        counts,
        vec![("Medicare".to_string(), 1), ("medicare".to_string(), 1)]
    );
}

#[test]
fn unknown_attribute_names_are_rejected() {
    assert!(matches!(
        DemographicAttribute::from_str("zip_code"),
        Err(ClinicStoreError::UnknownAttribute { ref attribute }) if attribute == "zip_code"
    ));
    assert!(DemographicAttribute::from_str("insurance").is_err());
    assert_eq!(
        DemographicAttribute::from_str("race").unwrap(),
        DemographicAttribute::Race
    );
}

#[test]
fn empty_store_yields_empty_reports() {
    let store = PatientCollection::new();
    assert!(statistics::count_by_insurance(&store).is_empty());
    assert!(statistics::count_by_department(&store).is_empty());
    assert!(statistics::count_by_demographics(&store, DemographicAttribute::Age).is_empty());
}
