//! Aggregation queries over the patient store
//!
//! Counters bucket values in first-seen store order, so a report generated
//! twice from the same store lists its lines identically.
//!
//! The demographic and insurance counters count patients; the department
//! counter counts visits. A patient with three visits in one department
//! contributes three to that department's bucket but only one to each
//! patient-level bucket.

use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::collections::PatientCollection;
use crate::error::ClinicStoreError;

/// Demographic attributes recognized for patient grouping
///
/// Grouping is enumerated dispatch over exactly these four attributes;
/// any other name is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemographicAttribute {
    /// Group by age in whole years
    Age,
    /// Group by race string
    Race,
    /// Group by gender string
    Gender,
    /// Group by ethnicity string
    Ethnicity,
}

impl DemographicAttribute {
    /// All attributes, in report order
    pub const ALL: [Self; 4] = [Self::Age, Self::Race, Self::Gender, Self::Ethnicity];

    /// Attribute name as used in reports and parse input
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Race => "race",
            Self::Gender => "gender",
            Self::Ethnicity => "ethnicity",
        }
    }
}

impl FromStr for DemographicAttribute {
    type Err = ClinicStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age" => Ok(Self::Age),
            "race" => Ok(Self::Race),
            "gender" => Ok(Self::Gender),
            "ethnicity" => Ok(Self::Ethnicity),
            other => Err(ClinicStoreError::UnknownAttribute {
                attribute: other.to_string(),
            }),
        }
    }
}

/// Count values in first-encounter order
fn count_ordered<I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut buckets: Vec<(String, usize)> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    for value in values {
        if let Some(&slot) = index.get(&value) {
            buckets[slot].1 += 1;
        } else {
            index.insert(value.clone(), buckets.len());
            buckets.push((value, 1));
        }
    }
    buckets
}

/// Patient counts grouped by insurance
///
/// Grouping key equality is exact string match; no case or whitespace
/// normalization. Bucket counts sum to the store's patient count.
#[must_use]
pub fn count_by_insurance(collection: &PatientCollection) -> Vec<(String, usize)> {
    count_ordered(collection.patients().map(|p| p.insurance.clone()))
}

/// Patient counts grouped by the selected demographic attribute
///
/// Ages group on their decimal rendering so every counter reports
/// string-keyed buckets.
#[must_use]
pub fn count_by_demographics(
    collection: &PatientCollection,
    attribute: DemographicAttribute,
) -> Vec<(String, usize)> {
    count_ordered(collection.patients().map(|p| match attribute {
        DemographicAttribute::Age => p.age.to_string(),
        DemographicAttribute::Race => p.race.clone(),
        DemographicAttribute::Gender => p.gender.clone(),
        DemographicAttribute::Ethnicity => p.ethnicity.clone(),
    }))
}

/// Visit counts grouped by department
///
/// Counts visits, not patients; bucket counts sum to the store's total
/// visit count.
#[must_use]
pub fn count_by_department(collection: &PatientCollection) -> Vec<(String, usize)> {
    count_ordered(
        collection
            .patients()
            .flat_map(|p| p.visits.iter().map(|v| v.department.clone())),
    )
}
