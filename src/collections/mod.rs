//! Record collections
//!
//! Keyed collections owning the record model entities.

pub mod patient;

// Re-export the store and its outcome types for convenience
pub use patient::{InfoRequest, PatientCollection, PatientInfo, RemoveOutcome, RetrieveOutcome};
