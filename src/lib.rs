//! A Rust library for an in-memory clinical records store: ingests patient
//! visit records from delimited files and exposes role-gated lookup,
//! mutation, and aggregation operations.

pub mod algorithm;
pub mod auth;
pub mod collections;
pub mod error;
pub mod loader;
pub mod models;
pub mod registry;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use collections::{PatientCollection, PatientInfo, RemoveOutcome, RetrieveOutcome};
pub use error::{ClinicStoreError, Result};
pub use models::{Note, Patient, Role, User, Visit};

// Ingestion
pub use registry::{RawRecord, SourceFormat, ingest};

// Aggregation and access control
pub use algorithm::statistics::DemographicAttribute;
pub use auth::{Action, authenticate};

// Utility functions
pub use utils::ids::generate_visit_id;
