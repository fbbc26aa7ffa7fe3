//! Visit identifier generation
//!
//! Visit ids only need to be unique within one patient's visit list;
//! collisions across patients are permitted and expected.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{ClinicStoreError, Result};
use crate::models::Patient;

/// Characters a visit id is drawn from
pub const VISIT_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated visit id
pub const VISIT_ID_LEN: usize = 6;

/// Retry cap; with 36^6 possible ids a patient's visit list cannot
/// plausibly exhaust it
const MAX_ATTEMPTS: usize = 10_000;

/// Generate a visit id colliding with none of the patient's visits
pub fn generate_visit_id(patient: &Patient) -> Result<String> {
    generate_visit_id_with(&mut StdRng::from_os_rng(), patient)
}

/// Seedable variant of [`generate_visit_id`]
pub fn generate_visit_id_with<R: Rng>(rng: &mut R, patient: &Patient) -> Result<String> {
    for _ in 0..MAX_ATTEMPTS {
        let candidate: String = (0..VISIT_ID_LEN)
            .map(|_| VISIT_ID_ALPHABET[rng.random_range(0..VISIT_ID_ALPHABET.len())] as char)
            .collect();
        if !patient.has_visit_id(&candidate) {
            return Ok(candidate);
        }
    }
    Err(ClinicStoreError::ExhaustedIdSpace {
        attempts: MAX_ATTEMPTS,
    })
}
