//! Small shared utilities.

pub mod ids;

// Re-export commonly used functions for convenience
pub use ids::{generate_visit_id, generate_visit_id_with};
