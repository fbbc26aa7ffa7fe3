//! Record model entities
//!
//! Pure data containers with identity and containment relationships:
//! the store holds patients, each patient owns its visits, each visit owns
//! its notes. Nothing below the patient level can be removed once added.

pub mod note;
pub mod patient;
pub mod types;
pub mod user;
pub mod visit;

// Re-export the entity types for convenience
pub use note::Note;
pub use patient::Patient;
pub use types::Role;
pub use user::User;
pub use visit::Visit;
