//! User credential entity

use serde::{Deserialize, Serialize};

use crate::models::types::Role;

/// A credential entry loaded from the credential file
///
/// Passwords are compared as the plain strings found in the source file.
/// Usernames are not enforced unique; duplicates shadow in the linear
/// authentication scan, first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Login name
    pub username: String,
    /// Plaintext password
    pub password: String,
    /// Granted role
    pub role: Role,
}

impl User {
    /// Create a new user entry
    #[must_use]
    pub const fn new(username: String, password: String, role: Role) -> Self {
        Self {
            username,
            password,
            role,
        }
    }
}
