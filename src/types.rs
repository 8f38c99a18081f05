/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// User role, stored as lowercase text in the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Permission check backing the admin-only user listing.
    pub fn can_manage_users(self) -> bool {
        matches!(self, Role::Admin)
    }
}
