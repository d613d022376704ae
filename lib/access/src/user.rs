//! User domain type mirroring the backend user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::role::Role;

/// An authenticated user of the CMS.
///
/// Users are owned by the backend; this type is the read-only view the
/// access layer works with. The guard consults only the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal platform user ID.
    id: UserId,
    /// The account's role.
    role: Role,
    /// Email address, if the backend exposes one.
    email: Option<String>,
    /// Display name, if the backend exposes one.
    display_name: Option<String>,
    /// When the account was created.
    created_at: DateTime<Utc>,
    /// When the account was last updated.
    updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a user with a generated ID and the given role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            role,
            email: None,
            display_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a user with all fields specified.
    ///
    /// Use this when reconstituting a user from a backend payload.
    #[must_use]
    pub fn with_all_fields(
        id: UserId,
        role: Role,
        email: Option<String>,
        display_name: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            role,
            email,
            display_name,
            created_at,
            updated_at,
        }
    }

    /// Returns the user's internal platform ID.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the account's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns true if the account has an admin-tier role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns the user's email address, if available.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the user's display name, if available.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Returns when the account was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the account was last updated.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
