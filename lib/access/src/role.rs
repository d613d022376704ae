//! Role types for CMS access control.
//!
//! Every Historia account carries exactly one role. All roles may sign in;
//! the admin-level roles additionally unlock the administrative sections
//! (user management, groups, audit log).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a CMS account.
///
/// The roles form two tiers:
/// - `Viewer` and `Contributor`: standard access to the managed collections
/// - `Admin` and `Superadmin`: additional access to administrative sections
///
/// Role strings arriving from the backend that match no variant deserialize
/// as `Viewer`, the lowest privilege, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Read-only access to the managed collections.
    Viewer,
    /// May create and edit objects, media, and related records.
    Contributor,
    /// Administrator with access to the administrative sections.
    Admin,
    /// Administrator with full platform oversight.
    Superadmin,
}

impl Role {
    /// Returns true if this role unlocks the administrative sections.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::Superadmin)
    }

    /// Returns the role's wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Contributor => "contributor",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "viewer" => Self::Viewer,
            "contributor" => Self::Contributor,
            "admin" => Self::Admin,
            "superadmin" => Self::Superadmin,
            // Unknown role strings degrade to the lowest privilege.
            _ => Self::Viewer,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_tiers() {
        assert!(!Role::Viewer.is_admin());
        assert!(!Role::Contributor.is_admin());
        assert!(Role::Admin.is_admin());
        assert!(Role::Superadmin.is_admin());
    }

    #[test]
    fn serialization_format() {
        let json = serde_json::to_string(&Role::Superadmin).expect("serialize");
        assert_eq!(json, "\"superadmin\"");

        let json = serde_json::to_string(&Role::Viewer).expect("serialize");
        assert_eq!(json, "\"viewer\"");
    }

    #[test]
    fn known_roles_roundtrip() {
        for role in [
            Role::Viewer,
            Role::Contributor,
            Role::Admin,
            Role::Superadmin,
        ] {
            let json = serde_json::to_string(&role).expect("serialize");
            let parsed: Role = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn unknown_role_degrades_to_viewer() {
        let parsed: Role = serde_json::from_str("\"archivist\"").expect("deserialize");
        assert_eq!(parsed, Role::Viewer);
    }

    #[test]
    fn role_display_matches_wire_name() {
        assert_eq!(Role::Contributor.to_string(), "contributor");
    }
}
