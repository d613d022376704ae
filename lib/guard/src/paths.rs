//! Landing and callback paths consulted by the guard.
//!
//! Fields with defaults can be omitted when loading from configuration.

use serde::{Deserialize, Serialize};

/// Paths the guard redirects to, and the one path it never bounces from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardPaths {
    /// Where unauthenticated viewers land (the login page).
    #[serde(default = "default_public_landing")]
    public_landing: String,
    /// Where authenticated viewers land.
    #[serde(default = "default_landing")]
    default_landing: String,
    /// The auth-callback path, exempt from the signed-in bounce off
    /// public routes so the login handshake can finish.
    #[serde(default = "default_callback_path")]
    callback_path: String,
}

fn default_public_landing() -> String {
    "/".to_string()
}

fn default_landing() -> String {
    "/dashboard".to_string()
}

fn default_callback_path() -> String {
    "/auth/callback".to_string()
}

impl Default for GuardPaths {
    fn default() -> Self {
        Self {
            public_landing: default_public_landing(),
            default_landing: default_landing(),
            callback_path: default_callback_path(),
        }
    }
}

impl GuardPaths {
    /// Creates paths with explicit values.
    #[must_use]
    pub fn new(public_landing: String, default_landing: String, callback_path: String) -> Self {
        Self {
            public_landing,
            default_landing,
            callback_path,
        }
    }

    /// Returns the public landing (login) path.
    #[must_use]
    pub fn public_landing(&self) -> &str {
        &self.public_landing
    }

    /// Returns the authenticated landing path.
    #[must_use]
    pub fn default_landing(&self) -> &str {
        &self.default_landing
    }

    /// Returns the auth-callback path.
    #[must_use]
    pub fn callback_path(&self) -> &str {
        &self.callback_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let paths = GuardPaths::default();
        assert_eq!(paths.public_landing(), "/");
        assert_eq!(paths.default_landing(), "/dashboard");
        assert_eq!(paths.callback_path(), "/auth/callback");
    }

    #[test]
    fn deserializes_with_defaults() {
        let paths: GuardPaths = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(paths, GuardPaths::default());
    }

    #[test]
    fn deserializes_overrides() {
        let json = r#"{ "default_landing": "/home" }"#;
        let paths: GuardPaths = serde_json::from_str(json).expect("deserialize");
        assert_eq!(paths.default_landing(), "/home");
        assert_eq!(paths.public_landing(), "/");
    }
}
