//! Viewer session state observed by the access guard.
//!
//! The session is owned and mutated by exactly one upstream authority (the
//! component that resolves tokens against the backend) and is read-only
//! everywhere else. It starts as `Loading`, resolves to `Authenticated` or
//! `Anonymous`, and returns to `Anonymous` on logout or when the backend
//! rejects the stored token.

use crate::error::SessionFetchError;
use crate::role::Role;
use crate::user::User;

/// The viewer's authentication state for the current navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerSession {
    /// Session lookup is still in flight; access state is indeterminate.
    Loading,
    /// No authenticated viewer.
    Anonymous,
    /// An authenticated viewer with a resolved role.
    Authenticated(User),
}

impl ViewerSession {
    /// Returns true while the session lookup is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if a viewer is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Returns the authenticated user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Anonymous => None,
        }
    }

    /// Returns the authenticated user's role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(User::role)
    }

    /// Returns true only for a resolved admin-tier viewer.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }

    /// Absorbs a failed session fetch into the anonymous state.
    ///
    /// Protected routes must never render against an errored lookup, so any
    /// fetch failure resolves to `Anonymous`.
    #[must_use]
    pub fn from_fetch(result: Result<Self, SessionFetchError>) -> Self {
        match result {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "session fetch failed; treating viewer as anonymous");
                Self::Anonymous
            }
        }
    }
}
