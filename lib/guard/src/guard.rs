//! The access guard: a pure decision over `(session, path)`.
//!
//! The guard owns no mutable state and performs no side effects; it is
//! re-evaluated on every session or path change, and the surrounding effect
//! layer (see [`crate::redirect`]) applies whatever it decides. It never
//! returns an error: an unavailable session arrives here already absorbed
//! into `Anonymous`, an unknown role as `Viewer`, and an unknown route
//! classifies as `Protected`.

use historia_access::{Role, User, ViewerSession};

use crate::decision::RedirectDecision;
use crate::paths::GuardPaths;
use crate::route::{RouteClass, RouteTable};

/// Gates rendering of a route based on session state and route class.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    table: RouteTable,
    paths: GuardPaths,
}

impl AccessGuard {
    /// Creates a guard over the given table and paths.
    #[must_use]
    pub fn new(table: RouteTable, paths: GuardPaths) -> Self {
        Self { table, paths }
    }

    /// The guard for the Historia CMS sections with default paths.
    #[must_use]
    pub fn historia() -> Self {
        Self::new(RouteTable::historia(), GuardPaths::default())
    }

    /// Returns the configured paths.
    #[must_use]
    pub fn paths(&self) -> &GuardPaths {
        &self.paths
    }

    /// Decides whether the viewer may render `path`, or where to send them.
    #[must_use]
    pub fn evaluate(&self, session: &ViewerSession, path: &str) -> RedirectDecision {
        let decision = self.decide(session, path);
        tracing::debug!(
            path,
            class = self.table.classify(path).as_str(),
            allow = decision.is_allow(),
            target = decision.target(),
            "evaluated navigation"
        );
        decision
    }

    fn decide(&self, session: &ViewerSession, path: &str) -> RedirectDecision {
        if session.is_loading() {
            // No redirect may fire while the state is indeterminate; the
            // caller renders a placeholder instead of the route.
            return RedirectDecision::Allow;
        }

        match self.table.classify(path) {
            RouteClass::Public => match session.user() {
                // A signed-in viewer has no business on the login page,
                // but the callback must finish the handshake in place.
                Some(user) if path != self.paths.callback_path() => {
                    RedirectDecision::redirect(self.landing_path_for(user))
                }
                _ => RedirectDecision::Allow,
            },
            class @ (RouteClass::Protected | RouteClass::AdminOnly) => {
                let Some(user) = session.user() else {
                    return RedirectDecision::redirect(self.paths.public_landing());
                };
                if class == RouteClass::AdminOnly && !user.is_admin() {
                    return RedirectDecision::redirect(self.paths.default_landing());
                }
                RedirectDecision::Allow
            }
        }
    }

    /// Landing path for an authenticated viewer.
    ///
    /// Every role currently lands on the same dashboard path; the role
    /// match is the seam where per-role landings would differentiate.
    #[must_use]
    pub fn landing_path_for(&self, user: &User) -> &str {
        match user.role() {
            Role::Viewer | Role::Contributor | Role::Admin | Role::Superadmin => {
                self.paths.default_landing()
            }
        }
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::historia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated(role: Role) -> ViewerSession {
        ViewerSession::Authenticated(User::new(role))
    }

    #[test]
    fn loading_allows_every_path() {
        let guard = AccessGuard::historia();
        for path in ["/", "/dashboard", "/user-management/admin", "/nonsense"] {
            assert_eq!(
                guard.evaluate(&ViewerSession::Loading, path),
                RedirectDecision::Allow,
                "loading session must allow {path}"
            );
        }
    }

    #[test]
    fn anonymous_on_protected_redirects_to_public_landing() {
        let guard = AccessGuard::historia();
        assert_eq!(
            guard.evaluate(&ViewerSession::Anonymous, "/dashboard"),
            RedirectDecision::redirect("/")
        );
        assert_eq!(
            guard.evaluate(&ViewerSession::Anonymous, "/objects/42"),
            RedirectDecision::redirect("/")
        );
    }

    #[test]
    fn anonymous_on_admin_only_redirects_to_public_landing() {
        let guard = AccessGuard::historia();
        assert_eq!(
            guard.evaluate(&ViewerSession::Anonymous, "/audit-log"),
            RedirectDecision::redirect("/")
        );
    }

    #[test]
    fn anonymous_on_public_is_allowed() {
        let guard = AccessGuard::historia();
        assert_eq!(
            guard.evaluate(&ViewerSession::Anonymous, "/"),
            RedirectDecision::Allow
        );
        assert_eq!(
            guard.evaluate(&ViewerSession::Anonymous, "/auth/callback"),
            RedirectDecision::Allow
        );
    }

    #[test]
    fn authenticated_on_public_bounces_to_landing() {
        let guard = AccessGuard::historia();
        assert_eq!(
            guard.evaluate(&authenticated(Role::Admin), "/"),
            RedirectDecision::redirect("/dashboard")
        );
        assert_eq!(
            guard.evaluate(&authenticated(Role::Viewer), "/"),
            RedirectDecision::redirect("/dashboard")
        );
    }

    #[test]
    fn authenticated_on_callback_is_allowed() {
        let guard = AccessGuard::historia();
        assert_eq!(
            guard.evaluate(&authenticated(Role::Admin), "/auth/callback"),
            RedirectDecision::Allow
        );
    }

    #[test]
    fn non_admin_on_admin_only_redirects_to_default_landing() {
        let guard = AccessGuard::historia();
        for role in [Role::Viewer, Role::Contributor] {
            assert_eq!(
                guard.evaluate(&authenticated(role), "/user-management/admin"),
                RedirectDecision::redirect("/dashboard"),
                "{role} must not reach admin-only routes"
            );
        }
    }

    #[test]
    fn admin_tiers_reach_admin_only_routes() {
        let guard = AccessGuard::historia();
        for role in [Role::Admin, Role::Superadmin] {
            assert_eq!(
                guard.evaluate(&authenticated(role), "/user-management/admin"),
                RedirectDecision::Allow
            );
            assert_eq!(
                guard.evaluate(&authenticated(role), "/audit-log"),
                RedirectDecision::Allow
            );
        }
    }

    #[test]
    fn authenticated_on_protected_is_allowed() {
        let guard = AccessGuard::historia();
        assert_eq!(
            guard.evaluate(&authenticated(Role::Viewer), "/objects"),
            RedirectDecision::Allow
        );
        assert_eq!(
            guard.evaluate(&authenticated(Role::Contributor), "/change-requests/9"),
            RedirectDecision::Allow
        );
    }

    #[test]
    fn unknown_route_is_gated_like_protected() {
        let guard = AccessGuard::historia();
        assert_eq!(
            guard.evaluate(&ViewerSession::Anonymous, "/brand-new-section"),
            RedirectDecision::redirect("/")
        );
        assert_eq!(
            guard.evaluate(&authenticated(Role::Viewer), "/brand-new-section"),
            RedirectDecision::Allow
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let guard = AccessGuard::historia();
        let session = authenticated(Role::Viewer);
        let first = guard.evaluate(&session, "/groups");
        let second = guard.evaluate(&session, "/groups");
        assert_eq!(first, second);
    }

    #[test]
    fn landing_path_is_role_independent() {
        let guard = AccessGuard::historia();
        for role in [
            Role::Viewer,
            Role::Contributor,
            Role::Admin,
            Role::Superadmin,
        ] {
            assert_eq!(guard.landing_path_for(&User::new(role)), "/dashboard");
        }
    }
}
