//! Point-of-view detection.
//!
//! Admins can open another user's public profile page from inside the CMS.
//! Activity logging stays off on those views so the telemetry stream
//! records the profile owner's audience, not the admin's housekeeping.
//! This never gates access; it only toggles telemetry.

/// Whose page the viewer is looking at, derived from path shape alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOfView {
    /// The viewer's own context (dashboard, collections, admin sections).
    Own,
    /// A per-user public profile route (`/users/{id}`).
    UserProfile,
}

impl PointOfView {
    /// Detects the point of view for a path.
    #[must_use]
    pub fn of(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (Some("users"), Some(_id), None) => Self::UserProfile,
            _ => Self::Own,
        }
    }

    /// Returns true if navigations under this point of view should be
    /// recorded as viewer activity.
    #[must_use]
    pub fn logs_activity(&self) -> bool {
        matches!(self, Self::Own)
    }
}

/// Convenience wrapper over [`PointOfView::of`] for telemetry consumers.
#[must_use]
pub fn should_log_activity(path: &str) -> bool {
    PointOfView::of(path).logs_activity()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_route_is_user_profile() {
        assert_eq!(PointOfView::of("/users/42"), PointOfView::UserProfile);
        assert_eq!(
            PointOfView::of("/users/usr_01H2XCEJ"),
            PointOfView::UserProfile
        );
    }

    #[test]
    fn users_index_is_own() {
        assert_eq!(PointOfView::of("/users"), PointOfView::Own);
    }

    #[test]
    fn deeper_user_routes_are_own() {
        assert_eq!(PointOfView::of("/users/42/edit"), PointOfView::Own);
    }

    #[test]
    fn other_sections_are_own() {
        assert_eq!(PointOfView::of("/dashboard"), PointOfView::Own);
        assert_eq!(PointOfView::of("/"), PointOfView::Own);
        assert_eq!(PointOfView::of("/user-management/42"), PointOfView::Own);
    }

    #[test]
    fn activity_logging_is_suppressed_only_on_profiles() {
        assert!(!should_log_activity("/users/42"));
        assert!(should_log_activity("/users/42/edit"));
        assert!(should_log_activity("/dashboard"));
    }

    #[test]
    fn trailing_slash_still_detects_profile() {
        assert_eq!(PointOfView::of("/users/42/"), PointOfView::UserProfile);
    }
}
