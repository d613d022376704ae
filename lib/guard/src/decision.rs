//! The guard's verdict for a single navigation.

/// What the caller should do with the requested route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Render the route. While the session is still loading, the caller
    /// renders a placeholder instead of the route's children.
    Allow,
    /// Navigate away to the given path instead of rendering.
    RedirectTo(String),
}

impl RedirectDecision {
    /// Builds a redirect decision.
    #[must_use]
    pub fn redirect(target: impl Into<String>) -> Self {
        Self::RedirectTo(target.into())
    }

    /// Returns true if the route may render.
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectTo(target) => Some(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_has_no_target() {
        assert!(RedirectDecision::Allow.is_allow());
        assert_eq!(RedirectDecision::Allow.target(), None);
    }

    #[test]
    fn redirect_exposes_target() {
        let decision = RedirectDecision::redirect("/dashboard");
        assert!(!decision.is_allow());
        assert_eq!(decision.target(), Some("/dashboard"));
    }
}
