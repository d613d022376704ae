//! The redirect effect layer.
//!
//! [`AccessGuard::evaluate`](crate::AccessGuard::evaluate) is pure; this
//! module owns the one side effect. A [`Redirector`] applies decisions
//! through a [`Navigate`] implementation with two invariants:
//!
//! - re-applying an identical decision for an unchanged state navigates at
//!   most once (no navigation loop when the caller re-evaluates), and
//! - when consecutive evaluations disagree, the latest target wins.

use crate::decision::RedirectDecision;

/// Navigation primitive the redirector drives.
pub trait Navigate {
    /// Navigates to `path`.
    fn navigate(&mut self, path: &str);
}

/// Applies redirect decisions, at most one navigation per resolved state.
#[derive(Debug, Clone, Default)]
pub struct Redirector {
    /// Target of the redirect currently in flight, if any.
    in_flight: Option<String>,
}

impl Redirector {
    /// Creates a redirector with no redirect in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a decision through `nav`.
    ///
    /// `Allow` never navigates and clears any in-flight target. A redirect
    /// navigates unless the identical target is already in flight; a
    /// different target always navigates (last-write-wins).
    pub fn apply<N: Navigate>(&mut self, decision: &RedirectDecision, nav: &mut N) {
        match decision {
            RedirectDecision::Allow => {
                self.in_flight = None;
            }
            RedirectDecision::RedirectTo(target) => {
                if self.in_flight.as_deref() == Some(target.as_str()) {
                    return;
                }
                nav.navigate(target);
                self.in_flight = Some(target.clone());
            }
        }
    }

    /// Notes that the observed path changed (a navigation landed or the
    /// viewer moved on their own); the in-flight target is no longer
    /// meaningful.
    pub fn path_changed(&mut self) {
        self.in_flight = None;
    }

    /// Returns the redirect currently in flight, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }
}
