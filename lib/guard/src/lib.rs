//! Route access guard and redirect policy for the Historia CMS.
//!
//! This crate provides:
//! - Route classification (`RouteClass`, `RouteTable`) by longest-prefix match
//! - The pure redirect decision (`AccessGuard::evaluate`, `RedirectDecision`)
//! - Landing path policy (`AccessGuard::landing_path_for`, `GuardPaths`)
//! - Point-of-view detection for telemetry (`PointOfView`)
//! - The idempotent redirect effect layer (`Redirector`, `Navigate`)
//!
//! The guard is a pure re-evaluation over `(session, path)`: it holds no
//! mutable state, performs no I/O, and never errors. Side effects live in
//! the effect layer, which the embedding application drives.
//!
//! # Example
//!
//! ```
//! use historia_access::{Role, User, ViewerSession};
//! use historia_guard::{AccessGuard, RedirectDecision};
//!
//! let guard = AccessGuard::historia();
//!
//! // Anonymous viewers bounce off protected routes to the login page.
//! assert_eq!(
//!     guard.evaluate(&ViewerSession::Anonymous, "/dashboard"),
//!     RedirectDecision::redirect("/"),
//! );
//!
//! // Signed-in viewers bounce off the login page to their landing path.
//! let admin = ViewerSession::Authenticated(User::new(Role::Admin));
//! assert_eq!(
//!     guard.evaluate(&admin, "/"),
//!     RedirectDecision::redirect("/dashboard"),
//! );
//! assert_eq!(guard.evaluate(&admin, "/audit-log"), RedirectDecision::Allow);
//! ```

pub mod decision;
pub mod guard;
pub mod paths;
pub mod pov;
pub mod redirect;
pub mod route;

// Re-export main types at crate root
pub use decision::RedirectDecision;
pub use guard::AccessGuard;
pub use paths::GuardPaths;
pub use pov::{PointOfView, should_log_activity};
pub use redirect::{Navigate, Redirector};
pub use route::{RouteClass, RouteTable};
