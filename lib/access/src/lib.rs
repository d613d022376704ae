//! Viewer identity and session state for the Historia CMS.
//!
//! This crate provides:
//! - The `User` type mirroring the backend user record
//! - The closed role enumeration (`Role`)
//! - The three-state viewer session (`ViewerSession`)
//! - The session-retrieval seam (`SessionSource`) and its error taxonomy
//!
//! # Access Control Model
//!
//! Every account carries exactly one role. All roles may sign in; the
//! admin-tier roles (`Admin`, `Superadmin`) additionally unlock the
//! administrative sections of the CMS. Session state is resolved
//! asynchronously by a single upstream authority and read everywhere else;
//! a failed resolution always degrades to the anonymous state.
//!
//! # Example
//!
//! ```
//! use historia_access::{Role, User, ViewerSession};
//!
//! let user = User::new(Role::Admin);
//! let session = ViewerSession::Authenticated(user);
//!
//! assert!(session.is_authenticated());
//! assert!(session.is_admin());
//!
//! assert!(!ViewerSession::Anonymous.is_authenticated());
//! assert!(ViewerSession::Loading.is_loading());
//! ```

pub mod error;
pub mod id;
pub mod role;
pub mod session;
pub mod source;
pub mod user;

// Re-export main types at crate root
pub use error::SessionFetchError;
pub use id::{ParseIdError, UserId};
pub use role::Role;
pub use session::ViewerSession;
pub use source::SessionSource;
pub use user::User;
