//! Session retrieval seam.

use async_trait::async_trait;

use crate::error::SessionFetchError;
use crate::session::ViewerSession;

/// Resolves an opaque session token to the viewer's session state.
///
/// Implementations talk to whatever authority owns sessions: the Historia
/// backend over HTTP in production, a canned map in tests. The guard never
/// calls this directly; it only reads the resolved [`ViewerSession`].
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Resolves `token` to a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionFetchError::Rejected`] when the authority declines
    /// the token, and [`SessionFetchError::Unavailable`] or
    /// [`SessionFetchError::Malformed`] for transport and decoding failures.
    async fn resolve(&self, token: &str) -> Result<ViewerSession, SessionFetchError>;
}
