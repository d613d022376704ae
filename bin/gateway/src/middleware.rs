//! Access-guard middleware.
//!
//! Runs in front of the SPA bundle: resolves the viewer session from the
//! session cookie, evaluates the guard, and applies the decision as an HTTP
//! redirect. Access-control conditions never surface as error pages.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use historia_access::{SessionFetchError, ViewerSession};
use historia_guard::{RedirectDecision, should_log_activity};
use time::Duration as TimeDuration;

use crate::AppState;
use crate::readiness::BackendReadiness;

/// Interim page served while session state is indeterminate.
const LOADING_PLACEHOLDER: &str = concat!(
    "<!DOCTYPE html><html><head><meta charset=\"utf-8\">",
    "<meta http-equiv=\"refresh\" content=\"2\">",
    "<title>Historia</title></head>",
    "<body><p>Loading&hellip;</p></body></html>"
);

/// Outcome of resolving the session cookie for one request.
struct ResolvedSession {
    session: ViewerSession,
    /// The backend rejected the stored token; the cookie must be dropped.
    rejected: bool,
}

/// Gates every SPA navigation behind the access guard.
pub async fn guard_navigation(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let resolved = resolve_session(&state, &jar).await;
    let decision = state.guard.evaluate(&resolved.session, &path);

    let response = match &decision {
        RedirectDecision::Allow if resolved.session.is_loading() => {
            // No redirect may fire while the state is indeterminate; serve
            // the placeholder instead of the app shell.
            loading_placeholder()
        }
        RedirectDecision::Allow => {
            record_activity(&resolved.session, &path);
            next.run(request).await
        }
        RedirectDecision::RedirectTo(target) => Redirect::to(target).into_response(),
    };

    if resolved.rejected {
        // Stale token; expire the cookie alongside whatever we answer.
        let removal = Cookie::build((state.config.session.cookie_name.clone(), ""))
            .path("/")
            .max_age(TimeDuration::ZERO);
        return (jar.add(removal), response).into_response();
    }
    response
}

/// Resolves the viewer session for one request, absorbing every failure
/// into a safe state.
async fn resolve_session(state: &AppState, jar: &CookieJar) -> ResolvedSession {
    // Copy the readiness out so the watch borrow never spans an await.
    let readiness = *state.readiness.borrow();
    if readiness == BackendReadiness::Pending {
        return ResolvedSession {
            session: ViewerSession::Loading,
            rejected: false,
        };
    }

    let Some(cookie) = jar.get(&state.config.session.cookie_name) else {
        return ResolvedSession {
            session: ViewerSession::Anonymous,
            rejected: false,
        };
    };

    match state.session_source.resolve(cookie.value()).await {
        Err(SessionFetchError::Rejected) => {
            tracing::debug!("backend rejected the stored session token");
            ResolvedSession {
                session: ViewerSession::Anonymous,
                rejected: true,
            }
        }
        result => ResolvedSession {
            session: ViewerSession::from_fetch(result),
            rejected: false,
        },
    }
}

fn record_activity(session: &ViewerSession, path: &str) {
    let Some(user) = session.user() else { return };
    if should_log_activity(path) {
        tracing::info!(user = %user.id(), path, "viewer activity");
    } else {
        tracing::debug!(user = %user.id(), path, "activity suppressed for profile view");
    }
}

fn loading_placeholder() -> Response {
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-store")],
        Html(LOADING_PLACEHOLDER),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GatewayConfig, ProbeConfig, SessionConfig};
    use async_trait::async_trait;
    use historia_access::{Role, SessionSource, User};
    use historia_guard::{AccessGuard, GuardPaths};
    use tokio::sync::watch;

    /// Answers every resolution with a canned result.
    struct StubSource(Result<ViewerSession, SessionFetchError>);

    #[async_trait]
    impl SessionSource for StubSource {
        async fn resolve(&self, _token: &str) -> Result<ViewerSession, SessionFetchError> {
            self.0.clone()
        }
    }

    fn state(source: StubSource, readiness: BackendReadiness) -> AppState {
        let (_tx, rx) = watch::channel(readiness);
        AppState {
            config: GatewayConfig {
                listen_addr: "127.0.0.1:0".to_string(),
                backend_url: "http://backend.test".to_string(),
                asset_dir: "dist".to_string(),
                session: SessionConfig::default(),
                probe: ProbeConfig::default(),
                guard: GuardPaths::default(),
            },
            guard: AccessGuard::historia(),
            session_source: Box::new(source),
            readiness: rx,
        }
    }

    fn jar_with_token(state: &AppState) -> CookieJar {
        CookieJar::new().add(Cookie::new(
            state.config.session.cookie_name.clone(),
            "tok",
        ))
    }

    #[tokio::test]
    async fn pending_backend_yields_loading() {
        let state = state(
            StubSource(Ok(ViewerSession::Anonymous)),
            BackendReadiness::Pending,
        );
        let resolved = resolve_session(&state, &jar_with_token(&state)).await;
        assert_eq!(resolved.session, ViewerSession::Loading);
        assert!(!resolved.rejected);
    }

    #[tokio::test]
    async fn missing_cookie_is_anonymous() {
        let state = state(
            StubSource(Ok(ViewerSession::Authenticated(User::new(Role::Admin)))),
            BackendReadiness::Ready,
        );
        let resolved = resolve_session(&state, &CookieJar::new()).await;
        assert_eq!(resolved.session, ViewerSession::Anonymous);
        assert!(!resolved.rejected);
    }

    #[tokio::test]
    async fn valid_token_resolves_user() {
        let user = User::new(Role::Contributor);
        let state = state(
            StubSource(Ok(ViewerSession::Authenticated(user.clone()))),
            BackendReadiness::Ready,
        );
        let resolved = resolve_session(&state, &jar_with_token(&state)).await;
        assert_eq!(resolved.session, ViewerSession::Authenticated(user));
    }

    #[tokio::test]
    async fn rejected_token_is_anonymous_and_drops_cookie() {
        let state = state(
            StubSource(Err(SessionFetchError::Rejected)),
            BackendReadiness::Ready,
        );
        let resolved = resolve_session(&state, &jar_with_token(&state)).await;
        assert_eq!(resolved.session, ViewerSession::Anonymous);
        assert!(resolved.rejected);
    }

    #[tokio::test]
    async fn unavailable_backend_fails_closed_and_keeps_cookie() {
        let state = state(
            StubSource(Err(SessionFetchError::Unavailable {
                reason: "connection refused".to_string(),
            })),
            BackendReadiness::Ready,
        );
        let resolved = resolve_session(&state, &jar_with_token(&state)).await;
        assert_eq!(resolved.session, ViewerSession::Anonymous);
        assert!(!resolved.rejected);
    }
}
