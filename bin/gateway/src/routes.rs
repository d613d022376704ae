//! Authentication routes for login, callback, and logout.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use historia_access::ViewerSession;
use serde::Deserialize;
use time::Duration as TimeDuration;

use crate::AppState;

/// Query parameters for the auth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    token: String,
}

/// Sends the viewer to the backend's login page.
pub async fn login(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let login_url = format!("{}/login", state.config.backend_url.trim_end_matches('/'));
    Redirect::to(&login_url)
}

/// Finishes the login handshake: validates the token the backend issued,
/// stores it in the session cookie, and lands the viewer.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
    jar: CookieJar,
) -> Response {
    let session = ViewerSession::from_fetch(state.session_source.resolve(&query.token).await);

    let Some(user) = session.user() else {
        // The token never became a session; back to the login page.
        return Redirect::to(state.guard.paths().public_landing()).into_response();
    };

    let landing = state.guard.landing_path_for(user).to_string();

    let cookie = Cookie::build((state.config.session.cookie_name.clone(), query.token.clone()))
        .path("/")
        .http_only(true)
        .secure(state.config.session.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(state.config.session.cookie_minutes));

    tracing::info!(user = %user.id(), "viewer signed in");

    (jar.add(cookie), Redirect::to(&landing)).into_response()
}

/// Clears the session cookie and returns the viewer to the login page.
pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    let removal = Cookie::build((state.config.session.cookie_name.clone(), ""))
        .path("/")
        .max_age(TimeDuration::ZERO);

    (jar.add(removal), Redirect::to(state.guard.paths().public_landing()))
}
