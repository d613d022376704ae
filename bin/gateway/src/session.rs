//! Session resolution against the Historia backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use historia_access::{Role, SessionFetchError, SessionSource, User, UserId, ViewerSession};
use reqwest::StatusCode;
use serde::Deserialize;

/// Wire shape of the backend's session payload.
#[derive(Debug, Deserialize)]
struct SessionDto {
    user: UserDto,
}

/// Wire shape of the backend's user record.
#[derive(Debug, Deserialize)]
struct UserDto {
    id: UserId,
    /// Absent or unrecognized roles degrade to the lowest privilege.
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserDto {
    fn into_user(self) -> User {
        User::with_all_fields(
            self.id,
            self.role.unwrap_or(Role::Viewer),
            self.email,
            self.display_name,
            self.created_at,
            self.updated_at,
        )
    }
}

/// [`SessionSource`] backed by the backend's session endpoint.
pub struct HttpSessionSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSessionSource {
    /// Creates a source against the given backend base URL.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn session_url(&self) -> String {
        format!("{}/api/auth/session", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SessionSource for HttpSessionSource {
    async fn resolve(&self, token: &str) -> Result<ViewerSession, SessionFetchError> {
        let response = self
            .client
            .get(self.session_url())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SessionFetchError::Unavailable {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            let dto: SessionDto =
                response
                    .json()
                    .await
                    .map_err(|e| SessionFetchError::Malformed {
                        reason: e.to_string(),
                    })?;
            Ok(ViewerSession::Authenticated(dto.user.into_user()))
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(SessionFetchError::Rejected)
        } else {
            Err(SessionFetchError::Unavailable {
                reason: format!("backend returned {status}"),
            })
        }
    }
}
