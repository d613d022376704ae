//! Backend readiness probe.
//!
//! Until the backend answers its first health probe, session state is
//! indeterminate and every navigation renders the loading placeholder
//! instead of bouncing viewers to the login page. The probe task publishes
//! on a watch channel; request handling observes the latest value and never
//! awaits the probe.

use std::time::Duration;

use tokio::sync::watch;

/// Latest known readiness of the Historia backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendReadiness {
    /// No probe has succeeded yet.
    Pending,
    /// The backend has answered a health probe.
    Ready,
}

/// Spawns the probe task and returns the observer handle.
pub fn spawn_probe(backend_url: String, interval: Duration) -> watch::Receiver<BackendReadiness> {
    let (tx, rx) = watch::channel(BackendReadiness::Pending);

    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let url = format!("{}/api/health", backend_url.trim_end_matches('/'));
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;
            match client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::info!("backend is ready");
                    let _ = tx.send(BackendReadiness::Ready);
                    break;
                }
                Ok(response) => {
                    tracing::warn!(status = %response.status(), "backend health probe failed");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "backend health probe failed");
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn receiver_starts_pending() {
        // Port 1 refuses connections; the probe keeps failing and the
        // published state stays pending.
        let rx = spawn_probe("http://127.0.0.1:1".to_string(), Duration::from_secs(3600));
        assert_eq!(*rx.borrow(), BackendReadiness::Pending);
    }
}
