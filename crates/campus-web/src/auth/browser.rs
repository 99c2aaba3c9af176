use async_trait::async_trait;
use leptos::*;
use tracing::{debug, info, warn};

use super::provider::SessionProvider;
use super::storage;
use crate::api::ApiClient;
use crate::error::Result;
use crate::types::{Credentials, Session, StoredSession};

/// Session provider backed by the campus API and localStorage.
///
/// Must be created inside a reactive owner (it allocates signals).
pub struct BrowserSessionProvider {
    current: RwSignal<Option<StoredSession>>,
    restored: RwSignal<bool>,
    api: ApiClient,
}

impl BrowserSessionProvider {
    pub fn new(api: ApiClient) -> Self {
        Self {
            current: create_rw_signal(None),
            restored: create_rw_signal(false),
            api,
        }
    }

    /// Load a persisted session. Browser only; an expired or unreadable record
    /// is discarded.
    pub fn restore(&self) {
        match storage::load() {
            Ok(Some(stored)) if stored.is_expired(chrono::Utc::now()) => {
                debug!("stored session expired");
                if let Err(error) = storage::clear() {
                    warn!(%error, "failed to clear expired session");
                }
            }
            Ok(Some(stored)) => {
                debug!(identity = ?stored.session.identity, "restored session");
                self.current.set(Some(stored));
            }
            Ok(None) => {}
            Err(error) => warn!(%error, "failed to restore session"),
        }
        self.restored.set(true);
    }

    /// False until [`restore`](Self::restore) has run, i.e. always on the server.
    pub fn restored(&self) -> Signal<bool> {
        self.restored.into()
    }
}

#[async_trait(?Send)]
impl SessionProvider for BrowserSessionProvider {
    fn session(&self) -> Option<Session> {
        self.current
            .with(|stored| stored.as_ref().map(|stored| stored.session.clone()))
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<Session> {
        let stored = self.api.login(&credentials).await?;
        if let Err(error) = storage::save(&stored) {
            warn!(%error, "session will not survive a reload");
        }
        info!(identity = ?stored.session.identity, "signed in");

        let session = stored.session.clone();
        self.current.set(Some(stored));
        Ok(session)
    }

    /// Local state is dropped before the backend is told, so a failed request
    /// still leaves this browser signed out.
    async fn sign_out(&self) -> Result<()> {
        let token = self.current.with_untracked(|stored| stored.as_ref().map(|s| s.token.clone()));

        if let Err(error) = storage::clear() {
            warn!(%error, "failed to clear stored session");
        }
        self.current.set(None);

        match token {
            Some(token) => self.api.logout(&token).await,
            None => Ok(()),
        }
    }
}
