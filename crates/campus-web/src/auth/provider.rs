use async_trait::async_trait;

use crate::error::{CampusError, Result};
use crate::types::{Credentials, Session};

/// Source of identity and the sign-in/sign-out primitives.
///
/// Browser futures are not `Send`, so neither are these.
#[async_trait(?Send)]
pub trait SessionProvider {
    /// Current session, `None` when signed out. Reactive implementations track
    /// this read, so calling it inside a view closure re-renders on change.
    fn session(&self) -> Option<Session>;

    async fn sign_in(&self, credentials: Credentials) -> Result<Session> {
        let _ = credentials;
        Err(CampusError::auth("sign-in is not supported by this provider"))
    }

    async fn sign_out(&self) -> Result<()>;
}
