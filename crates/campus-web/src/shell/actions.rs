//! Effects triggered from the shell: destination selection and sign-out.

use tracing::{debug, info, warn};

use super::nav::NavDestination;
use super::panel::{PanelEvent, PanelState};
use crate::auth::SessionProvider;
use crate::config::AUTH_PATH;
use crate::error::CampusError;

/// Imperative half of the router.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigate to `destination` and close the drawer. The drawer closes on wide
/// viewports too, where it has no visible effect.
pub fn select_destination(
    navigator: &dyn Navigator,
    panel: PanelState,
    destination: &NavDestination,
) -> PanelState {
    debug!(path = destination.path, "destination selected");
    navigator.navigate(destination.path);
    panel.apply(PanelEvent::CloseRequested)
}

#[derive(Debug)]
pub enum SignOutOutcome {
    Completed,
    /// The provider rejected; the user was sent to the auth screen anyway.
    ProviderFailed(CampusError),
}

impl SignOutOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SignOutOutcome::Completed)
    }
}

/// Await the provider's sign-out, then navigate to the auth screen whatever the
/// result. One attempt per call; concurrent calls are not deduplicated here.
pub async fn sign_out(provider: &dyn SessionProvider, navigator: &dyn Navigator) -> SignOutOutcome {
    info!("signing out");

    let outcome = match provider.sign_out().await {
        Ok(()) => {
            info!("signed out");
            SignOutOutcome::Completed
        }
        Err(error) => {
            warn!(%error, "sign-out failed, redirecting to auth anyway");
            SignOutOutcome::ProviderFailed(error)
        }
    };

    navigator.navigate(AUTH_PATH);
    outcome
}
