use crate::config::DEFAULT_ROLE_LABEL;
use crate::types::Session;

/// What the sidebar's user section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIdentity {
    pub identity: String,
    pub role: String,
}

/// Empty roles count as absent. Whitespace-only roles are shown as-is.
pub fn derive_display_identity(session: &Session) -> DisplayIdentity {
    DisplayIdentity {
        identity: session.identity.clone().unwrap_or_default(),
        role: session
            .role
            .as_deref()
            .filter(|role| !role.is_empty())
            .unwrap_or(DEFAULT_ROLE_LABEL)
            .to_string(),
    }
}
