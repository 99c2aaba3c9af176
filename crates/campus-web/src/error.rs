use thiserror::Error;

pub type Result<T> = std::result::Result<T, CampusError>;

#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CampusError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CampusError::network("connection refused").to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            CampusError::auth("invalid credentials").to_string(),
            "Authentication error: invalid credentials"
        );
        assert_eq!(
            CampusError::storage("localStorage disabled").to_string(),
            "Storage error: localStorage disabled"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_error = serde_json::from_str::<u32>("not a number").unwrap_err();
        let error: CampusError = parse_error.into();
        assert!(matches!(error, CampusError::Serialization(_)));
        assert!(error.to_string().starts_with("Serialization error:"));
    }
}
