/// HTTP client for the campus auth backend

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::{LOGIN_ENDPOINT, LOGOUT_ENDPOINT};
use crate::error::{CampusError, Result};
use crate::types::{ApiResponse, Credentials, LoginResponse, StoredSession};

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Same-origin client.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<StoredSession> {
        let response = Request::post(&self.url(LOGIN_ENDPOINT))
            .json(credentials)
            .map_err(|e| CampusError::network(format!("Failed to create request: {}", e)))?
            .send()
            .await
            .map_err(|e| CampusError::network(e.to_string()))?;

        let login: LoginResponse = unwrap_envelope(response).await?;
        Ok(login.into())
    }

    pub async fn logout(&self, token: &str) -> Result<()> {
        let response = Request::post(&self.url(LOGOUT_ENDPOINT))
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| CampusError::network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(CampusError::network(format!("HTTP error: {}", response.status())))
        }
    }
}

async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(match status {
            401 | 403 => CampusError::auth(if body.is_empty() {
                "Invalid email or password".to_string()
            } else {
                body
            }),
            _ => CampusError::network(format!("HTTP error: {}", status)),
        });
    }

    let envelope: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| CampusError::network(format!("Failed to parse response: {}", e)))?;

    match (envelope.success, envelope.data) {
        (true, Some(data)) => Ok(data),
        (true, None) => Err(CampusError::network("Empty response from server")),
        (false, _) => Err(CampusError::auth(
            envelope.error.unwrap_or_else(|| "Request failed".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        assert_eq!(ApiClient::new().url(LOGIN_ENDPOINT), "/api/auth/login");
        assert_eq!(
            ApiClient::with_base_url("https://campus.example.edu").url(LOGOUT_ENDPOINT),
            "https://campus.example.edu/api/auth/logout"
        );
    }
}
