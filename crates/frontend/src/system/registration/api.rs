use contracts::system::registration::RegisterRequest;
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::config::FrontendConfig;

/// Why a registration POST did not succeed.
///
/// The form shows the same message for every variant; the distinction only
/// reaches the log.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Registration failed: {0}")]
    Status(u16),
    #[error("Failed to read response: {0}")]
    Body(String),
}

/// Register a new account and company
///
/// Issues exactly one `POST` to the configured registration URL. Any 2xx
/// status is a success; the response body is returned as text and is not
/// interpreted. No retries, no timeout.
pub async fn register(
    config: &FrontendConfig,
    request: &RegisterRequest,
) -> Result<String, RegistrationError> {
    let response = Request::post(&config.register_url())
        .json(request)
        .map_err(|e| RegistrationError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| RegistrationError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(RegistrationError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| RegistrationError::Body(e.to_string()))
}
