use thiserror::Error;

/// Failure taxonomy for talking to the movie API.
///
/// Callers map each kind to a user-facing message; the repository never
/// wraps or re-classifies these, a fallback either masks the error with
/// cached data or re-surfaces it unchanged.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request URL could not be built. Unreachable with well-formed
    /// configuration, kept so the taxonomy matches the API contract.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Connectivity, timeout, or non-2xx response.
    #[error("transport failure: {0}")]
    TransportFailure(String),

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response: {0}")]
    DecodeFailure(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::DecodeFailure(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            ApiError::TransportFailure(err.to_string())
        }
    }
}
