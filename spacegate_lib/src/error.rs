//! Error types for the gateway's domain layer.

use std::fmt;

/// Errors produced by the domain layer, wrapping upstream API errors and
/// adding the two classes of input failure the HTTP layer distinguishes:
/// malformed parameters and violated range rules.
#[derive(Debug)]
pub enum GatewayError {
    /// An error from the underlying API client.
    Api(nasa_api::Error),
    /// A parameter failed to parse or is outside its numeric bounds.
    InvalidInput(String),
    /// A well-formed request violates a date-range rule.
    InvalidRange(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidRange(msg) => write!(f, "Invalid range: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<nasa_api::Error> for GatewayError {
    fn from(e: nasa_api::Error) -> Self {
        Self::Api(e)
    }
}
