use thiserror::Error;

/// Error raised when the outbound generation call cannot be completed.
///
/// Only transport, auth, and provider-level failures live here. A well-formed
/// provider response that merely lacks the expected answer text is not an
/// error; the client substitutes a sentinel and stays on the success path
/// (see `genai::gemini`).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The client has no API key to send.
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider answered 200 but the body could not be decoded.
    #[error("provider response could not be decoded: {0}")]
    Malformed(String),

    /// The request never produced an HTTP response (DNS, connect, TLS, ...).
    #[error("provider request failed: {0}")]
    Transport(String),
}

impl ProviderError {
    /// HTTP status reported by the provider, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
