pub mod gemini;

use async_trait::async_trait;

use crate::error::ProviderError;

pub use gemini::{GeminiClient, GeminiConfig};

/// The provider's answer, extracted from its nested response structure.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub text: String,
}

/// Seam for the outbound generation call.
///
/// Handlers depend on this trait rather than on the concrete client, so the
/// request pipeline can be exercised against a stub provider in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Issue exactly one generation request for the given prompt.
    ///
    /// No retries, no streaming, no caching. Fails with [`ProviderError`]
    /// only when the call itself cannot be completed.
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, ProviderError>;
}
