use anyhow::Result;
use async_trait::async_trait;

/// Parameters for a single completion request.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    /// Maximum tokens to generate (clamped by the provider).
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.8,
        }
    }
}

/// The external text-generation collaborator.
///
/// Given a composed prompt, returns a completion. Failure and empty output
/// are both expected outcomes — callers must degrade to fixed fallback
/// text, never surface the error to the end user.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String>;
}
