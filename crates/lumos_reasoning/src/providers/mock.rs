//! Mock text generator — deterministic responses for running without API
//! keys and for tests.

use crate::llm::{GenerationParams, TextGenerator};
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct MockProvider {
    model: String,
}

impl MockProvider {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for MockProvider {
    async fn generate(&self, _prompt: &str, _params: GenerationParams) -> Result<String> {
        tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;
        Ok(format!(
            "(Mock {} Response) I hear you, and I'm here with you.",
            self.model
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_generate() {
        let provider = MockProvider::new("test-model");
        let reply = provider
            .generate("hello", GenerationParams::default())
            .await
            .unwrap();
        assert!(reply.contains("Mock"));
        assert!(reply.contains("test-model"));
    }
}
