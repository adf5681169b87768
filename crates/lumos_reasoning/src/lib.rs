pub mod composer;
pub mod llm;
pub mod providers;
pub mod retry;
pub mod vision;

pub use composer::Composer;
pub use llm::{GenerationParams, TextGenerator};
pub use providers::gemini::GeminiClient;
pub use providers::mock::MockProvider;
pub use vision::{analyze_with_fallback, fallback_analysis, sample_analysis, ImageAnalyzer};
