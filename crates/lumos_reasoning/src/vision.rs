//! Image emotion analysis: the vision collaborator contract plus the local
//! heuristic used when it is unavailable or returns garbage.

use crate::llm::GenerationParams;
use crate::providers::gemini::GeminiClient;
use anyhow::{Context, Result};
use async_trait::async_trait;
use lumos_core::emotion::{AnalysisSource, EmotionAnalysis, EmotionLabel};
use rand::Rng;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The external image-understanding collaborator.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    async fn analyze(&self, image: &[u8]) -> Result<EmotionAnalysis>;
}

const VISION_PROMPT: &str = r#"Analyze this facial image and detect emotions. Look at facial expressions, eye movements, mouth position, overall facial features, and signs of psychological distress.

Respond with ONLY a JSON object in this exact format:
{
    "primary_emotion": "neutral",
    "confidence": 85.5,
    "emotions": {
        "happy": 15.5,
        "sad": 5.2,
        "angry": 8.1,
        "neutral": 45.2,
        "surprised": 2.5,
        "fear": 1.3,
        "trauma": 1.2,
        "disgust": 1.0
    }
}

Primary emotion must be one of: happy, sad, angry, neutral, surprised, fear, trauma, disgust

EMOTION DETECTION GUIDELINES:
- **Angry**: Furrowed brows, tense jaw, narrow eyes, downturned mouth
- **Neutral**: Relaxed facial muscles, no strong emotional indicators, calm expression
- **Trauma**: Distant/vacant stare, tense facial muscles, signs of distress, withdrawn expression
- **Happy**: Smile, raised cheeks, crinkled eyes (Duchenne markers)
- **Sad**: Downturned mouth corners, drooping eyelids, furrowed inner brows
- **Fear**: Wide eyes, raised eyebrows, open mouth, tense face
- **Surprised**: Raised eyebrows, wide eyes, dropped jaw
- **Disgust**: Wrinkled nose, raised upper lip, squinted eyes

Make sure all emotion percentages sum to 100.
Base your analysis on actual facial features visible in the image."#;

#[derive(Debug, Deserialize)]
struct VisionReport {
    primary_emotion: String,
    confidence: f64,
    emotions: BTreeMap<String, f64>,
}

/// Drop a leading/trailing markdown code fence if the model wrapped its
/// JSON in one.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn parse_report(text: &str) -> Result<EmotionAnalysis> {
    let report: VisionReport = serde_json::from_str(strip_code_fence(text))
        .context("vision reply is not the expected JSON object")?;

    let mut distribution = BTreeMap::new();
    for (name, value) in &report.emotions {
        let label = EmotionLabel::parse(name)
            .with_context(|| format!("unknown emotion label in vision reply: {name}"))?;
        distribution.insert(label, *value);
    }
    anyhow::ensure!(
        EmotionAnalysis::is_plausible(&distribution),
        "vision reply distribution failed plausibility checks"
    );
    let primary = EmotionLabel::parse(&report.primary_emotion)
        .with_context(|| format!("unknown primary emotion: {}", report.primary_emotion))?;

    Ok(EmotionAnalysis {
        primary,
        confidence: report.confidence.clamp(0.0, 100.0),
        distribution,
        source: AnalysisSource::Uploaded,
        timestamp: chrono::Utc::now(),
    })
}

#[async_trait]
impl ImageAnalyzer for GeminiClient {
    async fn analyze(&self, image: &[u8]) -> Result<EmotionAnalysis> {
        let params = GenerationParams {
            max_tokens: 512,
            temperature: 0.2,
        };
        let reply = self.complete_with_image(VISION_PROMPT, image, params).await?;
        parse_report(&reply)
    }
}

/// Analyze an image, degrading to the local heuristic on any failure.
/// Never errors — the worst case is a fuzzy reading, not a broken flow.
pub async fn analyze_with_fallback<R: Rng + ?Sized>(
    analyzer: &dyn ImageAnalyzer,
    image: &[u8],
    rng: &mut R,
) -> EmotionAnalysis {
    match analyzer.analyze(image).await {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!("vision analysis failed, using local heuristic: {e:#}");
            fallback_analysis(image, rng)
        }
    }
}

/// Local heuristic reading: a randomized distribution biased by overall
/// image brightness (brighter frames lean happier). Not computer vision —
/// an honest placeholder that keeps the experience alive offline.
pub fn fallback_analysis<R: Rng + ?Sized>(image: &[u8], rng: &mut R) -> EmotionAnalysis {
    let brightness = if image.is_empty() {
        0.0
    } else {
        image.iter().map(|b| *b as f64).sum::<f64>() / image.len() as f64
    };

    let mut happy = rng.gen_range(10.0..90.0);
    let mut sad = rng.gen_range(5.0..30.0);
    if brightness > 128.0 {
        happy += rng.gen_range(5.0..15.0);
        sad -= rng.gen_range(2.0..8.0);
    } else {
        sad += rng.gen_range(5.0..10.0);
        happy -= rng.gen_range(2.0..5.0);
    }

    let mut weights = BTreeMap::new();
    weights.insert(EmotionLabel::Happy, happy);
    weights.insert(EmotionLabel::Sad, sad);
    weights.insert(EmotionLabel::Angry, rng.gen_range(5.0..25.0));
    weights.insert(EmotionLabel::Neutral, rng.gen_range(10.0..40.0));
    weights.insert(EmotionLabel::Surprised, rng.gen_range(5.0..35.0));
    weights.insert(EmotionLabel::Fear, rng.gen_range(2.0..20.0));
    weights.insert(EmotionLabel::Trauma, rng.gen_range(1.0..15.0));
    weights.insert(EmotionLabel::Disgust, rng.gen_range(2.0..15.0));

    EmotionAnalysis::from_weights(&weights, AnalysisSource::Fallback)
}

/// A fully random reading for demo mode with no image at all.
pub fn sample_analysis<R: Rng + ?Sized>(rng: &mut R) -> EmotionAnalysis {
    let mut weights = BTreeMap::new();
    for label in EmotionLabel::ALL {
        weights.insert(label, rng.gen_range(0.0..100.0));
    }
    EmotionAnalysis::from_weights(&weights, AnalysisSource::Sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GOOD_REPLY: &str = r#"{
        "primary_emotion": "sad",
        "confidence": 72.4,
        "emotions": {
            "happy": 5.0, "sad": 72.4, "angry": 4.0, "neutral": 10.0,
            "surprised": 2.0, "fear": 4.6, "trauma": 1.0, "disgust": 1.0
        }
    }"#;

    #[test]
    fn test_parse_report_accepts_valid_json() {
        let analysis = parse_report(GOOD_REPLY).unwrap();
        assert_eq!(analysis.primary, EmotionLabel::Sad);
        assert_eq!(analysis.source, AnalysisSource::Uploaded);
        assert!((analysis.confidence - 72.4).abs() < 1e-9);
    }

    #[test]
    fn test_parse_report_strips_code_fence() {
        let fenced = format!("```json\n{GOOD_REPLY}\n```");
        let analysis = parse_report(&fenced).unwrap();
        assert_eq!(analysis.primary, EmotionLabel::Sad);
    }

    #[test]
    fn test_parse_report_rejects_prose() {
        assert!(parse_report("I think the person looks sad.").is_err());
    }

    #[test]
    fn test_parse_report_rejects_unknown_labels() {
        let reply = r#"{
            "primary_emotion": "melancholy",
            "confidence": 80.0,
            "emotions": {"melancholy": 100.0}
        }"#;
        assert!(parse_report(reply).is_err());
    }

    #[test]
    fn test_parse_report_rejects_skewed_distribution() {
        let reply = r#"{
            "primary_emotion": "happy",
            "confidence": 99.0,
            "emotions": {
                "happy": 99.0, "sad": 99.0, "angry": 99.0, "neutral": 99.0,
                "surprised": 99.0, "fear": 99.0, "trauma": 99.0, "disgust": 99.0
            }
        }"#;
        assert!(parse_report(reply).is_err());
    }

    #[test]
    fn test_fallback_distribution_sums_to_100() {
        let mut rng = StdRng::seed_from_u64(1);
        let analysis = fallback_analysis(&[200u8; 64], &mut rng);
        let total: f64 = analysis.distribution.values().sum();
        assert!((total - 100.0).abs() < 1e-6);
        assert_eq!(analysis.source, AnalysisSource::Fallback);
    }

    #[test]
    fn test_fallback_handles_empty_image() {
        let mut rng = StdRng::seed_from_u64(2);
        let analysis = fallback_analysis(&[], &mut rng);
        assert_eq!(analysis.distribution.len(), 8);
    }

    #[test]
    fn test_sample_analysis_marked_as_sample() {
        let mut rng = StdRng::seed_from_u64(3);
        let analysis = sample_analysis(&mut rng);
        assert_eq!(analysis.source, AnalysisSource::Sample);
        let total: f64 = analysis.distribution.values().sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl ImageAnalyzer for FailingAnalyzer {
        async fn analyze(&self, _image: &[u8]) -> Result<EmotionAnalysis> {
            anyhow::bail!("collaborator offline")
        }
    }

    #[tokio::test]
    async fn test_analyze_with_fallback_never_errors() {
        let mut rng = StdRng::seed_from_u64(4);
        let analysis = analyze_with_fallback(&FailingAnalyzer, &[128u8; 16], &mut rng).await;
        assert_eq!(analysis.source, AnalysisSource::Fallback);
    }
}
