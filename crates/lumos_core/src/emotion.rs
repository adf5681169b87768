//! Emotion analysis results from the image-understanding collaborator.

use crate::mood::MoodScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fixed vocabulary the vision collaborator reports over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Neutral,
    Surprised,
    Fear,
    Trauma,
    Disgust,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 8] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Neutral,
        EmotionLabel::Surprised,
        EmotionLabel::Fear,
        EmotionLabel::Trauma,
        EmotionLabel::Disgust,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Surprised => "surprised",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Trauma => "trauma",
            EmotionLabel::Disgust => "disgust",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "happy" => Some(EmotionLabel::Happy),
            "sad" => Some(EmotionLabel::Sad),
            "angry" => Some(EmotionLabel::Angry),
            "neutral" => Some(EmotionLabel::Neutral),
            "surprised" => Some(EmotionLabel::Surprised),
            "fear" => Some(EmotionLabel::Fear),
            "trauma" => Some(EmotionLabel::Trauma),
            "disgust" => Some(EmotionLabel::Disgust),
            _ => None,
        }
    }

    /// Position of this label on the 1-10 mood scale, used to fold camera
    /// detections into the chat mood.
    pub fn mood(self) -> MoodScore {
        let score = match self {
            EmotionLabel::Trauma => 1,
            EmotionLabel::Angry => 2,
            EmotionLabel::Sad | EmotionLabel::Fear => 3,
            EmotionLabel::Disgust => 4,
            EmotionLabel::Neutral => 5,
            EmotionLabel::Surprised => 6,
            EmotionLabel::Happy => 8,
        };
        MoodScore::new(score)
    }

    /// A detection that should prompt remedies on its own.
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            EmotionLabel::Sad
                | EmotionLabel::Angry
                | EmotionLabel::Fear
                | EmotionLabel::Disgust
                | EmotionLabel::Trauma
        )
    }

    pub fn emoji(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "😊",
            EmotionLabel::Sad => "😢",
            EmotionLabel::Angry => "😠",
            EmotionLabel::Neutral => "😐",
            EmotionLabel::Surprised => "😲",
            EmotionLabel::Fear => "😨",
            EmotionLabel::Trauma => "😞",
            EmotionLabel::Disgust => "🤢",
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Demo run with no image at all.
    Sample,
    /// A real image analyzed by the vision collaborator.
    Uploaded,
    /// Local heuristic used after the collaborator failed.
    Fallback,
}

/// One immutable emotion reading over an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    pub primary: EmotionLabel,
    /// Percentage confidence in the primary label, 0-100.
    pub confidence: f64,
    /// Label -> percentage, summing to 100.
    pub distribution: BTreeMap<EmotionLabel, f64>,
    pub source: AnalysisSource,
    pub timestamp: DateTime<Utc>,
}

impl EmotionAnalysis {
    /// Build an analysis from raw per-label weights.
    ///
    /// Weights are floored at a small positive value and normalized to sum
    /// to 100; the primary label is the heaviest one. Labels absent from
    /// `weights` get the floor.
    pub fn from_weights(
        weights: &BTreeMap<EmotionLabel, f64>,
        source: AnalysisSource,
    ) -> Self {
        let mut distribution = BTreeMap::new();
        for label in EmotionLabel::ALL {
            let w = weights.get(&label).copied().unwrap_or(0.0);
            distribution.insert(label, w.max(1.0));
        }
        let total: f64 = distribution.values().sum();
        for value in distribution.values_mut() {
            *value = *value / total * 100.0;
        }

        let (&primary, &confidence) = distribution
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .expect("distribution covers every label");

        Self {
            primary,
            confidence,
            distribution,
            source,
            timestamp: Utc::now(),
        }
    }

    /// Check a collaborator-reported distribution before trusting it:
    /// every label present, percentages sane, total near 100.
    pub fn is_plausible(distribution: &BTreeMap<EmotionLabel, f64>) -> bool {
        if distribution.len() != EmotionLabel::ALL.len() {
            return false;
        }
        if distribution.values().any(|v| !v.is_finite() || *v < 0.0) {
            return false;
        }
        let total: f64 = distribution.values().sum();
        (total - 100.0).abs() < 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(pairs: &[(EmotionLabel, f64)]) -> BTreeMap<EmotionLabel, f64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_from_weights_normalizes_to_100() {
        let analysis = EmotionAnalysis::from_weights(
            &weights(&[(EmotionLabel::Happy, 300.0), (EmotionLabel::Sad, 100.0)]),
            AnalysisSource::Sample,
        );
        let total: f64 = analysis.distribution.values().sum();
        assert!((total - 100.0).abs() < 1e-6);
        assert_eq!(analysis.primary, EmotionLabel::Happy);
        assert_eq!(analysis.distribution.len(), 8);
    }

    #[test]
    fn test_from_weights_floors_missing_labels() {
        let analysis = EmotionAnalysis::from_weights(
            &weights(&[(EmotionLabel::Happy, 50.0)]),
            AnalysisSource::Fallback,
        );
        for label in EmotionLabel::ALL {
            assert!(analysis.distribution[&label] > 0.0);
        }
    }

    #[test]
    fn test_label_mood_mapping() {
        assert_eq!(EmotionLabel::Trauma.mood().get(), 1);
        assert_eq!(EmotionLabel::Angry.mood().get(), 2);
        assert_eq!(EmotionLabel::Neutral.mood().get(), 5);
        assert_eq!(EmotionLabel::Happy.mood().get(), 8);
    }

    #[test]
    fn test_is_plausible_rejects_partial_or_skewed() {
        let partial = weights(&[(EmotionLabel::Happy, 100.0)]);
        assert!(!EmotionAnalysis::is_plausible(&partial));

        let mut skewed = BTreeMap::new();
        for label in EmotionLabel::ALL {
            skewed.insert(label, 20.0);
        }
        assert!(!EmotionAnalysis::is_plausible(&skewed));

        let mut ok = BTreeMap::new();
        for label in EmotionLabel::ALL {
            ok.insert(label, 12.5);
        }
        assert!(EmotionAnalysis::is_plausible(&ok));
    }

    #[test]
    fn test_parse_round_trips_all_labels() {
        for label in EmotionLabel::ALL {
            assert_eq!(EmotionLabel::parse(label.as_str()), Some(label));
        }
        assert_eq!(EmotionLabel::parse("bewildered"), None);
    }

    #[test]
    fn test_analysis_json_round_trip() {
        let analysis = EmotionAnalysis::from_weights(
            &weights(&[(EmotionLabel::Sad, 80.0), (EmotionLabel::Fear, 20.0)]),
            AnalysisSource::Uploaded,
        );
        let json = serde_json::to_string(&analysis).unwrap();
        let restored: EmotionAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.primary, EmotionLabel::Sad);
        assert_eq!(restored.source, AnalysisSource::Uploaded);
    }
}
