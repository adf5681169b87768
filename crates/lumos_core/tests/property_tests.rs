//! Property-based tests for the mood model and classifiers.
//!
//! Verifies that every path into the mood scale lands inside [1, 10] and
//! that the classifiers never panic on arbitrary input.

use lumos_core::classifier::{classify, mood_from_emotion_word};
use lumos_core::emotion::{AnalysisSource, EmotionAnalysis, EmotionLabel};
use lumos_core::mood::{MoodScore, MoodTier};
use proptest::prelude::*;
use std::collections::BTreeMap;

proptest! {
    /// classify() is total and always lands on the 1-10 scale.
    #[test]
    fn classify_always_in_range(text in ".*") {
        let mood = classify(&text);
        prop_assert!((1..=10).contains(&mood.get()));
    }

    /// Any camera label string maps into the 1-10 scale.
    #[test]
    fn emotion_word_always_in_range(label in ".*") {
        let mood = mood_from_emotion_word(&label);
        prop_assert!((1..=10).contains(&mood.get()));
    }

    /// Construction clamps arbitrary integers into range.
    #[test]
    fn mood_score_new_clamps(raw in any::<i64>()) {
        let mood = MoodScore::new(raw);
        prop_assert!((1..=10).contains(&mood.get()));
    }

    /// Every score belongs to exactly one tier (from_score never panics).
    #[test]
    fn every_score_has_a_tier(raw in 1i64..=10) {
        let _ = MoodTier::from_score(MoodScore::new(raw));
    }

    /// Normalization yields a distribution over all 8 labels summing to
    /// 100, for any non-negative weights.
    #[test]
    fn analysis_distribution_sums_to_100(
        weights in proptest::collection::vec(0.0f64..1000.0, 8)
    ) {
        let map: BTreeMap<EmotionLabel, f64> = EmotionLabel::ALL
            .iter()
            .copied()
            .zip(weights)
            .collect();
        let analysis = EmotionAnalysis::from_weights(&map, AnalysisSource::Sample);
        let total: f64 = analysis.distribution.values().sum();
        prop_assert!((total - 100.0).abs() < 1e-6);
        prop_assert_eq!(analysis.distribution.len(), 8);
        prop_assert!(analysis.confidence > 0.0 && analysis.confidence <= 100.0);
    }
}

/// Trauma vocabulary wins regardless of whatever else the text contains.
#[test]
fn trauma_priority_holds_with_suffixes() {
    for suffix in ["", " but happy", " and amazing wonderful great", " okay fine"] {
        let text = format!("had a flashback{suffix}");
        assert_eq!(classify(&text).get(), 1, "input: {text}");
    }
}
