//! Keyword-based mood classification for chat input and camera labels.
//!
//! A priority cascade over fixed word lists: the first tier that matches
//! decides the score. Severe-distress tiers are checked first so that a
//! message mixing crisis and positive vocabulary is flagged, not averaged.
//! In production this would be an ML model; the word lists are good enough
//! to steer the companion.

use crate::mood::MoodScore;

const TRAUMA: &[&str] = &[
    "traumatized",
    "ptsd",
    "flashback",
    "nightmare",
    "panic attack",
    "breakdown",
    "suicidal",
    "self-harm",
    "abuse",
    "violated",
    "betrayed",
    "shattered",
    "broken inside",
];

const VERY_SAD: &[&str] = &[
    "terrible",
    "awful",
    "hopeless",
    "devastated",
    "miserable",
    "depressed",
    "worthless",
    "empty",
    "numb",
    "lost",
];

const ANGRY: &[&str] = &[
    "angry", "furious", "rage", "mad", "pissed", "enraged", "livid", "outraged", "hate",
    "disgusted", "annoyed", "irritated",
];

const SAD: &[&str] = &[
    "sad",
    "upset",
    "down",
    "bad",
    "frustrated",
    "worried",
    "anxious",
    "scared",
    "hurt",
    "disappointed",
];

const LOW_ENERGY: &[&str] = &[
    "tired",
    "bored",
    "stressed",
    "overwhelmed",
    "confused",
    "uncertain",
    "disconnected",
];

const NEUTRAL: &[&str] = &[
    "okay", "fine", "meh", "whatever", "normal", "average", "nothing", "same", "usual", "alright",
];

const HAPPY: &[&str] = &[
    "good",
    "great",
    "happy",
    "excited",
    "amazing",
    "wonderful",
    "fantastic",
    "excellent",
    "grateful",
    "blessed",
];

const VERY_HAPPY: &[&str] = &[
    "ecstatic",
    "thrilled",
    "overjoyed",
    "elated",
    "euphoric",
    "blissful",
    "radiant",
    "incredible",
];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Infer a mood score from free text.
///
/// Total over any input: unmatched text (including the empty string)
/// scores neutral.
pub fn classify(text: &str) -> MoodScore {
    let text = text.to_lowercase();

    if contains_any(&text, TRAUMA) {
        return MoodScore::new(1);
    }
    if contains_any(&text, VERY_SAD) {
        return MoodScore::new(1);
    }
    if contains_any(&text, ANGRY) {
        return MoodScore::new(2);
    }
    if contains_any(&text, SAD) {
        return MoodScore::new(2);
    }
    if contains_any(&text, LOW_ENERGY) {
        return MoodScore::new(3);
    }
    if contains_any(&text, NEUTRAL) {
        return MoodScore::new(5);
    }
    if contains_any(&text, HAPPY) {
        return MoodScore::new(8);
    }
    if contains_any(&text, VERY_HAPPY) {
        return MoodScore::new(9);
    }

    MoodScore::NEUTRAL
}

/// Map a camera-derived emotion word onto the mood scale.
///
/// Covers the variants the vision collaborator is known to emit; anything
/// else scores neutral. Case-insensitive.
pub fn mood_from_emotion_word(label: &str) -> MoodScore {
    let score = match label.to_lowercase().as_str() {
        "rage" | "furious" | "terror" | "panic" | "sad" | "depressed" | "devastated"
        | "trauma" => 1,
        "angry" | "disgust" | "fear" | "shock" => 2,
        "confused" => 4,
        "surprise" => 6,
        "calm" => 6,
        "content" | "peaceful" => 7,
        "happy" => 8,
        "joy" => 9,
        "ecstatic" => 10,
        _ => 5,
    };
    MoodScore::new(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trauma_beats_positive_words() {
        // Cascade priority: crisis vocabulary wins over anything after it.
        let mood = classify("I had a panic attack but today was amazing and wonderful");
        assert_eq!(mood.get(), 1);
    }

    #[test]
    fn test_empty_and_nonsense_are_neutral() {
        assert_eq!(classify("").get(), 5);
        assert_eq!(classify("xyz nonsense").get(), 5);
    }

    #[test]
    fn test_hopeless_and_empty() {
        assert_eq!(classify("I feel hopeless and empty").get(), 1);
    }

    #[test]
    fn test_anger_tier() {
        assert_eq!(classify("I'm so furious at everything").get(), 2);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("FEELING ECSTATIC").get(), 9);
        assert_eq!(classify("Tired again").get(), 3);
    }

    #[test]
    fn test_anger_outranks_sadness() {
        // "hate" (anger tier) is checked before "disappointed" (sadness tier).
        assert_eq!(classify("I hate feeling disappointed").get(), 2);
    }

    #[test]
    fn test_positive_tiers() {
        assert_eq!(classify("feeling great today").get(), 8);
        assert_eq!(classify("overjoyed and elated").get(), 9);
    }

    #[test]
    fn test_emotion_word_mapping() {
        assert_eq!(mood_from_emotion_word("furious").get(), 1);
        assert_eq!(mood_from_emotion_word("Rage").get(), 1);
        assert_eq!(mood_from_emotion_word("ecstatic").get(), 10);
        assert_eq!(mood_from_emotion_word("peaceful").get(), 7);
    }

    #[test]
    fn test_unknown_emotion_word_is_neutral() {
        assert_eq!(mood_from_emotion_word("perplexed").get(), 5);
        assert_eq!(mood_from_emotion_word("").get(), 5);
    }
}
