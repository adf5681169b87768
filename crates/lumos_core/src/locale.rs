//! User-facing strings for the two supported locales.
//!
//! Every string the engine or client shows goes through [`text`]. An
//! unknown key echoes back as the visible string rather than failing, so a
//! missing translation never takes a session down.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी (Hindi)",
        }
    }

    /// Parse a locale code; anything unrecognized falls back to English.
    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "hi" => Language::Hi,
            _ => Language::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

// (key, english, hindi)
const STRINGS: &[(&str, &str, &str)] = &[
    (
        "main_title",
        "✨ Lumos - Mental Health Companion",
        "✨ Lumos - मानसिक स्वास्थ्य साथी",
    ),
    (
        "chat_placeholder",
        "How are you feeling today? Share what's on your mind...",
        "आज आप कैसा महसूस कर रहे हैं? अपने मन की बात साझा करें...",
    ),
    ("thinking", "Thinking...", "सोच रहा हूं..."),
    ("emotion_level", "Emotion Level", "भावना स्तर"),
    (
        "emotion_logged",
        "Emotion logged successfully!",
        "भावना सफलतापूर्वक लॉग हो गई!",
    ),
    ("average", "Average", "औसत"),
    ("streak", "Current Streak", "वर्तमान लक्ष्य"),
    ("points", "Total Points", "कुल अंक"),
    ("completed", "Challenges Completed", "पूर्ण चुनौतियां"),
    ("todays_challenge", "Today's Challenge", "आज की चुनौती"),
    ("instructions", "Instructions:", "निर्देश:"),
    ("duration", "Duration:", "अवधि:"),
    (
        "challenge_completed",
        "🎉 Challenge Completed!",
        "🎉 चुनौती पूर्ण!",
    ),
    (
        "next_challenge",
        "Come back tomorrow for a new challenge!",
        "नई चुनौती के लिए कल वापस आएं!",
    ),
    (
        "no_emotion_data",
        "No emotion data available yet. Start logging your emotions!",
        "अभी तक कोई भावना डेटा उपलब्ध नहीं है। अपनी भावनाओं को लॉग करना शुरू करें!",
    ),
    (
        "low_mood_message",
        "Your mood seems low. Try one of the suggested remedies.",
        "आपका मूड कम लग रहा है। सुझाए गए उपचारों में से एक आज़माएं।",
    ),
    (
        "good_mood_message",
        "You're doing great! Keep up the positive energy.",
        "आप बहुत अच्छा कर रहे हैं! सकारात्मक ऊर्जा बनाए रखें।",
    ),
    (
        "neutral_mood_message",
        "A balanced state is a fine place to build from.",
        "संतुलित स्थिति आगे बढ़ने के लिए अच्छी जगह है।",
    ),
    (
        "session_exported",
        "Session data exported.",
        "सत्र डेटा निर्यात हो गया।",
    ),
    (
        "meditation_completed",
        "🎉 Meditation session completed!",
        "🎉 ध्यान सत्र पूर्ण!",
    ),
    ("goodbye", "Take care of yourself. 💙", "अपना ख्याल रखें। 💙"),
];

/// Resolve a user-facing string. Unknown keys echo back verbatim.
pub fn text(key: &str, language: Language) -> &str {
    for (k, en, hi) in STRINGS {
        if *k == key {
            return match language {
                Language::En => en,
                Language::Hi => hi,
            };
        }
    }
    // Visible fallback beats a panic in the middle of a session.
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_resolves_per_language() {
        assert_eq!(text("thinking", Language::En), "Thinking...");
        assert_eq!(text("thinking", Language::Hi), "सोच रहा हूं...");
    }

    #[test]
    fn test_unknown_key_echoes_back() {
        assert_eq!(text("no_such_key", Language::En), "no_such_key");
        assert_eq!(text("no_such_key", Language::Hi), "no_such_key");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("hi"), Language::Hi);
        assert_eq!(Language::from_code("HI"), Language::Hi);
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("fr"), Language::En);
    }

    #[test]
    fn test_every_key_has_both_translations() {
        for (key, en, hi) in STRINGS {
            assert!(!en.is_empty(), "missing English for {key}");
            assert!(!hi.is_empty(), "missing Hindi for {key}");
        }
    }
}
