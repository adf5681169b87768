//! The 1-10 mood scale and its display bucketing.
//!
//! Two bucketing policies exist over this scale: the display tiers below,
//! and the 4-category remedy policy in `lumos_content::remedies`. They are
//! intentionally separate and must not be merged.

use crate::locale::Language;
use serde::{Deserialize, Deserializer, Serialize};

/// Mood on a 1-10 scale: 1 = crisis/severe distress, 5 = neutral, 10 = excellent.
///
/// Always within range; out-of-range inputs are clamped, both in `new` and
/// when deserializing persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: MoodScore = MoodScore(1);
    pub const NEUTRAL: MoodScore = MoodScore(5);
    pub const MAX: MoodScore = MoodScore(10);

    pub fn new(value: i64) -> Self {
        Self(value.clamp(1, 10) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Low enough that the conversation composer weaves in remedies.
    pub fn is_low(self) -> bool {
        self.0 <= 4
    }

    /// Short display label for the score, e.g. "😄 Happy" for 8.
    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::En => match self.0 {
                1 => "💔 Crisis/Trauma",
                2 => "😠 Angry/Very Sad",
                3 => "😕 Down",
                4 => "😐 Low",
                5 => "😶 Neutral",
                6 => "🙂 Okay",
                7 => "😊 Good",
                8 => "😄 Happy",
                9 => "😁 Very Happy",
                _ => "🤩 Excellent",
            },
            Language::Hi => match self.0 {
                1 => "💔 गंभीर स्थिति/आघात",
                2 => "😠 क्रोधित/बहुत दुखी",
                3 => "😕 निराश",
                4 => "😐 कम",
                5 => "😶 सामान्य",
                6 => "🙂 ठीक",
                7 => "😊 अच्छा",
                8 => "😄 खुश",
                9 => "😁 बहुत खुश",
                _ => "🤩 उत्कृष्ट",
            },
        }
    }
}

impl Default for MoodScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl std::fmt::Display for MoodScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

impl<'de> Deserialize<'de> for MoodScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Display bucketing of the mood scale used by the content selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTier {
    Crisis,
    VeryLow,
    Low,
    Neutral,
    SlightlyPositive,
    Good,
}

impl MoodTier {
    pub fn from_score(mood: MoodScore) -> Self {
        match mood.get() {
            1 => MoodTier::Crisis,
            2 => MoodTier::VeryLow,
            3 | 4 => MoodTier::Low,
            5 => MoodTier::Neutral,
            6 => MoodTier::SlightlyPositive,
            _ => MoodTier::Good,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodTier::Crisis => "Crisis/Trauma",
            MoodTier::VeryLow => "Very Low/Angry",
            MoodTier::Low => "Low",
            MoodTier::Neutral => "Neutral",
            MoodTier::SlightlyPositive => "Slightly Positive",
            MoodTier::Good => "Good",
        }
    }

    /// Accent color for the tier card.
    pub fn color(self) -> &'static str {
        match self {
            MoodTier::Crisis => "#8B0000",
            MoodTier::VeryLow => "#FF4444",
            MoodTier::Low => "#FFA500",
            MoodTier::Neutral => "#FFA500",
            MoodTier::SlightlyPositive => "#FFEA00",
            MoodTier::Good => "#39FF14",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodTier::Crisis => "💔",
            MoodTier::VeryLow => "😠",
            MoodTier::Low => "😕",
            MoodTier::Neutral => "😐",
            MoodTier::SlightlyPositive => "🙂",
            MoodTier::Good => "😊",
        }
    }
}
