pub mod classifier;
pub mod config;
pub mod emotion;
pub mod locale;
pub mod mood;

pub use config::LumosConfig;
pub use emotion::{AnalysisSource, EmotionAnalysis, EmotionLabel};
pub use locale::Language;
pub use mood::{MoodScore, MoodTier};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation. Immutable once appended to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Mood inferred from this turn, if any (user turns only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodScore>,
}

impl ChatTurn {
    pub fn new(role: Role, content: impl Into<String>, mood: Option<MoodScore>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            mood,
        }
    }

    pub fn user(content: impl Into<String>, mood: MoodScore) -> Self {
        Self::new(Role::User, content, Some(mood))
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content, None)
    }
}

/// One logged mood observation. Never mutated after append.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: MoodScore,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub fn now(mood: MoodScore) -> Self {
        Self {
            mood,
            timestamp: Utc::now(),
        }
    }
}
