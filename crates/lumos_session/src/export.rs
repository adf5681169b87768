//! Versioned JSON export/import of session data, CSV dumps, and the
//! derived statistics block.
//!
//! Chat and mood histories pass through export → import verbatim; the
//! statistics block is recomputed on every export and ignored on import.

use crate::Session;
use anyhow::Result;
use chrono::Utc;
use lumos_core::{ChatTurn, MoodEntry, Role};
use serde::{Deserialize, Serialize};

pub const DATA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub export_timestamp: String,
    pub data_version: String,
    pub user_data: UserData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub chat_history: Vec<ChatTurn>,
    pub emotion_history: Vec<MoodEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SessionStats>,
}

/// Direction of the mood curve over the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_chat_messages: usize,
    pub user_messages: usize,
    pub bot_messages: usize,
    pub total_mood_entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_mood: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_mood: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_mood: Option<u8>,
    pub mood_trend: Trend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_session: Option<String>,
    pub session_span_days: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document failed validation")]
    Invalid,
}

/// Serialize a session to the versioned JSON document.
pub fn export(session: &Session) -> Result<String> {
    let document = ExportDocument {
        export_timestamp: Utc::now().to_rfc3339(),
        data_version: DATA_VERSION.to_string(),
        user_data: UserData {
            chat_history: session.turns().to_vec(),
            emotion_history: session.moods().to_vec(),
            statistics: Some(compute_stats(session.turns(), session.moods())),
        },
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse an exported document back into chat and mood histories.
///
/// The raw JSON is validated before the typed parse so a tampered or
/// truncated file is rejected rather than half-loaded.
pub fn import(json: &str) -> Result<(Vec<ChatTurn>, Vec<MoodEntry>), ImportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !validate(&value) {
        return Err(ImportError::Invalid);
    }
    let document: ExportDocument = serde_json::from_value(value)?;
    Ok((
        document.user_data.chat_history,
        document.user_data.emotion_history,
    ))
}

/// Structural validation of an export document: required lists present,
/// every turn carries role and content, every mood within [1, 10].
pub fn validate(value: &serde_json::Value) -> bool {
    let Some(user_data) = value.get("user_data") else {
        return false;
    };
    let (Some(chat), Some(moods)) = (
        user_data.get("chat_history").and_then(|v| v.as_array()),
        user_data.get("emotion_history").and_then(|v| v.as_array()),
    ) else {
        return false;
    };

    for turn in chat {
        if !turn.is_object() || turn.get("role").is_none() || turn.get("content").is_none() {
            return false;
        }
    }
    for entry in moods {
        let Some(mood) = entry.get("mood").and_then(|v| v.as_f64()) else {
            return false;
        };
        if !(1.0..=10.0).contains(&mood) {
            return false;
        }
    }
    true
}

/// Derived statistics over the histories. Never stored; recomputed on read.
pub fn compute_stats(turns: &[ChatTurn], moods: &[MoodEntry]) -> SessionStats {
    let user_messages = turns.iter().filter(|t| t.role == Role::User).count();
    let bot_messages = turns.iter().filter(|t| t.role == Role::Assistant).count();

    let scores: Vec<u8> = moods.iter().map(|e| e.mood.get()).collect();
    let average_mood = if scores.is_empty() {
        None
    } else {
        Some(scores.iter().map(|s| *s as f64).sum::<f64>() / scores.len() as f64)
    };

    let (first_session, last_session, session_span_days) = if turns.is_empty() {
        (None, None, 0)
    } else {
        let first = turns.iter().map(|t| t.timestamp).min().unwrap();
        let last = turns.iter().map(|t| t.timestamp).max().unwrap();
        (
            Some(first.to_rfc3339()),
            Some(last.to_rfc3339()),
            (last.date_naive() - first.date_naive()).num_days(),
        )
    };

    SessionStats {
        total_chat_messages: turns.len(),
        user_messages,
        bot_messages,
        total_mood_entries: moods.len(),
        average_mood,
        highest_mood: scores.iter().max().copied(),
        lowest_mood: scores.iter().min().copied(),
        mood_trend: mood_trend(&scores),
        first_session,
        last_session,
        session_span_days,
    }
}

/// Compare the first and last thirds of the mood history. Short histories
/// compare the single first and last entries instead.
fn mood_trend(scores: &[u8]) -> Trend {
    if scores.len() < 2 {
        return Trend::InsufficientData;
    }

    let third = scores.len() / 3;
    let (first, last): (&[u8], &[u8]) = if scores.len() >= 9 {
        (&scores[..third], &scores[scores.len() - third..])
    } else {
        (&scores[..1], &scores[scores.len() - 1..])
    };

    let mean = |s: &[u8]| s.iter().map(|v| *v as f64).sum::<f64>() / s.len() as f64;
    let difference = mean(last) - mean(first);

    if difference > 0.5 {
        Trend::Improving
    } else if difference < -0.5 {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Chat history as CSV. The header row is always present.
pub fn chat_csv(turns: &[ChatTurn]) -> String {
    let mut out = String::from("timestamp,role,content,mood\n");
    for turn in turns {
        let role = match turn.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        let mood = turn
            .mood
            .map(|m| m.get().to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{}\n",
            turn.timestamp.to_rfc3339(),
            role,
            csv_field(&turn.content),
            mood
        ));
    }
    out
}

/// Mood history as CSV.
pub fn moods_csv(entries: &[MoodEntry]) -> String {
    let mut out = String::from("timestamp,mood\n");
    for entry in entries {
        out.push_str(&format!(
            "{},{}\n",
            entry.timestamp.to_rfc3339(),
            entry.mood.get()
        ));
    }
    out
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
