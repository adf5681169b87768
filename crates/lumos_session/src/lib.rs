//! Per-user session state.
//!
//! A [`Session`] is an explicit context object owning everything mutable
//! for one user: chat turns, mood history, current mood. It is created at
//! session start, passed by reference into the components that need it,
//! and dropped at session end. Nothing is shared across sessions and
//! nothing here needs locking.

pub mod export;

pub use export::{
    chat_csv, compute_stats, export, import, moods_csv, validate, ExportDocument, ImportError,
    SessionStats, Trend,
};

use lumos_core::locale::Language;
use lumos_core::mood::MoodScore;
use lumos_core::{ChatTurn, MoodEntry};

#[derive(Debug)]
pub struct Session {
    language: Language,
    turns: Vec<ChatTurn>,
    moods: Vec<MoodEntry>,
    current_mood: MoodScore,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            turns: Vec::new(),
            moods: Vec::new(),
            current_mood: MoodScore::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Append a user turn and log its mood.
    pub fn push_user(&mut self, content: impl Into<String>, mood: MoodScore) {
        self.turns.push(ChatTurn::user(content, mood));
        self.log_mood(mood);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::assistant(content));
    }

    /// Record a mood observation (slider, camera, or classifier).
    pub fn log_mood(&mut self, mood: MoodScore) {
        self.moods.push(MoodEntry::now(mood));
        self.current_mood = mood;
    }

    pub fn current_mood(&self) -> MoodScore {
        self.current_mood
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    /// The most recent `n` turns, for prompt context.
    pub fn recent_turns(&self, n: usize) -> &[ChatTurn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    pub fn average_mood(&self) -> Option<f64> {
        if self.moods.is_empty() {
            return None;
        }
        Some(
            self.moods.iter().map(|e| e.mood.get() as f64).sum::<f64>() / self.moods.len() as f64,
        )
    }

    /// Wipe everything and return to the neutral starting state.
    pub fn clear(&mut self) {
        self.turns.clear();
        self.moods.clear();
        self.current_mood = MoodScore::default();
        tracing::info!("session data cleared");
    }

    /// Replace history wholesale (used by import).
    pub fn restore(&mut self, turns: Vec<ChatTurn>, moods: Vec<MoodEntry>) {
        self.current_mood = moods.last().map(|e| e.mood).unwrap_or_default();
        self.turns = turns;
        self.moods = moods;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumos_core::Role;

    #[test]
    fn test_push_user_logs_mood() {
        let mut session = Session::new(Language::En);
        session.push_user("rough morning", MoodScore::new(3));
        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.moods().len(), 1);
        assert_eq!(session.current_mood().get(), 3);
        assert_eq!(session.turns()[0].role, Role::User);
    }

    #[test]
    fn test_assistant_turn_does_not_log_mood() {
        let mut session = Session::new(Language::En);
        session.push_assistant("I'm listening.");
        assert_eq!(session.turns().len(), 1);
        assert!(session.moods().is_empty());
    }

    #[test]
    fn test_recent_turns_window() {
        let mut session = Session::new(Language::En);
        for i in 0..8 {
            session.push_user(format!("message {i}"), MoodScore::NEUTRAL);
        }
        let recent = session.recent_turns(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].content, "message 3");
        // Asking for more than exists returns everything.
        assert_eq!(session.recent_turns(100).len(), 8);
    }

    #[test]
    fn test_average_mood() {
        let mut session = Session::new(Language::En);
        assert!(session.average_mood().is_none());
        session.log_mood(MoodScore::new(4));
        session.log_mood(MoodScore::new(8));
        assert!((session.average_mood().unwrap() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_clear_resets_to_neutral() {
        let mut session = Session::new(Language::Hi);
        session.push_user("बहुत दुखी", MoodScore::new(2));
        session.clear();
        assert!(session.turns().is_empty());
        assert!(session.moods().is_empty());
        assert_eq!(session.current_mood(), MoodScore::NEUTRAL);
        assert_eq!(session.language(), Language::Hi);
    }

    #[test]
    fn test_restore_sets_current_mood_from_last_entry() {
        let mut session = Session::new(Language::En);
        let turns = vec![ChatTurn::user("hi", MoodScore::new(7))];
        let moods = vec![
            lumos_core::MoodEntry::now(MoodScore::new(4)),
            lumos_core::MoodEntry::now(MoodScore::new(7)),
        ];
        session.restore(turns, moods);
        assert_eq!(session.current_mood().get(), 7);
    }
}
