//! Meditation catalog and session tracking.
//!
//! A recommended practice is chosen by mood band; sessions record mood
//! samples over time and score effectiveness from the first-to-last change.

use chrono::{DateTime, Utc};
use lumos_core::locale::Language;
use lumos_core::mood::MoodScore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeditationKind {
    Breathing,
    BodyScan,
    LovingKindness,
    Walking,
    Visualization,
    Compassion,
    Mindfulness,
    Gratitude,
}

/// One entry in the meditation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Meditation {
    pub id: &'static str,
    pub kind: MeditationKind,
    pub name: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub difficulty: &'static str,
    pub icon: &'static str,
}

const CATALOG_EN: &[Meditation] = &[
    Meditation {
        id: "breathing",
        kind: MeditationKind::Breathing,
        name: "Breathing Meditation",
        description: "Focus on deep, mindful breathing patterns",
        duration_minutes: 5,
        difficulty: "Easy",
        icon: "🫁",
    },
    Meditation {
        id: "body_scan",
        kind: MeditationKind::BodyScan,
        name: "Body Scan Meditation",
        description: "Progressive relaxation through body awareness",
        duration_minutes: 20,
        difficulty: "Medium",
        icon: "🌊",
    },
    Meditation {
        id: "loving_kindness",
        kind: MeditationKind::LovingKindness,
        name: "Loving-Kindness Meditation",
        description: "Cultivate compassion and loving feelings",
        duration_minutes: 15,
        difficulty: "Medium",
        icon: "💖",
    },
    Meditation {
        id: "walking",
        kind: MeditationKind::Walking,
        name: "Walking Meditation",
        description: "Mindful awareness while walking",
        duration_minutes: 10,
        difficulty: "Easy",
        icon: "🚶‍♀️",
    },
    Meditation {
        id: "visualization",
        kind: MeditationKind::Visualization,
        name: "Visualization Meditation",
        description: "Guided imagery for peace and relaxation",
        duration_minutes: 12,
        difficulty: "Medium",
        icon: "🏔️",
    },
];

const CATALOG_HI: &[Meditation] = &[
    Meditation {
        id: "breathing",
        kind: MeditationKind::Breathing,
        name: "श्वास ध्यान",
        description: "गहरी सांस लेने पर ध्यान केंद्रित करें",
        duration_minutes: 5,
        difficulty: "आसान",
        icon: "🫁",
    },
    Meditation {
        id: "body_scan",
        kind: MeditationKind::BodyScan,
        name: "शरीर स्कैन ध्यान",
        description: "शरीर के हर हिस्से में तनाव मुक्ति",
        duration_minutes: 20,
        difficulty: "मध्यम",
        icon: "🌊",
    },
    Meditation {
        id: "loving_kindness",
        kind: MeditationKind::LovingKindness,
        name: "मैत्री ध्यान",
        description: "प्रेम और दया की भावनाओं को विकसित करें",
        duration_minutes: 15,
        difficulty: "मध्यम",
        icon: "💖",
    },
    Meditation {
        id: "walking",
        kind: MeditationKind::Walking,
        name: "चलते हुए ध्यान",
        description: "चलते समय सचेत रहने का अभ्यास",
        duration_minutes: 10,
        difficulty: "आसान",
        icon: "🚶‍♀️",
    },
    Meditation {
        id: "visualization",
        kind: MeditationKind::Visualization,
        name: "दृश्यीकरण ध्यान",
        description: "शांत दृश्यों की कल्पना करें",
        duration_minutes: 12,
        difficulty: "मध्यम",
        icon: "🏔️",
    },
];

pub fn catalog(language: Language) -> &'static [Meditation] {
    match language {
        Language::En => CATALOG_EN,
        Language::Hi => CATALOG_HI,
    }
}

pub fn find(id: &str, language: Language) -> Option<Meditation> {
    catalog(language).iter().find(|m| m.id == id).copied()
}

/// The practice recommended for the current mood band.
pub fn recommended(mood: MoodScore, language: Language) -> Meditation {
    match (mood.get(), language) {
        (0..=4, Language::En) => Meditation {
            id: "compassion",
            kind: MeditationKind::Compassion,
            name: "Compassion & Self-Love Meditation",
            description: "Gentle practice to nurture self-compassion and emotional healing",
            duration_minutes: 10,
            difficulty: "Easy",
            icon: "💝",
        },
        (5..=7, Language::En) => Meditation {
            id: "mindfulness",
            kind: MeditationKind::Mindfulness,
            name: "Mindful Awareness Meditation",
            description: "Build present-moment awareness and emotional stability",
            duration_minutes: 15,
            difficulty: "Medium",
            icon: "🌺",
        },
        (_, Language::En) => Meditation {
            id: "gratitude",
            kind: MeditationKind::Gratitude,
            name: "Gratitude & Joy Meditation",
            description: "Amplify positive emotions and cultivate gratitude",
            duration_minutes: 12,
            difficulty: "Easy",
            icon: "✨",
        },
        (0..=4, Language::Hi) => Meditation {
            id: "compassion",
            kind: MeditationKind::Compassion,
            name: "करुणा और स्व-प्रेम ध्यान",
            description: "स्व-करुणा और भावनात्मक चिकित्सा के लिए कोमल अभ्यास",
            duration_minutes: 10,
            difficulty: "आसान",
            icon: "💝",
        },
        (5..=7, Language::Hi) => Meditation {
            id: "mindfulness",
            kind: MeditationKind::Mindfulness,
            name: "सचेत जागरूकता ध्यान",
            description: "वर्तमान क्षण की जागरूकता और भावनात्मक स्थिरता बनाएं",
            duration_minutes: 15,
            difficulty: "मध्यम",
            icon: "🌺",
        },
        (_, Language::Hi) => Meditation {
            id: "gratitude",
            kind: MeditationKind::Gratitude,
            name: "कृतज्ञता और आनंद ध्यान",
            description: "सकारात्मक भावनाओं को बढ़ाएं और कृतज्ञता विकसित करें",
            duration_minutes: 12,
            difficulty: "आसान",
            icon: "✨",
        },
    }
}

const GUIDANCE_BREATHING_EN: &[&str] = &[
    "Begin by finding a comfortable position. Close your eyes and take three deep breaths.",
    "Focus on your natural breath. Feel the air entering and leaving your nostrils.",
    "If your mind wanders, gently bring your attention back to your breath.",
    "Notice the pause between each inhale and exhale. Rest in this peaceful space.",
];

const GUIDANCE_BREATHING_HI: &[&str] = &[
    "आरामदायक स्थिति में बैठें। अपनी आंखें बंद करें और तीन गहरी सांसें लें।",
    "अपनी प्राकृतिक सांस पर ध्यान दें। हवा को नासिका में आते-जाते महसूस करें।",
    "यदि मन भटके, तो धीरे से अपना ध्यान सांस पर वापस लाएं।",
    "प्रत्येक सांस के बीच के विराम को महसूस करें। इस शांत स्थान में विश्राम करें।",
];

const GUIDANCE_BODY_SCAN_EN: &[&str] = &[
    "Lie down comfortably and close your eyes. Start by noticing your toes.",
    "Slowly move your attention up through your legs, feeling each part relax.",
    "Continue scanning through your torso, arms, and shoulders, releasing tension.",
    "Finally, relax your neck, face, and head. Feel your whole body at peace.",
];

const GUIDANCE_BODY_SCAN_HI: &[&str] = &[
    "आराम से लेटें और आंखें बंद करें। अपने पैर की उंगलियों को महसूस करें।",
    "धीरे-धीरे अपना ध्यान पैरों से ऊपर ले जाएं, हर हिस्से को आराम देते हुए।",
    "धड़, बाहों और कंधों को स्कैन करते हुए तनाव को मुक्त करें।",
    "अंत में गर्दन, चेहरे और सिर को आराम दें। पूरे शरीर को शांति में महसूस करें।",
];

const GUIDANCE_LOVING_KINDNESS_EN: &[&str] = &[
    "Place your hand on your heart. Send loving-kindness to yourself: 'May I be happy.'",
    "Extend this love to someone you care about: 'May you be peaceful and free from suffering.'",
    "Now include someone neutral: 'May you find happiness and inner peace.'",
    "Finally, send love to all beings everywhere: 'May all beings be happy and free.'",
];

const GUIDANCE_LOVING_KINDNESS_HI: &[&str] = &[
    "अपना हाथ हृदय पर रखें। स्वयं को प्रेम भेजें: 'मैं खुश रहूं।'",
    "इस प्रेम को किसी प्रिय व्यक्ति तक फैलाएं: 'आप शांत और दुख से मुक्त रहें।'",
    "अब किसी तटस्थ व्यक्ति को शामिल करें: 'आपको खुशी और शांति मिले।'",
    "अंत में सभी प्राणियों को प्रेम भेजें: 'सभी प्राणी खुश और मुक्त रहें।'",
];

/// Guidance text for the current phase of a session. The phase advances
/// every two minutes and clamps to the final phase. Kinds without their
/// own script use the breathing script.
pub fn guidance(kind: MeditationKind, language: Language, elapsed_minutes: f64) -> &'static str {
    let script = match (kind, language) {
        (MeditationKind::BodyScan, Language::En) => GUIDANCE_BODY_SCAN_EN,
        (MeditationKind::BodyScan, Language::Hi) => GUIDANCE_BODY_SCAN_HI,
        (MeditationKind::LovingKindness, Language::En) => GUIDANCE_LOVING_KINDNESS_EN,
        (MeditationKind::LovingKindness, Language::Hi) => GUIDANCE_LOVING_KINDNESS_HI,
        (_, Language::En) => GUIDANCE_BREATHING_EN,
        (_, Language::Hi) => GUIDANCE_BREATHING_HI,
    };
    let phase = ((elapsed_minutes / 2.0) as usize).min(script.len() - 1);
    script[phase]
}

/// One mood reading taken during a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoodSample {
    pub minutes: f64,
    pub mood: MoodScore,
}

/// A finished session with its derived metrics.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedSession {
    pub meditation: Meditation,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_minutes: f64,
    pub initial_mood: MoodScore,
    pub final_mood: MoodScore,
    pub mood_change: i32,
    /// 0.0 - 1.0, from first-to-last mood change.
    pub effectiveness: f64,
    pub samples: Vec<MoodSample>,
}

#[derive(Debug, Clone)]
struct ActiveSession {
    meditation: Meditation,
    started_at: DateTime<Utc>,
    initial_mood: MoodScore,
    samples: Vec<MoodSample>,
}

/// Per-session meditation tracker. One active session at a time; starting
/// a new one discards an unfinished one.
#[derive(Debug, Default)]
pub struct MeditationTracker {
    active: Option<ActiveSession>,
    sessions: Vec<CompletedSession>,
}

impl MeditationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, meditation: Meditation, initial_mood: MoodScore, now: DateTime<Utc>) {
        if self.active.is_some() {
            tracing::warn!("starting a new meditation session over an unfinished one");
        }
        self.active = Some(ActiveSession {
            meditation,
            started_at: now,
            initial_mood,
            samples: vec![MoodSample {
                minutes: 0.0,
                mood: initial_mood,
            }],
        });
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_meditation(&self) -> Option<&Meditation> {
        self.active.as_ref().map(|s| &s.meditation)
    }

    /// Record how the practitioner feels right now. No-op without an
    /// active session; consecutive identical readings are collapsed.
    pub fn sample_mood(&mut self, mood: MoodScore, elapsed_minutes: f64) {
        if let Some(session) = self.active.as_mut() {
            if session.samples.last().map(|s| s.mood) != Some(mood) {
                session.samples.push(MoodSample {
                    minutes: elapsed_minutes,
                    mood,
                });
            }
        }
    }

    /// Close the active session, compute its metrics and append it to the
    /// history. Returns None when no session is active.
    pub fn finish(&mut self, now: DateTime<Utc>) -> Option<&CompletedSession> {
        let session = self.active.take()?;
        let final_mood = session
            .samples
            .last()
            .map(|s| s.mood)
            .unwrap_or(session.initial_mood);
        let mood_change = final_mood.get() as i32 - session.initial_mood.get() as i32;
        let effectiveness = if session.samples.len() < 2 {
            0.0
        } else {
            ((mood_change as f64 + 5.0) / 10.0).clamp(0.0, 1.0)
        };

        let completed = CompletedSession {
            duration_minutes: (now - session.started_at).num_seconds() as f64 / 60.0,
            meditation: session.meditation,
            started_at: session.started_at,
            ended_at: now,
            initial_mood: session.initial_mood,
            final_mood,
            mood_change,
            effectiveness,
            samples: session.samples,
        };
        self.sessions.push(completed);
        self.sessions.last()
    }

    pub fn history(&self) -> &[CompletedSession] {
        &self.sessions
    }

    /// (total sessions, total minutes, average mood change, average effectiveness)
    pub fn totals(&self) -> (usize, f64, f64, f64) {
        let n = self.sessions.len();
        if n == 0 {
            return (0, 0.0, 0.0, 0.0);
        }
        let minutes: f64 = self.sessions.iter().map(|s| s.duration_minutes).sum();
        let change: f64 = self.sessions.iter().map(|s| s.mood_change as f64).sum();
        let effectiveness: f64 = self.sessions.iter().map(|s| s.effectiveness).sum();
        (n, minutes, change / n as f64, effectiveness / n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, minute, 0).unwrap()
    }

    #[test]
    fn test_recommended_by_mood_band() {
        assert_eq!(
            recommended(MoodScore::new(2), Language::En).kind,
            MeditationKind::Compassion
        );
        assert_eq!(
            recommended(MoodScore::new(6), Language::En).kind,
            MeditationKind::Mindfulness
        );
        assert_eq!(
            recommended(MoodScore::new(9), Language::En).kind,
            MeditationKind::Gratitude
        );
    }

    #[test]
    fn test_guidance_phases_advance_and_clamp() {
        let first = guidance(MeditationKind::Breathing, Language::En, 0.0);
        let second = guidance(MeditationKind::Breathing, Language::En, 2.5);
        let way_past = guidance(MeditationKind::Breathing, Language::En, 120.0);
        assert_ne!(first, second);
        assert_eq!(way_past, GUIDANCE_BREATHING_EN[3]);
    }

    #[test]
    fn test_guidance_unknown_kind_uses_breathing_script() {
        assert_eq!(
            guidance(MeditationKind::Walking, Language::En, 0.0),
            GUIDANCE_BREATHING_EN[0]
        );
    }

    #[test]
    fn test_session_effectiveness_improvement() {
        let mut tracker = MeditationTracker::new();
        let meditation = find("breathing", Language::En).unwrap();
        tracker.begin(meditation, MoodScore::new(3), at(0));
        tracker.sample_mood(MoodScore::new(6), 5.0);
        let session = tracker.finish(at(10)).unwrap();
        assert_eq!(session.mood_change, 3);
        assert!((session.effectiveness - 0.8).abs() < 1e-9);
        assert!((session.duration_minutes - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_sample_scores_zero() {
        let mut tracker = MeditationTracker::new();
        let meditation = find("walking", Language::En).unwrap();
        tracker.begin(meditation, MoodScore::new(5), at(0));
        let session = tracker.finish(at(5)).unwrap();
        assert_eq!(session.effectiveness, 0.0);
    }

    #[test]
    fn test_finish_without_active_session() {
        let mut tracker = MeditationTracker::new();
        assert!(tracker.finish(at(1)).is_none());
    }

    #[test]
    fn test_totals_average_over_history() {
        let mut tracker = MeditationTracker::new();
        let meditation = find("breathing", Language::En).unwrap();

        tracker.begin(meditation, MoodScore::new(4), at(0));
        tracker.sample_mood(MoodScore::new(6), 4.0);
        tracker.finish(at(5));

        tracker.begin(meditation, MoodScore::new(5), at(10));
        tracker.sample_mood(MoodScore::new(7), 4.0);
        tracker.finish(at(15));

        let (count, minutes, avg_change, avg_effectiveness) = tracker.totals();
        assert_eq!(count, 2);
        assert!((minutes - 10.0).abs() < 1e-9);
        assert!((avg_change - 2.0).abs() < 1e-9);
        assert!((avg_effectiveness - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_catalog_ids_match_across_languages() {
        for (en, hi) in CATALOG_EN.iter().zip(CATALOG_HI.iter()) {
            assert_eq!(en.id, hi.id);
            assert_eq!(en.kind, hi.kind);
            assert_eq!(en.duration_minutes, hi.duration_minutes);
        }
    }
}
