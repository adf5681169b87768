//! Daily self-care challenges: catalog, per-day selection, streak and
//! point bookkeeping.
//!
//! The daily slot is keyed by (date, difficulty), so generating a beginner
//! challenge and then browsing the advanced tier never clobbers either
//! tier's challenge for the day.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

/// A catalog entry: the static part of a challenge.
#[derive(Debug, Clone, Copy)]
struct ChallengeSpec {
    title: &'static str,
    description: &'static str,
    instructions: &'static str,
    duration: &'static str,
    points: u32,
    category: &'static str,
}

/// A challenge stamped for a concrete day and tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub duration: String,
    pub points: u32,
    pub category: String,
    pub difficulty: Difficulty,
    pub date: NaiveDate,
    pub completed: bool,
    pub completed_on: Option<NaiveDate>,
}

impl Challenge {
    fn from_spec(spec: &ChallengeSpec, difficulty: Difficulty, date: NaiveDate) -> Self {
        Self {
            title: spec.title.to_string(),
            description: spec.description.to_string(),
            instructions: spec.instructions.to_string(),
            duration: spec.duration.to_string(),
            points: spec.points,
            category: spec.category.to_string(),
            difficulty,
            date,
            completed: false,
            completed_on: None,
        }
    }
}

const BEGINNER_MINDFULNESS: &[ChallengeSpec] = &[
    ChallengeSpec {
        title: "Mindful Morning",
        description: "Spend 5 minutes focusing on your breath when you wake up",
        instructions: "Sit quietly, close your eyes, and breathe naturally. Count each breath from 1 to 10, then start over.",
        duration: "5 minutes",
        points: 10,
        category: "Mindfulness",
    },
    ChallengeSpec {
        title: "Gratitude Practice",
        description: "Write down 3 things you are grateful for today",
        instructions: "Take a moment to think about what went well today. Write down 3 specific things you appreciate.",
        duration: "3 minutes",
        points: 10,
        category: "Gratitude",
    },
    ChallengeSpec {
        title: "Body Scan Check-in",
        description: "Do a quick body scan to notice tension",
        instructions: "Start from your toes and slowly move up to your head. Notice any areas of tension without trying to change them.",
        duration: "5 minutes",
        points: 15,
        category: "Body Awareness",
    },
];

const BEGINNER_SELF_CARE: &[ChallengeSpec] = &[
    ChallengeSpec {
        title: "Hydration Hero",
        description: "Drink 8 glasses of water throughout the day",
        instructions: "Keep a water bottle nearby and take sips regularly. Notice how proper hydration affects your mood.",
        duration: "All day",
        points: 15,
        category: "Physical Health",
    },
    ChallengeSpec {
        title: "Digital Detox Hour",
        description: "Spend 1 hour without any digital devices",
        instructions: "Put away your phone, computer, and TV. Read a book, go for a walk, or have a conversation.",
        duration: "1 hour",
        points: 20,
        category: "Digital Wellness",
    },
    ChallengeSpec {
        title: "Nature Connection",
        description: "Spend 10 minutes outdoors in nature",
        instructions: "Go outside and observe the natural world around you. Feel the sun, breeze, or notice plants and animals.",
        duration: "10 minutes",
        points: 15,
        category: "Nature",
    },
];

const BEGINNER_SOCIAL: &[ChallengeSpec] = &[
    ChallengeSpec {
        title: "Kindness Spread",
        description: "Do one small act of kindness for someone",
        instructions: "Send a supportive message, help a neighbor, or simply smile at strangers you meet.",
        duration: "5 minutes",
        points: 15,
        category: "Kindness",
    },
    ChallengeSpec {
        title: "Quality Connection",
        description: "Have a meaningful conversation with someone you care about",
        instructions: "Put away distractions and really listen. Ask open-ended questions and share authentically.",
        duration: "15 minutes",
        points: 20,
        category: "Connection",
    },
];

const INTERMEDIATE_MINDFULNESS: &[ChallengeSpec] = &[
    ChallengeSpec {
        title: "Mindful Eating",
        description: "Eat one meal completely mindfully",
        instructions: "Eat slowly, notice textures, flavors, and how the food makes you feel. No distractions.",
        duration: "20 minutes",
        points: 25,
        category: "Mindful Living",
    },
    ChallengeSpec {
        title: "Walking Meditation",
        description: "Take a 15-minute mindful walk",
        instructions: "Walk slowly and deliberately. Focus on each step, your surroundings, and your breathing.",
        duration: "15 minutes",
        points: 20,
        category: "Movement",
    },
];

const INTERMEDIATE_EMOTIONAL: &[ChallengeSpec] = &[
    ChallengeSpec {
        title: "Emotion Journaling",
        description: "Write about your emotions for 10 minutes",
        instructions: "Describe what you felt today, what triggered these emotions, and how you responded.",
        duration: "10 minutes",
        points: 20,
        category: "Emotional Intelligence",
    },
    ChallengeSpec {
        title: "Forgiveness Practice",
        description: "Practice forgiving yourself or someone else",
        instructions: "Think of a situation that bothers you. Try to understand all perspectives and let go of resentment.",
        duration: "10 minutes",
        points: 30,
        category: "Forgiveness",
    },
];

const ADVANCED_MINDFULNESS: &[ChallengeSpec] = &[ChallengeSpec {
    title: "Silent Observation",
    description: "Sit in silence for 20 minutes observing thoughts",
    instructions: "Sit quietly and observe your thoughts without judgment. Notice patterns and let thoughts pass by.",
    duration: "20 minutes",
    points: 35,
    category: "Deep Practice",
}];

const ADVANCED_GROWTH: &[ChallengeSpec] = &[
    ChallengeSpec {
        title: "Fear Facing",
        description: "Do one thing that scares you (but is safe)",
        instructions: "Identify a fear that holds you back and take one small step toward facing it today.",
        duration: "Varies",
        points: 40,
        category: "Personal Growth",
    },
    ChallengeSpec {
        title: "Value Reflection",
        description: "Identify and reflect on your core values",
        instructions: "Write down your top 5 values and think about how well your current life aligns with them.",
        duration: "15 minutes",
        points: 30,
        category: "Self-Discovery",
    },
];

fn catalog(difficulty: Difficulty) -> &'static [&'static [ChallengeSpec]] {
    match difficulty {
        Difficulty::Beginner => &[BEGINNER_MINDFULNESS, BEGINNER_SELF_CARE, BEGINNER_SOCIAL],
        Difficulty::Intermediate => &[INTERMEDIATE_MINDFULNESS, INTERMEDIATE_EMOTIONAL],
        Difficulty::Advanced => &[ADVANCED_MINDFULNESS, ADVANCED_GROWTH],
    }
}

/// Streak/point summary, recomputed from tracker state on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakInfo {
    pub current_streak: u32,
    pub total_points: u32,
    pub total_completed: usize,
}

/// Per-session challenge tracker.
#[derive(Debug, Default)]
pub struct ChallengeBook {
    current: HashMap<(NaiveDate, Difficulty), Challenge>,
    history: Vec<Challenge>,
    streak: u32,
    last_completed: Option<NaiveDate>,
    total_points: u32,
}

impl ChallengeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Today's challenge for a tier: the stored one if it exists, otherwise
    /// a fresh pick (random category, then random challenge within it).
    pub fn daily<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        today: NaiveDate,
        rng: &mut R,
    ) -> Challenge {
        if let Some(existing) = self.current.get(&(today, difficulty)) {
            return existing.clone();
        }

        let categories = catalog(difficulty);
        let category = categories
            .choose(rng)
            .expect("every tier has at least one category");
        let spec = category
            .choose(rng)
            .expect("every category has at least one challenge");

        let challenge = Challenge::from_spec(spec, difficulty, today);
        tracing::debug!(
            title = %challenge.title,
            ?difficulty,
            %today,
            "picked daily challenge"
        );
        self.current.insert((today, difficulty), challenge.clone());
        challenge
    }

    /// Mark a tier's daily challenge complete. Returns false when there is
    /// nothing to do: no challenge generated for that day, or already
    /// completed (repeated calls change nothing).
    pub fn complete(&mut self, difficulty: Difficulty, today: NaiveDate) -> bool {
        let challenge = match self.current.get_mut(&(today, difficulty)) {
            Some(c) if !c.completed => c,
            _ => return false,
        };

        challenge.completed = true;
        challenge.completed_on = Some(today);
        let completed = challenge.clone();

        self.streak = match self.last_completed {
            Some(last) if today - last == chrono::Duration::days(1) => self.streak + 1,
            Some(last) if today - last > chrono::Duration::days(1) => 1,
            Some(_) => self.streak,
            None => 1,
        };
        self.total_points += completed.points;
        self.last_completed = Some(today);
        self.history.push(completed);
        true
    }

    pub fn streak_info(&self) -> StreakInfo {
        StreakInfo {
            current_streak: self.streak,
            total_points: self.total_points,
            total_completed: self.history.len(),
        }
    }

    /// Completed challenges, oldest first.
    pub fn history(&self) -> &[Challenge] {
        &self.history
    }
}
