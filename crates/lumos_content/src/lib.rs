pub mod breathing;
pub mod challenges;
pub mod meditation;
pub mod remedies;
pub mod selector;

pub use breathing::BreathingPattern;
pub use challenges::{Challenge, ChallengeBook, Difficulty, StreakInfo};
pub use meditation::{Meditation, MeditationKind, MeditationTracker};
pub use remedies::{Remedy, RemedyCategory};
pub use selector::{select, Technique, TierContent};
