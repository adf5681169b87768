//! Mood-tier content: relief techniques plus one book/song/joke per render.
//!
//! The per-tier pools are fixed; book, song and joke are drawn uniformly at
//! random on every call so a refresh gives a fresh suggestion. Nothing
//! remembers what was already shown, repeats are fine.

use lumos_core::mood::{MoodScore, MoodTier};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// One instant-relief technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technique {
    pub name: &'static str,
    pub time: &'static str,
    pub description: &'static str,
}

/// The content chosen for one render of a mood tier.
#[derive(Debug, Clone, Serialize)]
pub struct TierContent {
    pub tier: MoodTier,
    pub techniques: &'static [Technique],
    pub book: &'static str,
    pub song: &'static str,
    pub joke: &'static str,
}

struct TierPool {
    techniques: &'static [Technique],
    books: &'static [&'static str],
    songs: &'static [&'static str],
    jokes: &'static [&'static str],
}

const CRISIS: TierPool = TierPool {
    techniques: &[
        Technique {
            name: "STOP Technique",
            time: "1 min",
            description: "Stop, Take a breath, Observe surroundings, Proceed mindfully.",
        },
        Technique {
            name: "Trauma Grounding",
            time: "5 min",
            description: "Feel your feet on ground, name current location, date, and time.",
        },
        Technique {
            name: "Safe Place Visualization",
            time: "3 min",
            description: "Imagine a completely safe, peaceful place in vivid detail.",
        },
        Technique {
            name: "Emergency Self-Soothing",
            time: "2 min",
            description: "Hold something soft, listen to calming sounds, or smell something pleasant.",
        },
    ],
    books: &[
        "The Body Keeps the Score by Bessel van der Kolk",
        "Trauma Stewardship by Laura van Dernoot Lipsky",
        "Man's Search for Meaning by Viktor Frankl",
    ],
    songs: &[
        "Weightless by Marconi Union",
        "Aqueous Transmission by Incubus",
        "Mad World by Gary Jules",
    ],
    jokes: &[
        "What do you call a sleeping bull? A bulldozer! (Sometimes we all need rest)",
        "Why don't scientists trust atoms? They make up everything, but you're real and you matter.",
        "I told my plant a joke about gardening... but it didn't grow on them. Growth takes time.",
    ],
};

const VERY_LOW: TierPool = TierPool {
    techniques: &[
        Technique {
            name: "Anger Release Breathing",
            time: "3 min",
            description: "Breathe in slowly for 4, hold for 2, exhale forcefully for 6.",
        },
        Technique {
            name: "Progressive Muscle Tension Release",
            time: "5 min",
            description: "Tense fists for 5 seconds, then release. Feel the contrast.",
        },
        Technique {
            name: "Emotional Labeling",
            time: "2 min",
            description: "Say 'I notice I'm feeling angry/sad' to create emotional distance.",
        },
        Technique {
            name: "5-4-3-2-1 Grounding",
            time: "3 min",
            description: "Name 5 things you see, 4 hear, 3 touch, 2 smell, 1 taste.",
        },
    ],
    books: &[
        "The Gifts of Imperfection by Brené Brown",
        "Anger: Wisdom for Cooling the Flames by Thich Nhat Hanh",
        "Permission to Feel by Marc Brackett",
    ],
    songs: &[
        "Breathe Me by Sia",
        "Heavy by Linkin Park",
        "Mad World by Gary Jules",
    ],
    jokes: &[
        "Why don't eggs tell jokes? They'd crack each other up! (It's okay to crack sometimes)",
        "What did the angry coffee say? I'm steamed! (Let it out safely)",
        "Why was the math book sad? Too many problems! (But every problem has a solution)",
    ],
};

const LOW: TierPool = TierPool {
    techniques: &[
        Technique {
            name: "Box Breathing",
            time: "5 min",
            description: "Breathe in 4, hold 4, out 4, hold 4. Find your rhythm.",
        },
        Technique {
            name: "Progressive Muscle Release",
            time: "10 min",
            description: "Tense and release each muscle group from toes to head.",
        },
        Technique {
            name: "Mindful Walking",
            time: "10 min",
            description: "Walk slowly, focusing on each step and your surroundings.",
        },
        Technique {
            name: "Gratitude Reset",
            time: "5 min",
            description: "Write down 3 things you're grateful for right now.",
        },
    ],
    books: &[
        "The Happiness Project by Gretchen Rubin",
        "Atomic Habits by James Clear",
        "Big Magic by Elizabeth Gilbert",
    ],
    songs: &[
        "Here Comes the Sun by The Beatles",
        "Good as Hell by Lizzo",
        "Happy by Pharrell Williams",
    ],
    jokes: &[
        "Why don't eggs tell jokes? They'd crack each other up!",
        "What do you call a fake noodle? An impasta!",
        "Why did the coffee file a police report? It got mugged!",
    ],
};

const NEUTRAL: TierPool = TierPool {
    techniques: &[
        Technique {
            name: "Curiosity Activation",
            time: "3 min",
            description: "Ask yourself 'What's one thing I'm curious about right now?'",
        },
        Technique {
            name: "Gentle Movement",
            time: "5 min",
            description: "Stand up, stretch, or take a few steps to shift energy.",
        },
        Technique {
            name: "Micro-Adventure",
            time: "10 min",
            description: "Try something slightly different - new music, route, or snack.",
        },
        Technique {
            name: "Present Moment Check-in",
            time: "2 min",
            description: "Notice 3 things around you that you usually ignore.",
        },
    ],
    books: &[
        "The Power of Small by Linda Kaplan Thaler",
        "Atomic Habits by James Clear",
        "The Happiness Advantage by Shawn Achor",
    ],
    songs: &[
        "Good as Hell by Lizzo",
        "Sunflower by Post Malone",
        "Counting Stars by OneRepublic",
    ],
    jokes: &[
        "Why did the coffee file a police report? It got mugged! (Sometimes we all need a pick-me-up)",
        "What do you call a fake noodle? An impasta! (Being real is better than being fake)",
        "Why don't scientists trust stairs? They're always up to something! (Like finding new perspectives)",
    ],
};

const SLIGHTLY_POSITIVE: TierPool = TierPool {
    techniques: &[
        Technique {
            name: "Energy Boost Breathing",
            time: "3 min",
            description: "Quick energizing breaths to lift your spirits further.",
        },
        Technique {
            name: "Gratitude Moment",
            time: "2 min",
            description: "Name 3 small things that went well today.",
        },
        Technique {
            name: "Positive Visualization",
            time: "5 min",
            description: "Visualize yourself succeeding at something important.",
        },
        Technique {
            name: "Connection Reach-out",
            time: "5 min",
            description: "Send a positive message to someone you care about.",
        },
    ],
    books: &[
        "The 7 Habits of Highly Effective People by Stephen Covey",
        "Mindset by Carol Dweck",
        "The Alchemist by Paulo Coelho",
    ],
    songs: &[
        "Can't Stop the Feeling by Justin Timberlake",
        "Walking on Sunshine by Katrina and the Waves",
        "Don't Stop Me Now by Queen",
    ],
    jokes: &[
        "Why did the scarecrow win an award? He was outstanding in his field!",
        "What do you call a bear with no teeth? A gummy bear!",
        "Why don't scientists trust stairs? Because they're always up to something!",
    ],
};

const GOOD: TierPool = TierPool {
    techniques: &[
        Technique {
            name: "Celebration Breathing",
            time: "2 min",
            description: "Deep, joyful breaths to amplify your positive energy.",
        },
        Technique {
            name: "Gratitude Expansion",
            time: "5 min",
            description: "List 10 things you're grateful for and really feel each one.",
        },
        Technique {
            name: "Energy Sharing",
            time: "5 min",
            description: "Send a positive message to someone you care about.",
        },
        Technique {
            name: "Future Visioning",
            time: "5 min",
            description: "Imagine exciting possibilities for your future.",
        },
    ],
    books: &[
        "The Power of Positive Thinking by Norman Vincent Peale",
        "You Are a Badass by Jen Sincero",
        "The Magic by Rhonda Byrne",
    ],
    songs: &[
        "Good Vibrations by The Beach Boys",
        "I Feel Good by James Brown",
        "Celebration by Kool & The Gang",
    ],
    jokes: &[
        "Why did the math book look so sad? Because it had too many problems!",
        "What do you call a dinosaur that crashes his car? Tyrannosaurus Wrecks!",
        "Why don't programmers like nature? It has too many bugs!",
    ],
};

fn pool(tier: MoodTier) -> &'static TierPool {
    match tier {
        MoodTier::Crisis => &CRISIS,
        MoodTier::VeryLow => &VERY_LOW,
        MoodTier::Low => &LOW,
        MoodTier::Neutral => &NEUTRAL,
        MoodTier::SlightlyPositive => &SLIGHTLY_POSITIVE,
        MoodTier::Good => &GOOD,
    }
}

/// Pick this render's content for a mood.
pub fn select<R: Rng + ?Sized>(mood: MoodScore, rng: &mut R) -> TierContent {
    let tier = MoodTier::from_score(mood);
    let pool = pool(tier);
    TierContent {
        tier,
        techniques: pool.techniques,
        book: pool.books.choose(rng).copied().unwrap_or(pool.books[0]),
        song: pool.songs.choose(rng).copied().unwrap_or(pool.songs[0]),
        joke: pool.jokes.choose(rng).copied().unwrap_or(pool.jokes[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_mood_yields_nonempty_content() {
        let mut rng = StdRng::seed_from_u64(7);
        for score in 1..=10 {
            let content = select(MoodScore::new(score), &mut rng);
            assert!(
                !content.techniques.is_empty(),
                "no techniques for mood {score}"
            );
            assert!(!content.book.is_empty());
            assert!(!content.song.is_empty());
            assert!(!content.joke.is_empty());
        }
    }

    #[test]
    fn test_selection_drawn_from_tier_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let content = select(MoodScore::new(1), &mut rng);
        assert_eq!(content.tier, MoodTier::Crisis);
        assert!(CRISIS.books.contains(&content.book));
        assert!(CRISIS.songs.contains(&content.song));
        assert!(CRISIS.jokes.contains(&content.joke));
    }

    #[test]
    fn test_seeded_rng_pins_selection() {
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let c = select(MoodScore::new(5), &mut rng);
            (c.book, c.song, c.joke)
        };
        assert_eq!(pick(99), pick(99));
    }

    #[test]
    fn test_tier_pools_have_expected_sizes() {
        for tier in [
            MoodTier::Crisis,
            MoodTier::VeryLow,
            MoodTier::Low,
            MoodTier::Neutral,
            MoodTier::SlightlyPositive,
            MoodTier::Good,
        ] {
            let p = pool(tier);
            assert_eq!(p.techniques.len(), 4, "{tier:?}");
            assert_eq!(p.books.len(), 3, "{tier:?}");
            assert_eq!(p.songs.len(), 3, "{tier:?}");
            assert_eq!(p.jokes.len(), 3, "{tier:?}");
        }
    }
}
