//! Remedy catalog: the 4-category coping-technique tables, affirmations,
//! and the per-emotion quick remedies surfaced after a camera reading.
//!
//! The category bucketing here is a separate policy from the display tiers
//! in `lumos_core::mood` and uses its own thresholds.

use lumos_core::emotion::EmotionLabel;
use lumos_core::locale::Language;
use lumos_core::mood::MoodScore;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// A short coping technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remedy {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub category: &'static str,
}

/// The remedies-view bucketing of moods. Distinct from `MoodTier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemedyCategory {
    Anxiety,
    Stress,
    Sadness,
    Anger,
}

impl RemedyCategory {
    pub const ALL: [RemedyCategory; 4] = [
        RemedyCategory::Anxiety,
        RemedyCategory::Stress,
        RemedyCategory::Sadness,
        RemedyCategory::Anger,
    ];

    pub fn display_name(self, language: Language) -> &'static str {
        match (self, language) {
            (RemedyCategory::Anxiety, Language::En) => "Anxiety & Panic",
            (RemedyCategory::Stress, Language::En) => "Stress & Tension",
            (RemedyCategory::Sadness, Language::En) => "Sadness & Low Mood",
            (RemedyCategory::Anger, Language::En) => "Anger & Frustration",
            (RemedyCategory::Anxiety, Language::Hi) => "चिंता और घबराहट",
            (RemedyCategory::Stress, Language::Hi) => "तनाव और दबाव",
            (RemedyCategory::Sadness, Language::Hi) => "उदासी और कम मूड",
            (RemedyCategory::Anger, Language::Hi) => "गुस्सा और निराशा",
        }
    }

    /// Bucket a mood into a remedy category. Good moods get a general
    /// technique category at random.
    pub fn for_mood<R: Rng + ?Sized>(mood: MoodScore, rng: &mut R) -> Self {
        match mood.get() {
            0..=3 => RemedyCategory::Sadness,
            4 => RemedyCategory::Stress,
            5 | 6 => RemedyCategory::Anxiety,
            _ => *[RemedyCategory::Stress, RemedyCategory::Anxiety]
                .choose(rng)
                .unwrap_or(&RemedyCategory::Stress),
        }
    }

    /// Map a named situation to its best-fitting category.
    pub fn for_situation(situation: &str) -> Self {
        match situation {
            "work_stress" | "financial_worry" => RemedyCategory::Stress,
            "relationship" => RemedyCategory::Sadness,
            "health_anxiety" | "social_anxiety" => RemedyCategory::Anxiety,
            "family_issues" => RemedyCategory::Anger,
            _ => RemedyCategory::Stress,
        }
    }
}

const ANXIETY_EN: &[Remedy] = &[
    Remedy {
        title: "5-4-3-2-1 Grounding Technique",
        description: "Name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, 1 you can taste.",
        duration: "2-3 minutes",
        category: "grounding",
    },
    Remedy {
        title: "Progressive Muscle Relaxation",
        description: "Tense and relax each muscle group starting from your toes to your head.",
        duration: "10-15 minutes",
        category: "relaxation",
    },
    Remedy {
        title: "Cold Water on Face",
        description: "Splash cold water on your face or hold ice cubes to activate the diving response.",
        duration: "1-2 minutes",
        category: "physical",
    },
];

const STRESS_EN: &[Remedy] = &[
    Remedy {
        title: "Box Breathing",
        description: "Breathe in for 4 counts, hold for 4, exhale for 4, hold for 4. Repeat.",
        duration: "5-10 minutes",
        category: "breathing",
    },
    Remedy {
        title: "Quick Walk",
        description: "Take a 5-minute walk, focusing on your surroundings and breathing.",
        duration: "5 minutes",
        category: "physical",
    },
    Remedy {
        title: "Positive Affirmations",
        description: "Repeat: \"I am capable, I am strong, I can handle this situation.\"",
        duration: "2-3 minutes",
        category: "mental",
    },
];

const SADNESS_EN: &[Remedy] = &[
    Remedy {
        title: "Gratitude List",
        description: "Write down 3 things you are grateful for today, no matter how small.",
        duration: "5 minutes",
        category: "mental",
    },
    Remedy {
        title: "Gentle Movement",
        description: "Do some light stretching or gentle yoga poses to release tension.",
        duration: "10 minutes",
        category: "physical",
    },
    Remedy {
        title: "Connect with Someone",
        description: "Call or message a friend, family member, or support person.",
        duration: "10-15 minutes",
        category: "social",
    },
];

const ANGER_EN: &[Remedy] = &[
    Remedy {
        title: "Count to 10 Slowly",
        description: "Take deep breaths and count slowly from 1 to 10 before responding.",
        duration: "1-2 minutes",
        category: "mental",
    },
    Remedy {
        title: "Physical Release",
        description: "Do jumping jacks, push-ups, or squeeze a stress ball to release tension.",
        duration: "2-5 minutes",
        category: "physical",
    },
    Remedy {
        title: "Write It Down",
        description: "Write about what made you angry without censoring yourself.",
        duration: "5-10 minutes",
        category: "mental",
    },
];

const ANXIETY_HI: &[Remedy] = &[
    Remedy {
        title: "5-4-3-2-1 ग्राउंडिंग तकनीक",
        description: "5 चीजें जो आप देख सकते हैं, 4 जो छू सकते हैं, 3 जो सुन सकते हैं, 2 जो सूंघ सकते हैं, 1 जो चख सकते हैं, उनके नाम बताएं।",
        duration: "2-3 मिनट",
        category: "grounding",
    },
    Remedy {
        title: "प्रगतिशील मांसपेशी शिथिलता",
        description: "अपने पैर की उंगलियों से सिर तक प्रत्येक मांसपेशी समूह को तान कर फिर ढीला छोड़ें।",
        duration: "10-15 मिनट",
        category: "relaxation",
    },
    Remedy {
        title: "चेहरे पर ठंडा पानी",
        description: "अपने चेहरे पर ठंडा पानी छिड़कें या बर्फ के टुकड़े पकड़ें।",
        duration: "1-2 मिनट",
        category: "physical",
    },
];

const STRESS_HI: &[Remedy] = &[
    Remedy {
        title: "बॉक्स ब्रीदिंग",
        description: "4 गिनती में सांस लें, 4 में रोकें, 4 में छोड़ें, 4 में रोकें। दोहराएं।",
        duration: "5-10 मिनट",
        category: "breathing",
    },
    Remedy {
        title: "तेज चलना",
        description: "5 मिनट तेज चलें, अपने आस-पास और सांस पर ध्यान दें।",
        duration: "5 मिनट",
        category: "physical",
    },
    Remedy {
        title: "सकारात्मक पुष्टि",
        description: "दोहराएं: \"मैं सक्षम हूं, मैं मजबूत हूं, मैं इस स्थिति को संभाल सकता हूं।\"",
        duration: "2-3 मिनट",
        category: "mental",
    },
];

const SADNESS_HI: &[Remedy] = &[
    Remedy {
        title: "कृतज्ञता सूची",
        description: "आज आप जिन 3 बातों के लिए आभारी हैं, उन्हें लिखें, चाहे वे कितनी भी छोटी हों।",
        duration: "5 मिनट",
        category: "mental",
    },
    Remedy {
        title: "हल्का व्यायाम",
        description: "कुछ हल्की स्ट्रेचिंग या योग आसन करें।",
        duration: "10 मिनट",
        category: "physical",
    },
    Remedy {
        title: "किसी से जुड़ें",
        description: "किसी मित्र, परिवारजन या सहायक व्यक्ति को फोन करें या संदेश भेजें।",
        duration: "10-15 मिनट",
        category: "social",
    },
];

const ANGER_HI: &[Remedy] = &[
    Remedy {
        title: "10 तक धीरे-धीरे गिनती करें",
        description: "जवाब देने से पहले गहरी सांस लें और 1 से 10 तक धीरे-धीरे गिनें।",
        duration: "1-2 मिनट",
        category: "mental",
    },
    Remedy {
        title: "शारीरिक निकास",
        description: "जंपिंग जैक्स, पुश-अप्स करें या स्ट्रेस बॉल दबाएं।",
        duration: "2-5 मिनट",
        category: "physical",
    },
    Remedy {
        title: "इसे लिख दें",
        description: "जो बात आपको गुस्सा दिलाई है, उसके बारे में बिना रोक-टोक के लिखें।",
        duration: "5-10 मिनट",
        category: "mental",
    },
];

/// All remedies for a category in the requested language.
pub fn remedies_for(category: RemedyCategory, language: Language) -> &'static [Remedy] {
    match (language, category) {
        (Language::En, RemedyCategory::Anxiety) => ANXIETY_EN,
        (Language::En, RemedyCategory::Stress) => STRESS_EN,
        (Language::En, RemedyCategory::Sadness) => SADNESS_EN,
        (Language::En, RemedyCategory::Anger) => ANGER_EN,
        (Language::Hi, RemedyCategory::Anxiety) => ANXIETY_HI,
        (Language::Hi, RemedyCategory::Stress) => STRESS_HI,
        (Language::Hi, RemedyCategory::Sadness) => SADNESS_HI,
        (Language::Hi, RemedyCategory::Anger) => ANGER_HI,
    }
}

/// One remedy picked across every category.
pub fn random_remedy<R: Rng + ?Sized>(language: Language, rng: &mut R) -> Remedy {
    let all: Vec<Remedy> = RemedyCategory::ALL
        .iter()
        .flat_map(|c| remedies_for(*c, language).iter().copied())
        .collect();
    *all.choose(rng).expect("remedy tables are non-empty")
}

const AFFIRMATIONS_EN: &[&str] = &[
    "I am strong and I will get through this difficult time.",
    "My feelings are temporary and will change.",
    "I deserve to take care of myself.",
    "I am getting better every day.",
    "I have the strength to handle this situation.",
    "I am not alone, help is available.",
    "I am healing at my own pace.",
];

const AFFIRMATIONS_HI: &[&str] = &[
    "मैं मजबूत हूं और मैं इस कठिन समय से गुजर जाऊंगा।",
    "मेरी भावनाएं अस्थायी हैं और बदल जाएंगी।",
    "मैं अपनी देखभाल करने का हकदार हूं।",
    "मैं हर दिन बेहतर हो रहा हूं।",
    "मेरे पास इस स्थिति से निपटने की शक्ति है।",
    "मैं अकेला नहीं हूं, मदद उपलब्ध है।",
    "मैं अपनी गति से ठीक हो रहा हूं।",
];

pub fn random_affirmation<R: Rng + ?Sized>(language: Language, rng: &mut R) -> &'static str {
    let pool = match language {
        Language::En => AFFIRMATIONS_EN,
        Language::Hi => AFFIRMATIONS_HI,
    };
    pool.choose(rng).copied().unwrap_or(pool[0])
}

const QUICK_HAPPY_EN: &[Remedy] = &[
    Remedy {
        title: "Share Your Joy",
        description: "Call a friend or family member and share what made you happy today",
        duration: "5 minutes",
        category: "social",
    },
    Remedy {
        title: "Gratitude Journaling",
        description: "Write down 3 things you are grateful for right now",
        duration: "3 minutes",
        category: "mental",
    },
];

const QUICK_SAD_EN: &[Remedy] = &[
    Remedy {
        title: "4-7-8 Breathing",
        description: "Breathe in for 4 counts, hold for 7, exhale for 8. Repeat 4 times",
        duration: "2 minutes",
        category: "breathing",
    },
    Remedy {
        title: "Self-Compassion Break",
        description: "Talk to yourself with the same kindness you would show a good friend",
        duration: "5 minutes",
        category: "mental",
    },
    Remedy {
        title: "Gentle Movement",
        description: "Do some light stretching or gentle yoga poses",
        duration: "5 minutes",
        category: "physical",
    },
];

const QUICK_ANGRY_EN: &[Remedy] = &[
    Remedy {
        title: "Progressive Muscle Relaxation",
        description: "Tense and release each muscle group from toes to head",
        duration: "10 minutes",
        category: "relaxation",
    },
    Remedy {
        title: "Count to 10",
        description: "Slowly count to 10, taking a deep breath with each number",
        duration: "1 minute",
        category: "mental",
    },
    Remedy {
        title: "Cold Water Splash",
        description: "Splash cold water on your face or hold ice cubes",
        duration: "30 seconds",
        category: "physical",
    },
];

const QUICK_NEUTRAL_EN: &[Remedy] = &[
    Remedy {
        title: "Mindful Walking",
        description: "Take a short 5-minute walk and notice your surroundings",
        duration: "5 minutes",
        category: "physical",
    },
    Remedy {
        title: "Energy Boost",
        description: "Do 10 jumping jacks or stretch your arms above your head",
        duration: "2 minutes",
        category: "physical",
    },
];

const QUICK_SURPRISED_EN: &[Remedy] = &[
    Remedy {
        title: "5-4-3-2-1 Grounding",
        description: "Name 5 things you see, 4 you hear, 3 you touch, 2 you smell, 1 you taste",
        duration: "3 minutes",
        category: "grounding",
    },
    Remedy {
        title: "Deep Belly Breathing",
        description: "Place hand on chest, one on belly. Breathe so only belly hand moves",
        duration: "3 minutes",
        category: "breathing",
    },
];

const QUICK_FEAR_EN: &[Remedy] = &[
    Remedy {
        title: "Box Breathing",
        description: "4-4-4-4 technique: Inhale 4, hold 4, exhale 4, hold 4",
        duration: "5 minutes",
        category: "breathing",
    },
    Remedy {
        title: "Positive Affirmations",
        description: "Repeat: \"I am safe, I am strong, this feeling will pass\"",
        duration: "2 minutes",
        category: "mental",
    },
];

const QUICK_TRAUMA_EN: &[Remedy] = &[
    Remedy {
        title: "5-4-3-2-1 Grounding",
        description: "Name 5 things you see, 4 you hear, 3 you touch, 2 you smell, 1 you taste - come back to the present",
        duration: "3 minutes",
        category: "grounding",
    },
    Remedy {
        title: "Safe Place Visualization",
        description: "Close your eyes and imagine a place where you feel completely safe and calm",
        duration: "5 minutes",
        category: "mental",
    },
    Remedy {
        title: "Gentle Self-Talk",
        description: "Remind yourself: \"I am safe now. That was then, this is now. I survived.\"",
        duration: "2 minutes",
        category: "mental",
    },
];

const QUICK_DISGUST_EN: &[Remedy] = &[
    Remedy {
        title: "Cleansing Breath",
        description: "Take 5 deep breaths, imagining you are clearing negativity",
        duration: "2 minutes",
        category: "breathing",
    },
    Remedy {
        title: "Washing Ritual",
        description: "Wash your hands mindfully and take deep breaths - this feeling will pass",
        duration: "2 minutes",
        category: "physical",
    },
];

const QUICK_HAPPY_HI: &[Remedy] = &[
    Remedy {
        title: "खुशी को साझा करें",
        description: "किसी मित्र या परिवार के सदस्य को कॉल करें और अपनी खुशी साझा करें",
        duration: "5 मिनट",
        category: "social",
    },
    Remedy {
        title: "कृतज्ञता डायरी",
        description: "3 चीजें लिखें जिनके लिए आप आज आभारी हैं",
        duration: "3 मिनट",
        category: "mental",
    },
];

const QUICK_SAD_HI: &[Remedy] = &[
    Remedy {
        title: "4-7-8 सांस तकनीक",
        description: "4 गिनती में सांस लें, 7 गिनती रोकें, 8 गिनती में छोड़ें",
        duration: "2 मिनट",
        category: "breathing",
    },
    Remedy {
        title: "स्व-करुणा अभ्यास",
        description: "अपने आप से दयालुता से बात करें जैसे आप किसी अच्छे मित्र से करते हैं",
        duration: "5 मिनट",
        category: "mental",
    },
];

const QUICK_ANGRY_HI: &[Remedy] = &[
    Remedy {
        title: "प्रगतिशील मांसपेशी विश्राम",
        description: "अपनी मांसपेशियों को कसें और फिर छोड़ें, पैर की उंगलियों से सिर तक",
        duration: "10 मिनट",
        category: "relaxation",
    },
    Remedy {
        title: "10 की गिनती",
        description: "धीरे-धीरे 10 तक गिनती करें और प्रत्येक संख्या के साथ गहरी सांस लें",
        duration: "1 मिनट",
        category: "mental",
    },
];

const QUICK_NEUTRAL_HI: &[Remedy] = &[Remedy {
    title: "माइंडफुल वॉक",
    description: "5 मिनट की छोटी सी टहलने जाएं और अपने आसपास के वातावरण पर ध्यान दें",
    duration: "5 मिनट",
    category: "physical",
}];

const QUICK_SURPRISED_HI: &[Remedy] = &[Remedy {
    title: "ग्राउंडिंग तकनीक",
    description: "5 चीजें देखें, 4 सुनें, 3 छुएं, 2 सूंघें, 1 चखें",
    duration: "3 मिनट",
    category: "grounding",
}];

const QUICK_FEAR_HI: &[Remedy] = &[Remedy {
    title: "बॉक्स ब्रीथिंग",
    description: "4-4-4-4 की तकनीक: 4 गिनती में सांस लें, रोकें, छोड़ें, रोकें",
    duration: "5 मिनट",
    category: "breathing",
}];

const QUICK_TRAUMA_HI: &[Remedy] = &[
    Remedy {
        title: "ग्राउंडिंग 5-4-3-2-1",
        description: "5 चीजें देखें, 4 सुनें, 3 छुएं, 2 सूंघें, 1 चखें - अभी और यहाँ वापस आएं",
        duration: "3 मिनट",
        category: "grounding",
    },
    Remedy {
        title: "सुरक्षित स्थान विज़ुअलाइज़ेशन",
        description: "अपने दिमाग में एक सुरक्षित और शांत जगह की कल्पना करें",
        duration: "5 मिनट",
        category: "mental",
    },
];

const QUICK_DISGUST_HI: &[Remedy] = &[Remedy {
    title: "सफाई अनुष्ठान",
    description: "हाथ धोएं और गहरी सांस लें - यह भावना गुजर जाएगी",
    duration: "2 मिनट",
    category: "physical",
}];

/// Instant remedies for a detected facial emotion.
pub fn quick_remedies_for(emotion: EmotionLabel, language: Language) -> &'static [Remedy] {
    match (language, emotion) {
        (Language::En, EmotionLabel::Happy) => QUICK_HAPPY_EN,
        (Language::En, EmotionLabel::Sad) => QUICK_SAD_EN,
        (Language::En, EmotionLabel::Angry) => QUICK_ANGRY_EN,
        (Language::En, EmotionLabel::Neutral) => QUICK_NEUTRAL_EN,
        (Language::En, EmotionLabel::Surprised) => QUICK_SURPRISED_EN,
        (Language::En, EmotionLabel::Fear) => QUICK_FEAR_EN,
        (Language::En, EmotionLabel::Trauma) => QUICK_TRAUMA_EN,
        (Language::En, EmotionLabel::Disgust) => QUICK_DISGUST_EN,
        (Language::Hi, EmotionLabel::Happy) => QUICK_HAPPY_HI,
        (Language::Hi, EmotionLabel::Sad) => QUICK_SAD_HI,
        (Language::Hi, EmotionLabel::Angry) => QUICK_ANGRY_HI,
        (Language::Hi, EmotionLabel::Neutral) => QUICK_NEUTRAL_HI,
        (Language::Hi, EmotionLabel::Surprised) => QUICK_SURPRISED_HI,
        (Language::Hi, EmotionLabel::Fear) => QUICK_FEAR_HI,
        (Language::Hi, EmotionLabel::Trauma) => QUICK_TRAUMA_HI,
        (Language::Hi, EmotionLabel::Disgust) => QUICK_DISGUST_HI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_category_thresholds() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            RemedyCategory::for_mood(MoodScore::new(1), &mut rng),
            RemedyCategory::Sadness
        );
        assert_eq!(
            RemedyCategory::for_mood(MoodScore::new(3), &mut rng),
            RemedyCategory::Sadness
        );
        assert_eq!(
            RemedyCategory::for_mood(MoodScore::new(4), &mut rng),
            RemedyCategory::Stress
        );
        assert_eq!(
            RemedyCategory::for_mood(MoodScore::new(5), &mut rng),
            RemedyCategory::Anxiety
        );
        assert_eq!(
            RemedyCategory::for_mood(MoodScore::new(6), &mut rng),
            RemedyCategory::Anxiety
        );
        for _ in 0..20 {
            let cat = RemedyCategory::for_mood(MoodScore::new(9), &mut rng);
            assert!(matches!(
                cat,
                RemedyCategory::Stress | RemedyCategory::Anxiety
            ));
        }
    }

    #[test]
    fn test_every_category_populated_both_languages() {
        for language in Language::ALL {
            for category in RemedyCategory::ALL {
                let remedies = remedies_for(category, language);
                assert_eq!(remedies.len(), 3, "{category:?}/{language:?}");
                for remedy in remedies {
                    assert!(!remedy.title.is_empty());
                    assert!(!remedy.description.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_quick_remedies_cover_all_emotions() {
        for language in Language::ALL {
            for emotion in EmotionLabel::ALL {
                assert!(
                    !quick_remedies_for(emotion, language).is_empty(),
                    "{emotion:?}/{language:?}"
                );
            }
        }
    }

    #[test]
    fn test_situation_mapping() {
        assert_eq!(
            RemedyCategory::for_situation("work_stress"),
            RemedyCategory::Stress
        );
        assert_eq!(
            RemedyCategory::for_situation("relationship"),
            RemedyCategory::Sadness
        );
        assert_eq!(
            RemedyCategory::for_situation("family_issues"),
            RemedyCategory::Anger
        );
        assert_eq!(
            RemedyCategory::for_situation("unheard_of"),
            RemedyCategory::Stress
        );
    }

    #[test]
    fn test_random_pickers_return_from_pools() {
        let mut rng = StdRng::seed_from_u64(3);
        let affirmation = random_affirmation(Language::En, &mut rng);
        assert!(AFFIRMATIONS_EN.contains(&affirmation));
        let remedy = random_remedy(Language::Hi, &mut rng);
        assert!(!remedy.title.is_empty());
    }
}
