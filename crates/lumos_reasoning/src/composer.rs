//! Conversation composition: persona prompt assembly, fallback handling
//! and the low-mood remedy merge.
//!
//! The composer never mutates session state and never fails: every path
//! ends in a reply string, even when the generation collaborator is down.

use crate::llm::{GenerationParams, TextGenerator};
use lumos_core::locale::Language;
use lumos_core::mood::MoodScore;
use lumos_core::{ChatTurn, Role};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// How many prior turns are quoted back into the prompt.
const CONTEXT_WINDOW: usize = 3;

pub struct Composer {
    generator: Arc<dyn TextGenerator>,
    params: GenerationParams,
}

impl Composer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(generator: Arc<dyn TextGenerator>, params: GenerationParams) -> Self {
        Self { generator, params }
    }

    /// Produce the companion's reply to one user message.
    ///
    /// On generation failure the fixed per-language fallback is returned as
    /// is. On success (or an empty completion, which also falls back) a
    /// remedy block is appended when the mood is low.
    pub async fn compose<R: Rng + ?Sized>(
        &self,
        user_text: &str,
        language: Language,
        mood: MoodScore,
        history: &[ChatTurn],
        rng: &mut R,
    ) -> String {
        let system = system_prompt(language, mood, history);
        let prompt = format!("{}\n\nUser: {}", system, user_text);
        // Drawn before the await so selection stays deterministic under a
        // seeded RNG regardless of generator timing.
        let remedies = remedy_block(mood, language, rng);

        match self.generator.generate(&prompt, self.params).await {
            Ok(text) => {
                let trimmed = text.trim();
                let mut reply = if trimmed.is_empty() {
                    tracing::warn!("generator returned an empty completion, using fallback");
                    fallback_reply(language).to_string()
                } else {
                    trimmed.to_string()
                };
                if let Some(block) = remedies {
                    reply.push_str("\n\n");
                    reply.push_str(&block);
                }
                reply
            }
            Err(e) => {
                tracing::warn!("generation failed, using fallback: {e:#}");
                fallback_reply(language).to_string()
            }
        }
    }

    /// A standalone supportive message for the current mood, outside the
    /// chat flow.
    pub async fn support_message(&self, mood: MoodScore, language: Language) -> String {
        let directive = match (language, mood.get()) {
            (Language::En, 0..=3) => "The user is feeling very sad. Provide comfort and hope.",
            (Language::En, 4..=6) => {
                "The user is feeling somewhat troubled. Provide encouragement and positivity."
            }
            (Language::En, _) => "The user is in a good state. Help maintain their happiness.",
            (Language::Hi, 0..=3) => "उपयोगकर्ता बहुत दुखी है। उन्हें सांत्वना और आशा दें।",
            (Language::Hi, 4..=6) => "उपयोगकर्ता थोड़ा परेशान है। उन्हें प्रेरणा और सकारात्मकता दें।",
            (Language::Hi, _) => "उपयोगकर्ता अच्छी स्थिति में है। उनकी खुशी को बनाए रखने में मदद करें।",
        };
        let prompt = match language {
            Language::En => format!(
                "You are a compassionate mental health counselor. Respond in English. {directive}"
            ),
            Language::Hi => format!(
                "आप एक दयालु मानसिक स्वास्थ्य परामर्शदाता हैं। हिंदी में जवाब दें। {directive}"
            ),
        };
        let params = GenerationParams {
            max_tokens: 300,
            temperature: 0.8,
        };
        match self.generator.generate(&prompt, params).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) | Err(_) => fallback_reply(language).to_string(),
        }
    }
}

/// Assemble the persona instruction with mood and a short transcript.
pub fn system_prompt(language: Language, mood: MoodScore, history: &[ChatTurn]) -> String {
    let context = transcript_window(history, language);
    match language {
        Language::En => format!(
            "You are a warm, empathetic mental health companion who talks like a caring friend. \
Your goal is to provide genuine emotional support through natural conversation.\n\n\
User's current mood: {}/10 (1=feeling really down, 10=feeling great)\n\n\
Conversation approach:\n\
- Talk like a supportive friend who understands mental health\n\
- Use everyday language - avoid clinical or formal terminology\n\
- Show genuine interest in their feelings and experiences\n\
- Ask thoughtful follow-up questions to help them process emotions\n\
- Validate their feelings before offering suggestions\n\
- When mood is low, naturally weave in book recommendations, song suggestions, or jokes\n\
- Offer practical coping strategies as friendly suggestions like a caring friend would\n\n\
Remember:\n\
- Respond with empathy first, advice second\n\
- Keep responses conversational (2-4 sentences usually)\n\
- Ask one thoughtful question to keep the conversation flowing\n\
- If they seem in crisis, gently suggest professional help\n\n\
{}",
            mood.get(),
            context
        ),
        Language::Hi => format!(
            "आप एक मित्र की तरह हैं जो मानसिक स्वास्थ्य के बारे में जानता है। \
बिल्कुल सामान्य बातचीत की तरह बात करें, औपचारिक थेरेपिस्ट की तरह नहीं।\n\n\
उपयोगकर्ता का मूड: {}/10 (1=बहुत परेशान, 10=बहुत अच्छा)\n\n\
बातचीत के लिए:\n\
- एक समझदार दोस्त की तरह प्राकृतिक रूप से बात करें\n\
- आसान, रोज़ाना की भाषा का उपयोग करें - कोई औपचारिक शब्दावली नहीं\n\
- उनकी भावनाओं को समझने के लिए सवाल पूछें\n\
- जब मूड कम हो तो बातचीत में ही प्राकृतिक रूप से किताब, गाना या मज़ाक सुझाएं\n\
- गर्मजोशी से, सच्चे और समझने योग्य हों\n\n\
{}",
            mood.get(),
            context
        ),
    }
}

fn transcript_window(history: &[ChatTurn], language: Language) -> String {
    if history.is_empty() {
        return String::new();
    }
    let header = match language {
        Language::En => "Previous conversation context:",
        Language::Hi => "पिछली बातचीत का संदर्भ:",
    };
    let start = history.len().saturating_sub(CONTEXT_WINDOW);
    let mut out = String::from(header);
    out.push('\n');
    for turn in &history[start..] {
        let role = match turn.role {
            Role::User => "User",
            Role::Assistant => "Assistant",
        };
        out.push_str(&format!("{}: {}\n", role, turn.content));
    }
    out
}

/// The fixed reply used whenever the collaborator fails or goes silent.
pub fn fallback_reply(language: Language) -> &'static str {
    match language {
        Language::En => {
            "I'm glad you shared with me. Sometimes we may experience technical difficulties, \
but your feelings matter. Take a few deep breaths and remember you're not alone. \
Would you like to tell me more about what you're experiencing?"
        }
        Language::Hi => {
            "मुझे खुशी है कि आपने अपनी बात साझा की है। कभी-कभी तकनीकी समस्याएं आ सकती हैं, \
लेकिन आपकी भावनाएं महत्वपूर्ण हैं। कुछ गहरी सांसें लें और याद रखें कि आप अकेले नहीं हैं। \
क्या आप अपनी समस्या के बारे में और बताना चाहेंगे?"
        }
    }
}

const SEVERE_BOOKS_EN: &[&str] = &[
    "'The Alchemist' by Paulo Coelho",
    "'Man's Search for Meaning' by Viktor Frankl",
    "'The Power of Now' by Eckhart Tolle",
];
const SEVERE_SONGS_EN: &[&str] = &[
    "'Breathe Me' by Sia",
    "'Fix You' by Coldplay",
    "'Weightless' by Marconi Union",
];
const SEVERE_JOKES_EN: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "I told my wife she was drawing her eyebrows too high. She looked surprised.",
    "Why did the scarecrow win an award? He was outstanding in his field!",
];

const MODERATE_BOOKS_EN: &[&str] = &[
    "'The Happiness Project' by Gretchen Rubin",
    "'Big Magic' by Elizabeth Gilbert",
    "'Atomic Habits' by James Clear",
];
const MODERATE_SONGS_EN: &[&str] = &[
    "'Here Comes the Sun' by The Beatles",
    "'Good as Hell' by Lizzo",
    "'Happy' by Pharrell Williams",
];
const MODERATE_JOKES_EN: &[&str] = &[
    "Why don't eggs tell jokes? They'd crack each other up!",
    "What do you call a fake noodle? An impasta!",
    "Why did the coffee file a police report? It got mugged!",
];

const SEVERE_BOOKS_HI: &[&str] = &[
    "'The Alchemist' - Paulo Coelho",
    "'Man's Search for Meaning' - Viktor Frankl",
    "'The Power of Now' - Eckhart Tolle",
];
const SEVERE_SONGS_HI: &[&str] = &[
    "'Breathe Me' - Sia",
    "'Fix You' - Coldplay",
    "'Weightless' - Marconi Union",
];
const SEVERE_JOKES_HI: &[&str] = &[
    "डॉक्टर: आपको क्या परेशानी है?\nमरीज़: मुझे लगता है मैं एक मच्छर हूं।\nडॉक्टर: कब से?\nमरीज़: जब से मैंने buzz करना शुरू किया है!",
    "टीचर: राम, बताओ कि पानी कैसे बनता है?\nराम: आसान है मैडम, H को दो और O को मिला दो!\nटीचर: H2O कैसे?\nराम: हाँ, Thank U मैडम!",
];

const MODERATE_BOOKS_HI: &[&str] = &[
    "'The Happiness Project' - Gretchen Rubin",
    "'Big Magic' - Elizabeth Gilbert",
    "'Atomic Habits' - James Clear",
];
const MODERATE_SONGS_HI: &[&str] = &[
    "'Here Comes the Sun' - The Beatles",
    "'Good as Hell' - Lizzo",
    "'Happy' - Pharrell Williams",
];
const MODERATE_JOKES_HI: &[&str] = &[
    "पत्नी: आप हमेशा मेरी बात क्यों नहीं सुनते?\nपति: मैं सुनता हूं, बस कभी-कभी मैं agreement mode में नहीं होता!",
    "बॉस: आज आप देर से क्यों आए?\nकर्मचारी: सर, ट्रैफिक में फंस गया था।\nबॉस: तो जल्दी क्यों नहीं निकले?\nकर्मचारी: सर, इतनी जल्दी तो ट्रैफिक भी नहीं निकला!",
];

/// The remedy paragraph woven into low-mood replies. None for mood > 4.
pub fn remedy_block<R: Rng + ?Sized>(
    mood: MoodScore,
    language: Language,
    rng: &mut R,
) -> Option<String> {
    let pick = |list: &[&'static str], rng: &mut R| -> &'static str {
        list.choose(rng).copied().unwrap_or(list[0])
    };

    match (language, mood.get()) {
        (Language::En, 0..=2) => {
            let book = pick(SEVERE_BOOKS_EN, rng);
            let song = pick(SEVERE_SONGS_EN, rng);
            let joke = pick(SEVERE_JOKES_EN, rng);
            Some(format!(
                "Here are some things that might help right now:\n\n\
📚 Try reading {book} - it's a gentle, comforting book that offers new perspective during tough times.\n\n\
🎵 Listen to {song} and take some deep breaths. Music has incredible healing power.\n\n\
😄 And here's something to make you smile: {joke}\n\n\
Remember, you're not alone in this. Sometimes the smallest things can make the biggest difference. \
Take it one moment at a time. 💙"
            ))
        }
        (Language::En, 3 | 4) => {
            let book = pick(MODERATE_BOOKS_EN, rng);
            let song = pick(MODERATE_SONGS_EN, rng);
            let joke = pick(MODERATE_JOKES_EN, rng);
            Some(format!(
                "I have some mood-lifting suggestions for you:\n\n\
📖 Pick up {book} - it's perfect for daily doses of positivity and motivation.\n\n\
🎶 Put on {song} and dance it out or sing along! Music is such a powerful mood shifter.\n\n\
😊 Quick laugh break: {joke}\n\n\
Also, try a 10-minute walk outside or treat yourself to something small that makes you happy. \
You deserve it! 🌟"
            ))
        }
        (Language::Hi, 0..=2) => {
            let book = pick(SEVERE_BOOKS_HI, rng);
            let song = pick(SEVERE_SONGS_HI, rng);
            let joke = pick(SEVERE_JOKES_HI, rng);
            Some(format!(
                "यहाँ कुछ चीज़ें हैं जो मदद कर सकती हैं:\n\n\
📚 एक अच्छी किताब पढ़कर देखें - {book} बहुत शांति देती है और नया नज़रिया मिलता है।\n\n\
🎵 कुछ सुकूनदायक संगीत सुनें - {song} सुनकर गहरी सांस लें। संगीत में जादू होता है।\n\n\
😄 थोड़ी हंसी भी काम आएगी: {joke}\n\n\
बस याद रखिएगा, आप अकेले नहीं हैं। कभी-कभी छोटी-छोटी चीज़ें बड़ा बदलाव लाती हैं। 💙"
            ))
        }
        (Language::Hi, 3 | 4) => {
            let book = pick(MODERATE_BOOKS_HI, rng);
            let song = pick(MODERATE_SONGS_HI, rng);
            let joke = pick(MODERATE_JOKES_HI, rng);
            Some(format!(
                "कुछ अच्छी चीज़ें जो आपका मूड बेहतर कर सकती हैं:\n\n\
📖 {book} जैसी कोई प्रेरणादायक किताब पढ़ें - रोज़ थोड़ा-थोड़ा पढ़ना काफी है।\n\n\
🎶 {song} जैसा खुशमिज़ाज गाना लगाएं और साथ में हम्म करें या थोड़ा डांस करें!\n\n\
😊 हंसने के लिए: {joke}\n\n\
10 मिनट की छोटी सी सैर या कोई पसंदीदा स्नैक भी मूड अच्छा कर देता है। 🌟"
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_remedy_block_thresholds() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(remedy_block(MoodScore::new(1), Language::En, &mut rng).is_some());
        assert!(remedy_block(MoodScore::new(4), Language::En, &mut rng).is_some());
        assert!(remedy_block(MoodScore::new(5), Language::En, &mut rng).is_none());
        assert!(remedy_block(MoodScore::new(9), Language::Hi, &mut rng).is_none());
    }

    #[test]
    fn test_severe_block_draws_from_severe_pools() {
        let mut rng = StdRng::seed_from_u64(21);
        let block = remedy_block(MoodScore::new(2), Language::En, &mut rng).unwrap();
        assert!(SEVERE_BOOKS_EN.iter().any(|b| block.contains(b)));
        assert!(SEVERE_SONGS_EN.iter().any(|s| block.contains(s)));
        assert!(SEVERE_JOKES_EN.iter().any(|j| block.contains(j)));
    }

    #[test]
    fn test_moderate_block_differs_from_severe() {
        let mut rng = StdRng::seed_from_u64(22);
        let block = remedy_block(MoodScore::new(4), Language::En, &mut rng).unwrap();
        assert!(block.contains("mood-lifting"));
        assert!(MODERATE_BOOKS_EN.iter().any(|b| block.contains(b)));
    }

    #[test]
    fn test_system_prompt_embeds_mood_and_context() {
        let history = vec![
            ChatTurn::user("I had a rough day", MoodScore::new(3)),
            ChatTurn::assistant("That sounds hard. What happened?"),
        ];
        let prompt = system_prompt(Language::En, MoodScore::new(3), &history);
        assert!(prompt.contains("3/10"));
        assert!(prompt.contains("Previous conversation context:"));
        assert!(prompt.contains("User: I had a rough day"));
        assert!(prompt.contains("Assistant: That sounds hard."));
    }

    #[test]
    fn test_system_prompt_windows_to_last_three() {
        let history: Vec<ChatTurn> = (0..6)
            .map(|i| ChatTurn::user(format!("message {i}"), MoodScore::NEUTRAL))
            .collect();
        let prompt = system_prompt(Language::En, MoodScore::NEUTRAL, &history);
        assert!(!prompt.contains("message 2"));
        assert!(prompt.contains("message 3"));
        assert!(prompt.contains("message 5"));
    }

    #[test]
    fn test_system_prompt_no_history_has_no_context_header() {
        let prompt = system_prompt(Language::En, MoodScore::NEUTRAL, &[]);
        assert!(!prompt.contains("Previous conversation context:"));
    }

    #[test]
    fn test_fallback_reply_per_language() {
        assert!(fallback_reply(Language::En).contains("not alone"));
        assert!(fallback_reply(Language::Hi).contains("अकेले नहीं हैं"));
    }
}
