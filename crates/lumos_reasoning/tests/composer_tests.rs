//! Integration tests for the conversation composer.
//!
//! A configurable mock generator exercises the full compose() pipeline —
//! fallback selection, remedy merging, prompt assembly — without real
//! network calls.

use anyhow::Result;
use async_trait::async_trait;
use lumos_core::locale::Language;
use lumos_core::mood::MoodScore;
use lumos_core::{classifier, ChatTurn};
use lumos_reasoning::composer::{fallback_reply, Composer};
use lumos_reasoning::llm::{GenerationParams, TextGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock generator
// ============================================================================

/// Returns a fixed outcome and records the prompts it was given.
struct MockGenerator {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockGenerator {
    fn ok(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, _params: GenerationParams) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => anyhow::bail!("{message}"),
        }
    }
}

// ============================================================================
// compose()
// ============================================================================

#[tokio::test]
async fn test_low_mood_reply_includes_remedy_block() {
    let generator = MockGenerator::ok("That sounds incredibly heavy. I'm here with you.");
    let composer = Composer::new(generator.clone());
    let mut rng = StdRng::seed_from_u64(1);

    let text = "I feel hopeless and empty";
    let mood = classifier::classify(text);
    assert_eq!(mood.get(), 1);

    let reply = composer
        .compose(text, Language::En, mood, &[], &mut rng)
        .await;

    assert!(reply.starts_with("That sounds incredibly heavy."));
    // The remedy paragraph is joined by a blank line and carries a book,
    // a song, and a joke.
    assert!(reply.contains("\n\n"));
    assert!(reply.contains("📚"));
    assert!(reply.contains("🎵"));
    assert!(reply.contains("😄"));
}

#[tokio::test]
async fn test_high_mood_reply_has_no_remedy_block() {
    let generator = MockGenerator::ok("Love that energy! What made today so good?");
    let composer = Composer::new(generator.clone());
    let mut rng = StdRng::seed_from_u64(2);

    let mood = classifier::classify("ecstatic");
    assert_eq!(mood.get(), 9);

    let reply = composer
        .compose("ecstatic", Language::En, mood, &[], &mut rng)
        .await;

    assert_eq!(reply, "Love that energy! What made today so good?");
    assert!(!reply.contains("📚"));
}

#[tokio::test]
async fn test_generation_failure_falls_back() {
    let generator = MockGenerator::failing("503 from upstream");
    let composer = Composer::new(generator.clone());
    let mut rng = StdRng::seed_from_u64(3);

    let reply = composer
        .compose("hello", Language::En, MoodScore::new(7), &[], &mut rng)
        .await;

    assert_eq!(reply, fallback_reply(Language::En));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_completion_falls_back_but_keeps_remedies() {
    let generator = MockGenerator::ok("   ");
    let composer = Composer::new(generator.clone());
    let mut rng = StdRng::seed_from_u64(4);

    let reply = composer
        .compose("feeling down", Language::En, MoodScore::new(2), &[], &mut rng)
        .await;

    assert!(reply.starts_with(fallback_reply(Language::En)));
    assert!(reply.contains("📚"));
}

#[tokio::test]
async fn test_hindi_fallback_for_hindi_session() {
    let generator = MockGenerator::failing("timeout");
    let composer = Composer::new(generator);
    let mut rng = StdRng::seed_from_u64(5);

    let reply = composer
        .compose("namaste", Language::Hi, MoodScore::new(6), &[], &mut rng)
        .await;

    assert_eq!(reply, fallback_reply(Language::Hi));
}

#[tokio::test]
async fn test_prompt_carries_mood_and_recent_turns() {
    let generator = MockGenerator::ok("ok");
    let composer = Composer::new(generator.clone());
    let mut rng = StdRng::seed_from_u64(6);

    let history = vec![
        ChatTurn::user("work was brutal", MoodScore::new(3)),
        ChatTurn::assistant("Want to talk about what happened?"),
    ];
    composer
        .compose(
            "my boss again",
            Language::En,
            MoodScore::new(3),
            &history,
            &mut rng,
        )
        .await;

    let prompt = generator.last_prompt();
    assert!(prompt.contains("3/10"));
    assert!(prompt.contains("User: work was brutal"));
    assert!(prompt.contains("Assistant: Want to talk about what happened?"));
    assert!(prompt.ends_with("User: my boss again"));
}

// ============================================================================
// support_message()
// ============================================================================

#[tokio::test]
async fn test_support_message_uses_generator_reply() {
    let generator = MockGenerator::ok("You're doing better than you think.");
    let composer = Composer::new(generator.clone());

    let message = composer
        .support_message(MoodScore::new(2), Language::En)
        .await;
    assert_eq!(message, "You're doing better than you think.");

    let prompt = generator.last_prompt();
    assert!(prompt.contains("comfort and hope"));
}

#[tokio::test]
async fn test_support_message_falls_back_on_error() {
    let generator = MockGenerator::failing("no credentials");
    let composer = Composer::new(generator);

    let message = composer
        .support_message(MoodScore::new(8), Language::En)
        .await;
    assert_eq!(message, fallback_reply(Language::En));
}
