use anyhow::Result;
use clap::Parser;
use lumos_content::challenges::{ChallengeBook, Difficulty};
use lumos_content::meditation::{self, MeditationTracker};
use lumos_core::classifier;
use lumos_core::locale::{self, Language};
use lumos_core::LumosConfig;
use lumos_reasoning::{Composer, GeminiClient, MockProvider, TextGenerator};
use lumos_session::{export, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lumos — a terminal mental-health companion", long_about = None)]
struct Args {
    /// Locale code (en or hi)
    #[arg(short, long, default_value = "en", env = "LUMOS_LANGUAGE")]
    language: String,

    /// Path to the config file
    #[arg(short, long, default_value = "lumos.toml")]
    config: String,

    /// Model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Seed for the suggestion RNG (deterministic picks)
    #[arg(long)]
    seed: Option<u64>,

    /// Force the offline mock provider even if credentials exist
    #[arg(long)]
    mock: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut config = LumosConfig::load_or_default(&args.config);
    if let Some(model) = &args.model {
        config.llm.model = model.clone();
    }
    let language = Language::from_code(&args.language);

    // Missing credentials degrade to the mock provider, never a crash.
    let generator: Arc<dyn TextGenerator> = if args.mock {
        info!("using mock provider (--mock)");
        Arc::new(MockProvider::new(&config.llm.model))
    } else {
        match GeminiClient::from_config(&config.llm) {
            Ok(client) => {
                info!("using Gemini provider with model {}", client.model());
                Arc::new(client)
            }
            Err(e) => {
                info!("no usable credentials ({e}), falling back to mock provider");
                Arc::new(MockProvider::new(&config.llm.model))
            }
        }
    };

    let composer = Composer::new(generator);
    let mut session = Session::new(language);
    let mut challenges = ChallengeBook::new();
    let mut meditations = MeditationTracker::new();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("{}", locale::text("main_title", language));
    println!("{}", locale::text("chat_placeholder", language));
    println!("(commands: stats, challenge [tier], done [tier], meditate, finish, export <path>, clear, quit)");
    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let trimmed = input.trim();

        if trimmed.is_empty() {
            print!("> ");
            io::stdout().flush()?;
            continue;
        }

        if trimmed == "quit" || trimmed == "exit" {
            println!("{}", locale::text("goodbye", language));
            break;
        }

        match trimmed.split_once(' ').unwrap_or((trimmed, "")) {
            ("stats", _) => show_stats(&session, &challenges, language),
            ("challenge", tier) => {
                let difficulty = Difficulty::parse(tier).unwrap_or(Difficulty::Beginner);
                let today = chrono::Utc::now().date_naive();
                let challenge = challenges.daily(difficulty, today, &mut rng);
                println!("\n{}", locale::text("todays_challenge", language));
                println!("  {} ({} pts)", challenge.title, challenge.points);
                println!("  {}", challenge.description);
                println!(
                    "  {} {}",
                    locale::text("instructions", language),
                    challenge.instructions
                );
                println!();
            }
            ("done", tier) => {
                let difficulty = Difficulty::parse(tier).unwrap_or(Difficulty::Beginner);
                let today = chrono::Utc::now().date_naive();
                if challenges.complete(difficulty, today) {
                    let streak = challenges.streak_info();
                    println!("\n{}", locale::text("challenge_completed", language));
                    println!(
                        "  {}: {} | {}: {}",
                        locale::text("streak", language),
                        streak.current_streak,
                        locale::text("points", language),
                        streak.total_points
                    );
                    println!("  {}\n", locale::text("next_challenge", language));
                } else {
                    println!("\nNothing to complete for that tier today.\n");
                }
            }
            ("meditate", _) => {
                let practice = meditation::recommended(session.current_mood(), language);
                meditations.begin(practice, session.current_mood(), chrono::Utc::now());
                println!("\n{} {} ({} min)", practice.icon, practice.name, practice.duration_minutes);
                println!(
                    "  {}\n",
                    meditation::guidance(practice.kind, language, 0.0)
                );
            }
            ("finish", _) => {
                if let Some(done) = meditations.finish(chrono::Utc::now()) {
                    println!("\n{}", locale::text("meditation_completed", language));
                    println!(
                        "  {} | mood change {:+} | effectiveness {:.0}%\n",
                        done.meditation.name,
                        done.mood_change,
                        done.effectiveness * 100.0
                    );
                } else {
                    println!("\nNo meditation session in progress.\n");
                }
            }
            ("export", path) if !path.is_empty() => {
                let json = export(&session)?;
                std::fs::write(path, json)?;
                println!("\n{} -> {}\n", locale::text("session_exported", language), path);
            }
            ("clear", _) => {
                session.clear();
                println!("\nSession cleared.\n");
            }
            _ => {
                // A regular chat message: classify, log, compose, reply.
                let mood = classifier::classify(trimmed);
                let history = session.recent_turns(5).to_vec();
                session.push_user(trimmed, mood);
                if meditations.is_active() {
                    meditations.sample_mood(mood, 0.0);
                }

                println!("{}", locale::text("thinking", language));
                let reply = composer
                    .compose(trimmed, language, mood, &history, &mut rng)
                    .await;
                session.push_assistant(reply.clone());

                println!(
                    "\n[{} {}]",
                    locale::text("emotion_level", language),
                    mood.label(language)
                );
                println!("Lumos: {}\n", reply);
            }
        }

        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}

fn show_stats(session: &Session, challenges: &ChallengeBook, language: Language) {
    let stats = lumos_session::compute_stats(session.turns(), session.moods());
    let streak = challenges.streak_info();

    println!();
    if stats.total_mood_entries == 0 {
        println!("{}", locale::text("no_emotion_data", language));
    } else {
        println!(
            "{}: {:.1}/10 (min {}, max {}) over {} entries, trend {:?}",
            locale::text("average", language),
            stats.average_mood.unwrap_or(5.0),
            stats.lowest_mood.unwrap_or(0),
            stats.highest_mood.unwrap_or(0),
            stats.total_mood_entries,
            stats.mood_trend,
        );
    }
    println!(
        "{}: {} | {}: {} | {}: {}",
        locale::text("streak", language),
        streak.current_streak,
        locale::text("points", language),
        streak.total_points,
        locale::text("completed", language),
        streak.total_completed,
    );
    println!();
}
