use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use flag_quiz::{
    builtin_catalog, load_catalog_from_json, ChatGptGenerator, Country, FlagQuiz, GameConfig,
    GameMode, OfflineGenerator, QuizError, TextGenerator,
};

#[derive(Parser, Debug)]
#[command(version, about = "Fun with Flags: a terminal flag quiz", long_about = None)]
struct Args {
    /// Game rules to play with
    #[arg(short, long, value_enum, default_value_t = GameMode::Classic)]
    mode: GameMode,

    /// Questions in a classic game
    #[arg(short, long, default_value_t = flag_quiz::config::QUESTIONS_PER_GAME)]
    questions: usize,

    /// Options shown per question
    #[arg(short, long, default_value_t = flag_quiz::config::OPTIONS_PER_QUESTION)]
    options: usize,

    /// Seconds per question in survival mode
    #[arg(short, long, default_value_t = flag_quiz::config::TIME_PER_QUESTION.as_secs())]
    time_limit: u64,

    /// JSON file with [{"name": ..., "code": ...}] entries instead of the built-in list
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Never call the text service; hints and facts use fallbacks
    #[arg(long)]
    offline: bool,

    /// ChatGPT API key used for hints and facts
    #[arg(long, env = "CHATGPT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            questions_per_game: self.questions,
            options_per_question: self.options,
            time_per_question: Duration::from_secs(self.time_limit),
            seed: self.seed,
            ..GameConfig::new(self.mode)
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), QuizError> {
    let catalog = match &args.catalog {
        Some(path) => load_catalog_from_json(path)?,
        None => builtin_catalog(),
    };
    let config = args.game_config();

    let generator = if args.offline {
        None
    } else {
        args.api_key.as_deref().and_then(|key| match ChatGptGenerator::new(key) {
            Ok(generator) => Some(generator),
            Err(e) => {
                log::warn!("Text service unavailable, using fallbacks: {}", e);
                None
            }
        })
    };

    match generator {
        Some(generator) => play(config, catalog, generator).await,
        None => {
            log::info!("Playing offline");
            play(config, catalog, OfflineGenerator).await
        }
    }
}

async fn play<G: TextGenerator>(
    config: GameConfig,
    catalog: Vec<Country>,
    generator: G,
) -> Result<(), QuizError> {
    FlagQuiz::new(config, catalog, generator)?.run().await
}
