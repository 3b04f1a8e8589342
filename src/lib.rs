//! # flag-quiz
//!
//! "Fun with Flags": a terminal trivia game about national flags, with
//! optional AI-generated hints and country facts.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flag_quiz::{builtin_catalog, FlagQuiz, GameConfig, GameMode, OfflineGenerator, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = GameConfig::new(GameMode::Survival);
//!     let quiz = FlagQuiz::new(config, builtin_catalog(), OfflineGenerator)?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod facts;
pub mod game;
mod models;
pub mod runtime;
pub mod terminal;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tokio::sync::mpsc;

pub use app::App;
pub use config::{ConfigError, GameConfig, GameMode};
pub use data::{builtin_catalog, load_catalog_from_json, parse_catalog, LoadError};
pub use facts::{ChatGptGenerator, CountryDetails, FactFetcher, OfflineGenerator, TextGenerator};
pub use game::Game;
pub use models::{Country, GamePhase, Question};

use runtime::{apply_event, AppEvent, Executor, TICK_PERIOD};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load catalog: {0}")]
    Load(#[from] LoadError),

    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct FlagQuiz<G> {
    app: App,
    fetcher: Arc<FactFetcher<G>>,
}

impl<G: TextGenerator> FlagQuiz<G> {
    pub fn new(config: GameConfig, catalog: Vec<Country>, generator: G) -> Result<Self, QuizError> {
        let game = Game::new(config, catalog)?;
        Ok(Self {
            app: App::new(game),
            fetcher: Arc::new(FactFetcher::new(generator)),
        })
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let executor = Executor::new(self.fetcher, tx, TICK_PERIOD);

        let mut screen = terminal::Screen::enter()?;
        let result = run_event_loop(&mut screen, &mut self.app, executor, rx).await;
        screen.leave()?;
        result
    }
}

async fn run_event_loop<G: TextGenerator>(
    terminal: &mut terminal::FlagTerminal,
    app: &mut App,
    mut executor: Executor<G>,
    mut events: mpsc::UnboundedReceiver<AppEvent>,
) -> Result<(), QuizError> {
    loop {
        executor.run_pending(app.game_mut());
        while let Ok(event) = events.try_recv() {
            apply_event(app.game_mut(), event);
            executor.run_pending(app.game_mut());
        }
        app.sync_selection();

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_input(app, key.code);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        app.should_quit = true;
        return;
    }

    match app.game().phase() {
        GamePhase::Playing => handle_playing_input(app, key),
        GamePhase::Answered => handle_answered_input(app, key),
        GamePhase::Finished => handle_finished_input(app, key),
    }
}

fn handle_playing_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char('h') | KeyCode::Char('H') => app.game_mut().request_hint(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.choose_option(index);
        }
        _ => {}
    }
}

fn handle_answered_input(app: &mut App, key: KeyCode) {
    if matches!(
        key,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char('N')
    ) {
        app.game_mut().next_question();
    }
}

fn handle_finished_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter) {
        app.game_mut().restart();
    }
}
