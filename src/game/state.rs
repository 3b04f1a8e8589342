//! The quiz state machine.
//!
//! [`Game`] is synchronous. Anything that has to happen later (a countdown
//! tick, a delayed advance, a text service call) is queued as a [`Command`]
//! and answered through one of the `on_*` methods. Each answer carries the
//! round or timer generation it was issued for, and results for an older
//! round are dropped.

use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::config::{ConfigError, GameConfig, GameMode};
use crate::facts::CountryDetails;
use crate::models::{Country, GamePhase, Question};

use super::generator::{build_question, draw_session, pick_country};
use super::timer::{Countdown, TickOutcome};

/// Side effect requested by the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deliver one tick per second tagged with `generation`, replacing any
    /// previous ticker.
    StartTicker { generation: u64 },
    /// Stop the active ticker.
    StopTicker,
    /// Fetch a hint and report it with [`Game::on_hint_loaded`].
    FetchHint { round: u64, country: Country },
    /// Fetch details and report them with [`Game::on_details_loaded`].
    FetchDetails { round: u64, country: Country },
    /// Call [`Game::on_advance_due`] once `delay` has passed.
    ScheduleAdvance { round: u64, delay: Duration },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintState {
    pub used: bool,
    pub text: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsState {
    pub details: Option<CountryDetails>,
    pub loading: bool,
}

#[derive(Debug, Clone)]
enum Progress {
    Classic {
        countries: Vec<Country>,
        current_index: usize,
    },
    Survival {
        question_number: usize,
        hints_remaining: u32,
        previous_code: Option<String>,
    },
}

impl Progress {
    fn fresh(config: &GameConfig, catalog: &[Country], rng: &mut StdRng) -> Self {
        match config.mode {
            GameMode::Classic => Progress::Classic {
                countries: draw_session(catalog, config.questions_per_game, rng),
                current_index: 0,
            },
            GameMode::Survival => Progress::Survival {
                question_number: 1,
                hints_remaining: config.hints_per_game,
                previous_code: None,
            },
        }
    }

    fn next_question(&mut self, config: &GameConfig, catalog: &[Country], rng: &mut StdRng) -> Question {
        let correct = match self {
            Progress::Classic {
                countries,
                current_index,
            } => countries[*current_index].clone(),
            Progress::Survival { previous_code, .. } => {
                let country = pick_country(catalog, previous_code.as_deref(), rng);
                *previous_code = Some(country.code.clone());
                country
            }
        };

        build_question(correct, catalog, config.options_per_question, rng)
    }
}

pub struct Game {
    config: GameConfig,
    catalog: Vec<Country>,
    rng: StdRng,
    session_id: Uuid,
    progress: Progress,
    phase: GamePhase,
    question: Question,
    selected_answer: Option<Country>,
    score: usize,
    round: u64,
    countdown: Countdown,
    hint: HintState,
    details: DetailsState,
    commands: Vec<Command>,
}

impl Game {
    /// Build a game and start its first session.
    ///
    /// Fails if the catalog cannot fill an option set or repeats a code.
    pub fn new(config: GameConfig, catalog: Vec<Country>) -> Result<Self, ConfigError> {
        let mut codes = HashSet::with_capacity(catalog.len());
        if let Some(repeated) = catalog.iter().find(|c| !codes.insert(c.code.as_str())) {
            return Err(ConfigError::DuplicateCode(repeated.code.clone()));
        }
        config.validate(catalog.len())?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut progress = Progress::fresh(&config, &catalog, &mut rng);
        let question = progress.next_question(&config, &catalog, &mut rng);
        let countdown = Countdown::new(config.seconds_per_question());

        let mut game = Self {
            config,
            catalog,
            rng,
            session_id: Uuid::new_v4(),
            progress,
            phase: GamePhase::Playing,
            question: question.clone(),
            selected_answer: None,
            score: 0,
            round: 0,
            countdown,
            hint: HintState::default(),
            details: DetailsState::default(),
            commands: Vec::new(),
        };
        game.log_session_start();
        game.enter_round(question);
        Ok(game)
    }

    /// Reset score and counters and deal the first question.
    pub fn start_session(&mut self) {
        self.session_id = Uuid::new_v4();
        self.score = 0;
        self.progress = Progress::fresh(&self.config, &self.catalog, &mut self.rng);
        self.log_session_start();

        let question = self.new_question();
        self.enter_round(question);
    }

    /// Start over, but only once the current session is finished.
    pub fn restart(&mut self) {
        if self.phase != GamePhase::Finished {
            log::debug!("Ignoring restart while {:?}", self.phase);
            return;
        }
        self.start_session();
    }

    pub fn submit_answer(&mut self, selected: &Country) {
        if self.phase != GamePhase::Playing {
            log::debug!("Ignoring answer {} while {:?}", selected.code, self.phase);
            return;
        }

        let correct = self.question.is_correct(selected);
        self.selected_answer = Some(selected.clone());
        self.phase = GamePhase::Answered;
        if correct {
            self.score += 1;
        }
        log::info!(
            "[{}] round {}: answered {} (expected {}), correct={}, score={}",
            self.session_id,
            self.round,
            selected.code,
            self.question.correct_answer.code,
            correct,
            self.score
        );

        match self.config.mode {
            GameMode::Classic => self.commands.push(Command::ScheduleAdvance {
                round: self.round,
                delay: self.config.reveal_delay,
            }),
            GameMode::Survival => {
                self.countdown.cancel();
                self.commands.push(Command::StopTicker);

                if correct {
                    self.details.loading = true;
                    self.commands.push(Command::FetchDetails {
                        round: self.round,
                        country: self.question.correct_answer.clone(),
                    });
                } else {
                    self.commands.push(Command::ScheduleAdvance {
                        round: self.round,
                        delay: self.config.game_over_delay,
                    });
                }
            }
        }
    }

    /// Move on after a correct survival answer.
    pub fn next_question(&mut self) {
        if self.phase != GamePhase::Answered || self.last_answer_correct() != Some(true) {
            log::debug!("Ignoring next question while {:?}", self.phase);
            return;
        }

        let Progress::Survival { question_number, .. } = &mut self.progress else {
            return;
        };
        *question_number += 1;

        let question = self.new_question();
        self.enter_round(question);
    }

    pub fn request_hint(&mut self) {
        let Progress::Survival { hints_remaining, .. } = &mut self.progress else {
            return;
        };

        if self.phase != GamePhase::Playing
            || *hints_remaining == 0
            || self.hint.used
            || self.hint.loading
        {
            log::debug!("Hint request ignored ({} left)", hints_remaining);
            return;
        }

        *hints_remaining -= 1;
        self.hint.used = true;
        self.hint.loading = true;
        self.countdown.pause();
        self.commands.push(Command::FetchHint {
            round: self.round,
            country: self.question.correct_answer.clone(),
        });
    }

    pub fn on_tick(&mut self, generation: u64) {
        if self.phase != GamePhase::Playing {
            return;
        }

        match self.countdown.tick(generation) {
            TickOutcome::Ignored => {}
            TickOutcome::Running(left) => log::trace!("round {}: {}s left", self.round, left),
            TickOutcome::Expired => {
                log::info!("[{}] round {}: time is up", self.session_id, self.round);
                self.commands.push(Command::StopTicker);
                self.finish();
            }
        }
    }

    /// Apply a hint result. The countdown resumes whatever the text is.
    pub fn on_hint_loaded(&mut self, round: u64, text: String) {
        if round != self.round {
            log::debug!("Dropping hint for stale round {}", round);
            return;
        }

        self.hint.text = Some(text);
        self.hint.loading = false;
        self.countdown.resume();
    }

    pub fn on_details_loaded(&mut self, round: u64, details: CountryDetails) {
        if round != self.round {
            log::debug!("Dropping details for stale round {}", round);
            return;
        }

        self.details = DetailsState {
            details: Some(details),
            loading: false,
        };
    }

    /// Delayed follow-up of an answer: next classic question or game over.
    pub fn on_advance_due(&mut self, round: u64) {
        if round != self.round || self.phase != GamePhase::Answered {
            return;
        }

        let has_more = match &mut self.progress {
            Progress::Classic {
                countries,
                current_index,
            } if *current_index + 1 < countries.len() => {
                *current_index += 1;
                true
            }
            _ => false,
        };

        if has_more {
            let question = self.new_question();
            self.enter_round(question);
        } else {
            self.finish();
        }
    }

    /// Take the commands queued since the last call.
    pub fn drain_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn selected_answer(&self) -> Option<&Country> {
        self.selected_answer.as_ref()
    }

    /// `None` until an answer is selected for the current question.
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.selected_answer
            .as_ref()
            .map(|selected| self.question.is_correct(selected))
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        match &self.progress {
            Progress::Classic { current_index, .. } => current_index + 1,
            Progress::Survival { question_number, .. } => *question_number,
        }
    }

    /// Length of a classic session; survival has no limit.
    pub fn total_questions(&self) -> Option<usize> {
        match &self.progress {
            Progress::Classic { countries, .. } => Some(countries.len()),
            Progress::Survival { .. } => None,
        }
    }

    pub fn hints_remaining(&self) -> Option<u32> {
        match &self.progress {
            Progress::Survival {
                hints_remaining, ..
            } => Some(*hints_remaining),
            Progress::Classic { .. } => None,
        }
    }

    /// Seconds left on the countdown in survival mode.
    pub fn time_left(&self) -> Option<u32> {
        (self.config.mode == GameMode::Survival).then(|| self.countdown.remaining())
    }

    pub fn time_limit(&self) -> u32 {
        self.countdown.duration()
    }

    pub fn is_timer_paused(&self) -> bool {
        self.countdown.is_paused()
    }

    pub fn hint(&self) -> &HintState {
        &self.hint
    }

    pub fn details(&self) -> &DetailsState {
        &self.details
    }

    fn new_question(&mut self) -> Question {
        self.progress
            .next_question(&self.config, &self.catalog, &mut self.rng)
    }

    fn enter_round(&mut self, question: Question) {
        self.round += 1;
        self.question = question;
        self.selected_answer = None;
        self.hint = HintState::default();
        self.details = DetailsState::default();
        self.phase = GamePhase::Playing;

        if self.config.mode == GameMode::Survival {
            let generation = self.countdown.start();
            self.commands.push(Command::StartTicker { generation });
        }

        log::debug!(
            "[{}] round {}: question {} is {}",
            self.session_id,
            self.round,
            self.question_number(),
            self.question.correct_answer.code
        );
    }

    fn finish(&mut self) {
        self.countdown.cancel();
        self.phase = GamePhase::Finished;
        log::info!(
            "[{}] session finished with score {} after {} question(s)",
            self.session_id,
            self.score,
            self.question_number()
        );
    }

    fn log_session_start(&self) {
        log::info!("[{}] new {:?} session", self.session_id, self.config.mode);
    }
}
