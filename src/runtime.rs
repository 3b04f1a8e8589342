//! Executes game commands as tokio tasks.
//!
//! Every task reports back through one unbounded channel. The event loop
//! applies those events to the [`Game`] one at a time, so a tick and a user
//! action never interleave.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::facts::{CountryDetails, FactFetcher, TextGenerator};
use crate::game::{Command, Game};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Results of background work, addressed back to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick { generation: u64 },
    HintLoaded { round: u64, text: String },
    DetailsLoaded { round: u64, details: CountryDetails },
    AdvanceDue { round: u64 },
}

pub fn apply_event(game: &mut Game, event: AppEvent) {
    match event {
        AppEvent::Tick { generation } => game.on_tick(generation),
        AppEvent::HintLoaded { round, text } => game.on_hint_loaded(round, text),
        AppEvent::DetailsLoaded { round, details } => game.on_details_loaded(round, details),
        AppEvent::AdvanceDue { round } => game.on_advance_due(round),
    }
}

pub struct Executor<G> {
    fetcher: Arc<FactFetcher<G>>,
    events: mpsc::UnboundedSender<AppEvent>,
    tick_period: Duration,
    ticker: Option<JoinHandle<()>>,
}

impl<G: TextGenerator> Executor<G> {
    pub fn new(
        fetcher: Arc<FactFetcher<G>>,
        events: mpsc::UnboundedSender<AppEvent>,
        tick_period: Duration,
    ) -> Self {
        Self {
            fetcher,
            events,
            tick_period,
            ticker: None,
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::StartTicker { generation } => self.start_ticker(generation),
            Command::StopTicker => self.stop_ticker(),
            Command::FetchHint { round, country } => {
                let fetcher = Arc::clone(&self.fetcher);
                let events = self.events.clone();
                tokio::spawn(async move {
                    let text = fetcher.hint(&country).await;
                    let _ = events.send(AppEvent::HintLoaded { round, text });
                });
            }
            Command::FetchDetails { round, country } => {
                let fetcher = Arc::clone(&self.fetcher);
                let events = self.events.clone();
                tokio::spawn(async move {
                    let details = fetcher.details(&country).await;
                    let _ = events.send(AppEvent::DetailsLoaded { round, details });
                });
            }
            Command::ScheduleAdvance { round, delay } => {
                let events = self.events.clone();
                tokio::spawn(async move {
                    time::sleep(delay).await;
                    let _ = events.send(AppEvent::AdvanceDue { round });
                });
            }
        }
    }

    /// Execute everything the game has queued.
    pub fn run_pending(&mut self, game: &mut Game) {
        for command in game.drain_commands() {
            log::trace!("Executing {:?}", command);
            self.execute(command);
        }
    }

    fn start_ticker(&mut self, generation: u64) {
        self.stop_ticker();

        let events = self.events.clone();
        let period = self.tick_period;
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if events.send(AppEvent::Tick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl<G> Drop for Executor<G> {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
