use crate::game::Game;
use crate::models::{Country, GamePhase};

/// The game plus what the terminal front-end needs on top of it.
pub struct App {
    game: Game,
    selected_option: usize,
    seen_round: u64,
    pub should_quit: bool,
}

impl App {
    pub fn new(game: Game) -> Self {
        let seen_round = game.round();
        Self {
            game,
            selected_option: 0,
            seen_round,
            should_quit: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    fn num_options(&self) -> usize {
        self.game.question().options.len()
    }

    pub fn select_next_option(&mut self) {
        if self.game.phase() == GamePhase::Playing {
            self.selected_option = (self.selected_option + 1) % self.num_options();
        }
    }

    pub fn select_previous_option(&mut self) {
        if self.game.phase() == GamePhase::Playing {
            let n = self.num_options();
            self.selected_option = (self.selected_option + n - 1) % n;
        }
    }

    /// Move the cursor to `index` and answer with that option.
    pub fn choose_option(&mut self, index: usize) {
        if index < self.num_options() && self.game.phase() == GamePhase::Playing {
            self.selected_option = index;
            self.submit_answer();
        }
    }

    pub fn submit_answer(&mut self) {
        let selected: Option<Country> = self
            .game
            .question()
            .options
            .get(self.selected_option)
            .cloned();
        if let Some(country) = selected {
            self.game.submit_answer(&country);
        }
    }

    /// Reset the cursor when the game has moved to a new question.
    pub fn sync_selection(&mut self) {
        if self.game.round() != self.seen_round {
            self.seen_round = self.game.round();
            self.selected_option = 0;
        }
    }
}
