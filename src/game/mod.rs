//! Quiz rules: question generation, countdown and the session state machine.

pub mod generator;
mod state;
mod timer;

pub use state::{Command, DetailsState, Game, HintState};
pub use timer::{Countdown, TickOutcome};
