mod country;
mod question;

pub use country::Country;
pub use question::Question;

/// Stage of a single quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the player to pick an option.
    Playing,
    /// An option was picked (or the reveal is pending).
    Answered,
    /// Session over; only a restart leaves this phase.
    Finished,
}
