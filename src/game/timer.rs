//! Per-question countdown.
//!
//! The countdown only keeps time; the runtime delivers ticks tagged with the
//! generation they were scheduled for. Any tick whose generation is not the
//! current one is ignored, so a new question never inherits an old ticker.

/// Result of delivering one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale generation, paused, or not running.
    Ignored,
    /// One second consumed, this many left.
    Running(u32),
    /// The countdown just hit zero and stopped.
    Expired,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    paused: bool,
    running: bool,
    generation: u64,
}

impl Countdown {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            paused: false,
            running: false,
            generation: 0,
        }
    }

    /// Reset to the full duration and start counting.
    ///
    /// Returns the generation ticks must carry from now on.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.remaining = self.duration;
        self.paused = false;
        self.running = true;
        self.generation
    }

    pub fn pause(&mut self) {
        if self.running {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Stop counting; the remaining time stays visible.
    pub fn cancel(&mut self) {
        self.running = false;
        self.paused = false;
    }

    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation || !self.running || self.paused {
            return TickOutcome::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
