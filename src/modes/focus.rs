//! Focus timer
//!
//! Pick a length with Up/Down (5 minute steps), Space to start. The timer
//! runs on wall-clock time, so leaving the mode does not pause it. A gopher
//! wanders in for the last 10% and celebrates when time is up.

use std::time::{Duration, Instant};

use log::info;

use crate::game::{Mode, ModeEvent};
use crate::input_system::GameAction;

pub const DEFAULT_MINUTES: u32 = 25;
pub const MINUTE_STEP: u32 = 5;
pub const MIN_MINUTES: u32 = 5;
pub const MAX_MINUTES: u32 = 180;
/// Remaining fraction at which the gopher shows up
pub const GOPHER_THRESHOLD: f64 = 0.10;
const KISS_STEP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GopherPhase {
    Hidden,
    Approaching,
    Celebrating,
}

#[derive(Debug, Clone)]
pub struct FocusTimer {
    pub target_minutes: u32,
    pub remaining: Duration,
    pub active: bool,
    last_tick: Option<Instant>,
    pub gopher: GopherPhase,
    /// Heart flight from gopher to panda, 0.0..=1.0
    pub kiss_progress: f32,
}

impl FocusTimer {
    pub fn new() -> Self {
        FocusTimer {
            target_minutes: DEFAULT_MINUTES,
            remaining: minutes(DEFAULT_MINUTES),
            active: false,
            last_tick: None,
            gopher: GopherPhase::Hidden,
            kiss_progress: 0.0,
        }
    }

    pub fn target(&self) -> Duration {
        minutes(self.target_minutes)
    }

    /// `(minutes, seconds)` for the clock face
    pub fn clock(&self) -> (u64, u64) {
        let secs = self.remaining.as_secs();
        (secs / 60, secs % 60)
    }

    pub fn update(&mut self, actions: &[GameAction], now: Instant) -> Vec<ModeEvent> {
        let mut events = Vec::new();

        if self.gopher == GopherPhase::Celebrating {
            self.kiss_progress = (self.kiss_progress + KISS_STEP).min(1.0);

            for action in actions {
                match action {
                    GameAction::SelectMode(mode @ (Mode::Fishing | Mode::Chase)) => {
                        self.reset();
                        events.push(ModeEvent::SwitchMode(*mode));
                        break;
                    }
                    GameAction::Interact => {
                        self.reset();
                        break;
                    }
                    _ => {}
                }
            }
            return events;
        }

        if !self.active {
            for action in actions {
                match action {
                    GameAction::Up => {
                        self.target_minutes = (self.target_minutes + MINUTE_STEP).min(MAX_MINUTES);
                    }
                    GameAction::Down => {
                        self.target_minutes = self
                            .target_minutes
                            .saturating_sub(MINUTE_STEP)
                            .max(MIN_MINUTES);
                    }
                    _ => {}
                }
            }
            self.remaining = self.target();

            if actions.contains(&GameAction::Interact) {
                info!("Focus session started ({} min)", self.target_minutes);
                self.active = true;
                self.last_tick = Some(now);
                self.gopher = GopherPhase::Hidden;
                self.kiss_progress = 0.0;
            }
        } else {
            let elapsed = self
                .last_tick
                .map(|last| now.saturating_duration_since(last))
                .unwrap_or_default();
            self.last_tick = Some(now);
            self.remaining = self.remaining.saturating_sub(elapsed);

            let fraction_left = self.remaining.as_secs_f64() / self.target().as_secs_f64();
            if fraction_left <= GOPHER_THRESHOLD {
                self.gopher = GopherPhase::Approaching;
            }

            if self.remaining.is_zero() {
                info!("Focus session complete ({} min)", self.target_minutes);
                self.active = false;
                self.gopher = GopherPhase::Celebrating;
                events.push(ModeEvent::FocusCompleted {
                    seconds: self.target().as_secs(),
                });
            }
        }

        events
    }

    /// Back to the idle, not-yet-started clock
    pub fn reset(&mut self) {
        self.active = false;
        self.last_tick = None;
        self.gopher = GopherPhase::Hidden;
        self.kiss_progress = 0.0;
        self.remaining = self.target();
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

fn minutes(m: u32) -> Duration {
    Duration::from_secs(u64::from(m) * 60)
}
