//! Mini-activities
//!
//! Each mode owns a small bundle of state and an `update` that takes this
//! frame's actions and reports back through [`ModeEvent`]s. None of them draw
//! anything; drawing lives in `game::rendering`.
//!
//! [`ModeEvent`]: crate::game::ModeEvent

pub mod chase;
pub mod eating;
pub mod fishing;
pub mod focus;
pub mod music;

pub use chase::ChaseGame;
pub use eating::EatingMode;
pub use fishing::FishingGame;
pub use focus::FocusTimer;
pub use music::MusicVisualizer;
