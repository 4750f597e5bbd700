//! HUD Components
//!
//! Stateless, procedurally drawn widgets that sit on top of a scene.
//!
//! - [`ProgressBar`] - horizontal fill bar (reel, chew meter, countdown)

pub mod progress_bar;

pub use progress_bar::{ProgressBar, ProgressBarStyle};
