//! Saveable trait for the structures kept on disk
//!
//! Each persisted structure names its own file and gets a chance to repair
//! itself after loading. `SaveManager` does the rest generically.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A JSON document the game keeps between runs
///
/// # Example
///
/// ```ignore
/// impl Saveable for GameStats {
///     const FILE_NAME: &'static str = "panda_stats.json";
/// }
///
/// let (stats, _existed) = save_manager.load_or_default::<GameStats>();
/// ```
pub trait Saveable: Serialize + DeserializeOwned + Default {
    /// File name inside the save directory
    const FILE_NAME: &'static str;

    /// Fix up values that deserialized fine but make no sense
    fn after_load(&mut self) {}
}
