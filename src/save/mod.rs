//! Save/Load system for the settings and stats files
//!
//! - JSON files (human-readable, hand-editable)
//! - Missing or corrupt files fall back to defaults
//! - Stats autosave every 10 seconds
//!
//! # Architecture
//!
//! - `types`: error type
//! - `manager`: SaveManager for file operations
//! - `saveable`: Saveable trait for persisted structures
//!
//! # Example Usage
//!
//! ```ignore
//! let save_manager = SaveManager::new(SaveManager::default_directory())?;
//!
//! let (settings, existed) = save_manager.load_or_default::<AppSettings>();
//! if !existed {
//!     save_manager.save(&settings)?;
//! }
//! ```

pub mod manager;
pub mod saveable;
pub mod types;

pub use manager::SaveManager;
pub use saveable::Saveable;
pub use types::SaveError;
