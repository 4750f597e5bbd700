//! Screen-Space GUI System
//!
//! UI elements that render at fixed screen positions, independent of what
//! the active mode is drawing.
//!
//! # Available Components
//!
//! - [`Menu`] - list with a wrapping selection cursor
//! - [`DirectoryMenu`] - the home screen's mode picker
//!
//! # Example Usage
//!
//! ```ignore
//! let mut directory = DirectoryMenu::new();
//!
//! directory.navigate_down();
//! directory.render(&mut canvas, 170, 40)?;
//!
//! let mode = directory.selected_mode();
//! ```

pub mod directory;
pub mod menu;

pub use directory::{DirectoryMenu, contrast};
pub use menu::{Menu, MenuItem, MenuStyle};
