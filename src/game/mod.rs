// Game module - Contains the game context and how it is drawn
//
// This module contains:
// - types.rs: Mode and ModeEvent, shared with the mode handlers
// - world.rs: GameWorld struct, per-tick update and persistence
// - rendering.rs: Drawing each mode's scene

// Module declarations
pub mod rendering;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use types::*;
pub use world::GameWorld;
