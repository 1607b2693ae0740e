// Input handling system
//
// Translates winit keyboard events into game actions and exposes a
// per-tick `FrameInput` snapshot for the simulation. Movement inputs
// are level-sensitive (held), session and jump inputs are edge-detected
// (just pressed this tick).

pub mod action;
pub mod manager;

// Re-export commonly used types
pub use action::Action;
pub use manager::{FrameInput, InputManager};
