// Input manager - tracks held and just-pressed actions across frames

use std::collections::{HashMap, HashSet};

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::action::{default_bindings, Action};

/// Per-tick input snapshot consumed by the simulation.
///
/// Movement fields report held state; everything else reports an edge
/// (pressed since the previous tick).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub attack: bool,
    pub jump: bool,
    pub pause: bool,
    pub menu: bool,
    pub confirm: bool,
    pub toggle_sound: bool,
    pub quit: bool,
}

/// Main input manager coordinating keyboard input
pub struct InputManager {
    /// Key to action mapping
    bindings: HashMap<KeyCode, Action>,

    /// Actions currently held down
    held: HashSet<Action>,

    /// Actions pressed since the last end_frame
    just_pressed: HashSet<Action>,
}

impl InputManager {
    /// Create a new input manager with the default bindings
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            held: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let Some(&action) = self.bindings.get(&key_code) else {
                return;
            };

            match event.state {
                ElementState::Pressed => {
                    if !event.repeat {
                        // Only register if not a key repeat
                        self.press(action);
                    }
                }
                ElementState::Released => {
                    self.release(action);
                }
            }
        }
    }

    /// Register an action press directly (tests and non-keyboard sources)
    pub fn press(&mut self, action: Action) {
        if self.held.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release directly
    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was pressed since the last end_frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Build the input snapshot for the current tick
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            left: self.is_held(Action::MoveLeft),
            right: self.is_held(Action::MoveRight),
            attack: self.is_held(Action::Attack),
            jump: self.just_pressed(Action::Jump),
            pause: self.just_pressed(Action::Pause),
            menu: self.just_pressed(Action::Menu),
            confirm: self.just_pressed(Action::Confirm),
            toggle_sound: self.just_pressed(Action::ToggleSound),
            quit: self.just_pressed(Action::Quit),
        }
    }

    /// Clear edge state. Call once after each simulation tick so an edge
    /// is observed by exactly one tick.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.held.clear();
        self.just_pressed.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_held_and_edge() {
        let mut input = InputManager::new();
        input.press(Action::MoveLeft);

        assert!(input.is_held(Action::MoveLeft));
        assert!(input.just_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_end_frame_clears_edge_not_held() {
        let mut input = InputManager::new();
        input.press(Action::Attack);
        input.end_frame();

        assert!(input.is_held(Action::Attack));
        assert!(!input.just_pressed(Action::Attack));
    }

    #[test]
    fn test_release_clears_held() {
        let mut input = InputManager::new();
        input.press(Action::Jump);
        input.release(Action::Jump);

        assert!(!input.is_held(Action::Jump));
    }

    #[test]
    fn test_repeated_press_is_single_edge() {
        let mut input = InputManager::new();
        input.press(Action::Jump);
        input.end_frame();

        // Key still held; a second press without a release is not a new edge
        input.press(Action::Jump);
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_frame_input_snapshot() {
        let mut input = InputManager::new();
        input.press(Action::MoveRight);
        input.press(Action::Jump);

        let frame = input.frame_input();
        assert!(frame.right);
        assert!(frame.jump);
        assert!(!frame.left);
        assert!(!frame.attack);

        input.end_frame();
        let frame = input.frame_input();
        assert!(frame.right, "held input survives end_frame");
        assert!(!frame.jump, "edge input does not");
    }

    #[test]
    fn test_reset() {
        let mut input = InputManager::new();
        input.press(Action::MoveLeft);
        input.reset();

        assert!(!input.is_held(Action::MoveLeft));
        assert!(!input.just_pressed(Action::MoveLeft));
    }
}
