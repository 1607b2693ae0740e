// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,
    Attack,

    // Meta actions
    Pause,
    Menu,
    Confirm,
    ToggleSound,
    Quit,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (arrow keys, Z to attack, Space to jump)
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::Space, Action::Jump),
        (KeyCode::KeyZ, Action::Attack),
        // Meta
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Menu),
        (KeyCode::Enter, Action::Confirm),
        (KeyCode::KeyM, Action::ToggleSound),
        (KeyCode::KeyQ, Action::Quit),
    ]
}
