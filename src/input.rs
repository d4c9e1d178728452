//! Held-key input sampling.

use sdl2::keyboard::{KeyboardState, Scancode};

/// Snapshot of the keys the simulation samples each tick.
///
/// Jump and start are held-key tests rather than key-down events, so one
/// snapshot per frame is the whole input surface. The grounded guard in the
/// player is what keeps a held spacebar from double-jumping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Space is held.
    pub jump: bool,
    /// Return is held.
    pub start: bool,
}

impl InputState {
    /// Samples the current SDL keyboard state.
    pub fn sample(keyboard: &KeyboardState) -> Self {
        Self {
            jump: keyboard.is_scancode_pressed(Scancode::Space),
            start: keyboard.is_scancode_pressed(Scancode::Return),
        }
    }

    /// A snapshot with only the jump key held.
    pub fn jump() -> Self {
        Self {
            jump: true,
            start: false,
        }
    }

    /// A snapshot with only the start key held.
    pub fn start() -> Self {
        Self {
            jump: false,
            start: true,
        }
    }
}
