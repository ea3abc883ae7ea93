//! Keyboard state to per-tick intent
//!
//! Direction keys are level-triggered (held = move). The action key is
//! edge-triggered: one press fires once, however long it is held and however
//! many auto-repeat keydowns the browser sends.

use crate::sim::{GamePhase, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Launch while waiting, restart after the game ends
    Action,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Space" => Some(Key::Action),
            _ => None,
        }
    }
}

/// Raw key state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    action_held: bool,
    action_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Action => {
                if !self.action_held {
                    self.action_pending = true;
                }
                self.action_held = true;
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Action => self.action_held = false,
        }
    }

    /// Release everything (window lost focus, keyups will never arrive)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Sample the intent for one tick, consuming a pending action press.
    ///
    /// The action becomes a launch while waiting and a reset once the game
    /// has ended; a press during play is dropped.
    pub fn intent(&mut self, phase: GamePhase) -> TickInput {
        let action = std::mem::take(&mut self.action_pending);
        TickInput {
            move_left: self.left,
            move_right: self.right,
            launch: action && phase == GamePhase::Waiting,
            reset: action && phase.is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_code("Space"), Some(Key::Action));
        assert_eq!(Key::from_code("KeyQ"), None);
    }

    #[test]
    fn test_directions_are_held() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        assert!(input.intent(GamePhase::Playing).move_left);
        assert!(input.intent(GamePhase::Playing).move_left);
        input.key_up(Key::Left);
        assert!(!input.intent(GamePhase::Playing).move_left);

        input.key_down(Key::Right);
        let intent = input.intent(GamePhase::Waiting);
        assert!(intent.move_right && !intent.move_left);
    }

    #[test]
    fn test_action_fires_once_per_press() {
        let mut input = InputState::new();
        input.key_down(Key::Action);
        // Auto-repeat
        input.key_down(Key::Action);
        input.key_down(Key::Action);

        assert!(input.intent(GamePhase::Waiting).launch);
        assert!(!input.intent(GamePhase::Waiting).launch);

        input.key_up(Key::Action);
        input.key_down(Key::Action);
        assert!(input.intent(GamePhase::Waiting).launch);
    }

    #[test]
    fn test_action_by_phase() {
        let mut input = InputState::new();

        input.key_down(Key::Action);
        let intent = input.intent(GamePhase::GameOver);
        assert!(intent.reset && !intent.launch);
        input.key_up(Key::Action);

        input.key_down(Key::Action);
        let intent = input.intent(GamePhase::Win);
        assert!(intent.reset && !intent.launch);
        input.key_up(Key::Action);

        // Dropped during play, not saved for later
        input.key_down(Key::Action);
        let intent = input.intent(GamePhase::Playing);
        assert!(!intent.reset && !intent.launch);
        assert!(!input.intent(GamePhase::Waiting).launch);
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Action);
        input.clear();
        assert_eq!(input.intent(GamePhase::Waiting), TickInput::default());
    }
}
