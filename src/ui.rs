//! Overlay messages and HUD readouts
//!
//! Pure decisions about what the page should show; the DOM writes happen in
//! the web entry point.

use crate::sim::{GamePhase, GameState};

/// End-of-game message panel contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub text: &'static str,
    /// Style class added to the panel (`lose` / `win`)
    pub class: &'static str,
}

/// Panel contents for a phase (None hides the panel)
pub fn message_for(phase: GamePhase) -> Option<Message> {
    match phase {
        GamePhase::GameOver => Some(Message {
            text: "Game Over",
            class: "lose",
        }),
        GamePhase::Win => Some(Message {
            text: "You Win!",
            class: "win",
        }),
        GamePhase::Waiting | GamePhase::Playing => None,
    }
}

/// Values that changed since the last update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HudUpdate {
    pub score: Option<u64>,
    pub lives: Option<u8>,
}

impl HudUpdate {
    pub fn is_empty(&self) -> bool {
        self.score.is_none() && self.lives.is_none()
    }
}

/// Remembers what the score/lives readouts currently display
#[derive(Debug, Clone, Default)]
pub struct HudReadout {
    score: Option<u64>,
    lives: Option<u8>,
}

impl HudReadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare against the state; report (and remember) only what changed.
    /// The first call reports both values.
    pub fn update(&mut self, state: &GameState) -> HudUpdate {
        let mut update = HudUpdate::default();
        if self.score != Some(state.score) {
            self.score = Some(state.score);
            update.score = Some(state.score);
        }
        if self.lives != Some(state.lives) {
            self.lives = Some(state.lives);
            update.lives = Some(state.lives);
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    #[test]
    fn test_messages() {
        assert_eq!(message_for(GamePhase::GameOver).unwrap().class, "lose");
        assert_eq!(message_for(GamePhase::Win).unwrap().text, "You Win!");
        assert!(message_for(GamePhase::Waiting).is_none());
        assert!(message_for(GamePhase::Playing).is_none());
    }

    #[test]
    fn test_hud_reports_changes_only() {
        let mut state = GameState::new(Tuning::default(), 1);
        let mut hud = HudReadout::new();

        assert_eq!(
            hud.update(&state),
            HudUpdate {
                score: Some(0),
                lives: Some(3)
            }
        );
        assert!(hud.update(&state).is_empty());

        state.score = 4;
        assert_eq!(
            hud.update(&state),
            HudUpdate {
                score: Some(4),
                lives: None
            }
        );

        state.lives = 2;
        assert_eq!(hud.update(&state).lives, Some(2));
        assert!(hud.update(&state).is_empty());
    }
}
