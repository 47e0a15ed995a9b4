//! Keyboard handling for the flight screen.
//!
//! Terminals report key presses and key repeats, never releases, so a
//! held arrow arrives as a burst of press events. Each press arms a
//! short frame countdown and the control counts as held while any
//! countdown is live; key repeat keeps re-arming it, which reads as a
//! continuous hold.

use crossterm::event::KeyCode;

use crate::game::InputState;

/// Frames a control stays held after a press (~200ms at 60 FPS, which
/// outlasts the key-repeat delay on common terminal setups).
pub const INPUT_HOLD_FRAMES: u32 = 12;

/// Everything a key press can mean on the flight screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightAction {
    RotateLeft,
    RotateRight,
    Thrust,
    Restart,
    Quit,
}

/// Map a key press to a flight action.
pub fn map_key(code: KeyCode) -> Option<FlightAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(FlightAction::RotateLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(FlightAction::RotateRight),
        KeyCode::Up | KeyCode::Char(' ') => Some(FlightAction::Thrust),
        KeyCode::Enter => Some(FlightAction::Restart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(FlightAction::Quit),
        _ => None,
    }
}

/// Synthesizes held-control state from discrete press events.
#[derive(Debug, Default)]
pub struct HeldKeys {
    rotate_left_frames: u32,
    rotate_right_frames: u32,
    thrust_frames: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the hold countdown for a pressed control. Restart and quit
    /// are one-shot and carry no hold state.
    pub fn press(&mut self, action: FlightAction) {
        match action {
            FlightAction::RotateLeft => self.rotate_left_frames = INPUT_HOLD_FRAMES,
            FlightAction::RotateRight => self.rotate_right_frames = INPUT_HOLD_FRAMES,
            FlightAction::Thrust => self.thrust_frames = INPUT_HOLD_FRAMES,
            FlightAction::Restart | FlightAction::Quit => {}
        }
    }

    /// Controls considered held for the upcoming step.
    pub fn state(&self) -> InputState {
        InputState {
            rotate_left: self.rotate_left_frames > 0,
            rotate_right: self.rotate_right_frames > 0,
            thrust: self.thrust_frames > 0,
        }
    }

    /// Run every countdown down one frame.
    pub fn tick(&mut self) {
        self.rotate_left_frames = self.rotate_left_frames.saturating_sub(1);
        self.rotate_right_frames = self.rotate_right_frames.saturating_sub(1);
        self.thrust_frames = self.thrust_frames.saturating_sub(1);
    }

    /// Drop every hold, for the restart boundary.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(KeyCode::Left), Some(FlightAction::RotateLeft));
        assert_eq!(map_key(KeyCode::Char('a')), Some(FlightAction::RotateLeft));
        assert_eq!(map_key(KeyCode::Right), Some(FlightAction::RotateRight));
        assert_eq!(map_key(KeyCode::Char('d')), Some(FlightAction::RotateRight));
        assert_eq!(map_key(KeyCode::Up), Some(FlightAction::Thrust));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(FlightAction::Thrust));
        assert_eq!(map_key(KeyCode::Enter), Some(FlightAction::Restart));
        assert_eq!(map_key(KeyCode::Esc), Some(FlightAction::Quit));
        assert_eq!(map_key(KeyCode::Char('q')), Some(FlightAction::Quit));
        assert_eq!(map_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_press_arms_the_hold() {
        let mut held = HeldKeys::new();
        assert!(!held.state().thrust);

        held.press(FlightAction::Thrust);
        assert!(held.state().thrust);
        assert!(!held.state().rotate_left);
    }

    #[test]
    fn test_hold_decays_after_enough_frames() {
        let mut held = HeldKeys::new();
        held.press(FlightAction::RotateLeft);

        for _ in 0..INPUT_HOLD_FRAMES - 1 {
            held.tick();
            assert!(held.state().rotate_left);
        }
        held.tick();
        assert!(!held.state().rotate_left);
    }

    #[test]
    fn test_repeat_rearms_the_hold() {
        let mut held = HeldKeys::new();
        held.press(FlightAction::Thrust);

        for _ in 0..INPUT_HOLD_FRAMES - 1 {
            held.tick();
        }
        held.press(FlightAction::Thrust);
        for _ in 0..INPUT_HOLD_FRAMES - 1 {
            held.tick();
            assert!(held.state().thrust);
        }
    }

    #[test]
    fn test_one_shot_actions_hold_nothing() {
        let mut held = HeldKeys::new();
        held.press(FlightAction::Restart);
        held.press(FlightAction::Quit);
        assert_eq!(held.state(), InputState::default());
    }

    #[test]
    fn test_clear_drops_all_holds() {
        let mut held = HeldKeys::new();
        held.press(FlightAction::Thrust);
        held.press(FlightAction::RotateRight);

        held.clear();
        assert_eq!(held.state(), InputState::default());
    }
}
