use glam::Vec2;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Shift,
    Tab,
    Backspace,
    F8,
    Escape,
}

/// Held movement keys for one frame.
///
/// Opposing keys are not summed: forward wins over backward, left over
/// right, up over down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub boost: bool,
}

impl MovementState {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, _) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// (forward, right, up) direction factors in {-1, 0, 1}
    pub const fn velocity(&self) -> (f32, f32, f32) {
        (
            Self::to_direction(self.forward, self.backward),
            -Self::to_direction(self.left, self.right),
            Self::to_direction(self.up, self.down),
        )
    }
}

/// Input polled once per frame by the host loop
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    pub movement: MovementState,
    /// Cursor displacement since the last poll, in pixels
    pub cursor_delta: Vec2,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Cursor displacement accumulated since the last reset
    fn cursor_delta(&self) -> Vec2;

    /// Collect the current key and cursor state for the camera
    fn poll_input(&self) -> InputSnapshot {
        InputSnapshot {
            movement: MovementState {
                forward: self.is_down(Button::KeyW),
                backward: self.is_down(Button::KeyS),
                left: self.is_down(Button::KeyA),
                right: self.is_down(Button::KeyD),
                up: self.is_down(Button::KeyQ),
                down: self.is_down(Button::KeyE),
                boost: self.is_down(Button::Shift),
            },
            cursor_delta: self.cursor_delta(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockController {
        pressed: Vec<Button>,
        cursor: Vec2,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }

        fn cursor_delta(&self) -> Vec2 {
            self.cursor
        }
    }

    #[test]
    fn test_forward_wins_over_backward() {
        let movement = MovementState {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(movement.velocity(), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_left_is_negative_right() {
        let left = MovementState {
            left: true,
            right: true,
            ..Default::default()
        };
        let right = MovementState {
            right: true,
            ..Default::default()
        };
        assert_eq!(left.velocity().1, -1.0);
        assert_eq!(right.velocity().1, 1.0);
    }

    #[test]
    fn test_down_only() {
        let movement = MovementState {
            down: true,
            ..Default::default()
        };
        assert_eq!(movement.velocity(), (0.0, 0.0, -1.0));
    }

    #[test]
    fn test_poll_input_maps_keys() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::KeyD, Button::Shift, Button::Tab],
            cursor: Vec2::new(3.0, -2.0),
        };

        let input = controller.poll_input();
        assert!(input.movement.forward);
        assert!(input.movement.right);
        assert!(input.movement.boost);
        assert!(!input.movement.backward);
        assert!(!input.movement.up);
        assert_eq!(input.cursor_delta, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_idle_snapshot() {
        let controller = MockController {
            pressed: vec![],
            cursor: Vec2::ZERO,
        };
        assert_eq!(controller.poll_input(), InputSnapshot::idle());
        assert_eq!(controller.get_down_keys().len(), 0);
    }
}
