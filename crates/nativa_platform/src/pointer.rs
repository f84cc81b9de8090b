//! Pointer snapshots

/// Lowest valid button index
pub const MIN_BUTTON: i32 = 1;
/// Highest valid button index
pub const MAX_BUTTON: i32 = 5;

/// Mouse buttons, numbered the X11 way
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button (1)
    Left,
    /// Middle mouse button (2)
    Middle,
    /// Right mouse button (3)
    Right,
    /// First extra button (4)
    Back,
    /// Second extra button (5)
    Forward,
}

impl MouseButton {
    /// All buttons in index order
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Middle,
        MouseButton::Right,
        MouseButton::Back,
        MouseButton::Forward,
    ];

    /// Button for a host index; `None` outside 1..=5
    pub fn from_index(index: i32) -> Option<Self> {
        if (MIN_BUTTON..=MAX_BUTTON).contains(&index) {
            Some(Self::ALL[(index - MIN_BUTTON) as usize])
        } else {
            None
        }
    }

    /// Host index of this button
    pub fn index(self) -> i32 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::Back => 4,
            MouseButton::Forward => 5,
        }
    }

    fn bit(self) -> u8 {
        1 << (self.index() - MIN_BUTTON)
    }
}

/// Pointer position and button state read in one native query
///
/// The position is relative to the window's content origin (top-left) and
/// is not clamped: it lies outside the window when the pointer does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointerState {
    /// X position in window coordinates
    pub x: i32,
    /// Y position in window coordinates
    pub y: i32,
    buttons: u8,
}

impl PointerState {
    /// A snapshot at `(x, y)` with no button pressed
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, buttons: 0 }
    }

    /// Mark `button` as pressed or released
    pub fn with_button(mut self, button: MouseButton, pressed: bool) -> Self {
        if pressed {
            self.buttons |= button.bit();
        } else {
            self.buttons &= !button.bit();
        }
        self
    }

    /// Position as a pair
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Whether `button` is held
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.buttons & button.bit() != 0
    }

    /// Whether the button with host index `index` is held
    ///
    /// Indices outside 1..=5 are not an error; they are never pressed.
    pub fn button_down(&self, index: i32) -> bool {
        MouseButton::from_index(index).is_some_and(|button| self.is_pressed(button))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_indices_round_trip() {
        for button in MouseButton::ALL {
            assert_eq!(MouseButton::from_index(button.index()), Some(button));
        }
    }

    #[test]
    fn test_out_of_range_buttons_are_never_down() {
        let all_down = MouseButton::ALL
            .iter()
            .fold(PointerState::new(0, 0), |s, b| s.with_button(*b, true));
        for index in [i32::MIN, -1, 0, 6, 7, 8, 255, i32::MAX] {
            assert!(!all_down.button_down(index), "button {index}");
        }
        for index in MIN_BUTTON..=MAX_BUTTON {
            assert!(all_down.button_down(index));
        }
    }

    #[test]
    fn test_with_button_release() {
        let state = PointerState::new(-5, 900)
            .with_button(MouseButton::Right, true)
            .with_button(MouseButton::Left, true)
            .with_button(MouseButton::Left, false);
        assert!(state.button_down(3));
        assert!(!state.button_down(1));
        assert_eq!(state.position(), (-5, 900));
    }
}
