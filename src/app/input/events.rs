//! Key codes and their menu meaning

use crate::ui::NavKey;

/// Keys the demos care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Enter,
    Escape,
    Tab,
    Backquote,

    O,
    P,
    Q,

    // Arrows
    Left,
    Right,
    Up,
    Down,

    // Other
    Other,
}

/// Convert from winit key code
impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as WK;
        match key {
            WK::Enter | WK::NumpadEnter => Self::Enter,
            WK::Escape => Self::Escape,
            WK::Tab => Self::Tab,
            WK::Backquote => Self::Backquote,

            WK::KeyO => Self::O,
            WK::KeyP => Self::P,
            WK::KeyQ => Self::Q,

            WK::ArrowLeft => Self::Left,
            WK::ArrowRight => Self::Right,
            WK::ArrowUp => Self::Up,
            WK::ArrowDown => Self::Down,

            _ => Self::Other,
        }
    }
}

impl KeyCode {
    /// Menu key bound to this key, if any
    pub fn nav_key(self) -> Option<NavKey> {
        match self {
            Self::Escape => Some(NavKey::Escape),
            Self::Enter => Some(NavKey::Enter),
            Self::Tab => Some(NavKey::Tab),
            Self::Up => Some(NavKey::Up),
            Self::Down => Some(NavKey::Down),
            Self::Left => Some(NavKey::Left),
            Self::Right => Some(NavKey::Right),
            Self::O => Some(NavKey::ToggleOptions),
            Self::P => Some(NavKey::TogglePause),
            Self::Q => Some(NavKey::Quit),
            Self::Backquote | Self::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode as WK;

    #[test]
    fn test_both_enter_keys_activate() {
        assert_eq!(KeyCode::from(WK::Enter).nav_key(), Some(NavKey::Enter));
        assert_eq!(KeyCode::from(WK::NumpadEnter).nav_key(), Some(NavKey::Enter));
    }

    #[test]
    fn test_letter_shortcuts() {
        assert_eq!(KeyCode::from(WK::KeyO).nav_key(), Some(NavKey::ToggleOptions));
        assert_eq!(KeyCode::from(WK::KeyP).nav_key(), Some(NavKey::TogglePause));
        assert_eq!(KeyCode::from(WK::KeyQ).nav_key(), Some(NavKey::Quit));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(KeyCode::from(WK::KeyZ), KeyCode::Other);
        assert_eq!(KeyCode::from(WK::Backquote).nav_key(), None);
    }
}
