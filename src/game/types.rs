// Shared enums used by the mode handlers and the game world

/// Which mini-activity is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Directory,
    Relax,
    Focus,
    Fishing,
    Chase,
    Eating,
    Music,
    Settings,
}

impl Mode {
    /// Modes listed in the directory, in menu order
    pub const MENU: [Mode; 7] = [
        Mode::Relax,
        Mode::Focus,
        Mode::Fishing,
        Mode::Chase,
        Mode::Eating,
        Mode::Music,
        Mode::Settings,
    ];

    /// Digit shortcut for the directory (`1`..=`6`)
    pub fn from_digit(digit: u8) -> Option<Mode> {
        match digit {
            1 => Some(Mode::Relax),
            2 => Some(Mode::Focus),
            3 => Some(Mode::Fishing),
            4 => Some(Mode::Chase),
            5 => Some(Mode::Eating),
            6 => Some(Mode::Music),
            _ => None,
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Mode::Directory => "PANDA OS",
            Mode::Relax => "[1] CHILL",
            Mode::Focus => "[2] FOCUS TIMER",
            Mode::Fishing => "[3] FISHING SPOTS",
            Mode::Chase => "[4] PANDA-MAN",
            Mode::Eating => "[5] SNACK TIME",
            Mode::Music => "[6] CHIPTUNES",
            Mode::Settings => "[S] SETTINGS",
        }
    }
}

/// Something a mode handler wants the world to know about.
///
/// Handlers never touch shared state directly; they report what happened and
/// the world applies it to stats and the mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    SwitchMode(Mode),
    FishCaught,
    ChaseWon,
    FocusCompleted { seconds: u64 },
    BambooEaten,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_shortcuts() {
        assert_eq!(Mode::from_digit(1), Some(Mode::Relax));
        assert_eq!(Mode::from_digit(4), Some(Mode::Chase));
        assert_eq!(Mode::from_digit(6), Some(Mode::Music));
        assert_eq!(Mode::from_digit(0), None);
        assert_eq!(Mode::from_digit(7), None);
    }

    #[test]
    fn test_menu_excludes_directory() {
        assert!(!Mode::MENU.contains(&Mode::Directory));
        assert_eq!(Mode::MENU.len(), 7);
    }
}
