use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use crate::game::Mode;
use crate::modes::fishing::Spot;

/// Actions the player can perform
///
/// Raw SDL2 key presses are translated into these so the mode handlers never
/// see keycodes. Each action corresponds to one key *press*; held-key repeats
/// are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // === Navigation ===
    SelectMode(Mode),
    Back,
    Confirm,

    // === Directional ===
    Up,
    Down,
    Left,
    Right,

    // === Mode actions ===
    /// Space: start, reel, serve, toggle, restart
    Interact,
    Cast(Spot),

    // === System ===
    Quit,
}

/// Input context determines which keys mean what
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Home menu: digits and S pick a mode
    Directory,
    /// Colour profile picker
    Settings,
    /// A/S/D cast instead of picking modes
    Fishing,
    /// Focus timer: adjust and start, plus the post-session shortcuts
    Focus,
    /// Every other activity: arrows and space
    Activity,
}

impl From<Mode> for InputContext {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Directory => InputContext::Directory,
            Mode::Settings => InputContext::Settings,
            Mode::Fishing => InputContext::Fishing,
            Mode::Focus => InputContext::Focus,
            Mode::Relax | Mode::Chase | Mode::Eating | Mode::Music => InputContext::Activity,
        }
    }
}

/// InputSystem processes SDL2 events and produces GameActions
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Directory,
        }
    }

    /// Call before `poll_events` so keys are read in the right context
    pub fn update_context(&mut self, mode: Mode) {
        self.context = InputContext::from(mode);
    }

    /// Drain pending SDL2 events into actions for this frame
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = self.translate_key(key) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }

    /// Map one key press to an action for the current context
    pub fn translate_key(&self, key: Keycode) -> Option<GameAction> {
        if key == Keycode::Escape {
            return Some(GameAction::Back);
        }

        match self.context {
            InputContext::Directory => Self::directory_key(key),
            InputContext::Settings => Self::settings_key(key),
            InputContext::Fishing => Self::fishing_key(key),
            InputContext::Focus => Self::focus_key(key),
            InputContext::Activity => Self::activity_key(key),
        }
    }

    fn directory_key(key: Keycode) -> Option<GameAction> {
        let digit = match key {
            Keycode::Num1 => 1,
            Keycode::Num2 => 2,
            Keycode::Num3 => 3,
            Keycode::Num4 => 4,
            Keycode::Num5 => 5,
            Keycode::Num6 => 6,
            Keycode::S => return Some(GameAction::SelectMode(Mode::Settings)),
            Keycode::Up => return Some(GameAction::Up),
            Keycode::Down => return Some(GameAction::Down),
            Keycode::Return | Keycode::Space => return Some(GameAction::Confirm),
            _ => return None,
        };
        Mode::from_digit(digit).map(GameAction::SelectMode)
    }

    fn settings_key(key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Left => Some(GameAction::Left),
            Keycode::Right => Some(GameAction::Right),
            _ => None,
        }
    }

    fn fishing_key(key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::A => Some(GameAction::Cast(Spot::Left)),
            Keycode::S => Some(GameAction::Cast(Spot::Middle)),
            Keycode::D => Some(GameAction::Cast(Spot::Right)),
            Keycode::Space => Some(GameAction::Interact),
            _ => None,
        }
    }

    fn activity_key(key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Up => Some(GameAction::Up),
            Keycode::Down => Some(GameAction::Down),
            Keycode::Left => Some(GameAction::Left),
            Keycode::Right => Some(GameAction::Right),
            Keycode::Space => Some(GameAction::Interact),
            _ => None,
        }
    }

    fn focus_key(key: Keycode) -> Option<GameAction> {
        match key {
            // Shortcuts offered on the "great job" screen
            Keycode::Num3 => Some(GameAction::SelectMode(Mode::Fishing)),
            Keycode::Num4 => Some(GameAction::SelectMode(Mode::Chase)),
            other => Self::activity_key(other),
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Directory);
    }

    #[test]
    fn test_context_follows_mode() {
        let mut input = InputSystem::new();

        input.update_context(Mode::Fishing);
        assert_eq!(input.context, InputContext::Fishing);

        input.update_context(Mode::Chase);
        assert_eq!(input.context, InputContext::Activity);

        input.update_context(Mode::Settings);
        assert_eq!(input.context, InputContext::Settings);
    }

    #[test]
    fn test_escape_is_back_everywhere() {
        let mut input = InputSystem::new();
        for mode in [Mode::Directory, Mode::Settings, Mode::Fishing, Mode::Music] {
            input.update_context(mode);
            assert_eq!(input.translate_key(Keycode::Escape), Some(GameAction::Back));
        }
    }

    #[test]
    fn test_directory_keys() {
        let input = InputSystem::new();
        assert_eq!(
            input.translate_key(Keycode::Num3),
            Some(GameAction::SelectMode(Mode::Fishing))
        );
        assert_eq!(
            input.translate_key(Keycode::S),
            Some(GameAction::SelectMode(Mode::Settings))
        );
        assert_eq!(input.translate_key(Keycode::Return), Some(GameAction::Confirm));
        assert_eq!(input.translate_key(Keycode::Num9), None);
    }

    #[test]
    fn test_s_casts_while_fishing() {
        let mut input = InputSystem::new();
        input.update_context(Mode::Fishing);
        assert_eq!(
            input.translate_key(Keycode::S),
            Some(GameAction::Cast(Spot::Middle))
        );
        assert_eq!(input.translate_key(Keycode::Space), Some(GameAction::Interact));
    }

    #[test]
    fn test_digits_only_jump_from_focus() {
        let mut input = InputSystem::new();
        for mode in [Mode::Relax, Mode::Chase, Mode::Eating, Mode::Music] {
            input.update_context(mode);
            assert_eq!(input.context, InputContext::Activity);
            assert_eq!(input.translate_key(Keycode::Num3), None, "{mode:?}");
            assert_eq!(input.translate_key(Keycode::Num4), None, "{mode:?}");
            assert_eq!(input.translate_key(Keycode::Space), Some(GameAction::Interact));
        }
    }

    #[test]
    fn test_focus_keys() {
        let mut input = InputSystem::new();
        input.update_context(Mode::Focus);
        assert_eq!(input.context, InputContext::Focus);
        assert_eq!(
            input.translate_key(Keycode::Num3),
            Some(GameAction::SelectMode(Mode::Fishing))
        );
        assert_eq!(input.translate_key(Keycode::Up), Some(GameAction::Up));
        assert_eq!(
            input.translate_key(Keycode::Num4),
            Some(GameAction::SelectMode(Mode::Chase))
        );
        assert_eq!(input.translate_key(Keycode::Num1), None);
    }
}
