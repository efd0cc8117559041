use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        let command = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Command::ChangeDirection(Direction::Up),
            KeyCode::Right => Command::ChangeDirection(Direction::Right),
            KeyCode::Down => Command::ChangeDirection(Direction::Down),
            KeyCode::Left => Command::ChangeDirection(Direction::Left),

            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                // Movement - WASD
                'w' => Command::ChangeDirection(Direction::Up),
                'd' => Command::ChangeDirection(Direction::Right),
                's' => Command::ChangeDirection(Direction::Down),
                'a' => Command::ChangeDirection(Direction::Left),

                'p' => Command::TogglePause,
                'h' => Command::EnableHardMode,
                'n' => Command::ShrinkCheat,
                'r' => Command::Restart,
                'q' => return KeyAction::Quit,
                _ => return KeyAction::None,
            },

            KeyCode::Esc => return KeyAction::Quit,
            _ => return KeyAction::None,
        };

        KeyAction::Command(command)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(handler: &InputHandler, code: KeyCode) -> KeyAction {
        handler.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Up),
            KeyAction::Command(Command::ChangeDirection(Direction::Up))
        );
        assert_eq!(
            press(&handler, KeyCode::Down),
            KeyAction::Command(Command::ChangeDirection(Direction::Down))
        );
        assert_eq!(
            press(&handler, KeyCode::Left),
            KeyAction::Command(Command::ChangeDirection(Direction::Left))
        );
        assert_eq!(
            press(&handler, KeyCode::Right),
            KeyAction::Command(Command::ChangeDirection(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Char('w')),
            KeyAction::Command(Command::ChangeDirection(Direction::Up))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('a')),
            KeyAction::Command(Command::ChangeDirection(Direction::Left))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('s')),
            KeyAction::Command(Command::ChangeDirection(Direction::Down))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('d')),
            KeyAction::Command(Command::ChangeDirection(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Command(Command::ChangeDirection(Direction::Up))
        );
    }

    #[test]
    fn test_mode_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Char('p')),
            KeyAction::Command(Command::TogglePause)
        );
        assert_eq!(
            press(&handler, KeyCode::Char('h')),
            KeyAction::Command(Command::EnableHardMode)
        );
        assert_eq!(
            press(&handler, KeyCode::Char('n')),
            KeyAction::Command(Command::ShrinkCheat)
        );
        assert_eq!(
            press(&handler, KeyCode::Char('R')),
            KeyAction::Command(Command::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(&handler, KeyCode::Char('Q')), KeyAction::Quit);
        assert_eq!(press(&handler, KeyCode::Esc), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('x')), KeyAction::None);
        assert_eq!(press(&handler, KeyCode::Tab), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
