//! Key mapping from terminal events to observer commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to a command.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(Command::MoveForward)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(Command::MoveBackward)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(Command::TurnLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(Command::TurnRight)
        }
        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn arrow_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Command::MoveForward)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Down)),
            Some(Command::MoveBackward)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Command::TurnLeft)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Right)),
            Some(Command::TurnRight)
        );
    }

    #[test]
    fn wasd_and_vi_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('W'))),
            Some(Command::MoveForward)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(Command::MoveBackward)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(Command::TurnLeft)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('l'))),
            Some(Command::TurnRight)
        );
    }

    #[test]
    fn unmapped_keys() {
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Up)));
    }
}
