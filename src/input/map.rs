//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map a keyboard event to a game command.
///
/// Bindings: arrows or WASD for movement and drops, `J`/`K` for
/// rotation, space for hold, `P` for pause.
pub fn map_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Command::HardDrop),

        // Rotation
        KeyCode::Char('j' | 'J') => Some(Command::RotateLeft),
        KeyCode::Char('k' | 'K') => Some(Command::RotateRight),

        // Actions
        KeyCode::Char(' ') => Some(Command::Hold),
        KeyCode::Char('p' | 'P') => Some(Command::TogglePause),

        _ => None,
    }
}

/// Whether the key restarts the game (driver-level, works after game
/// over).
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r' | 'R'))
}

/// Whether the key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(Command::MoveRight)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Command::SoftDrop)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(Command::SoftDrop)
        );
    }

    #[test]
    fn drop_and_rotation_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Command::HardDrop)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(Command::HardDrop)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(Command::RotateLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(Command::RotateRight)
        );
    }

    #[test]
    fn action_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::Hold)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(Command::TogglePause)
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn session_keys_stay_out_of_the_command_set() {
        assert!(is_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('r'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('q'))), None);
    }
}
