//! Key mapping from terminal events to input intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, InputIntent, SessionStatus};

/// Map a key press to an intent for the given session status.
pub fn map_key(status: SessionStatus, code: KeyCode) -> Option<InputIntent> {
    if let KeyCode::Char('q') | KeyCode::Char('Q') = code {
        return Some(InputIntent::Quit);
    }

    match status {
        SessionStatus::Playing => match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(InputIntent::Direction(Direction::Up))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(InputIntent::Direction(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(InputIntent::Direction(Direction::Left))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(InputIntent::Direction(Direction::Right))
            }
            KeyCode::Esc => Some(InputIntent::MenuBack),
            _ => None,
        },

        SessionStatus::Settings => match code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(InputIntent::MenuUp),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
                Some(InputIntent::MenuDown)
            }
            KeyCode::Left => Some(InputIntent::ChangeSpeed(-1)),
            KeyCode::Right => Some(InputIntent::ChangeSpeed(1)),
            KeyCode::Char('w') | KeyCode::Char('W') => Some(InputIntent::ToggleWonq),
            KeyCode::Enter | KeyCode::Char(' ') => Some(InputIntent::MenuConfirm),
            KeyCode::Esc => Some(InputIntent::MenuBack),
            _ => None,
        },

        SessionStatus::MainMenu | SessionStatus::GameOver => match code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(InputIntent::MenuUp),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
                Some(InputIntent::MenuDown)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(InputIntent::MenuConfirm),
            KeyCode::Esc => Some(InputIntent::MenuBack),
            _ => None,
        },

        SessionStatus::Quitting => None,
    }
}

/// Emergency exit that bypasses the session state machine.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_steer_while_playing() {
        assert_eq!(
            map_key(SessionStatus::Playing, KeyCode::Up),
            Some(InputIntent::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(SessionStatus::Playing, KeyCode::Char('a')),
            Some(InputIntent::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(SessionStatus::Playing, KeyCode::Char('D')),
            Some(InputIntent::Direction(Direction::Right))
        );
    }

    #[test]
    fn test_arrows_navigate_in_menus() {
        assert_eq!(
            map_key(SessionStatus::MainMenu, KeyCode::Up),
            Some(InputIntent::MenuUp)
        );
        assert_eq!(
            map_key(SessionStatus::GameOver, KeyCode::Down),
            Some(InputIntent::MenuDown)
        );
        assert_eq!(
            map_key(SessionStatus::MainMenu, KeyCode::Enter),
            Some(InputIntent::MenuConfirm)
        );
    }

    #[test]
    fn test_settings_keys() {
        assert_eq!(
            map_key(SessionStatus::Settings, KeyCode::Left),
            Some(InputIntent::ChangeSpeed(-1))
        );
        assert_eq!(
            map_key(SessionStatus::Settings, KeyCode::Right),
            Some(InputIntent::ChangeSpeed(1))
        );
        assert_eq!(
            map_key(SessionStatus::Settings, KeyCode::Char('w')),
            Some(InputIntent::ToggleWonq)
        );
        assert_eq!(
            map_key(SessionStatus::Settings, KeyCode::Esc),
            Some(InputIntent::MenuBack)
        );
    }

    #[test]
    fn test_q_quits_in_every_state() {
        for status in [
            SessionStatus::MainMenu,
            SessionStatus::Settings,
            SessionStatus::Playing,
            SessionStatus::GameOver,
        ] {
            assert_eq!(map_key(status, KeyCode::Char('q')), Some(InputIntent::Quit));
        }
    }

    #[test]
    fn test_quitting_maps_nothing() {
        assert_eq!(map_key(SessionStatus::Quitting, KeyCode::Enter), None);
    }

    #[test]
    fn test_should_quit_is_ctrl_c_only() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
