use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::session::Session;

/// The fixed target sentence the user types against.
pub const REFERENCE_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
     This pangram contains every letter of the alphabet and is commonly used \
     for typing practice.";

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            session: Session::with_idle_timeout(REFERENCE_TEXT, config.idle_timeout()),
            config,
        }
    }

    /// Handles one key event. Returns false when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Tab => self.session.reset(),
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    // ctrl+c to quit
                    if c == 'c' {
                        return false;
                    }
                } else {
                    self.session.type_char(c);
                }
            }
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TypingState;
    use assert_matches::assert_matches;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typed_chars_reach_the_session() {
        let mut app = App::new(Config::default());

        for c in "The q".chars() {
            assert!(app.handle_key(press(KeyCode::Char(c))));
        }

        assert_eq!(app.session.input, "The q");
        assert_eq!(app.session.metrics.correct_chars, 5);
        assert_matches!(app.session.state, TypingState::Typing);
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut app = App::new(Config::default());

        app.handle_key(press(KeyCode::Char('T')));
        app.handle_key(press(KeyCode::Char('x')));
        app.handle_key(press(KeyCode::Backspace));

        assert_eq!(app.session.input, "T");
    }

    #[test]
    fn tab_resets_the_session() {
        let mut app = App::new(Config::default());

        app.handle_key(press(KeyCode::Char('T')));
        assert!(app.handle_key(press(KeyCode::Tab)));

        assert_eq!(app.session.input, "");
        assert_matches!(app.session.state, TypingState::Idle);
        assert_eq!(app.session.metrics.accuracy_percent, 100);
    }

    #[test]
    fn esc_quits() {
        let mut app = App::new(Config::default());
        assert!(!app.handle_key(press(KeyCode::Esc)));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::new(Config::default());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!app.handle_key(key));
    }

    #[test]
    fn other_control_chords_are_ignored() {
        let mut app = App::new(Config::default());
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert!(app.handle_key(key));
        assert_eq!(app.session.input, "");
    }

    #[test]
    fn session_uses_configured_idle_timeout() {
        let config = Config {
            idle_timeout_ms: 750,
            ..Config::default()
        };
        let app = App::new(config);

        assert_eq!(
            app.session.idle_timeout,
            std::time::Duration::from_millis(750)
        );
    }
}
