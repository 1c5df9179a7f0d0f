// Headless integration using the internal runtime + App without a TTY.
// Exercises the keystroke -> metrics -> idle flow via Runner/TestEventSource.

use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use cadence::app::App;
use cadence::config::Config;
use cadence::runtime::{AppEvent, FixedTicker, Runner, TestEventSource};
use cadence::session::TypingState;

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn headless_typing_flow_updates_metrics() {
    let mut app = App::new(Config::default());

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx), FixedTicker::from_millis(5));

    for c in "The quick".chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }

    for _ in 0..100u32 {
        match runner.step() {
            AppEvent::Tick => {
                app.session.poll_idle();
            }
            AppEvent::Resize => {}
            AppEvent::Key(k) => {
                assert!(app.handle_key(k));
            }
        }
        if app.session.input.len() == "The quick".len() {
            break;
        }
    }

    assert_eq!(app.session.input, "The quick");
    assert_eq!(app.session.metrics.correct_chars, 9);
    assert_eq!(app.session.metrics.accuracy_percent, 100);
    assert_eq!(app.session.state, TypingState::Typing);
}

#[test]
fn headless_idle_flow_transitions_exactly_once() {
    // short idle window so the test ticks through it quickly
    let config = Config {
        tick_rate_ms: 5,
        idle_timeout_ms: 30,
    };
    let mut app = App::new(config.clone());

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(config.tick_rate()),
    );

    tx.send(key(KeyCode::Char('T'))).unwrap();

    let mut transitions = 0;
    for _ in 0..60u32 {
        match runner.step() {
            AppEvent::Tick => {
                if app.session.poll_idle() {
                    transitions += 1;
                }
            }
            AppEvent::Resize => {}
            AppEvent::Key(k) => {
                assert!(app.handle_key(k));
            }
        }
    }

    assert_eq!(transitions, 1, "idle should fire exactly once");
    assert_eq!(app.session.state, TypingState::Idle);
    // metrics are untouched by the idle transition
    assert_eq!(app.session.input, "T");
    assert_eq!(app.session.metrics.correct_chars, 1);
}

#[test]
fn headless_reset_flow() {
    let mut app = App::new(Config::default());

    for c in "The qx".chars() {
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
    }
    assert!(app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));

    assert_eq!(app.session.input, "");
    assert_eq!(app.session.state, TypingState::Idle);
    assert_eq!(app.session.metrics.accuracy_percent, 100);
    assert_eq!(app.session.metrics.chars_per_minute, 0);
}

#[test]
fn headless_quit_keys() {
    let mut app = App::new(Config::default());
    assert!(!app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));

    let mut app = App::new(Config::default());
    assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}
