use std::time::{Duration, Instant};

use tracing::debug;

use crate::metrics;

/// Window after which a run with no further input changes is considered idle.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    Typing,
}

/// Values derived from the input on every change, read by the presentation
/// layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    pub correct_chars: usize,
    pub accuracy_percent: u8,
    pub chars_per_minute: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        // the empty-input readings: nothing typed is 100% accurate
        Self {
            correct_chars: 0,
            accuracy_percent: 100,
            chars_per_minute: 0,
        }
    }
}

/// A typing run against a fixed reference text.
///
/// The session clock starts on the first character of a run and is cleared
/// whenever the input returns to empty. Metrics are recomputed synchronously
/// on every input change, never on a tick.
#[derive(Debug)]
pub struct Session {
    pub reference: String,
    pub input: String,
    pub started_at: Option<Instant>,
    pub last_input_at: Option<Instant>,
    pub state: TypingState,
    pub idle_timeout: Duration,
    pub metrics: Metrics,
}

impl Session {
    pub fn new(reference: impl Into<String>) -> Self {
        Self::with_idle_timeout(reference, DEFAULT_IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(reference: impl Into<String>, idle_timeout: Duration) -> Self {
        Self {
            reference: reference.into(),
            input: String::new(),
            started_at: None,
            last_input_at: None,
            state: TypingState::Idle,
            idle_timeout,
            metrics: Metrics::default(),
        }
    }

    /// Replaces the input wholesale, as a text field reports its contents on
    /// each change.
    pub fn set_input(&mut self, new_text: impl Into<String>) {
        self.input = new_text.into();
        self.on_input_change();
    }

    /// Appends one typed character.
    pub fn type_char(&mut self, c: char) {
        self.input.push(c);
        self.on_input_change();
    }

    /// Removes the last typed character, if any.
    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.on_input_change();
        }
    }

    /// Clears the input and returns the session to its initial readings.
    pub fn reset(&mut self) {
        self.input.clear();
        self.clear_run();
        debug!("session reset");
    }

    /// Called on every runtime tick; flips Typing to Idle once the idle
    /// window has elapsed since the last input change. Returns true when the
    /// transition happened on this call, so the caller can redraw.
    pub fn poll_idle(&mut self) -> bool {
        if self.state != TypingState::Typing {
            return false;
        }

        match self.last_input_at {
            Some(last) if last.elapsed() >= self.idle_timeout => {
                self.state = TypingState::Idle;
                debug!("run went idle");
                true
            }
            _ => false,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.state == TypingState::Typing
    }

    fn on_input_change(&mut self) {
        if self.input.is_empty() {
            self.clear_run();
            return;
        }

        let now = Instant::now();
        let started_at = *self.started_at.get_or_insert(now);
        self.last_input_at = Some(now);
        self.state = TypingState::Typing;

        let typed = self.input.chars().count();
        self.metrics = Metrics {
            correct_chars: metrics::correct_chars(&self.reference, &self.input),
            accuracy_percent: metrics::accuracy_percent(&self.reference, &self.input),
            chars_per_minute: metrics::chars_per_minute(typed, now.duration_since(started_at)),
        };
    }

    fn clear_run(&mut self) {
        self.started_at = None;
        self.last_input_at = None;
        self.state = TypingState::Idle;
        self.metrics = Metrics::default();
    }
}
