use std::time::Duration;

// Derived measurements over the reference/input pair. Everything here is a
// total function; empty-input and zero-elapsed cases return defined defaults
// instead of dividing by zero.

/// Number of input positions that match the reference at the same index.
/// Positions past the end of the reference never count.
pub fn correct_chars(reference: &str, input: &str) -> usize {
    reference
        .chars()
        .zip(input.chars())
        .filter(|(expected, typed)| expected == typed)
        .count()
}

/// Percentage of typed characters that match the reference positionally,
/// rounded to the nearest integer. An empty input counts as 100.
pub fn accuracy_percent(reference: &str, input: &str) -> u8 {
    let typed = input.chars().count();
    if typed == 0 {
        return 100;
    }

    let correct = correct_chars(reference, input);
    ((correct as f64 / typed as f64) * 100.0).round() as u8
}

/// Typed-character count normalized to a one-minute rate. Zero when nothing
/// was typed or no time has elapsed.
pub fn chars_per_minute(typed_chars: usize, elapsed: Duration) -> u64 {
    if typed_chars == 0 {
        return 0;
    }

    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes > 0.0 {
        (typed_chars as f64 / minutes).round() as u64
    } else {
        0
    }
}

/// How far into the reference the input has progressed, as a rounded
/// percentage. Not clamped: an input that overruns the reference reads
/// above 100.
pub fn progress_percent(reference: &str, input: &str) -> u64 {
    let total = reference.chars().count();
    if total == 0 {
        return 0;
    }

    let typed = input.chars().count();
    ((typed as f64 / total as f64) * 100.0).round() as u64
}
