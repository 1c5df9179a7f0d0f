/// How a single reference position should be presented, given the input so
/// far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Not reached yet.
    Untyped,
    /// The position the next keystroke lands on.
    Cursor,
    /// Typed and matching the reference.
    Correct,
    /// Typed but different from the reference.
    Incorrect,
}

/// Classifies every reference position against the input. Pure function of
/// the two strings; the cursor falls on position `input.chars().count()`
/// while that is still inside the reference, so an input that overran the
/// reference has no cursor.
pub fn classify(reference: &str, input: &str) -> Vec<(char, CharClass)> {
    let input_chars: Vec<char> = input.chars().collect();

    reference
        .chars()
        .enumerate()
        .map(|(i, expected)| {
            let class = match input_chars.get(i) {
                Some(&typed) if typed == expected => CharClass::Correct,
                Some(_) => CharClass::Incorrect,
                None if i == input_chars.len() => CharClass::Cursor,
                None => CharClass::Untyped,
            };
            (expected, class)
        })
        .collect()
}
