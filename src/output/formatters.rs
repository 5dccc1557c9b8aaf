//! Formatting utilities for terminal output

use crate::core::MAX_INCORRECT_GUESSES;

/// Width of a divider row
const DIVIDER_WIDTH: usize = 100;

/// Two rows of asterisks padded by blank lines, printed between turns
#[must_use]
pub fn divider() -> String {
    let row = "*".repeat(DIVIDER_WIDTH);
    format!("\n{row}\n{row}\n")
}

/// Guesses left before the Spaceman is lost
#[must_use]
pub const fn guesses_left(incorrect: usize) -> usize {
    MAX_INCORRECT_GUESSES.saturating_sub(incorrect)
}

/// "You have N guesses remaining." with the singular form at exactly one
#[must_use]
pub fn remaining_guesses_line(incorrect: usize) -> String {
    let left = guesses_left(incorrect);
    let noun = if left == 1 { "guess" } else { "guesses" };
    format!("You have {left} {noun} remaining.")
}

/// Secret word as shown when it is revealed
#[must_use]
pub fn reveal(word: &str) -> String {
    word.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divider_has_two_full_rows() {
        let binding = divider();
        let rows: Vec<&str> = binding.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 100 && r.chars().all(|c| c == '*')));
    }

    #[test]
    fn remaining_plural() {
        assert_eq!(remaining_guesses_line(0), "You have 7 guesses remaining.");
        assert_eq!(remaining_guesses_line(5), "You have 2 guesses remaining.");
    }

    #[test]
    fn remaining_singular_at_one() {
        assert_eq!(remaining_guesses_line(6), "You have 1 guess remaining.");
    }

    #[test]
    fn guesses_left_never_underflows() {
        assert_eq!(guesses_left(7), 0);
        assert_eq!(guesses_left(9), 0);
    }

    #[test]
    fn reveal_uppercases() {
        assert_eq!(reveal("comet"), "COMET");
    }
}
