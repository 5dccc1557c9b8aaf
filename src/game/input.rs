//! Parsing of player input
//!
//! Guesses and replay answers arrive as raw terminal lines; these helpers decide whether a line
//! is usable and, if not, why.

use crate::core::{LetterBoard, LetterError};
use std::fmt;

/// Why a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Not exactly one letter
    Malformed,
    /// The letter was already guessed this playthrough
    Duplicate(char),
    /// The playthrough has already been won or lost
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "Guess must be a single letter"),
            Self::Duplicate(c) => write!(f, "Letter '{c}' was already guessed"),
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<LetterError> for GuessError {
    fn from(err: LetterError) -> Self {
        match err {
            LetterError::AlreadyGuessed(c) => Self::Duplicate(c),
            LetterError::NotInAlphabet(_) => Self::Malformed,
        }
    }
}

/// Validate a guess line against the letters already played
///
/// The line is trimmed and lowercased first, so `" C\n"` is the guess `c`.
///
/// # Errors
///
/// Returns `GuessError::Duplicate` for a repeated letter and `GuessError::Malformed` for
/// anything that is not a single ASCII letter.
///
/// # Examples
/// ```
/// use spaceman::core::LetterBoard;
/// use spaceman::game::{GuessError, parse_guess};
///
/// let board = LetterBoard::new();
/// assert_eq!(parse_guess("Q\n", &board), Ok('q'));
/// assert_eq!(parse_guess("qu", &board), Err(GuessError::Malformed));
/// ```
pub fn parse_guess(line: &str, letters: &LetterBoard) -> Result<char, GuessError> {
    let normalized = line.trim().to_lowercase();
    let mut chars = normalized.chars();

    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(GuessError::Malformed);
    };

    if letters.is_guessed(letter) {
        return Err(GuessError::Duplicate(letter));
    }

    if !letter.is_ascii_lowercase() {
        return Err(GuessError::Malformed);
    }

    Ok(letter)
}

/// Interpret a play-again answer
///
/// Returns `Some(true)` for yes, `Some(false)` for no and `None` for anything else.
#[must_use]
pub fn parse_replay(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
