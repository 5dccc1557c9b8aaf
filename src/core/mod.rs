//! Core domain types for Spaceman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure and testable; none of them touch the terminal.

mod evaluator;
mod letters;
mod secret;
mod spaceman;

pub use evaluator::{HIDDEN, contains, is_word_guessed, mask};
pub use letters::{ALPHABET, LetterBoard, LetterError};
pub use secret::{SecretWord, SecretWordError};
pub use spaceman::{BODY_PARTS, BodyPart, MAX_INCORRECT_GUESSES};
