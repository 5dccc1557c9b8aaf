//! Guessed letters and the remaining alphabet
//!
//! The two sets are kept together so they can never overlap or drift apart.

use std::fmt;

/// The 26 lowercase letters a player may guess
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Letters guessed so far (in guess order) and the letters still available
///
/// `guessed ∪ remaining` is always the full alphabet and the two never share a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoard {
    guessed: Vec<char>,
    remaining: Vec<char>,
}

/// Why a letter could not be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    /// Not one of the 26 lowercase ASCII letters
    NotInAlphabet(char),
    /// Already guessed this playthrough
    AlreadyGuessed(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInAlphabet(c) => write!(f, "'{c}' is not a lowercase letter"),
            Self::AlreadyGuessed(c) => write!(f, "'{c}' has already been guessed"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Default for LetterBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterBoard {
    /// Fresh board: nothing guessed, whole alphabet available
    #[must_use]
    pub fn new() -> Self {
        Self {
            guessed: Vec::with_capacity(ALPHABET.len()),
            remaining: ALPHABET.to_vec(),
        }
    }

    /// Move `letter` from the remaining alphabet to the guessed letters
    ///
    /// # Errors
    /// Returns `LetterError::AlreadyGuessed` for a repeat and `LetterError::NotInAlphabet`
    /// for anything that is not a lowercase ASCII letter. The board is unchanged on error.
    pub fn record(&mut self, letter: char) -> Result<(), LetterError> {
        if self.guessed.contains(&letter) {
            return Err(LetterError::AlreadyGuessed(letter));
        }

        let Some(index) = self.remaining.iter().position(|&c| c == letter) else {
            return Err(LetterError::NotInAlphabet(letter));
        };

        self.remaining.remove(index);
        self.guessed.push(letter);
        Ok(())
    }

    /// Has `letter` been guessed already?
    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Guessed letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    /// Letters not yet guessed, in alphabetical order
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[char] {
        &self.remaining
    }

    /// Remaining letters joined into a single string, e.g. `"abdefg..."`
    #[must_use]
    pub fn remaining_string(&self) -> String {
        self.remaining.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partition(board: &LetterBoard) {
        for letter in ALPHABET {
            let in_guessed = board.guessed().contains(&letter);
            let in_remaining = board.remaining().contains(&letter);
            assert!(
                in_guessed ^ in_remaining,
                "'{letter}' must be in exactly one set"
            );
        }
        assert_eq!(board.guessed().len() + board.remaining().len(), 26);
    }

    #[test]
    fn new_board_has_full_alphabet() {
        let board = LetterBoard::new();
        assert!(board.guessed().is_empty());
        assert_eq!(board.remaining_string(), "abcdefghijklmnopqrstuvwxyz");
        assert_partition(&board);
    }

    #[test]
    fn record_moves_letter() {
        let mut board = LetterBoard::new();
        board.record('c').unwrap();
        board.record('a').unwrap();

        assert_eq!(board.guessed(), &['c', 'a']);
        assert!(board.is_guessed('c'));
        assert!(!board.remaining().contains(&'c'));
        assert_eq!(board.remaining_string(), "bdefghijklmnopqrstuvwxyz");
        assert_partition(&board);
    }

    #[test]
    fn record_duplicate_is_rejected_without_change() {
        let mut board = LetterBoard::new();
        board.record('c').unwrap();
        let before = board.clone();

        assert_eq!(board.record('c'), Err(LetterError::AlreadyGuessed('c')));
        assert_eq!(board, before);
    }

    #[test]
    fn record_non_letter_is_rejected() {
        let mut board = LetterBoard::new();
        assert_eq!(board.record('1'), Err(LetterError::NotInAlphabet('1')));
        assert_eq!(board.record('C'), Err(LetterError::NotInAlphabet('C')));
        assert_eq!(board.record('é'), Err(LetterError::NotInAlphabet('é')));
        assert_eq!(board, LetterBoard::new());
    }

    #[test]
    fn partition_holds_after_every_letter() {
        let mut board = LetterBoard::new();
        for letter in ALPHABET.iter().rev() {
            board.record(*letter).unwrap();
            assert_partition(&board);
        }
        assert!(board.remaining().is_empty());
    }
}
