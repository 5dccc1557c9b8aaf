//! One playthrough as a pure state machine
//!
//! `Round` owns the secret word, the letter board and the wrong-guess counter. It never touches
//! the terminal, so every transition can be tested directly.

use super::input::GuessError;
use crate::core::{
    BodyPart, LetterBoard, MAX_INCORRECT_GUESSES, SecretWord, contains, is_word_guessed, mask,
};

/// Where the playthrough stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    Won,
    Lost,
}

/// Result of a single accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The letter occurs in the secret word
    Hit { letter: char },
    /// The letter is absent; `part` is the suit piece to narrate, `None` once the round is lost
    Miss {
        letter: char,
        part: Option<BodyPart>,
    },
}

impl TurnOutcome {
    /// The guessed letter
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hit { letter } | Self::Miss { letter, .. } => letter,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    secret: SecretWord,
    letters: LetterBoard,
    incorrect: usize,
    phase: Phase,
}

impl Round {
    /// Start a playthrough: no letters guessed, no wrong guesses
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            letters: LetterBoard::new(),
            incorrect: 0,
            phase: Phase::AwaitingGuess,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterBoard {
        &self.letters
    }

    /// Wrong guesses so far, at most [`MAX_INCORRECT_GUESSES`]
    #[must_use]
    pub const fn incorrect(&self) -> usize {
        self.incorrect
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != Phase::AwaitingGuess
    }

    /// Secret word with unguessed letters hidden
    #[must_use]
    pub fn mask(&self) -> String {
        mask(self.secret.text(), self.letters.guessed())
    }

    /// Record a guess and advance the state machine
    ///
    /// A hit never counts against the player, so a single guess cannot both win and lose.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::Duplicate` or `GuessError::Malformed` if the letter cannot be
    /// recorded, and `GuessError::RoundOver` once the round has ended. State is unchanged on
    /// error.
    pub fn apply_guess(&mut self, letter: char) -> Result<TurnOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::RoundOver);
        }

        self.letters.record(letter)?;

        if contains(letter, self.secret.text()) {
            if is_word_guessed(self.secret.text(), self.letters.guessed()) {
                self.phase = Phase::Won;
            }
            return Ok(TurnOutcome::Hit { letter });
        }

        self.incorrect += 1;
        if self.incorrect >= MAX_INCORRECT_GUESSES {
            self.phase = Phase::Lost;
            return Ok(TurnOutcome::Miss { letter, part: None });
        }

        Ok(TurnOutcome::Miss {
            letter,
            part: BodyPart::for_incorrect_count(self.incorrect),
        })
    }
}
