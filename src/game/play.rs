//! Interactive playthrough
//!
//! Drives a [`Round`] from terminal input until it is won, lost or the input closes.

use super::console::Console;
use super::input::{GuessError, parse_guess};
use super::round::{Phase, Round, TurnOutcome};
use crate::output::BannerRenderer;
use std::io::{self, BufRead, Write};

const GUESS_PROMPT: &str = "Please enter a single letter: > ";
const DUPLICATE_PROMPT: &str = "You already guessed that letter, try another: ";
const MALFORMED_PROMPT: &str = "Nice try! Enter a single letter:  > ";

/// How a playthrough ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Won,
    Lost,
    /// Input closed before the round finished
    Abandoned,
}

/// Play `round` to completion
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_round<R, W, B>(
    console: &mut Console<R, W, B>,
    round: &mut Round,
) -> io::Result<RoundResult>
where
    R: BufRead,
    W: Write,
    B: BannerRenderer,
{
    console.presenter().secret_length(round.secret().len())?;

    loop {
        match round.phase() {
            Phase::Won => {
                console.presenter().win(round.secret().text())?;
                return Ok(RoundResult::Won);
            }
            Phase::Lost => {
                console.presenter().loss(round.secret().text())?;
                return Ok(RoundResult::Lost);
            }
            Phase::AwaitingGuess => {}
        }

        let Some(outcome) = take_turn(console, round)? else {
            return Ok(RoundResult::Abandoned);
        };
        let letter = outcome.letter();
        log::debug!(
            "Guess '{letter}': {outcome:?}, {} incorrect so far",
            round.incorrect()
        );

        console.presenter().letter_accepted(letter)?;

        let presenter = console.presenter();
        match outcome {
            TurnOutcome::Hit { .. } => presenter.letter_in_word()?,
            TurnOutcome::Miss { part: None, .. } => {
                presenter.incorrect_guess()?;
                continue;
            }
            TurnOutcome::Miss {
                part: Some(part), ..
            } => {
                presenter.incorrect_guess()?;
                presenter.part_lost(part)?;
            }
        }

        presenter.remaining(round.incorrect(), &round.letters().remaining_string())?;
        presenter.progress(&round.mask())?;
    }
}

/// Prompt until the player enters a letter the round accepts, then apply it
///
/// Rejected input never counts as a guess. Returns `Ok(None)` if the input closes.
fn take_turn<R, W, B>(
    console: &mut Console<R, W, B>,
    round: &mut Round,
) -> io::Result<Option<TurnOutcome>>
where
    R: BufRead,
    W: Write,
    B: BannerRenderer,
{
    let mut prompt = GUESS_PROMPT;

    loop {
        let Some(line) = console.ask(prompt)? else {
            return Ok(None);
        };

        match parse_guess(&line, round.letters()).and_then(|letter| round.apply_guess(letter)) {
            Ok(outcome) => return Ok(Some(outcome)),
            Err(GuessError::Duplicate(_)) => prompt = DUPLICATE_PROMPT,
            Err(GuessError::Malformed | GuessError::RoundOver) => prompt = MALFORMED_PROMPT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use std::io::Cursor;

    fn play(word: &str, input: &str) -> (RoundResult, Round, String) {
        play_bytes(word, input.as_bytes())
    }

    fn play_bytes(word: &str, input: &[u8]) -> (RoundResult, Round, String) {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(input.to_vec()), Vec::new());
        let mut round = Round::new(SecretWord::new(word).unwrap());
        let result = play_round(&mut console, &mut round).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, round, output)
    }

    #[test]
    fn winning_round_shows_masks() {
        let (result, round, output) = play("cat", "c\na\nt\n");

        assert_eq!(result, RoundResult::Won);
        assert_eq!(round.incorrect(), 0);
        assert!(output.contains("Your secret word has 3 letters."));
        assert!(output.contains("\nc__\n"));
        assert!(output.contains("\nca_\n"));
        assert!(output.contains("\ncat\n"));
        assert!(output.contains("The word was CAT. The Spaceman is saved!"));
        assert_eq!(output.matches("The letter was in the word.").count(), 3);
    }

    #[test]
    fn losing_round_after_seven_misses() {
        let (result, round, output) = play("dog", "x\ny\nz\nb\nf\nm\nq\n");

        assert_eq!(result, RoundResult::Lost);
        assert_eq!(round.incorrect(), 7);
        assert_eq!(output.matches("Uh oh!").count(), 7);
        assert_eq!(output.matches("sucked out of the airlock").count(), 6);
        assert!(output.contains("You have 1 guess remaining."));
        assert!(output.contains("The word was DOG. Better luck next time."));
        assert!(!output.contains("You have 0"));
    }

    #[test]
    fn duplicate_guess_reprompts() {
        let (result, round, output) = play("cat", "c\nc\na\nt\n");

        assert_eq!(result, RoundResult::Won);
        assert_eq!(round.incorrect(), 0);
        assert_eq!(output.matches(DUPLICATE_PROMPT).count(), 1);
        assert_eq!(output.matches(MALFORMED_PROMPT).count(), 0);
    }

    #[test]
    fn malformed_guess_reprompts() {
        let (result, round, output) = play("cat", "cat\n1\n\nc\na\nt\n");

        assert_eq!(result, RoundResult::Won);
        assert_eq!(round.letters().guessed(), &['c', 'a', 't']);
        assert_eq!(output.matches(MALFORMED_PROMPT).count(), 3);
        assert_eq!(output.matches(DUPLICATE_PROMPT).count(), 0);
    }

    #[test]
    fn non_utf8_guess_reprompts() {
        let (result, round, output) = play_bytes("cat", b"\xe9\nc\na\nt\n");

        assert_eq!(result, RoundResult::Won);
        assert_eq!(round.letters().guessed(), &['c', 'a', 't']);
        assert_eq!(output.matches(MALFORMED_PROMPT).count(), 1);
    }

    #[test]
    fn rejected_guess_is_not_announced() {
        let (_, _, output) = play("cat", "c\nc\n7\na\nt\n");
        assert_eq!(output.matches("You have guessed the letter C.").count(), 1);
        assert!(!output.contains("You have guessed the letter 7."));
    }

    #[test]
    fn remaining_alphabet_shrinks() {
        let (_, _, output) = play("cat", "z\nc\na\nt\n");
        assert!(output.contains("available to choose from: abcdefghijklmnopqrstuvwxy\n"));
        assert!(output.contains("available to choose from: abdefghijklmnopqrstuvwxy\n"));
        assert!(output.contains("You have 6 guesses remaining."));
    }

    #[test]
    fn closed_input_abandons_round() {
        let (result, round, _) = play("cat", "c\n");
        assert_eq!(result, RoundResult::Abandoned);
        assert_eq!(round.phase(), Phase::AwaitingGuess);
    }
}
