//! Multi-round session with a play-again prompt

use super::console::Console;
use super::input::parse_replay;
use super::play::{RoundResult, play_round};
use super::round::Round;
use crate::output::BannerRenderer;
use crate::wordlists::{WordListError, WordSource};
use std::fmt;
use std::io::{self, BufRead, Write};

const REPLAY_PROMPT: &str = "Would you like to play again? (Y/N) > ";
const REPLAY_CORRECTION: &str = "Please enter either Y or N > ";

/// What to do with an unrecognised play-again answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayPolicy {
    /// Re-prompt once, then treat anything unrecognised as "no"
    #[default]
    SingleRetry,
    /// Re-prompt until the answer is recognised
    UntilValid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub replay: ReplayPolicy,
}

/// Tally of the rounds played in one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
}

/// Fatal session failure
#[derive(Debug)]
pub enum SessionError {
    /// No secret word could be produced
    WordList(WordListError),
    /// The terminal could not be read or written
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordList(_) => write!(f, "Could not load a secret word"),
            Self::Io(_) => write!(f, "Terminal I/O failed"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordList(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<WordListError> for SessionError {
    fn from(err: WordListError) -> Self {
        Self::WordList(err)
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Plays rounds back to back until the player declines another
pub struct Session<S, R, W, B>
where
    S: WordSource,
    R: BufRead,
    W: Write,
    B: BannerRenderer,
{
    source: S,
    console: Console<R, W, B>,
    config: SessionConfig,
}

impl<S, R, W, B> Session<S, R, W, B>
where
    S: WordSource,
    R: BufRead,
    W: Write,
    B: BannerRenderer,
{
    #[must_use]
    pub const fn new(source: S, console: Console<R, W, B>, config: SessionConfig) -> Self {
        Self {
            source,
            console,
            config,
        }
    }

    /// Run the session to the end
    ///
    /// The first word is loaded before anything is shown, so a missing or empty word list
    /// fails before the game starts.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WordList` if a secret word cannot be loaded and
    /// `SessionError::Io` if the terminal fails.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let mut secret = self.source.load_word()?;
        let mut summary = SessionSummary::default();

        self.console.presenter().intro()?;

        loop {
            let mut round = Round::new(secret);
            let result = play_round(&mut self.console, &mut round)?;
            log::debug!("Round {} finished: {result:?}", summary.rounds + 1);

            match result {
                RoundResult::Won => summary.wins += 1,
                RoundResult::Lost => summary.losses += 1,
                RoundResult::Abandoned => break,
            }
            summary.rounds += 1;

            if !self.ask_replay()? {
                break;
            }
            secret = self.source.load_word()?;
        }

        self.console.presenter().farewell()?;
        log::info!(
            "Session over: {} rounds, {} won, {} lost",
            summary.rounds,
            summary.wins,
            summary.losses
        );
        Ok(summary)
    }

    /// Ask whether to play again, applying the configured [`ReplayPolicy`]
    fn ask_replay(&mut self) -> io::Result<bool> {
        let Some(answer) = self.console.ask(REPLAY_PROMPT)? else {
            return Ok(false);
        };
        if let Some(again) = parse_replay(&answer) {
            return Ok(again);
        }

        loop {
            let Some(answer) = self.console.ask(REPLAY_CORRECTION)? else {
                return Ok(false);
            };

            match (parse_replay(&answer), self.config.replay) {
                (Some(again), _) => return Ok(again),
                (None, ReplayPolicy::UntilValid) => {}
                (None, ReplayPolicy::SingleRetry) => {
                    log::debug!("Unrecognised replay answer {answer:?}, ending session");
                    return Ok(false);
                }
            }
        }
    }

    /// Consume the session and hand back the output stream
    #[must_use]
    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}
