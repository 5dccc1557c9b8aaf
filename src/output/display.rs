//! Game text written to the terminal
//!
//! `Presenter` owns the output stream and the banner renderer. It holds no game state; every
//! method renders exactly what it is given.

use super::banner::{BannerRenderer, BannerStyle, BoxBanner};
use super::formatters::{divider, remaining_guesses_line, reveal};
use crate::core::{BodyPart, MAX_INCORRECT_GUESSES};
use colored::Colorize;
use std::io::{self, Write};

const INTRO_TEXT: &str = "Welcome to Spaceman!";
const ALERT_TEXT: &str = "Uh oh!";
const WIN_TEXT: &str = "You win!";
const LOSE_TEXT: &str = "You lose!";
const FAREWELL_TEXT: &str = "Thank you for playing!";

/// Writes banners, status lines and prompts
pub struct Presenter<W: Write, B: BannerRenderer = BoxBanner> {
    out: W,
    banner: B,
}

impl<W: Write> Presenter<W, BoxBanner> {
    /// Presenter using the default box banners
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self::with_banner(out, BoxBanner)
    }
}

impl<W: Write, B: BannerRenderer> Presenter<W, B> {
    #[must_use]
    pub const fn with_banner(out: W, banner: B) -> Self {
        Self { out, banner }
    }

    /// Consume the presenter and hand back the output stream
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, text: &str, style: BannerStyle) -> io::Result<()> {
        let rendered = self.banner.render(text, style);
        writeln!(self.out, "{rendered}")
    }

    fn divider(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", divider())
    }

    /// Welcome banner and rules, shown once per session
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn intro(&mut self) -> io::Result<()> {
        self.banner(INTRO_TEXT, BannerStyle::Headline)?;
        writeln!(self.out, "The rules of the game are simple...")?;
        writeln!(
            self.out,
            "You have {MAX_INCORRECT_GUESSES} attempts to guess the word correctly."
        )?;
        writeln!(
            self.out,
            "If you fail, the spaceman will be expelled from the air lock."
        )?;
        writeln!(self.out, "Loading secret word....")?;
        self.divider()
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn secret_length(&mut self, letters: usize) -> io::Result<()> {
        writeln!(self.out, "Your secret word has {letters} letters.\n")
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn letter_accepted(&mut self, letter: char) -> io::Result<()> {
        writeln!(
            self.out,
            "You have guessed the letter {}.",
            letter.to_ascii_uppercase()
        )
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn letter_in_word(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "The letter was in the word.".green())
    }

    /// "Uh oh!" alert for a wrong guess
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn incorrect_guess(&mut self) -> io::Result<()> {
        self.banner(ALERT_TEXT, BannerStyle::Alert)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn part_lost(&mut self, part: BodyPart) -> io::Result<()> {
        writeln!(
            self.out,
            "The Spaceman's {} has been sucked out of the airlock!",
            part.name().bright_red()
        )
    }

    /// Guesses left and the letters still available
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn remaining(&mut self, incorrect: usize, available: &str) -> io::Result<()> {
        writeln!(self.out, "{}", remaining_guesses_line(incorrect))?;
        writeln!(
            self.out,
            "You have the following letters available to choose from: {available}"
        )
    }

    /// Masked word followed by the turn divider
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn progress(&mut self, masked: &str) -> io::Result<()> {
        writeln!(self.out, "{}", masked.bold())?;
        self.divider()
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn win(&mut self, word: &str) -> io::Result<()> {
        self.banner(WIN_TEXT, BannerStyle::Headline)?;
        writeln!(
            self.out,
            "The word was {}. The Spaceman is saved!",
            reveal(word).bright_green().bold()
        )?;
        self.divider()
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn loss(&mut self, word: &str) -> io::Result<()> {
        self.banner(LOSE_TEXT, BannerStyle::Headline)?;
        writeln!(
            self.out,
            "The word was {}. Better luck next time. Not for the poor Spaceman, though.",
            reveal(word).bright_red().bold()
        )
    }

    /// End of session banner
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn farewell(&mut self) -> io::Result<()> {
        self.banner(FAREWELL_TEXT, BannerStyle::Headline)
    }

    /// Print a prompt without a newline and flush so it shows before input is read
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the output fails.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }
}
