//! Line-based terminal I/O
//!
//! Wraps any `BufRead` so the game can be driven from stdin or from a scripted `Cursor`.

use crate::output::{BannerRenderer, BoxBanner, Presenter};
use std::io::{self, BufRead, Write};

/// Player input paired with the presenter that writes the prompts
pub struct Console<R: BufRead, W: Write, B: BannerRenderer = BoxBanner> {
    input: R,
    presenter: Presenter<W, B>,
}

impl<R: BufRead, W: Write> Console<R, W, BoxBanner> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self::with_presenter(input, Presenter::new(output))
    }
}

impl<R: BufRead, W: Write, B: BannerRenderer> Console<R, W, B> {
    #[must_use]
    pub const fn with_presenter(input: R, presenter: Presenter<W, B>) -> Self {
        Self { input, presenter }
    }

    pub fn presenter(&mut self) -> &mut Presenter<W, B> {
        &mut self.presenter
    }

    /// Show `prompt` and read one line
    ///
    /// Returns `Ok(None)` when the input is closed. Bytes that are not valid UTF-8 are replaced
    /// rather than rejected, so a garbled line reaches the caller as ordinary bad input.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.presenter.prompt(prompt)?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            log::debug!("Input closed while waiting for an answer");
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&raw).trim().to_string()))
    }

    /// Consume the console and hand back the output stream
    #[must_use]
    pub fn into_output(self) -> W {
        self.presenter.into_inner()
    }
}
