//! Word list loading and secret word selection
//!
//! A word list is a plain-text resource of whitespace separated words. The embedded default
//! is compiled into the binary; a custom list can be read from disk.

use super::WORDS;
use crate::core::SecretWord;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to produce a secret word
#[derive(Debug)]
pub enum WordListError {
    /// The word list resource could not be read
    ResourceUnavailable { path: PathBuf, source: io::Error },
    /// The resource was read but held no usable words
    EmptyWordList,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceUnavailable { path, .. } => {
                write!(f, "Cannot read word list '{}'", path.display())
            }
            Self::EmptyWordList => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceUnavailable { source, .. } => Some(source),
            Self::EmptyWordList => None,
        }
    }
}

/// A parsed, non-empty list of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<SecretWord>,
}

impl WordList {
    /// Parse whitespace separated words
    ///
    /// Tokens that are not purely alphabetic are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyWordList` if no usable token remains.
    ///
    /// # Examples
    /// ```
    /// use spaceman::wordlists::WordList;
    ///
    /// let list = WordList::parse("rocket comet orbit").unwrap();
    /// assert_eq!(list.len(), 3);
    ///
    /// assert!(WordList::parse("   ").is_err());
    /// ```
    pub fn parse(content: &str) -> Result<Self, WordListError> {
        let words: Vec<SecretWord> = content
            .split_whitespace()
            .filter_map(|token| match SecretWord::new(token) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("Skipping word list token: {e}");
                    None
                }
            })
            .collect();

        if words.is_empty() {
            return Err(WordListError::EmptyWordList);
        }

        log::debug!("Parsed word list with {} words", words.len());
        Ok(Self { words })
    }

    /// Read and parse a word list file
    ///
    /// # Errors
    ///
    /// Returns `WordListError::ResourceUnavailable` if the file cannot be read and
    /// `WordListError::EmptyWordList` if it holds no usable words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|source| WordListError::ResourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&content)
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyWordList` if the embedded list was built empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::parse(&WORDS.join(" "))
    }

    /// Words in the list
    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words; `false` for any list returned by `parse`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick one word uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyWordList` if the list has no words.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SecretWord, WordListError> {
        self.words
            .choose(rng)
            .cloned()
            .ok_or(WordListError::EmptyWordList)
    }
}

/// Produces the secret word for each new playthrough
pub trait WordSource {
    /// Load the word list and pick a secret word from it
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the list cannot be read or is empty.
    fn load_word(&mut self) -> Result<SecretWord, WordListError>;
}

/// Where a [`RandomWordSource`] reads its words from
#[derive(Debug, Clone)]
pub enum WordOrigin {
    /// The list compiled into the binary
    Embedded,
    /// A file re-read at the start of every playthrough
    File(PathBuf),
    /// An already parsed list
    List(WordList),
}

/// Picks a uniformly random word from its origin on every call
pub struct RandomWordSource<R: Rng = StdRng> {
    origin: WordOrigin,
    rng: R,
}

impl RandomWordSource<StdRng> {
    /// Source seeded from the operating system
    #[must_use]
    pub fn from_os_rng(origin: WordOrigin) -> Self {
        Self::new(origin, StdRng::from_os_rng())
    }

    /// Source with a fixed seed, for reproducible games
    #[must_use]
    pub fn seeded(origin: WordOrigin, seed: u64) -> Self {
        Self::new(origin, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWordSource<R> {
    #[must_use]
    pub const fn new(origin: WordOrigin, rng: R) -> Self {
        Self { origin, rng }
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn load_word(&mut self) -> Result<SecretWord, WordListError> {
        let word = match &self.origin {
            WordOrigin::Embedded => WordList::embedded()?.choose(&mut self.rng)?,
            WordOrigin::File(path) => WordList::from_file(path)?.choose(&mut self.rng)?,
            WordOrigin::List(list) => list.choose(&mut self.rng)?,
        };

        log::debug!("Selected a secret word with {} letters", word.len());
        Ok(word)
    }
}
