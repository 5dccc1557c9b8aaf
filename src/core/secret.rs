//! Secret word representation
//!
//! A `SecretWord` is the lowercase word the player is trying to reveal during one playthrough.

use std::fmt;

/// The word hidden from the player for a single playthrough
///
/// Always non-empty and made of lowercase ASCII letters, so every position can be revealed
/// by some guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
}

/// Error type for tokens that cannot be used as a secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretWordError {
    Empty,
    InvalidCharacters(String),
}

impl fmt::Display for SecretWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::InvalidCharacters(text) => {
                write!(f, "Secret word '{text}' must contain only ASCII letters")
            }
        }
    }
}

impl std::error::Error for SecretWordError {}

impl SecretWord {
    /// Create a new secret word, normalising it to lowercase
    ///
    /// # Errors
    /// Returns `SecretWordError` if the text is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use spaceman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Rocket").unwrap();
    /// assert_eq!(word.text(), "rocket");
    ///
    /// assert!(SecretWord::new("r0cket").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SecretWordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(SecretWordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(SecretWordError::InvalidCharacters(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no letters; `false` for any word built by `new`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_word_valid() {
        let word = SecretWord::new("comet").unwrap();
        assert_eq!(word.text(), "comet");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn secret_word_uppercase_normalized() {
        assert_eq!(SecretWord::new("COMET").unwrap().text(), "comet");
        assert_eq!(SecretWord::new("CoMeT").unwrap().text(), "comet");
    }

    #[test]
    fn secret_word_empty_rejected() {
        assert_eq!(SecretWord::new(""), Err(SecretWordError::Empty));
    }

    #[test]
    fn secret_word_invalid_characters() {
        assert!(SecretWord::new("com3t").is_err()); // Number
        assert!(SecretWord::new("com et").is_err()); // Space
        assert!(SecretWord::new("comet\n").is_err()); // Trailing newline
        assert!(SecretWord::new("cométe").is_err()); // Non-ASCII
    }

    #[test]
    fn secret_word_display() {
        let word = SecretWord::new("orbit").unwrap();
        assert_eq!(format!("{word}"), "orbit");
    }
}
