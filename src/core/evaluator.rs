//! Guess evaluation
//!
//! Pure queries over a word and the letters guessed so far. Nothing here mutates state or
//! performs I/O.

/// Placeholder shown for letters that have not been revealed yet
pub const HIDDEN: char = '_';

/// Check whether every letter of `word` has been guessed
///
/// Duplicate letters are covered by a single guess of that letter.
///
/// # Examples
/// ```
/// use spaceman::core::is_word_guessed;
///
/// assert!(is_word_guessed("moon", &['m', 'o', 'n']));
/// assert!(!is_word_guessed("moon", &['m', 'o']));
/// ```
#[must_use]
pub fn is_word_guessed(word: &str, guessed: &[char]) -> bool {
    word.chars().all(|c| guessed.contains(&c))
}

/// Render `word` with unguessed letters replaced by [`HIDDEN`]
///
/// The result always has one character per character of `word`.
///
/// # Examples
/// ```
/// use spaceman::core::mask;
///
/// assert_eq!(mask("cat", &['c']), "c__");
/// ```
#[must_use]
pub fn mask(word: &str, guessed: &[char]) -> String {
    word.chars()
        .map(|c| if guessed.contains(&c) { c } else { HIDDEN })
        .collect()
}

/// Check whether `letter` occurs anywhere in `word`
#[inline]
#[must_use]
pub fn contains(letter: char, word: &str) -> bool {
    word.contains(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guessed_when_all_letters_covered() {
        assert!(is_word_guessed("cat", &['c', 'a', 't']));
        assert!(is_word_guessed("cat", &['t', 'x', 'a', 'c']));
    }

    #[test]
    fn not_guessed_with_missing_letter() {
        assert!(!is_word_guessed("cat", &['c', 'a']));
        assert!(!is_word_guessed("cat", &[]));
    }

    #[test]
    fn duplicate_letters_need_one_guess() {
        assert!(is_word_guessed("balloon", &['b', 'a', 'l', 'o', 'n']));
        assert!(!is_word_guessed("balloon", &['b', 'a', 'l', 'o']));
    }

    #[test]
    fn mask_progression() {
        assert_eq!(mask("cat", &[]), "___");
        assert_eq!(mask("cat", &['c']), "c__");
        assert_eq!(mask("cat", &['c', 'a']), "ca_");
        assert_eq!(mask("cat", &['c', 'a', 't']), "cat");
    }

    #[test]
    fn mask_reveals_every_occurrence() {
        assert_eq!(mask("nebula", &['a']), "_____a");
        assert_eq!(mask("satellite", &['e', 'l']), "___ell__e");
    }

    #[test]
    fn mask_preserves_length() {
        for word in ["a", "moon", "astronaut"] {
            assert_eq!(mask(word, &['o']).chars().count(), word.len());
        }
    }

    #[test]
    fn contains_letter() {
        assert!(contains('o', "dog"));
        assert!(!contains('x', "dog"));
    }
}
