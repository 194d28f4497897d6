//! Wordle word representation
//!
//! A Word is exactly five ASCII lowercase letters, stored inline so words can
//! be copied freely into histories and memo keys.

use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A validated 5-letter word
///
/// Stored as a fixed byte array; always ASCII lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase ASCII input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_gym::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let bytes = text.as_bytes();
        if bytes.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.chars().count()));
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, &b) in letters.iter_mut().zip(bytes) {
            if !b.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = b.to_ascii_lowercase();
        }

        Ok(Self { letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Letters are validated ASCII at construction
        std::str::from_utf8(&self.letters).unwrap_or("?????")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Count occurrences of a letter in the word
    #[must_use]
    pub fn count_letter(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&b| b == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.as_str(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.as_str(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.as_str(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(4), b'e');
    }

    #[test]
    fn word_count_letter() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_letter(b'e'), 2);
        assert_eq!(word.count_letter(b's'), 1);
        assert_eq!(word.count_letter(b'z'), 0);

        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.count_letter(b'a'), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality_and_copy() {
        let word1 = Word::new("crane").unwrap();
        let word2 = word1;
        let word3 = Word::new("CRANE").unwrap();
        let word4 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }

    #[test]
    fn word_from_str_trait() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(word.as_str(), "slate");
        assert!("slates".parse::<Word>().is_err());
    }
}
