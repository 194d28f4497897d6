//! Word list loading
//!
//! A [`Dictionary`] holds the two word lists a game needs: the answers the
//! hidden word is drawn from, and the extra words accepted as guesses. Both
//! are loaded once at startup and shared read-only from then on.

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The immutable word lists shared by games and policies
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    answer_set: FxHashSet<Word>,
    allowed_set: FxHashSet<Word>,
}

/// Error loading or constructing a dictionary
#[derive(Debug)]
pub enum DictionaryError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// A non-blank line that is not a valid 5-letter word
    MalformedEntry {
        path: PathBuf,
        line: usize,
        entry: String,
        source: WordError,
    },
    NoAnswers,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read word list {}: {source}", path.display())
            }
            Self::MalformedEntry {
                path,
                line,
                entry,
                source,
            } => write!(
                f,
                "malformed entry {entry:?} at {}:{line}: {source}",
                path.display()
            ),
            Self::NoAnswers => write!(f, "answer word list is empty"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::MalformedEntry { source, .. } => Some(source),
            Self::NoAnswers => None,
        }
    }
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// `allowed` is the extra guessable words; answers are always guessable.
    ///
    /// # Errors
    /// Returns [`DictionaryError::NoAnswers`] when `answers` is empty.
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }
        let answer_set = answers.iter().copied().collect();
        let allowed_set = allowed.into_iter().collect();
        Ok(Self {
            answers,
            answer_set,
            allowed_set,
        })
    }

    /// Load a dictionary from two newline-delimited word list files
    ///
    /// Blank lines are skipped; any other malformed line aborts the load with
    /// the file, line number, and offending entry.
    ///
    /// # Errors
    /// Returns `DictionaryError` on I/O failure, on the first malformed
    /// entry, or when the answer list ends up empty.
    pub fn load<P: AsRef<Path>>(allowed_path: P, answers_path: P) -> Result<Self, DictionaryError> {
        let allowed = load_word_file(allowed_path.as_ref())?;
        let answers = load_word_file(answers_path.as_ref())?;
        Self::new(allowed, answers)
    }

    /// The valid answers, in file order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of valid answers
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of extra allowed guess words (beyond the answers)
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed_set.len()
    }

    /// True if the word may be submitted as a guess
    ///
    /// A word is guessable when it appears in either list.
    #[must_use]
    pub fn is_guessable(&self, word: &Word) -> bool {
        self.allowed_set.contains(word) || self.answer_set.contains(word)
    }

    /// True if the word is a possible answer
    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answer_set.contains(word)
    }
}

fn load_word_file(path: &Path) -> Result<Vec<Word>, DictionaryError> {
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| DictionaryError::MalformedEntry {
            path: path.to_path_buf(),
            line: idx + 1,
            entry: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn temp_word_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wordle-gym-test-{name}"));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn dictionary_membership() {
        let dict = Dictionary::new(words(&["opens", "kebab"]), words(&["abbey", "babes"])).unwrap();

        assert_eq!(dict.answer_count(), 2);
        assert_eq!(dict.allowed_count(), 2);

        // Both lists are guessable, only answers are answers
        assert!(dict.is_guessable(&Word::new("opens").unwrap()));
        assert!(dict.is_guessable(&Word::new("abbey").unwrap()));
        assert!(dict.is_answer(&Word::new("abbey").unwrap()));
        assert!(!dict.is_answer(&Word::new("opens").unwrap()));
        assert!(!dict.is_guessable(&Word::new("crane").unwrap()));
    }

    #[test]
    fn dictionary_requires_answers() {
        assert!(matches!(
            Dictionary::new(words(&["opens"]), vec![]),
            Err(DictionaryError::NoAnswers)
        ));
    }

    #[test]
    fn load_skips_blank_lines() {
        let allowed = temp_word_file("allowed-blank.txt", "opens\n\n  \nkebab\n");
        let answers = temp_word_file("answers-blank.txt", "abbey\n");

        let dict = Dictionary::load(&allowed, &answers).unwrap();
        assert_eq!(dict.allowed_count(), 2);
        assert_eq!(dict.answer_count(), 1);
    }

    #[test]
    fn load_rejects_malformed_entry() {
        let allowed = temp_word_file("allowed-bad.txt", "opens\ntoolong\nkebab\n");
        let answers = temp_word_file("answers-ok.txt", "abbey\n");

        let err = Dictionary::load(&allowed, &answers).unwrap_err();
        match err {
            DictionaryError::MalformedEntry { line, entry, .. } => {
                assert_eq!(line, 2);
                assert_eq!(entry, "toolong");
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let missing = PathBuf::from("/nonexistent/words.txt");
        let err = Dictionary::load(&missing, &missing).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }
}
