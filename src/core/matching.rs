//! Guess scoring against a hidden answer
//!
//! A [`Feedback`] holds one [`Matching`] per letter position. Rendering uses
//! the ASCII alphabet `+` (exact), `?` (present elsewhere), `_` (absent).

use super::word::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Per-letter classification of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matching {
    /// Letter matches the answer at this position
    Exact,
    /// Letter exists in the answer at a different, unconsumed position
    Present,
    /// Letter has no remaining unconsumed match in the answer
    Absent,
}

impl Matching {
    /// ASCII rendering of this classification
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '+',
            Self::Present => '?',
            Self::Absent => '_',
        }
    }
}

/// Feedback for a full guess, one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Matching; WORD_LEN]);

impl Feedback {
    /// All positions exact (winning feedback)
    pub const WIN: Self = Self([Matching::Exact; WORD_LEN]);

    /// Create feedback from explicit classifications
    #[must_use]
    pub const fn new(matchings: [Matching; WORD_LEN]) -> Self {
        Self(matchings)
    }

    /// The per-position classifications
    #[must_use]
    pub const fn matchings(&self) -> &[Matching; WORD_LEN] {
        &self.0
    }

    /// True iff every position is Exact
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&m| m == Matching::Exact)
    }

    /// Render as a 5-character ASCII string, e.g. `"+?__+"`
    #[must_use]
    pub fn render(&self) -> String {
        self.0.iter().map(|m| m.symbol()).collect()
    }

    /// Parse a rendered feedback string
    ///
    /// Accepts exactly five characters from `+`, `?`, `_`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut matchings = [Matching::Absent; WORD_LEN];
        let mut chars = s.chars();
        for slot in &mut matchings {
            *slot = match chars.next()? {
                '+' => Matching::Exact,
                '?' => Matching::Present,
                '_' => Matching::Absent,
                _ => return None,
            };
        }
        if chars.next().is_some() {
            return None;
        }
        Some(Self(matchings))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Score `guess` against `answer`
///
/// Two passes, handling duplicate letters the way Wordle does:
/// 1. Mark exact position matches, consuming those answer positions.
/// 2. For each unmarked guess letter, scan answer positions left to right and
///    consume the first unconsumed equal letter as Present.
///
/// Anything still unmarked is Absent. A repeated guess letter is only marked
/// Present while the answer has an unconsumed duplicate left, so the total of
/// Exact + Present for a letter never exceeds its count in the answer.
#[must_use]
pub fn match_words(answer: &Word, guess: &Word) -> Feedback {
    let mut matchings = [Matching::Absent; WORD_LEN];
    let mut consumed = [false; WORD_LEN];

    for i in 0..WORD_LEN {
        if guess.letter_at(i) == answer.letter_at(i) {
            matchings[i] = Matching::Exact;
            consumed[i] = true;
        }
    }

    // Allow: index needed to pair guess[i] with matchings[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if matchings[i] == Matching::Exact {
            continue;
        }
        for j in 0..WORD_LEN {
            if !consumed[j] && answer.letter_at(j) == guess.letter_at(i) {
                matchings[i] = Matching::Present;
                consumed[j] = true;
                break;
            }
        }
    }

    Feedback(matchings)
}

/// Memo for [`match_words_cached`], owned by the caller
pub type MatchCache = FxHashMap<(Word, Word), Feedback>;

/// Memoized [`match_words`]
///
/// Identical semantics; the cache is shared mutable state the caller threads
/// through repeated scoring of the same (answer, guess) pairs.
pub fn match_words_cached(cache: &mut MatchCache, answer: &Word, guess: &Word) -> Feedback {
    *cache
        .entry((*answer, *guess))
        .or_insert_with(|| match_words(answer, guess))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn rendered(answer: &str, guess: &str) -> String {
        match_words(&word(answer), &word(guess)).render()
    }

    #[test]
    fn self_match_is_all_exact() {
        for w in ["crane", "slate", "aaaaa", "abbey", "zzzzz"] {
            let fb = match_words(&word(w), &word(w));
            assert!(fb.is_win());
            assert_eq!(fb, Feedback::WIN);
        }
    }

    #[test]
    fn disjoint_words_all_absent() {
        assert_eq!(rendered("fghij", "abcde"), "_____");
    }

    #[test]
    fn literal_scenarios() {
        assert_eq!(rendered("abcde", "abcde"), "+++++");
        assert_eq!(rendered("aaaab", "aaabc"), "+++?_");
        assert_eq!(rendered("words", "sword"), "?????");
        assert_eq!(rendered("abbey", "opens"), "__?__");
        assert_eq!(rendered("abbey", "babes"), "??++_");
        assert_eq!(rendered("abbey", "kebab"), "_?+??");
        assert_eq!(rendered("abbey", "abyss"), "++?__");
    }

    #[test]
    fn duplicate_guess_letter_consumes_answer_once() {
        // ERASE has a single S, already consumed by the exact match at
        // position 3; the other two S's in the guess must be Absent
        assert_eq!(rendered("erase", "sassy"), "_?_+_");
    }

    #[test]
    fn matched_letter_counts_bounded_by_answer_and_guess() {
        let words = ["abbey", "aaaab", "babes", "kebab", "sassy", "crane"];
        for answer in words.map(word) {
            for guess in words.map(word) {
                let fb = match_words(&answer, &guess);
                for letter in b'a'..=b'z' {
                    let matched = fb
                        .matchings()
                        .iter()
                        .zip(guess.letters())
                        .filter(|&(&m, &g)| g == letter && m != Matching::Absent)
                        .count();
                    assert!(matched <= answer.count_letter(letter));
                    assert!(matched <= guess.count_letter(letter));
                }
            }
        }
    }

    #[test]
    fn feedback_render_parse_round_trip() {
        let fb = match_words(&word("abbey"), &word("kebab"));
        assert_eq!(Feedback::parse(&fb.render()), Some(fb));

        assert!(Feedback::parse("+?_").is_none()); // Too short
        assert!(Feedback::parse("+?_+?x").is_none()); // Too long
        assert!(Feedback::parse("+?_+G").is_none()); // Bad symbol
    }

    #[test]
    fn cached_matching_agrees_with_direct() {
        let mut cache = MatchCache::default();
        let answer = word("abbey");
        let guess = word("babes");

        let first = match_words_cached(&mut cache, &answer, &guess);
        assert_eq!(first, match_words(&answer, &guess));
        assert_eq!(cache.len(), 1);

        // Second lookup hits the memo and agrees
        let second = match_words_cached(&mut cache, &answer, &guess);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }
}
