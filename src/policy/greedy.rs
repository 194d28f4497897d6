//! Greedy one-ply elimination policy

use super::{Policy, PolicyError};
use crate::core::{Feedback, MatchCache, Word, match_words_cached};
use crate::game::GameState;
use rustc_hash::FxHashMap;

/// Picks the candidate that eliminates the most candidates in one step
///
/// For each remaining candidate the policy forks the game, submits the
/// candidate as a trial guess, and counts how many candidates the resulting
/// feedback removes from the current set. The highest count wins; ties go to
/// the first candidate in iteration order.
///
/// This is a one-ply heuristic, not a minimax over feedback partitions: the
/// score measures elimination against the current candidate set only. It only
/// ever guesses candidates, so its guesses are always legal words.
///
/// Decisions are memoized by the history that produced them, which pays off
/// when the same opening prefixes recur across a benchmark run. Call
/// [`Policy::reset`] between independent runs.
pub struct GreedyEliminationPolicy {
    memo: FxHashMap<Vec<(Word, Feedback)>, Word>,
    match_cache: MatchCache,
}

impl GreedyEliminationPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            memo: FxHashMap::default(),
            match_cache: MatchCache::default(),
        }
    }

    /// Number of memoized decisions
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Count candidates of `state` using the shared match cache
    fn count_candidates(&mut self, state: &GameState) -> usize {
        let cache = &mut self.match_cache;
        state
            .dictionary()
            .answers()
            .iter()
            .filter(|candidate| {
                state
                    .history()
                    .iter()
                    .all(|(guess, feedback)| {
                        match_words_cached(cache, candidate, guess) == *feedback
                    })
            })
            .count()
    }
}

impl Default for GreedyEliminationPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for GreedyEliminationPolicy {
    fn choose(&mut self, state: &GameState) -> Result<Word, PolicyError> {
        if let Some(&memoized) = self.memo.get(state.history()) {
            return Ok(memoized);
        }

        let candidates: Vec<Word> = state.candidates().collect();
        if candidates.is_empty() {
            return Err(PolicyError::EmptyCandidates);
        }

        let mut best = candidates[0];
        let mut best_eliminated = 0usize;

        for &candidate in &candidates {
            let mut trial = state.fork();
            if trial.submit_guess(candidate).is_err() {
                continue;
            }
            let remaining = self.count_candidates(&trial);
            let eliminated = candidates.len() - remaining;
            if eliminated > best_eliminated {
                best_eliminated = eliminated;
                best = candidate;
            }
        }

        self.memo.insert(state.history().to_vec(), best);
        Ok(best)
    }

    fn reset(&mut self) {
        self.memo.clear();
        self.match_cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Dictionary, Status};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn test_dictionary() -> Dictionary {
        let answers = vec![
            word("abbey"),
            word("babes"),
            word("amber"),
            word("maple"),
            word("eagle"),
        ];
        Dictionary::new(vec![], answers).unwrap()
    }

    #[test]
    fn chooses_a_candidate() {
        let dict = test_dictionary();
        let state = GameState::new(&dict, word("abbey"));

        let mut policy = GreedyEliminationPolicy::new();
        let guess = policy.choose(&state).unwrap();
        assert!(state.candidates().any(|c| c == guess));
    }

    #[test]
    fn maximizes_eliminations() {
        let dict = test_dictionary();
        let state = GameState::new(&dict, word("abbey"));

        let mut policy = GreedyEliminationPolicy::new();
        let chosen = policy.choose(&state).unwrap();

        // Recompute every candidate's elimination score the slow way and
        // confirm nothing beats the chosen word
        let candidates: Vec<Word> = state.candidates().collect();
        let score = |guess: Word| {
            let mut trial = state.fork();
            trial.submit_guess(guess).unwrap();
            candidates.len() - trial.candidate_count()
        };
        let chosen_score = score(chosen);
        for &candidate in &candidates {
            assert!(score(candidate) <= chosen_score);
        }
    }

    #[test]
    fn tie_break_is_first_in_iteration_order() {
        // Two answers left: guessing either eliminates the other, so the
        // scores tie and the first candidate in answer-list order wins
        let answers = vec![word("babes"), word("amber")];
        let dict = Dictionary::new(vec![], answers).unwrap();
        let state = GameState::new(&dict, word("amber"));

        let mut policy = GreedyEliminationPolicy::new();
        assert_eq!(policy.choose(&state).unwrap(), word("babes"));
    }

    #[test]
    fn memoizes_by_history() {
        let dict = test_dictionary();
        let state = GameState::new(&dict, word("abbey"));

        let mut policy = GreedyEliminationPolicy::new();
        let first = policy.choose(&state).unwrap();
        assert_eq!(policy.memo_len(), 1);

        // Same (empty) history, different game: memo hit, same decision
        let other = GameState::new(&dict, word("maple"));
        let second = policy.choose(&other).unwrap();
        assert_eq!(first, second);
        assert_eq!(policy.memo_len(), 1);

        policy.reset();
        assert_eq!(policy.memo_len(), 0);
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let dict = Dictionary::new(
            vec![word("abyss"), word("opens")],
            vec![word("abbey"), word("babes"), word("amber")],
        )
        .unwrap();
        let mut state = GameState::new(&dict, word("opens"));
        state.submit_guess(word("abyss")).unwrap();

        let mut policy = GreedyEliminationPolicy::new();
        assert_eq!(policy.choose(&state), Err(PolicyError::EmptyCandidates));
    }

    #[test]
    fn solves_every_answer_within_budget() {
        let dict = test_dictionary();
        let mut policy = GreedyEliminationPolicy::new();

        for &answer in dict.answers() {
            let mut state = GameState::new(&dict, answer);
            while state.status() == Status::InProgress {
                let guess = policy.choose(&state).unwrap();
                state.submit_guess(guess).unwrap();
            }
            assert_eq!(state.status(), Status::Win, "failed to solve {answer}");
        }
    }
}
