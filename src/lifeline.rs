//! One-shot helpers a player can spend during a session
//!
//! Each lifeline kind has a per-session allowance set in the game
//! configuration. Spending one is refused once the allowance is exhausted.

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::{constants, question::Question};

/// The kinds of lifeline available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Enum)]
pub enum Lifeline {
    /// Move past the current question without answering it
    Skip,
    /// Hide two incorrect options of the current question
    FiftyFifty,
}

/// Lifelines granted to a session when the configuration does not say otherwise
pub fn default_allowance() -> EnumMap<Lifeline, u8> {
    enum_map! {
        Lifeline::Skip => constants::lifeline::DEFAULT_SKIPS,
        Lifeline::FiftyFifty => constants::lifeline::DEFAULT_FIFTY_FIFTY,
    }
}

/// Tracks how many of each lifeline a session may still spend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lifelines {
    allowance: EnumMap<Lifeline, u8>,
    used: EnumMap<Lifeline, u8>,
}

impl Lifelines {
    /// Creates a tracker with nothing spent yet
    pub fn new(allowance: EnumMap<Lifeline, u8>) -> Self {
        Self {
            allowance,
            used: EnumMap::default(),
        }
    }

    /// How many uses of `kind` remain
    pub fn remaining(&self, kind: Lifeline) -> u8 {
        self.allowance[kind].saturating_sub(self.used[kind])
    }

    /// How many uses of `kind` have been spent
    pub fn used(&self, kind: Lifeline) -> u8 {
        self.used[kind]
    }

    /// Spends one use of `kind`
    ///
    /// # Returns
    ///
    /// `true` if a use was available and has been spent, `false` otherwise
    pub fn try_use(&mut self, kind: Lifeline) -> bool {
        if self.remaining(kind) == 0 {
            return false;
        }
        self.used[kind] += 1;
        true
    }
}

/// Picks the incorrect options a fifty-fifty hides
///
/// # Returns
///
/// Indices of the hidden options in ascending order. The correct option is
/// never among them.
pub fn fifty_fifty(question: &Question, rng: &mut fastrand::Rng) -> Vec<usize> {
    let mut incorrect: Vec<usize> = question.incorrect_options().collect();
    rng.shuffle(&mut incorrect);
    incorrect.truncate(constants::lifeline::FIFTY_FIFTY_HIDDEN);
    incorrect.sort_unstable();
    incorrect
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::question::Difficulty;

    #[test]
    fn test_default_allowance() {
        let allowance = default_allowance();
        assert_eq!(allowance[Lifeline::Skip], 1);
        assert_eq!(allowance[Lifeline::FiftyFifty], 1);
    }

    #[test]
    fn test_try_use_until_exhausted() {
        let mut lifelines = Lifelines::new(enum_map! {
            Lifeline::Skip => 2,
            Lifeline::FiftyFifty => 0,
        });

        assert_eq!(lifelines.remaining(Lifeline::Skip), 2);
        assert!(lifelines.try_use(Lifeline::Skip));
        assert!(lifelines.try_use(Lifeline::Skip));
        assert!(!lifelines.try_use(Lifeline::Skip));
        assert_eq!(lifelines.remaining(Lifeline::Skip), 0);
        assert_eq!(lifelines.used(Lifeline::Skip), 2);

        assert!(!lifelines.try_use(Lifeline::FiftyFifty));
        assert_eq!(lifelines.used(Lifeline::FiftyFifty), 0);
    }

    #[test]
    fn test_fifty_fifty_hides_two_incorrect() {
        let question = Question::new(
            "q",
            "Science",
            Difficulty::EASY,
            "Which planet is largest?",
            ["Mars", "Venus", "Jupiter", "Mercury"],
            2,
        );
        let mut rng = fastrand::Rng::with_seed(7);

        for _ in 0..50 {
            let hidden = fifty_fifty(&question, &mut rng);
            assert_eq!(hidden.len(), 2);
            assert!(!hidden.contains(&2));
            assert!(hidden[0] < hidden[1]);
        }
    }

    #[test]
    fn test_fifty_fifty_is_seed_deterministic() {
        let question = Question::new(
            "q",
            "Science",
            Difficulty::EASY,
            "Which planet is largest?",
            ["Mars", "Venus", "Jupiter", "Mercury"],
            2,
        );

        let a = fifty_fifty(&question, &mut fastrand::Rng::with_seed(42));
        let b = fifty_fifty(&question, &mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }
}
