//! Question content supplied to a session
//!
//! Questions arrive pre-fetched and pre-formatted from an external supplier.
//! The session trusts their content but still validates the shape (four
//! options, an in-range correct index) before a game starts.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Opaque identifier of a question, unique within a session
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Difficulty rating of a question
///
/// The supplier rates questions 1 (easy) through 3 (hard). Other values are
/// carried through untouched and scored like an easy question.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Difficulty(pub u8);

impl Difficulty {
    /// Easy questions
    pub const EASY: Self = Self(1);
    /// Medium questions
    pub const MEDIUM: Self = Self(2);
    /// Hard questions
    pub const HARD: Self = Self(3);
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::EASY
    }
}

type ValidationResult = garde::Result;

/// Rejects blank question identifiers
fn validate_id(val: &QuestionId) -> ValidationResult {
    if val.as_str().trim().is_empty() {
        Err(garde::Error::new("id cannot be empty"))
    } else {
        Ok(())
    }
}

/// A single multiple choice trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier assigned by the supplier
    #[garde(custom(|v, _| validate_id(v)))]
    pub id: QuestionId,
    /// Category label, e.g. "Science"
    #[garde(length(max = constants::question::MAX_CATEGORY_LENGTH))]
    pub category: String,
    /// Difficulty rating, drives base points
    #[garde(skip)]
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Text shown to the player
    #[garde(length(min = 1, max = constants::question::MAX_PROMPT_LENGTH))]
    pub prompt: String,
    /// Answer options in display order, already shuffled by the supplier
    #[garde(
        length(min = constants::question::OPTION_COUNT, max = constants::question::OPTION_COUNT),
        inner(length(max = constants::question::MAX_OPTION_LENGTH))
    )]
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    #[garde(range(max = constants::question::LAST_OPTION_INDEX))]
    pub correct_option_index: usize,
}

impl Question {
    /// Creates a question from its parts
    pub fn new(
        id: impl Into<QuestionId>,
        category: impl Into<String>,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        options: [&str; constants::question::OPTION_COUNT],
        correct_option_index: usize,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            difficulty,
            prompt: prompt.into(),
            options: options.iter().map(|o| (*o).to_owned()).collect(),
            correct_option_index,
        }
    }

    /// Returns the text of the option at `index`, if it exists
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Whether `index` selects the correct option
    ///
    /// Indices outside the option list are never correct.
    pub fn is_correct(&self, index: usize) -> bool {
        index < self.options.len() && index == self.correct_option_index
    }

    /// Indices of all options except the correct one
    pub fn incorrect_options(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.options.len()).filter(move |i| *i != self.correct_option_index)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "q-1",
            "Geography",
            Difficulty::MEDIUM,
            "What is the capital of France?",
            ["Berlin", "Paris", "Madrid", "Rome"],
            1,
        )
    }

    #[test]
    fn test_valid_question() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_is_correct() {
        let question = sample();
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(4));
        assert!(!question.is_correct(usize::MAX));
    }

    #[test]
    fn test_option_lookup() {
        let question = sample();
        assert_eq!(question.option(1), Some("Paris"));
        assert_eq!(question.option(9), None);
    }

    #[test]
    fn test_incorrect_options() {
        let question = sample();
        assert_eq!(question.incorrect_options().collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn test_wrong_option_count_rejected() {
        let mut question = sample();
        question.options.pop();
        assert!(question.validate().is_err());

        let mut question = sample();
        question.options.push("Lisbon".to_string());
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_correct_index_out_of_range_rejected() {
        let mut question = sample();
        question.correct_option_index = 4;
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut question = sample();
        question.id = QuestionId::from("  ");
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let mut question = sample();
        question.prompt = String::new();
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_unknown_difficulty_accepted() {
        let mut question = sample();
        question.difficulty = Difficulty(7);
        assert!(question.validate().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "abc",
            "category": "Music",
            "difficulty": 3,
            "prompt": "Who composed the Four Seasons?",
            "options": ["Bach", "Vivaldi", "Handel", "Mozart"],
            "correctOptionIndex": 1
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();

        assert_eq!(question.id.as_str(), "abc");
        assert_eq!(question.difficulty, Difficulty::HARD);
        assert_eq!(question.option(question.correct_option_index), Some("Vivaldi"));
    }

    #[test]
    fn test_difficulty_defaults_to_easy() {
        let json = r#"{
            "id": "abc",
            "category": "Music",
            "prompt": "Pick one",
            "options": ["a", "b", "c", "d"],
            "correctOptionIndex": 0
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.difficulty, Difficulty::EASY);
    }
}
