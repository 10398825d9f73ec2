//! Records of resolved questions

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::question::QuestionId;

/// How a question was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// The player picked the correct option
    Correct,
    /// The player picked a wrong option, or an index with no option
    Incorrect,
    /// The countdown ran out before the player answered
    TimedOut,
    /// The question was passed over without an answer
    Skipped,
}

impl AnswerOutcome {
    /// Whether this outcome breaks the current chain
    pub fn breaks_chain(self) -> bool {
        matches!(self, Self::Incorrect | Self::TimedOut)
    }
}

/// One entry of a session's answer log
#[serde_with::serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// The question this entry resolves
    pub question_id: QuestionId,
    /// Player whose turn it was (party mode only)
    pub player: Option<String>,
    /// How the question was resolved
    pub outcome: AnswerOutcome,
    /// Whether the answer was correct
    pub is_correct: bool,
    /// Time between the question opening and its resolution
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub elapsed: Duration,
    /// Chain multiplier applied to the points
    pub multiplier: u32,
    /// Points earned
    pub points: u64,
    /// Text of the selected option, if an existing option was selected
    pub selected_option: Option<String>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_chain() {
        assert!(!AnswerOutcome::Correct.breaks_chain());
        assert!(AnswerOutcome::Incorrect.breaks_chain());
        assert!(AnswerOutcome::TimedOut.breaks_chain());
        assert!(!AnswerOutcome::Skipped.breaks_chain());
    }

    #[test]
    fn test_serialization_shape() {
        let record = AnswerRecord {
            question_id: QuestionId::from("q-9"),
            player: None,
            outcome: AnswerOutcome::TimedOut,
            is_correct: false,
            elapsed: Duration::from_millis(15_000),
            multiplier: 1,
            points: 0,
            selected_option: None,
        };
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["questionId"], "q-9");
        assert_eq!(json["outcome"], "TimedOut");
        assert_eq!(json["elapsed"], 15_000);
        assert!(json.get("player").is_none());
        assert!(json.get("selectedOption").is_none());
    }
}
