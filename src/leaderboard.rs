//! Leaderboard and scoring summaries
//!
//! This module tracks per-player totals for party sessions, ranks players
//! into standings, and assembles the read-only progress and result views
//! handed to the presentation layer and the result sink.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{answer::AnswerRecord, config::GameMode, session::SessionId};

/// Running totals of a single party player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Player name as shown to the group
    pub name: String,
    /// Points earned on this player's turns
    pub score: u64,
    /// Correct answers given on this player's turns
    pub correct_count: u32,
    /// Questions resolved on this player's turns, including skips and timeouts
    pub answered_count: u32,
}

impl PlayerStats {
    /// Creates empty stats for a named player
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A player's place in the ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// 1-based position; players with equal score and correct count share it
    pub position: usize,
    /// Player name
    pub name: String,
    /// Total points
    pub score: u64,
    /// Total correct answers
    pub correct_count: u32,
}

/// Per-player totals for a party session, in turn order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    players: Vec<PlayerStats>,
}

impl Leaderboard {
    /// Creates a leaderboard with every player at zero
    pub fn new<S: AsRef<str>>(players: &[S]) -> Self {
        Self {
            players: players
                .iter()
                .map(|name| PlayerStats::new(name.as_ref()))
                .collect_vec(),
        }
    }

    /// Credits a resolved question to the player at `index`
    ///
    /// Unknown indices are ignored.
    pub fn record(&mut self, index: usize, points: u64, correct: bool) {
        if let Some(player) = self.players.get_mut(index) {
            player.score += points;
            player.correct_count += u32::from(correct);
            player.answered_count += 1;
        }
    }

    /// Players in turn order
    pub fn players(&self) -> &[PlayerStats] {
        &self.players
    }

    /// Players ranked by score, then by correct answers
    ///
    /// Players tied on both keep their turn order and share a position.
    pub fn standings(&self) -> Vec<Standing> {
        let ranked = self
            .players
            .iter()
            .sorted_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| b.correct_count.cmp(&a.correct_count))
            })
            .collect_vec();

        let mut standings: Vec<Standing> = Vec::with_capacity(ranked.len());
        for (index, player) in ranked.into_iter().enumerate() {
            let position = match standings.last() {
                Some(previous)
                    if previous.score == player.score
                        && previous.correct_count == player.correct_count =>
                {
                    previous.position
                }
                _ => index + 1,
            };
            standings.push(Standing {
                position,
                name: player.name.clone(),
                score: player.score,
                correct_count: player.correct_count,
            });
        }
        standings
    }
}

/// How far through the session the player is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based number of the current question, 0 when nothing is loaded
    pub current: usize,
    /// Total questions in the session
    pub total: usize,
    /// `current / total` as a rounded percentage
    pub percentage: u32,
}

impl Progress {
    /// Builds the progress view for a question index
    pub fn new(current_index: usize, total: usize) -> Self {
        let current = if total == 0 { 0 } else { current_index + 1 };
        Self {
            current,
            total,
            percentage: rounded_percentage(current, total),
        }
    }
}

/// Rounds `part / whole` to a whole percentage, 0 when `whole` is 0
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.).round() as u32
    }
}

/// The result of a session, captured by the caller once it finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Identifier assigned when the session was initialized
    pub session_id: SessionId,
    /// How the session was played
    pub mode: GameMode,
    /// Total points
    pub score: u64,
    /// Longest chain reached
    pub max_chain: u32,
    /// Total correct answers
    pub correct_count: u32,
    /// Number of questions in the session
    pub total_questions: usize,
    /// Correct answers as a rounded percentage of all questions
    pub accuracy: u32,
    /// Every resolved question in order
    pub answer_log: Vec<AnswerRecord>,
    /// Party players in turn order, empty for solo sessions
    pub players: Vec<PlayerStats>,
}

impl SessionSummary {
    /// Computes accuracy for `correct_count` out of `total_questions`
    pub fn accuracy_of(correct_count: u32, total_questions: usize) -> u32 {
        rounded_percentage(correct_count as usize, total_questions)
    }

    /// Converts the summary to a JSON string for the result sink
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}
