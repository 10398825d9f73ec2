//! Session configuration
//!
//! A [`GameConfig`] is fixed when a session is initialized and never changes
//! afterwards. It carries the pre-fetched questions, the time budget per
//! question, and for party mode the players in turn order.

use enum_map::EnumMap;
use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    constants,
    error::Error,
    lifeline::{self, Lifeline},
    names::{NameStyle, Names},
    question::Question,
};

/// How a session is played
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// A single player building the longest chain of correct answers
    #[default]
    SoloChain,
    /// Several players sharing one device, taking turns question by question
    Party,
}

fn default_seconds_per_question() -> u32 {
    constants::session::DEFAULT_SECONDS_PER_QUESTION
}

/// Immutable configuration of a single session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// How the session is played
    #[garde(skip)]
    pub mode: GameMode,
    /// Questions in play order; their count is the session length
    #[garde(length(min = 1, max = constants::session::MAX_QUESTION_COUNT), dive)]
    pub questions: Vec<Question>,
    /// Seconds allowed per question
    #[garde(range(
        min = constants::session::MIN_SECONDS_PER_QUESTION,
        max = constants::session::MAX_SECONDS_PER_QUESTION
    ))]
    #[serde(default = "default_seconds_per_question")]
    pub seconds_per_question: u32,
    /// Player names in turn order (party mode only)
    #[garde(length(max = constants::party::MAX_PLAYER_COUNT))]
    #[serde(default)]
    pub players: Vec<String>,
    /// Lifelines granted for the whole session
    #[garde(skip)]
    #[serde(default = "lifeline::default_allowance")]
    pub lifelines: EnumMap<Lifeline, u8>,
    /// Style used to name party players who left their name blank
    #[garde(dive)]
    #[serde(default)]
    pub random_names: Option<NameStyle>,
}

impl GameConfig {
    /// Creates a solo chain configuration with default timing and lifelines
    pub fn solo(questions: Vec<Question>) -> Self {
        Self {
            mode: GameMode::SoloChain,
            questions,
            seconds_per_question: default_seconds_per_question(),
            players: Vec::new(),
            lifelines: lifeline::default_allowance(),
            random_names: None,
        }
    }

    /// Creates a party configuration with default timing and lifelines
    pub fn party<S: Into<String>>(
        questions: Vec<Question>,
        players: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            mode: GameMode::Party,
            players: players.into_iter().map(Into::into).collect(),
            ..Self::solo(questions)
        }
    }

    /// Sets the seconds allowed per question
    #[must_use]
    pub fn with_seconds_per_question(mut self, seconds: u32) -> Self {
        self.seconds_per_question = seconds;
        self
    }

    /// Sets the lifelines granted for the session
    #[must_use]
    pub fn with_lifelines(mut self, lifelines: EnumMap<Lifeline, u8>) -> Self {
        self.lifelines = lifelines;
        self
    }

    /// Sets the style used to name players who left their name blank
    #[must_use]
    pub fn with_random_names(mut self, style: NameStyle) -> Self {
        self.random_names = Some(style);
        self
    }

    /// Number of questions in the session
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Checks the configuration and resolves party player names
    ///
    /// # Returns
    ///
    /// The configuration with player names trimmed and blank names filled in
    ///
    /// # Errors
    ///
    /// * `Error::Invalid` - A field or question is outside its bounds
    /// * `Error::DuplicateQuestion` - Two questions share an id
    /// * `Error::NoPlayers` - Party mode without players
    /// * `Error::UnexpectedPlayers` - Solo chain mode with players
    /// * `Error::Name` - A player name was rejected
    pub fn validated(mut self) -> Result<Self, Error> {
        self.validate()?;

        if let Some(id) = self.questions.iter().map(|q| &q.id).duplicates().next() {
            return Err(Error::DuplicateQuestion(id.clone()));
        }

        match self.mode {
            GameMode::SoloChain if !self.players.is_empty() => {
                return Err(Error::UnexpectedPlayers);
            }
            GameMode::Party if self.players.is_empty() => return Err(Error::NoPlayers),
            GameMode::Party => {
                self.players = Names::from_requested(self.players.as_slice(), self.random_names)?.into_vec();
            }
            GameMode::SoloChain => {}
        }

        Ok(self)
    }
}
