//! Configuration constants for the chainquiz session engine
//!
//! This module contains the limits and numeric policy used throughout the
//! session state machine: default timings, validation bounds, point values
//! and the chain multiplier ladder.

/// Session-wide limits and defaults
pub mod session {
    /// Default number of seconds a player has to answer a question
    pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 15;
    /// Minimum allowed seconds per question
    pub const MIN_SECONDS_PER_QUESTION: u32 = 1;
    /// Maximum allowed seconds per question
    pub const MAX_SECONDS_PER_QUESTION: u32 = 240;
    /// Maximum number of questions in a single session
    pub const MAX_QUESTION_COUNT: usize = 200;
}

/// Question content constraints
pub mod question {
    /// Number of answer options every question carries
    pub const OPTION_COUNT: usize = 4;
    /// Largest valid index into a question's options
    pub const LAST_OPTION_INDEX: usize = OPTION_COUNT - 1;
    /// Maximum length of a question prompt in characters
    pub const MAX_PROMPT_LENGTH: usize = 500;
    /// Maximum length of a single answer option in characters
    pub const MAX_OPTION_LENGTH: usize = 200;
    /// Maximum length of a category label
    pub const MAX_CATEGORY_LENGTH: usize = 100;
}

/// Party mode constraints
pub mod party {
    /// Maximum number of players sharing a device in party mode
    pub const MAX_PLAYER_COUNT: usize = 12;
    /// Maximum length of a player name in bytes
    pub const MAX_NAME_LENGTH: usize = 30;
}

/// Point values and multipliers
pub mod scoring {
    /// Base points for an easy (difficulty 1) question
    pub const EASY_POINTS: u64 = 100;
    /// Base points for a medium (difficulty 2) question
    pub const MEDIUM_POINTS: u64 = 150;
    /// Base points for a hard (difficulty 3) question
    pub const HARD_POINTS: u64 = 200;
    /// Largest fraction of the base points added for an instant answer
    pub const MAX_TIME_BONUS: f64 = 0.5;
    /// Chain thresholds and their multipliers, highest threshold first
    pub const CHAIN_MULTIPLIERS: [(u32, u32); 5] = [(10, 10), (8, 8), (5, 5), (3, 3), (2, 2)];
}

/// Lifeline defaults
pub mod lifeline {
    /// Skips granted per session unless configured otherwise
    pub const DEFAULT_SKIPS: u8 = 1;
    /// Fifty-fifty uses granted per session unless configured otherwise
    pub const DEFAULT_FIFTY_FIFTY: u8 = 1;
    /// Number of incorrect options removed by a fifty-fifty
    pub const FIFTY_FIFTY_HIDDEN: usize = 2;
}
