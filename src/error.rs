//! Errors raised when a session is configured
//!
//! Only `init_game` can fail. Every other operation on a running session
//! ignores calls made in the wrong state instead of erroring.

use thiserror::Error;

use crate::{names, question::QuestionId};

/// Reasons a game configuration is rejected
#[derive(Error, Debug)]
pub enum Error {
    /// A field is outside its allowed bounds
    #[error("invalid configuration: {0}")]
    Invalid(#[from] garde::Report),
    /// Party mode was configured without any players
    #[error("party mode needs at least one player")]
    NoPlayers,
    /// Solo chain mode was configured with players
    #[error("solo chain mode does not take players")]
    UnexpectedPlayers,
    /// Two questions share an identifier
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),
    /// A party player name was rejected
    #[error(transparent)]
    Name(#[from] names::Error),
}
