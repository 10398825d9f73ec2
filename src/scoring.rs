//! Point calculation for answered questions
//!
//! A correct answer earns the question's base points, scaled by the chain
//! multiplier and boosted by up to half again for answering quickly.
//! Incorrect answers always earn nothing.

use std::time::Duration;

use crate::{constants::scoring, question::Difficulty};

/// Returns the multiplier earned by a chain of `chain` consecutive correct answers
///
/// Thresholds are checked from highest to lowest so the largest one reached
/// wins.
pub fn multiplier_for_chain(chain: u32) -> u32 {
    scoring::CHAIN_MULTIPLIERS
        .iter()
        .find(|(threshold, _)| chain >= *threshold)
        .map_or(1, |(_, multiplier)| *multiplier)
}

/// Returns the points a correct answer to a question of `difficulty` is worth
/// before multipliers and bonuses
pub fn base_points(difficulty: Difficulty) -> u64 {
    match difficulty {
        Difficulty::MEDIUM => scoring::MEDIUM_POINTS,
        Difficulty::HARD => scoring::HARD_POINTS,
        _ => scoring::EASY_POINTS,
    }
}

/// Fraction of the base points added for answering within `time_limit`
///
/// Decreases linearly from [`scoring::MAX_TIME_BONUS`] for an instant answer
/// to zero at the deadline, and stays at zero past it.
pub fn time_bonus(time_limit: Duration, elapsed: Duration) -> f64 {
    if time_limit.is_zero() {
        return 0.;
    }
    (1. - elapsed.as_secs_f64() / time_limit.as_secs_f64()).max(0.) * scoring::MAX_TIME_BONUS
}

/// Calculates the points awarded for an answer
///
/// # Arguments
///
/// * `difficulty` - Difficulty of the answered question
/// * `multiplier` - Chain multiplier in effect after this answer
/// * `time_limit` - Time allowed for the question
/// * `elapsed` - Time taken to answer
/// * `correct` - Whether the answer was correct
///
/// # Returns
///
/// `round(base * multiplier * (1 + bonus))` for a correct answer, otherwise 0
pub fn calculate_points(
    difficulty: Difficulty,
    multiplier: u32,
    time_limit: Duration,
    elapsed: Duration,
    correct: bool,
) -> u64 {
    if !correct {
        return 0;
    }
    (base_points(difficulty) as f64 * f64::from(multiplier) * (1. + time_bonus(time_limit, elapsed)))
        .round() as u64
}
