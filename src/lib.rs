//! # Chainquiz Session Library
//!
//! This library provides the game-session core of a trivia app: scoring,
//! chain multipliers, countdown-driven timeouts, lifelines, and turn
//! rotation for local party play. Question fetching, persistence and
//! presentation are left to the caller, which feeds a [`GameConfig`] into a
//! [`Session`] and takes a [`SessionSummary`] out when the game finishes.
//!
//! [`GameConfig`]: config::GameConfig
//! [`Session`]: session::Session
//! [`SessionSummary`]: leaderboard::SessionSummary

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::doc_markdown)]

pub mod answer;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod leaderboard;
pub mod lifeline;
pub mod names;
pub mod question;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests_props;
