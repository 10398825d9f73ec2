//! Party player name management and validation
//!
//! Party mode passes one device around a group, so every player is known
//! only by name. This module validates those names (length, content,
//! uniqueness) and can invent names for players who left theirs blank.

use std::collections::HashSet;

use heck::ToTitleCase;
use rustrict::CensorStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

/// Number of attempts at generating a unique random name before falling
/// back to a numbered one
const GENERATION_ATTEMPTS: usize = 32;

/// Defines the style of automatically generated player names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, garde::Validate)]
pub enum NameStyle {
    /// Roman-style names (praenomen + nomen, optionally + cognomen)
    Roman(#[garde(range(min = 2, max = 3))] usize),
    /// Pet-style names (adjective + animal combinations)
    Petname(#[garde(range(min = 2, max = 3))] usize),
}

impl Default for NameStyle {
    /// Default name style is Petname with 2 words
    fn default() -> Self {
        Self::Petname(2)
    }
}

impl NameStyle {
    /// Generates a random name according to this style
    pub fn get_name(&self) -> String {
        match self {
            Self::Roman(count) => romanname::romanname(romanname::NameConfig {
                praenomen: *count > 2,
            }),
            Self::Petname(count) => petname::petname(*count as u8, " ").unwrap_or_default(),
        }
        .to_title_case()
    }
}

/// Errors that can occur during name validation
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested name is already used by another player
    #[error("name already in-use: {0}")]
    Used(String),
    /// The name is empty or contains only whitespace
    #[error("name cannot be empty")]
    Empty,
    /// The name contains inappropriate content
    #[error("name is inappropriate")]
    Sinful,
    /// The name exceeds the maximum allowed length
    #[error("name is too long")]
    TooLong,
}

/// The ordered, de-duplicated list of names in a party
#[derive(Debug, Default, Clone)]
pub struct Names {
    /// Names in turn order
    ordered: Vec<String>,
    /// Set of all existing names for quick uniqueness checks
    existing: HashSet<String>,
}

impl Names {
    /// Validates and adds a player name
    ///
    /// # Returns
    ///
    /// The trimmed name that was stored
    ///
    /// # Errors
    ///
    /// * `Error::TooLong` - Name exceeds the party name length limit
    /// * `Error::Empty` - Name is empty after trimming whitespace
    /// * `Error::Sinful` - Name contains inappropriate content
    /// * `Error::Used` - Name is already taken by another player
    pub fn add(&mut self, name: &str) -> Result<String, Error> {
        if name.len() > constants::party::MAX_NAME_LENGTH {
            return Err(Error::TooLong);
        }
        let name = rustrict::trim_whitespace(name);
        if name.is_empty() {
            return Err(Error::Empty);
        }
        if name.is_inappropriate() {
            return Err(Error::Sinful);
        }
        if !self.existing.insert(name.to_owned()) {
            return Err(Error::Used(name.to_owned()));
        }
        self.ordered.push(name.to_owned());
        Ok(name.to_owned())
    }

    /// Adds a freshly generated name that no other player uses
    pub fn add_generated(&mut self, style: NameStyle) -> String {
        for _ in 0..GENERATION_ATTEMPTS {
            let candidate = style.get_name();
            if let Ok(name) = self.add(&candidate) {
                return name;
            }
        }
        let mut number = self.ordered.len() + 1;
        loop {
            if let Ok(name) = self.add(&format!("Player {number}")) {
                return name;
            }
            number += 1;
        }
    }

    /// Builds a party roster from caller-supplied names
    ///
    /// Blank names are replaced by generated ones when `random_names` is
    /// set, otherwise they are rejected.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered.
    pub fn from_requested<S: AsRef<str>>(
        requested: &[S],
        random_names: Option<NameStyle>,
    ) -> Result<Self, Error> {
        let mut names = Self::default();
        for name in requested {
            let name = name.as_ref();
            match random_names {
                Some(style) if name.trim().is_empty() => {
                    names.add_generated(style);
                }
                _ => {
                    names.add(name)?;
                }
            }
        }
        Ok(names)
    }

    /// Names in turn order
    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    /// Consumes the roster, returning names in turn order
    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether no names have been added
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
