//! The game session state machine
//!
//! A [`Session`] owns one game from configuration to final summary. It is a
//! synchronous reducer: every operation runs to completion and the only
//! source of time is the [`Clock`] it was built with. Hosts drive the
//! countdown by calling [`Session::tick`] once per second while the session
//! is playing.
//!
//! Answering and advancing are separate steps. [`Session::answer_question`]
//! scores the current question and leaves it on screen so feedback can be
//! shown; [`Session::next_question`] moves on. A countdown that runs out is
//! the exception: [`Session::tick`] resolves and advances in one call.
//!
//! Calls made in the wrong state are ignored and reported through their
//! return value rather than as errors, so duplicate taps and late timer
//! callbacks are harmless.

use std::{fmt::Display, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::{
    answer::{AnswerOutcome, AnswerRecord},
    clock::{Clock, QuestionTimer, SystemClock},
    config::{GameConfig, GameMode},
    error::Error,
    leaderboard::{Leaderboard, PlayerStats, Progress, SessionSummary, Standing},
    lifeline::{self, Lifeline, Lifelines},
    question::Question,
    scoring,
};

/// A unique identifier for a session
///
/// Assigned on every `init_game` so a result sink can tell sessions apart.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay,
)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Lifecycle status of a session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No game configured
    #[default]
    Idle,
    /// Configured and waiting for `start_game`
    Loading,
    /// Questions are being answered and the countdown is running
    Playing,
    /// Countdown and answers are suspended
    Paused,
    /// The session is over; only `reset` or `init_game` leave this state
    Finished,
}

/// What a call to [`Session::tick`] did
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    /// The session was not playing, nothing changed
    Ignored,
    /// The countdown moved down by one second
    Counting {
        /// Seconds left on the current question
        remaining: u32,
    },
    /// The countdown ran out and the question was resolved and left behind
    TimedOut {
        /// The timeout entry, or `None` if the question had already been answered
        record: Option<AnswerRecord>,
        /// Whether that was the last question
        finished: bool,
    },
}

/// What spending a lifeline did
#[derive(Debug, Clone, PartialEq)]
pub enum LifelineOutcome {
    /// The question was logged as skipped and the session moved on
    Skipped(AnswerRecord),
    /// These option indices are now hidden on the current question
    FiftyFifty(Vec<usize>),
}

/// How the current question is being resolved
#[derive(Debug, Clone, Copy)]
enum Resolution {
    Selected(usize),
    TimedOut,
    Skipped,
}

/// Everything a session forgets on `reset`
#[derive(Debug, Clone, Default)]
struct State {
    session_id: Option<SessionId>,
    config: Option<GameConfig>,
    status: Status,
    current_question_index: usize,
    chain: u32,
    max_chain: u32,
    score: u64,
    correct_count: u32,
    time_remaining_seconds: u32,
    current_player_index: usize,
    answer_log: Vec<AnswerRecord>,
    /// Whether the current question already has a log entry
    answered: bool,
    timer: QuestionTimer,
    leaderboard: Leaderboard,
    lifelines: Lifelines,
    hidden_options: Vec<usize>,
}

/// A single trivia game session
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    clock: C,
    rng: fastrand::Rng,
    state: State,
}

impl Session<SystemClock> {
    /// Creates an idle session reading the wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Session<C> {
    /// Creates an idle session reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            rng: fastrand::Rng::new(),
            state: State::default(),
        }
    }

    /// Seeds the random source used by lifelines
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    /// Configures a new game, discarding any previous one
    ///
    /// All counters return to zero, the countdown is set to the configured
    /// time budget and the session moves to [`Status::Loading`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the configuration is rejected; the session is
    /// left untouched in that case.
    pub fn init_game(&mut self, config: GameConfig) -> Result<(), Error> {
        let config = config
            .validated()
            .inspect_err(|e| warn!(error = %e, "rejected game configuration"))?;

        let session_id = SessionId::new();
        debug!(
            session = %session_id,
            mode = ?config.mode,
            questions = config.question_count(),
            players = config.players.len(),
            "game initialized"
        );

        self.state = State {
            session_id: Some(session_id),
            status: Status::Loading,
            time_remaining_seconds: config.seconds_per_question,
            leaderboard: Leaderboard::new(config.players.as_slice()),
            lifelines: Lifelines::new(config.lifelines),
            config: Some(config),
            ..State::default()
        };
        Ok(())
    }

    /// Starts the countdown on the first question
    ///
    /// # Returns
    ///
    /// `true` if the session moved from `Loading` to `Playing`
    pub fn start_game(&mut self) -> bool {
        if self.state.status != Status::Loading {
            return false;
        }
        self.state.status = Status::Playing;
        self.state.timer.start(self.clock.now());
        debug!("game started");
        true
    }

    /// Answers the current question with the option at `selected_index`
    ///
    /// Scores the answer, extends or breaks the chain, and logs it. The
    /// question stays current until [`Session::next_question`] is called.
    /// An index with no option behind it counts as a wrong answer.
    ///
    /// # Returns
    ///
    /// The logged entry, or `None` if the session is not playing or the
    /// current question was already answered
    pub fn answer_question(&mut self, selected_index: usize) -> Option<AnswerRecord> {
        if self.state.status != Status::Playing || self.state.answered {
            return None;
        }
        self.resolve(Resolution::Selected(selected_index))
    }

    /// Moves to the next question, or finishes after the last one
    ///
    /// A question left without an answer is logged as skipped: no points,
    /// chain kept. On the last question the session finishes and the index
    /// stays on that question. Otherwise the index advances, the turn passes
    /// to the next party player, and the countdown restarts.
    ///
    /// # Returns
    ///
    /// `true` if the session was playing or paused and therefore advanced
    pub fn next_question(&mut self) -> bool {
        if !matches!(self.state.status, Status::Playing | Status::Paused) {
            return false;
        }
        if !self.state.answered {
            self.resolve(Resolution::Skipped);
        }

        let state = &mut self.state;
        let Some(config) = state.config.as_ref() else {
            return false;
        };

        if state.current_question_index + 1 >= config.question_count() {
            state.status = Status::Finished;
            debug!(
                score = state.score,
                max_chain = state.max_chain,
                correct = state.correct_count,
                "game finished"
            );
            return true;
        }

        state.current_question_index += 1;
        if config.mode == GameMode::Party && !config.players.is_empty() {
            state.current_player_index = (state.current_player_index + 1) % config.players.len();
        }
        state.time_remaining_seconds = config.seconds_per_question;
        state.answered = false;
        state.hidden_options.clear();
        state.timer.start(self.clock.now());
        debug!(
            index = state.current_question_index,
            player = state.current_player_index,
            "advanced to next question"
        );
        true
    }

    /// Counts the current question down by one second
    ///
    /// When the countdown reaches zero the question is resolved as timed
    /// out (wrong, chain broken) and the session advances in the same call.
    pub fn tick(&mut self) -> Tick {
        if self.state.status != Status::Playing {
            return Tick::Ignored;
        }

        let remaining = self.state.time_remaining_seconds.saturating_sub(1);
        self.state.time_remaining_seconds = remaining;
        if remaining > 0 {
            trace!(remaining, "tick");
            return Tick::Counting { remaining };
        }

        let record = if self.state.answered {
            None
        } else {
            self.resolve(Resolution::TimedOut)
        };
        self.next_question();
        Tick::TimedOut {
            record,
            finished: self.state.status == Status::Finished,
        }
    }

    /// Suspends the countdown and answer acceptance
    ///
    /// # Returns
    ///
    /// `true` if the session moved from `Playing` to `Paused`
    pub fn pause_game(&mut self) -> bool {
        if self.state.status != Status::Playing {
            return false;
        }
        self.state.status = Status::Paused;
        debug!("game paused");
        true
    }

    /// Resumes a paused session
    ///
    /// The question's start time is re-stamped to now, so time spent paused
    /// does not count against the answer.
    ///
    /// # Returns
    ///
    /// `true` if the session moved from `Paused` to `Playing`
    pub fn resume_game(&mut self) -> bool {
        if self.state.status != Status::Paused {
            return false;
        }
        self.state.status = Status::Playing;
        self.state.timer.start(self.clock.now());
        debug!("game resumed");
        true
    }

    /// Finishes the session early, keeping everything logged so far
    ///
    /// # Returns
    ///
    /// `true` if the session was playing or paused
    pub fn end_game(&mut self) -> bool {
        if !matches!(self.state.status, Status::Playing | Status::Paused) {
            return false;
        }
        self.state.status = Status::Finished;
        debug!(score = self.state.score, "game ended early");
        true
    }

    /// Returns to the idle state, whatever the current status
    pub fn reset(&mut self) {
        self.state = State::default();
        debug!("session reset");
    }

    /// Spends a lifeline on the current question
    ///
    /// * [`Lifeline::Skip`] logs the question as skipped and advances.
    /// * [`Lifeline::FiftyFifty`] hides two incorrect options; it can be
    ///   used once per question.
    ///
    /// # Returns
    ///
    /// What the lifeline did, or `None` if the session is not playing, the
    /// current question was already answered, or no use of `kind` is left
    pub fn use_lifeline(&mut self, kind: Lifeline) -> Option<LifelineOutcome> {
        if self.state.status != Status::Playing || self.state.answered {
            return None;
        }
        let question = self
            .state
            .config
            .as_ref()?
            .questions
            .get(self.state.current_question_index)?;

        match kind {
            Lifeline::Skip => {
                if !self.state.lifelines.try_use(kind) {
                    return None;
                }
                let record = self.resolve(Resolution::Skipped)?;
                self.next_question();
                debug!(lifeline = ?kind, "lifeline used");
                Some(LifelineOutcome::Skipped(record))
            }
            Lifeline::FiftyFifty => {
                if !self.state.hidden_options.is_empty() || !self.state.lifelines.try_use(kind) {
                    return None;
                }
                let hidden = lifeline::fifty_fifty(question, &mut self.rng);
                self.state.hidden_options.clone_from(&hidden);
                debug!(lifeline = ?kind, ?hidden, "lifeline used");
                Some(LifelineOutcome::FiftyFifty(hidden))
            }
        }
    }

    /// Scores and logs the current question
    fn resolve(&mut self, resolution: Resolution) -> Option<AnswerRecord> {
        let now = self.clock.now();
        let state = &mut self.state;
        let config = state.config.as_ref()?;
        let question = config.questions.get(state.current_question_index)?;

        let (outcome, selected_option) = match resolution {
            Resolution::Selected(index) if question.is_correct(index) => {
                (AnswerOutcome::Correct, question.option(index))
            }
            Resolution::Selected(index) => (AnswerOutcome::Incorrect, question.option(index)),
            Resolution::TimedOut => (AnswerOutcome::TimedOut, None),
            Resolution::Skipped => (AnswerOutcome::Skipped, None),
        };
        let is_correct = outcome == AnswerOutcome::Correct;

        let chain = if is_correct {
            state.chain + 1
        } else if outcome.breaks_chain() {
            0
        } else {
            state.chain
        };
        let multiplier = if is_correct {
            scoring::multiplier_for_chain(chain)
        } else {
            1
        };
        let elapsed = state.timer.elapsed(now);
        let points = scoring::calculate_points(
            question.difficulty,
            multiplier,
            Duration::from_secs(u64::from(config.seconds_per_question)),
            elapsed,
            is_correct,
        );
        let party = config.mode == GameMode::Party;

        let record = AnswerRecord {
            question_id: question.id.clone(),
            player: if party {
                config.players.get(state.current_player_index).cloned()
            } else {
                None
            },
            outcome,
            is_correct,
            elapsed,
            multiplier,
            points,
            selected_option: selected_option.map(ToOwned::to_owned),
        };

        state.score += points;
        state.chain = chain;
        state.max_chain = state.max_chain.max(chain);
        state.correct_count += u32::from(is_correct);
        if party {
            state
                .leaderboard
                .record(state.current_player_index, points, is_correct);
        }
        state.answer_log.push(record.clone());
        state.answered = true;

        debug!(
            question = %record.question_id,
            outcome = ?outcome,
            chain,
            multiplier,
            points,
            elapsed_ms = elapsed.as_millis() as u64,
            "question resolved"
        );
        Some(record)
    }

    /// Current lifecycle status
    pub fn status(&self) -> Status {
        self.state.status
    }

    /// The configuration in play, if a game has been initialized
    pub fn config(&self) -> Option<&GameConfig> {
        self.state.config.as_ref()
    }

    /// How the current game is played, if one has been initialized
    pub fn mode(&self) -> Option<GameMode> {
        self.state.config.as_ref().map(|c| c.mode)
    }

    /// Identifier of the current game, if one has been initialized
    pub fn session_id(&self) -> Option<SessionId> {
        self.state.session_id
    }

    /// The question at the current index
    pub fn current_question(&self) -> Option<&Question> {
        self.state
            .config
            .as_ref()?
            .questions
            .get(self.state.current_question_index)
    }

    /// 0-based index of the current question
    pub fn current_question_index(&self) -> usize {
        self.state.current_question_index
    }

    /// Number of questions in the current game
    pub fn question_count(&self) -> usize {
        self.state
            .config
            .as_ref()
            .map_or(0, GameConfig::question_count)
    }

    /// Whether the current question already has a log entry
    pub fn has_answered_current(&self) -> bool {
        self.state.answered
    }

    /// Consecutive correct answers so far
    pub fn chain(&self) -> u32 {
        self.state.chain
    }

    /// Longest chain reached this game
    pub fn max_chain(&self) -> u32 {
        self.state.max_chain
    }

    /// Total points
    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Total correct answers
    pub fn correct_count(&self) -> u32 {
        self.state.correct_count
    }

    /// Seconds left on the current question
    pub fn time_remaining_seconds(&self) -> u32 {
        self.state.time_remaining_seconds
    }

    /// Index of the party player whose turn it is
    pub fn current_player_index(&self) -> usize {
        self.state.current_player_index
    }

    /// Name of the party player whose turn it is
    pub fn current_player(&self) -> Option<&str> {
        let config = self.state.config.as_ref()?;
        if config.mode != GameMode::Party {
            return None;
        }
        config
            .players
            .get(self.state.current_player_index)
            .map(String::as_str)
    }

    /// Every resolved question so far, in order
    pub fn answer_log(&self) -> &[AnswerRecord] {
        &self.state.answer_log
    }

    /// Party players with their running totals, in turn order
    pub fn players(&self) -> &[PlayerStats] {
        self.state.leaderboard.players()
    }

    /// Party players ranked by score
    pub fn standings(&self) -> Vec<Standing> {
        self.state.leaderboard.standings()
    }

    /// Option indices hidden on the current question by a fifty-fifty
    pub fn hidden_options(&self) -> &[usize] {
        &self.state.hidden_options
    }

    /// Uses of `kind` left this game
    pub fn lifelines_remaining(&self, kind: Lifeline) -> u8 {
        self.state.lifelines.remaining(kind)
    }

    /// Position in the game for progress displays
    pub fn progress(&self) -> Progress {
        Progress::new(self.state.current_question_index, self.question_count())
    }

    /// The result of the current game
    ///
    /// Available from `init_game` onwards; callers normally take it once the
    /// session has finished.
    pub fn summary(&self) -> Option<SessionSummary> {
        let config = self.state.config.as_ref()?;
        let session_id = self.state.session_id?;
        let total_questions = config.question_count();

        Some(SessionSummary {
            session_id,
            mode: config.mode,
            score: self.state.score,
            max_chain: self.state.max_chain,
            correct_count: self.state.correct_count,
            total_questions,
            accuracy: SessionSummary::accuracy_of(self.state.correct_count, total_questions),
            answer_log: self.state.answer_log.clone(),
            players: self.state.leaderboard.players().to_vec(),
        })
    }
}
