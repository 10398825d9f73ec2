//! Property tests for the session state machine.
//!
//! Sessions are driven by random sequences of operations and checked for:
//! - score, max chain and correct count never decrease
//! - the answer log never outgrows the question list
//! - a finished session has logged every question it advanced through
//! - party turns rotate once per advance

use std::time::Duration;

use proptest::prelude::*;

use crate::{
    clock::ManualClock,
    config::GameConfig,
    lifeline::Lifeline,
    question::{Difficulty, Question},
    session::{Session, Status},
};

#[derive(Debug, Clone)]
enum Op {
    Answer(usize),
    Next,
    Tick,
    Pause,
    Resume,
    Wait(u64),
    Lifeline(Lifeline),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..6).prop_map(Op::Answer),
        3 => Just(Op::Next),
        4 => Just(Op::Tick),
        1 => Just(Op::Pause),
        1 => Just(Op::Resume),
        2 => (0u64..20_000).prop_map(Op::Wait),
        1 => prop_oneof![Just(Lifeline::Skip), Just(Lifeline::FiftyFifty)].prop_map(Op::Lifeline),
    ]
}

fn questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| {
            Question::new(
                format!("q{i}").as_str(),
                "General",
                Difficulty((i % 4) as u8),
                "Which option is correct?",
                ["A", "B", "C", "D"],
                i % 4,
            )
        })
        .collect()
}

fn apply(session: &mut Session<ManualClock>, clock: &ManualClock, op: &Op) {
    match op {
        Op::Answer(index) => {
            session.answer_question(*index);
        }
        Op::Next => {
            session.next_question();
        }
        Op::Tick => {
            session.tick();
        }
        Op::Pause => {
            session.pause_game();
        }
        Op::Resume => {
            session.resume_game();
        }
        Op::Wait(millis) => clock.advance(Duration::from_millis(*millis)),
        Op::Lifeline(kind) => {
            session.use_lifeline(*kind);
        }
    }
}

proptest! {
    /// Property: totals are monotonic
    /// No sequence of operations lowers score, max chain or correct count.
    #[test]
    fn prop_totals_never_decrease(
        count in 1usize..8,
        seconds in 1u32..5,
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let clock = ManualClock::new();
        let mut session = Session::with_clock(clock.clone()).with_seed(3);
        session
            .init_game(GameConfig::solo(questions(count)).with_seconds_per_question(seconds))
            .unwrap();
        session.start_game();

        let mut last = (session.score(), session.max_chain(), session.correct_count());
        for op in &ops {
            apply(&mut session, &clock, op);
            let now = (session.score(), session.max_chain(), session.correct_count());
            prop_assert!(now.0 >= last.0, "score dropped after {op:?}");
            prop_assert!(now.1 >= last.1, "max chain dropped after {op:?}");
            prop_assert!(now.2 >= last.2, "correct count dropped after {op:?}");
            prop_assert!(session.chain() <= session.max_chain());
            last = now;
        }
    }

    /// Property: the answer log tracks the question index
    /// While in play the log holds one entry per question left behind, plus
    /// one if the current question is resolved; a session finished by
    /// advancing has logged every question.
    #[test]
    fn prop_log_matches_progress(
        count in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let clock = ManualClock::new();
        let mut session = Session::with_clock(clock.clone()).with_seed(5);
        session
            .init_game(GameConfig::solo(questions(count)).with_seconds_per_question(2))
            .unwrap();
        session.start_game();

        for op in &ops {
            apply(&mut session, &clock, op);
            let log = session.answer_log().len();
            prop_assert!(log <= count);
            prop_assert!(session.current_question_index() < count);
            match session.status() {
                Status::Playing | Status::Paused => {
                    let expected = session.current_question_index()
                        + usize::from(session.has_answered_current());
                    prop_assert_eq!(log, expected);
                }
                Status::Finished => prop_assert_eq!(log, count),
                Status::Idle | Status::Loading => prop_assert!(false, "left play unexpectedly"),
            }
            prop_assert!(session.time_remaining_seconds() <= 2);
        }
    }

    /// Property: party turns rotate round-robin
    /// After k advances the current player is k mod N.
    #[test]
    fn prop_party_rotation(
        players in 1usize..6,
        advances in 0usize..12,
    ) {
        let names = (0..players).map(|i| format!("Player {i}")).collect::<Vec<_>>();
        let mut session = Session::with_clock(ManualClock::new());
        session
            .init_game(GameConfig::party(questions(advances + 1), names))
            .unwrap();
        session.start_game();

        for step in 0..advances {
            prop_assert_eq!(session.current_player_index(), step % players);
            session.next_question();
        }
        prop_assert_eq!(session.current_player_index(), advances % players);
        prop_assert_eq!(session.status(), Status::Playing);

        let answered: u32 = session.players().iter().map(|p| p.answered_count).sum();
        prop_assert_eq!(answered as usize, advances);
    }

    /// Property: reset always returns to idle
    #[test]
    fn prop_reset_returns_to_idle(
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let clock = ManualClock::new();
        let mut session = Session::with_clock(clock.clone());
        session.init_game(GameConfig::solo(questions(4))).unwrap();
        session.start_game();
        for op in &ops {
            apply(&mut session, &clock, op);
        }

        session.reset();

        prop_assert_eq!(session.status(), Status::Idle);
        prop_assert_eq!(session.score(), 0);
        prop_assert_eq!(session.max_chain(), 0);
        prop_assert!(session.answer_log().is_empty());
        prop_assert!(session.summary().is_none());
    }
}
