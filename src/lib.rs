//! # math_drill_gen
//!
//! An offline, deterministic question generator for brevet maths practice.
//!
//! The library builds randomised drill questions across seven topics
//! (numeric calculation, algebra, proportionality, probability and
//! statistics, geometry, functions, algorithmic literacy), assembles balanced
//! practice sessions, and checks free-form answers the way a student types
//! them (decimal comma, typographic minus, `π` or `pi`).
//!
//! ## How it works
//!
//! 1. Pick a [`Category`] and call [`generate_question`], or pick a
//!    [`PracticeMode`] and call [`generate_session`].
//! 2. Each topic dispatcher draws one question family uniformly and builds a
//!    [`Question`] whose answer is derived from the same parameters shown in
//!    the text. Multiple-choice questions always carry four distinct options.
//! 3. Feed the player's input to [`check_answer`] (or
//!    [`Session::submit_text`], which also keeps the score).
//!
//! Pass `rng_seed: Some(u64)` to reproduce the exact same questions.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{
//!     check_answer, generate_question, generate_session, Category, PracticeMode,
//!     QuestionRequest, SessionRequest,
//! };
//!
//! let q = generate_question(QuestionRequest::seeded(Category::Geometry, 42));
//! println!("[{}] {}", q.format(), q.question);
//! assert!(check_answer(&q, &q.correct_text()));
//!
//! let mut session = generate_session(SessionRequest {
//!     mode: PracticeMode::Brevet,
//!     count: 10,
//!     rng_seed: Some(7),
//! });
//! while let Some(q) = session.current() {
//!     let answer = q.correct_text();
//!     session.submit_text(&answer);
//! }
//! assert_eq!(session.score(), 10);
//! ```

pub mod drill_engine;

pub use drill_engine::{
    build_session, check_answer, check_answer_with, check_boolean, check_numeric,
    generate_question, generate_scientific, generate_session, generate_theorem, Answer,
    AnswerMode, AnswerRecord, Category, CategoryScore, Choice, DrillConfig, DrillError,
    PlayerProfile, PracticeMode, ProfileStore, Question, QuestionFormat, QuestionRequest,
    SeededFractionDrill, Session, SessionRequest, Tolerance,
};
