//! Core drill engine: question generation, session assembly and answer checking.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: categories, question record, answer variants, requests |
//! | `rng`         | Integer draws, uniform pick, Fisher-Yates shuffle, gcd, smallest prime factor |
//! | `deck`        | Shuffled no-repeat queue, reshuffled when exhausted |
//! | `distractors` | Multiple-choice dedup and padding to exactly four options |
//! | `tables`      | Fixed data: fraction/decimal/percent table, statement banks, unit conversions |
//! | `helpers`     | Question builders and French number formatting |
//! | `generator`   | Seeded entry points `generate_question()` and the level drills |
//! | `session`     | Balanced session assembly and round state |
//! | `checker`     | Answer normalization, exact and numeric comparison |
//! | `config`      | TOML configuration |
//! | `profile`     | Local player profile record |
//! | `error`       | `DrillError` |
//! | `topics`      | Question families grouped by topic |

pub mod checker;
pub mod config;
pub mod deck;
pub mod distractors;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod profile;
pub mod rng;
pub mod session;
pub mod tables;
pub mod topics;

pub use checker::{check_answer, check_answer_with, check_boolean, check_numeric, AnswerMode};
pub use config::{DrillConfig, Tolerance};
pub use error::DrillError;
pub use generator::{generate_question, generate_scientific, generate_theorem, SeededFractionDrill};
pub use models::{
    Answer, Category, Choice, PracticeMode, Question, QuestionFormat, QuestionRequest,
    SessionRequest,
};
pub use profile::{PlayerProfile, ProfileStore};
pub use session::{build_session, generate_session, AnswerRecord, CategoryScore, Session};
