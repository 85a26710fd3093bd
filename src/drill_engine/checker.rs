//! Answer checking.
//!
//! Free-form strings are normalized before comparison: surrounding whitespace
//! trimmed, decimal commas turned into points, inner whitespace removed, the
//! typographic minus mapped to `-` and `π` spelled `pi`. Multiple-choice
//! answers are compared verbatim since the player picks one of the displayed
//! strings.

use serde::{Deserialize, Serialize};

use crate::drill_engine::models::{Answer, Question};

/// Vocabulary read as "true" by a true/false question.
const TRUE_WORDS: &[&str] = &["vrai", "true", "oui"];

/// How a free-input answer is compared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum AnswerMode {
    /// Normalized string equality against the accepted set.
    Exact,
    /// `|parsed − expected| < tolerance` on the canonical value.
    Numeric { tolerance: f64 },
}

pub fn normalize(raw: &str) -> String {
    raw.trim()
        .replace(',', ".")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace('\u{2212}', "-")
        .replace('π', "pi")
}

/// A decimal number or a `num/den` fraction, after normalization.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = normalize(raw);
    if let Some((n, d)) = s.split_once('/') {
        let n: f64 = n.parse().ok()?;
        let d: f64 = d.parse().ok()?;
        if d == 0.0 {
            return None;
        }
        return Some(n / d);
    }
    s.parse().ok().filter(|v: &f64| v.is_finite())
}

pub fn check_answer(question: &Question, raw: &str) -> bool {
    match &question.answer {
        Answer::MultipleChoice { choices } => choices
            .iter()
            .find(|c| c.is_correct)
            .is_some_and(|c| c.text == raw),
        Answer::TrueFalse { expected } => {
            let said = normalize(raw).to_lowercase();
            TRUE_WORDS.contains(&said.as_str()) == *expected
        }
        Answer::FreeInput { canonical, accepted } => {
            let clean = normalize(raw);
            if accepted.is_empty() {
                clean == normalize(canonical)
            } else {
                accepted.iter().any(|a| normalize(a) == clean)
            }
        }
    }
}

/// Direct boolean selection for true/false questions; `false` for any other
/// format.
pub fn check_boolean(question: &Question, value: bool) -> bool {
    matches!(question.answer, Answer::TrueFalse { expected } if expected == value)
}

/// Numeric comparison. Unparseable input is simply wrong.
pub fn check_numeric(raw: &str, expected: f64, tolerance: f64) -> bool {
    parse_number(raw).is_some_and(|v| (v - expected).abs() < tolerance)
}

/// [`check_answer`] with the comparison mode chosen by the caller. Numeric
/// mode only changes how free-input questions are compared.
pub fn check_answer_with(question: &Question, raw: &str, mode: AnswerMode) -> bool {
    match (mode, &question.answer) {
        (AnswerMode::Numeric { tolerance }, Answer::FreeInput { canonical, .. }) => {
            match parse_number(canonical) {
                Some(expected) => check_numeric(raw, expected, tolerance),
                None => {
                    tracing::debug!(%canonical, "canonical answer is not numeric, comparing exactly");
                    check_answer(question, raw)
                }
            }
        }
        _ => check_answer(question, raw),
    }
}
