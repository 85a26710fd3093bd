//! Multiple-choice option assembly.
//!
//! Generators compute "common mistake" values that sometimes coincide with the
//! right answer (or with each other) for particular draws, either as the same
//! text or as an equivalent value (`3/6` next to `1/2`). [`dedup_choices`]
//! keeps the first occurrence of each text, drops anything numerically equal
//! to the correct answer, then tops the set back up to [`CHOICE_COUNT`] with
//! synthesized alternatives.

use std::collections::HashSet;

use rand::RngCore;

use crate::drill_engine::{
    checker::parse_number,
    helpers::format_decimal,
    models::Choice,
    rng::{chance, shuffle},
};

pub const CHOICE_COUNT: usize = 4;

/// Numeric offsets tried before switching to textual placeholders.
pub const MAX_SYNTHESIS_ATTEMPTS: usize = 10;

/// Values closer than this count as the same answer.
const SAME_VALUE_EPSILON: f64 = 1e-9;

/// Build exactly four choices with pairwise-distinct text and exactly one
/// correct entry, in random order. No wrong choice has the correct value.
pub fn dedup_choices(rng: &mut dyn RngCore, correct: &str, candidates: Vec<String>) -> Vec<Choice> {
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(correct.to_string());
    let mut result = vec![Choice { text: correct.to_string(), is_correct: true }];
    let correct_value = parse_number(correct);

    for text in candidates {
        if result.len() == CHOICE_COUNT {
            break;
        }
        if same_value(correct_value, &text) {
            tracing::debug!(correct, candidate = %text, "dropping distractor equal to the answer");
            continue;
        }
        if seen.insert(text.clone()) {
            result.push(Choice { text, is_correct: false });
        }
    }

    if result.len() < CHOICE_COUNT {
        tracing::debug!(correct, kept = result.len(), "padding colliding distractors");
        pad_choices(rng, correct, correct_value, &mut seen, &mut result);
    }

    shuffle(rng, &result)
}

fn same_value(correct_value: Option<f64>, text: &str) -> bool {
    match (correct_value, parse_number(text)) {
        (Some(a), Some(b)) => (a - b).abs() < SAME_VALUE_EPSILON,
        _ => false,
    }
}

fn pad_choices(
    rng: &mut dyn RngCore,
    correct: &str,
    correct_value: Option<f64>,
    seen: &mut HashSet<String>,
    result: &mut Vec<Choice>,
) {
    if let Some((value, suffix)) = leading_number(correct) {
        for k in 1..=MAX_SYNTHESIS_ATTEMPTS {
            if result.len() == CHOICE_COUNT {
                return;
            }
            let offset = if chance(rng, 0.5) { k as f64 } else { -(k as f64) };
            let text = format!("{}{}", format_decimal(value + offset), suffix);
            if !same_value(correct_value, &text) && seen.insert(text.clone()) {
                result.push(Choice { text, is_correct: false });
            }
        }
    }

    // At most three placeholders can collide with what is already kept, so
    // this loop always fills the set within its bound.
    for k in 1..=(2 * CHOICE_COUNT) {
        if result.len() == CHOICE_COUNT {
            return;
        }
        let text = format!("{} ({})", correct, ordinal(k));
        if seen.insert(text.clone()) {
            result.push(Choice { text, is_correct: false });
        }
    }
}

fn ordinal(k: usize) -> String {
    if k == 1 { "1er".to_string() } else { format!("{}e", k) }
}

/// Split `"12π cm²"` into `(12.0, "π cm²")`.
///
/// Accepts an optional ASCII or typographic minus, digits and a decimal comma
/// or point; narrow no-break spaces between digits are ignored. Returns `None`
/// when the text does not start with a number or the number is the
/// coefficient of an expression (`"3x + 2"`, `"3(2x + 5)"`). A fraction keeps
/// its denominator as the suffix, so `"5/6"` offsets its numerator.
pub fn leading_number(text: &str) -> Option<(f64, String)> {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut i = 0;
    let mut literal = String::new();
    if matches!(chars.first(), Some('-') | Some('\u{2212}')) {
        literal.push('-');
        i += 1;
    }
    let digits_start = i;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            literal.push(c);
        } else if (c == ',' || c == '.') && !literal.contains('.') {
            literal.push('.');
        } else if c == '\u{202F}' || c == '\u{00A0}' {
            // thousands separator
        } else {
            break;
        }
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    let rest: String = chars[i..].iter().collect();
    if rest.starts_with('x') || rest.starts_with('(') {
        return None;
    }
    let value = literal.trim_end_matches('.').parse::<f64>().ok()?;
    Some((value, rest))
}
