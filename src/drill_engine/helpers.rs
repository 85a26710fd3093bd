//! Shared builder and formatting functions used by every topic generator.
//!
//! Topic files compute parameters and the correct value; the helpers here turn
//! those into display strings (French notation: decimal comma, `−` for minus
//! signs inside expressions, superscript exponents) and into [`Question`]
//! records with the right answer variant.

use rand::RngCore;

use crate::drill_engine::{
    distractors::dedup_choices,
    models::{Answer, Category, Question},
};

/// Multiple-choice question; `distractors` may contain duplicates of each
/// other or values equal to `correct`, [`dedup_choices`] sorts that out.
pub fn multiple_choice(
    rng: &mut dyn RngCore,
    category: Category,
    question: impl Into<String>,
    correct: impl Into<String>,
    distractors: Vec<String>,
) -> Question {
    Question {
        category,
        question: question.into(),
        answer: Answer::MultipleChoice {
            choices: dedup_choices(rng, &correct.into(), distractors),
        },
        hint: None,
    }
}

pub fn true_false(category: Category, question: impl Into<String>, expected: bool) -> Question {
    Question {
        category,
        question: question.into(),
        answer: Answer::TrueFalse { expected },
        hint: None,
    }
}

/// Free-input question whose accepted set is derived from `canonical`.
pub fn free_input(category: Category, question: impl Into<String>, canonical: impl Into<String>) -> Question {
    let canonical = canonical.into();
    Question {
        category,
        question: question.into(),
        answer: Answer::FreeInput {
            accepted: accepted_variants(&canonical),
            canonical,
        },
        hint: None,
    }
}

/// Free-input question with an integer answer.
pub fn integer_input(category: Category, question: impl Into<String>, value: i64) -> Question {
    free_input(category, question, value.to_string())
}

/// Every notation a canonical answer may reasonably be typed in: the
/// canonical form, the typographic minus and the decimal point form.
pub fn accepted_variants(canonical: &str) -> Vec<String> {
    let mut out = vec![canonical.to_string()];
    let mut push = |s: String| {
        if !out.contains(&s) {
            out.push(s);
        }
    };
    if canonical.contains('-') {
        push(canonical.replace('-', "\u{2212}"));
    }
    if canonical.contains('\u{2212}') {
        push(canonical.replace('\u{2212}', "-"));
    }
    if canonical.contains(',') {
        push(canonical.replace(',', "."));
    }
    out
}

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// Decimal-comma rendering with trailing zeros removed (`2.50` → `"2,5"`).
/// Negatives take the typographic minus.
pub fn format_decimal(value: f64) -> String {
    let rounded = (value * 1_000_000.0).round() / 1_000_000.0;
    if rounded == rounded.trunc() {
        return signed_number(rounded as i64);
    }
    let s = format!("{:.6}", rounded.abs());
    let s = s.trim_end_matches('0').trim_end_matches('.').replace('.', ",");
    if rounded < 0.0 { format!("\u{2212}{s}") } else { s }
}

/// Display form of an integer: `-4` → `"−4"`.
pub fn signed_number(n: i64) -> String {
    if n < 0 { format!("\u{2212}{}", n.unsigned_abs()) } else { n.to_string() }
}

/// Unicode superscript digits for an exponent (`-1` → `⁻¹`).
pub fn superscript(n: i64) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '-' => '\u{207B}',
            '0' => '\u{2070}',
            '1' => '\u{00B9}',
            '2' => '\u{00B2}',
            '3' => '\u{00B3}',
            '4' => '\u{2074}',
            '5' => '\u{2075}',
            '6' => '\u{2076}',
            '7' => '\u{2077}',
            '8' => '\u{2078}',
            '9' => '\u{2079}',
            other => other,
        })
        .collect()
}

/// `10` followed by a superscript exponent.
pub fn power_of_ten(exp: i64) -> String {
    format!("10{}", superscript(exp))
}

/// Negative operands are wrapped in parentheses: `-3` → `"(−3)"`.
pub fn operand(n: i64) -> String {
    if n < 0 { format!("({})", signed_number(n)) } else { n.to_string() }
}

/// `"− 4"` / `"+ 4"` tail of an affine expression.
pub fn signed_tail(b: i64) -> String {
    if b >= 0 { format!("+ {}", b) } else { format!("\u{2212} {}", b.abs()) }
}

/// Coefficient times a variable, dropping a unit coefficient (`1x` → `x`).
pub fn monomial(coef: i64, var: &str) -> String {
    match coef {
        1  => var.to_string(),
        -1 => format!("\u{2212}{}", var),
        c if c < 0 => format!("{}{}", signed_number(c), var),
        _  => format!("{}{}", coef, var),
    }
}

/// `"ax + b"` with the sign of `b` folded into the operator.
pub fn affine(a: i64, b: i64) -> String {
    format!("{} {}", monomial(a, "x"), signed_tail(b))
}

/// Reduced `num/den` with the sign carried by the numerator.
pub fn reduced_fraction(num: i64, den: i64) -> (i64, i64) {
    let g = crate::drill_engine::rng::gcd(num, den).max(1);
    let (n, d) = (num / g, den / g);
    if d < 0 { (-n, -d) } else { (n, d) }
}

pub fn fraction_text(num: i64, den: i64) -> String {
    format!("{}/{}", signed_number(num), signed_number(den))
}

/// Every number shown in `s`, in order. A minus (ASCII or typographic)
/// counts as a sign only when a digit follows it directly; a decimal comma or
/// point only when digits surround it.
#[cfg(test)]
pub(crate) fn numbers_in(s: &str) -> Vec<f64> {
    let chars: Vec<char> = s.chars().collect();
    let digit_at = |i: usize| chars.get(i).is_some_and(|c| c.is_ascii_digit());
    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let negative = matches!(chars[i], '-' | '\u{2212}') && digit_at(i + 1);
        if !negative && !digit_at(i) {
            i += 1;
            continue;
        }
        let mut literal = String::new();
        if negative {
            literal.push('-');
            i += 1;
        }
        while i < chars.len() {
            let c = chars[i];
            if c.is_ascii_digit() {
                literal.push(c);
            } else if matches!(c, ',' | '.') && !literal.contains('.') && digit_at(i + 1) {
                literal.push('.');
            } else {
                break;
            }
            i += 1;
        }
        if let Ok(v) = literal.parse() {
            out.push(v);
        }
    }
    out
}

/// Inverse of [`superscript`].
#[cfg(test)]
pub(crate) fn from_superscript(s: &str) -> i64 {
    let plain: String = s
        .chars()
        .filter_map(|c| match c {
            '\u{207B}' => Some('-'),
            '\u{2070}' => Some('0'),
            '\u{00B9}' => Some('1'),
            '\u{00B2}' => Some('2'),
            '\u{00B3}' => Some('3'),
            '\u{2074}'..='\u{2079}' => char::from_digit(c as u32 - 0x2070, 10),
            _ => None,
        })
        .collect();
    plain.parse().unwrap_or_else(|_| panic!("no exponent in {s:?}"))
}
