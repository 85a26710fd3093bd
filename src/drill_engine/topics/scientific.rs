//! Scientific notation drill: rewrite `c × 10ⁿ` as `a × 10ᵐ` with `1 ≤ a < 10`.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    helpers::{format_decimal, integer_input, multiple_choice, power_of_ten},
    models::{Category, Question},
    rng::{chance, pick_one, random_int},
};

const CAT: Category = Category::Numeric;

const POSITIVE_COEFFICIENTS: &[i64] = &[25, 45, 125, 360, 72, 58, 340, 150, 4800, 230];
const NEGATIVE_COEFFICIENTS: &[i64] = &[35, 78, 420, 56, 915, 63, 250, 180, 47, 82];
const MIXED_COEFFICIENTS: &[i64] = &[12, 345, 67, 8900, 456, 23, 7050, 1200, 89, 5600];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScientificLevel {
    PositivePowers,
    NegativePowers,
    Mixed,
}

impl ScientificLevel {
    pub const ALL: [ScientificLevel; 3] = [Self::PositivePowers, Self::NegativePowers, Self::Mixed];

    pub fn label(self) -> &'static str {
        match self {
            Self::PositivePowers => "Puissances positives",
            Self::NegativePowers => "Puissances négatives",
            Self::Mixed => "Écriture scientifique",
        }
    }
}

/// A starting number `coefficient × 10^exponent` and its scientific form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rewrite {
    pub coefficient: i64,
    pub exponent: i64,
    pub target_coefficient: f64,
    pub target_exponent: i64,
}

impl Rewrite {
    pub fn new(coefficient: i64, exponent: i64) -> Self {
        let shift = coefficient.abs().to_string().len() as i64 - 1;
        let scaled = coefficient as f64 / 10f64.powi(shift as i32);
        Rewrite {
            coefficient,
            exponent,
            target_coefficient: (scaled * 1e10).round() / 1e10,
            target_exponent: exponent + shift,
        }
    }

    pub fn source_text(&self) -> String {
        format!("{} × {}", self.coefficient, power_of_ten(self.exponent))
    }

    pub fn scientific_text(&self) -> String {
        scientific(self.target_coefficient, self.target_exponent)
    }
}

fn scientific(a: f64, exp: i64) -> String {
    format!("{} × {}", format_decimal(a), power_of_ten(exp))
}

pub fn draw(rng: &mut dyn RngCore, level: ScientificLevel) -> Rewrite {
    match level {
        ScientificLevel::PositivePowers => {
            let c = *pick_one(rng, POSITIVE_COEFFICIENTS);
            let e = random_int(rng, 1, 3);
            Rewrite::new(c, e)
        }
        ScientificLevel::NegativePowers => {
            let c = *pick_one(rng, NEGATIVE_COEFFICIENTS);
            let e = random_int(rng, -3, -1);
            Rewrite::new(c, e)
        }
        ScientificLevel::Mixed => {
            let c = *pick_one(rng, MIXED_COEFFICIENTS);
            let e = random_int(rng, -5, 8);
            Rewrite::new(c, e)
        }
    }
}

pub fn generate(rng: &mut dyn RngCore, level: ScientificLevel) -> Question {
    let rewrite = draw(rng, level);
    if chance(rng, 0.5) {
        exponent_question(&rewrite)
    } else {
        form_question(rng, &rewrite)
    }
}

pub fn exponent_question(r: &Rewrite) -> Question {
    integer_input(
        CAT,
        format!(
            "{} = {} × 10^?\nQuel est l'exposant ?",
            r.source_text(),
            format_decimal(r.target_coefficient)
        ),
        r.target_exponent,
    )
    .with_hint(format!(
        "La virgule se déplace de {} rang(s) vers la gauche.",
        r.target_exponent - r.exponent
    ))
}

/// Distractors are off by one power of ten, plus the unnormalized source.
pub fn form_question(rng: &mut dyn RngCore, r: &Rewrite) -> Question {
    multiple_choice(
        rng,
        CAT,
        format!("Quelle est l'écriture scientifique de {} ?", r.source_text()),
        r.scientific_text(),
        vec![
            scientific(r.target_coefficient, r.target_exponent - 1),
            scientific(r.target_coefficient, r.target_exponent + 1),
            r.source_text(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::checker::parse_number;
    use crate::drill_engine::helpers::from_superscript;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rewrites_normalize_the_coefficient() {
        let r = Rewrite::new(45, 2);
        assert_eq!(r.target_coefficient, 4.5);
        assert_eq!(r.target_exponent, 3);
        assert_eq!(r.scientific_text(), "4,5 × 10³");

        let r = Rewrite::new(7050, -5);
        assert_eq!(r.scientific_text(), "7,05 × 10⁻²");
        assert_eq!(Rewrite::new(4800, 1).scientific_text(), "4,8 × 10⁴");
    }

    #[test]
    fn every_level_lands_in_range() {
        for level in ScientificLevel::ALL {
            for seed in 0..50 {
                let mut rng = StdRng::seed_from_u64(seed);
                let r = draw(&mut rng, level);
                assert!((1.0..10.0).contains(&r.target_coefficient), "{r:?}");
                let value = r.coefficient as f64 * 10f64.powi(r.exponent as i32);
                let back = r.target_coefficient * 10f64.powi(r.target_exponent as i32);
                assert!((value - back).abs() <= value.abs() * 1e-9);
            }
        }
    }

    #[test]
    fn exponent_question_accepts_typographic_minus() {
        let q = exponent_question(&Rewrite::new(35, -3));
        assert_eq!(q.correct_text(), "-2");
        assert!(q.question.starts_with("35 × 10⁻³ = 3,5 × 10^?"));
    }

    /// `"4,5 × 10³"` → `(4.5, 3)`.
    fn split_form(text: &str) -> (f64, i64) {
        let (a, power) = text.split_once(" × ").unwrap();
        (parse_number(a).unwrap(), from_superscript(power.trim_start_matches("10")))
    }

    #[test]
    fn form_answer_has_the_value_of_the_source() {
        for level in ScientificLevel::ALL {
            for seed in 0..100 {
                let mut rng = StdRng::seed_from_u64(seed);
                let r = draw(&mut rng, level);
                let q = form_question(&mut rng, &r);
                let source = q
                    .question
                    .trim_start_matches("Quelle est l'écriture scientifique de ")
                    .trim_end_matches(" ?");
                let (coef, e) = split_form(source);
                let (a, n) = split_form(&q.correct_text());
                assert!((1.0..10.0).contains(&a), "{}", q.correct_text());
                let shown = coef * 10f64.powi(e as i32);
                let answered = a * 10f64.powi(n as i32);
                assert!((shown - answered).abs() <= shown.abs() * 1e-9, "{} → {}", q.question, q.correct_text());

                let choices = q.choices().unwrap();
                assert_eq!(choices.len(), 4);
                for wrong in choices.iter().filter(|c| !c.is_correct && c.text != source) {
                    let (wa, wn) = split_form(&wrong.text);
                    assert_eq!(wa, a);
                    assert_eq!((wn - n).abs(), 1, "{}", wrong.text);
                }
            }
        }
    }

    #[test]
    fn form_question_has_four_distinct_choices() {
        let mut rng = StdRng::seed_from_u64(8);
        let q = form_question(&mut rng, &Rewrite::new(125, 1));
        assert_eq!(q.correct_text(), "1,25 × 10³");
        assert_eq!(q.choices().unwrap().len(), 4);
    }
}
