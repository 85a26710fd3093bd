//! Fraction simplification drill.
//!
//! Every level builds a pool of `(n, d, factor)` cards where `n/d` is
//! irreducible, and the displayed fraction is `(n × factor)/(d × factor)`.
//! A [`Deck`] owned by the drill hands the cards out without repetition
//! until the pool is exhausted.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    deck::Deck,
    helpers::{free_input, signed_number},
    models::{Category, Question},
    rng::{chance, gcd, random_int, smallest_prime_factor},
};

/// Displayed terms never exceed this.
pub const MAX_TERM: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FractionLevel {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Parameters of one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSpec {
    pub name: &'static str,
    pub factors: &'static [i64],
    pub numerators: (i64, i64),
    pub denominators: (i64, i64),
    pub negative_probability: f64,
}

const SMALL_FACTORS: &[i64] = &[2, 3, 4, 5];
const ALL_FACTORS: &[i64] = &[2, 3, 4, 5, 6, 7, 8, 9, 10];
const LARGE_FACTORS: &[i64] = &[12, 15, 25, 50];

impl FractionLevel {
    pub const ALL: [FractionLevel; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    pub fn spec(self) -> LevelSpec {
        match self {
            Self::Easy => LevelSpec {
                name: "Facile",
                factors: SMALL_FACTORS,
                numerators: (1, 11),
                denominators: (2, 15),
                negative_probability: 0.0,
            },
            Self::Medium => LevelSpec {
                name: "Moyen",
                factors: ALL_FACTORS,
                numerators: (1, 14),
                denominators: (2, 18),
                negative_probability: 0.3,
            },
            Self::Hard => LevelSpec {
                name: "Difficile",
                factors: LARGE_FACTORS,
                numerators: (1, 10),
                denominators: (2, 12),
                negative_probability: 0.5,
            },
            Self::Expert => LevelSpec {
                name: "Expert",
                factors: ALL_FACTORS,
                numerators: (1, 14),
                denominators: (2, 18),
                negative_probability: 0.5,
            },
        }
    }
}

/// An irreducible pair and the factor that disguises it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FractionCard {
    pub num: i64,
    pub den: i64,
    pub factor: i64,
}

/// A drawn fraction with signs applied. `factor` stays positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedFraction {
    pub num: i64,
    pub den: i64,
    pub factor: i64,
    pub simplified_num: i64,
    pub simplified_den: i64,
}

impl SignedFraction {
    /// Reduced form with the sign carried by the numerator.
    pub fn normalized(&self) -> (i64, i64) {
        if self.simplified_den < 0 {
            (-self.simplified_num, -self.simplified_den)
        } else {
            (self.simplified_num, self.simplified_den)
        }
    }
}

pub fn build_pool(level: FractionLevel) -> Vec<FractionCard> {
    let spec = level.spec();
    let (min_n, max_n) = spec.numerators;
    let (min_d, max_d) = spec.denominators;
    let mut pool = Vec::new();
    for n in min_n..=max_n {
        for d in min_d..=max_d {
            if n == d || gcd(n, d) != 1 {
                continue;
            }
            for &factor in spec.factors {
                if n * factor <= MAX_TERM && d * factor <= MAX_TERM {
                    pool.push(FractionCard { num: n, den: d, factor });
                }
            }
        }
    }
    pool
}

/// With probability `p`, move a minus sign onto the numerator (40 %), the
/// denominator (40 %) or both (20 %).
fn apply_sign(rng: &mut dyn RngCore, num: i64, den: i64, p: f64) -> (i64, i64) {
    if p <= 0.0 || !chance(rng, p) {
        return (num, den);
    }
    match random_int(rng, 0, 9) {
        0..=3 => (-num, den),
        4..=7 => (num, -den),
        _ => (-num, -den),
    }
}

/// Result of dividing both terms by a common divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionStep {
    pub num: i64,
    pub den: i64,
    pub irreducible: bool,
}

/// One step of a reduction chain. `None` when `divisor` is not greater than 1
/// or does not divide both terms.
pub fn apply_divisor(num: i64, den: i64, divisor: i64) -> Option<ReductionStep> {
    if divisor <= 1 || num % divisor != 0 || den % divisor != 0 {
        return None;
    }
    let (num, den) = (num / divisor, den / divisor);
    Some(ReductionStep { num, den, irreducible: gcd(num, den) == 1 })
}

#[derive(Debug, Clone)]
pub struct FractionDrill {
    level: FractionLevel,
    deck: Deck<FractionCard>,
}

impl FractionDrill {
    pub fn new(rng: &mut dyn RngCore, level: FractionLevel) -> Self {
        let pool = build_pool(level);
        tracing::debug!(?level, cards = pool.len(), "fraction deck built");
        FractionDrill { level, deck: Deck::new_shuffled(rng, pool) }
    }

    pub fn level(&self) -> FractionLevel {
        self.level
    }

    pub fn remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn next_fraction(&mut self, rng: &mut dyn RngCore) -> Option<SignedFraction> {
        let card = self.deck.draw(rng)?;
        let p = self.level.spec().negative_probability;
        let (sn, sd) = apply_sign(rng, card.num, card.den, p);
        Some(SignedFraction {
            num: sn * card.factor,
            den: sd * card.factor,
            factor: card.factor,
            simplified_num: sn,
            simplified_den: sd,
        })
    }

    pub fn next_question(&mut self, rng: &mut dyn RngCore) -> Option<Question> {
        self.next_fraction(rng).map(|f| fraction_question(&f))
    }
}

/// Free-input "simplify" prompt; the hint names the first prime to divide by.
pub fn fraction_question(f: &SignedFraction) -> Question {
    let (n, d) = f.normalized();
    free_input(
        Category::Numeric,
        format!("Simplifier la fraction {}/{}", signed_number(f.num), signed_number(f.den)),
        format!("{}/{}", n, d),
    )
    .with_hint(format!(
        "{} et {} sont divisibles par {}.",
        f.num.abs(),
        f.den.abs(),
        smallest_prime_factor(f.factor)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::models::Answer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn pools_hold_only_irreducible_pairs_within_bounds() {
        for level in FractionLevel::ALL {
            let pool = build_pool(level);
            assert!(!pool.is_empty());
            for c in &pool {
                assert_ne!(c.num, c.den);
                assert_eq!(gcd(c.num, c.den), 1);
                assert!(c.num * c.factor <= MAX_TERM && c.den * c.factor <= MAX_TERM);
            }
        }
    }

    #[test]
    fn easy_level_is_never_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut drill = FractionDrill::new(&mut rng, FractionLevel::Easy);
        for _ in 0..200 {
            let f = drill.next_fraction(&mut rng).unwrap();
            assert!(f.num > 0 && f.den > 0);
        }
    }

    #[test]
    fn expert_level_uses_every_sign_pattern() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut drill = FractionDrill::new(&mut rng, FractionLevel::Expert);
        let mut patterns = HashSet::new();
        for _ in 0..400 {
            let f = drill.next_fraction(&mut rng).unwrap();
            patterns.insert((f.num < 0, f.den < 0));
        }
        assert_eq!(patterns.len(), 4);
    }

    #[test]
    fn one_pass_through_the_deck_has_no_repeats() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut drill = FractionDrill::new(&mut rng, FractionLevel::Hard);
        let size = build_pool(FractionLevel::Hard).len();
        let mut seen = HashSet::new();
        for _ in 0..size {
            let f = drill.next_fraction(&mut rng).unwrap();
            let card = (f.simplified_num.abs(), f.simplified_den.abs(), f.factor);
            assert!(seen.insert(card));
        }
        assert_eq!(drill.remaining(), 0);
    }

    #[test]
    fn question_accepts_both_minus_signs() {
        let f = SignedFraction { num: 12, den: -18, factor: 6, simplified_num: 2, simplified_den: -3 };
        let q = fraction_question(&f);
        assert_eq!(q.question, "Simplifier la fraction 12/−18");
        let Answer::FreeInput { canonical, accepted } = &q.answer else { panic!() };
        assert_eq!(canonical, "-2/3");
        assert!(accepted.contains(&"−2/3".to_string()));
        assert_eq!(q.hint.as_deref(), Some("12 et 18 sont divisibles par 2."));
    }

    #[test]
    fn double_negative_simplifies_to_positive() {
        let f = SignedFraction { num: -10, den: -15, factor: 5, simplified_num: -2, simplified_den: -3 };
        assert_eq!(fraction_question(&f).correct_text(), "2/3");
    }

    #[test]
    fn divisor_steps() {
        assert_eq!(apply_divisor(12, 18, 2), Some(ReductionStep { num: 6, den: 9, irreducible: false }));
        assert_eq!(apply_divisor(6, 9, 3), Some(ReductionStep { num: 2, den: 3, irreducible: true }));
        assert_eq!(apply_divisor(-12, 18, 6), Some(ReductionStep { num: -2, den: 3, irreducible: true }));
        assert_eq!(apply_divisor(12, 18, 4), None);
        assert_eq!(apply_divisor(12, 18, 1), None);
        assert_eq!(apply_divisor(12, 18, 0), None);
    }
}
