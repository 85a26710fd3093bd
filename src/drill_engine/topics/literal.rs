use rand::RngCore;

use crate::drill_engine::{
    helpers::{integer_input, monomial, multiple_choice, signed_number},
    models::{Category, Question},
    rng::{gcd, pick_one, random_int},
    topics::Generator,
};

const CAT: Category = Category::Algebra;

pub const GENERATORS: &[Generator] = &[distribute, solve_linear, expand_square, factor_common];

pub fn generate(rng: &mut dyn RngCore) -> Question {
    let family = *pick_one(rng, GENERATORS);
    family(rng)
}

/// `a(x + b)` → `ax + ab`
pub fn distribute(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 2, 6);
    let b = random_int(rng, 1, 9);
    multiple_choice(
        rng,
        CAT,
        format!("Développer :  {a}(x + {b})"),
        format!("{a}x + {}", a * b),
        vec![
            format!("{a}x + {b}"),
            format!("{}x", a + b),
            format!("x + {}", a * b),
        ],
    )
}

/// `ax = b` built backwards from the solution so it is always an integer.
pub fn solve_linear(rng: &mut dyn RngCore) -> Question {
    let sol = random_int(rng, -8, 8);
    let a = random_int(rng, 2, 7);
    integer_input(CAT, format!("Résoudre :  {a}x = {}", signed_number(a * sol)), sol)
}

/// `(ax + b)²`
pub fn expand_square(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 1, 5);
    let b = random_int(rng, 1, 5);
    let sq = monomial(a * a, "x²");
    multiple_choice(
        rng,
        CAT,
        format!("Développer :  ({} + {b})²", monomial(a, "x")),
        format!("{sq} + {} + {}", monomial(2 * a * b, "x"), b * b),
        vec![
            format!("{sq} + {}", b * b),
            format!("{sq} + {} + {}", monomial(a * b, "x"), b * b),
            format!("{sq} \u{2212} {} + {}", monomial(2 * a * b, "x"), b * b),
        ],
    )
}

/// `kax + kb` → `k(ax + b)` with `a` and `b` coprime, so `k` is the
/// greatest common factor.
pub fn factor_common(rng: &mut dyn RngCore) -> Question {
    let k = random_int(rng, 2, 6);
    let a = random_int(rng, 1, 9);
    let coprime: Vec<i64> = (1..=9).filter(|&b| gcd(a, b) == 1).collect();
    let b = *pick_one(rng, &coprime);
    multiple_choice(
        rng,
        CAT,
        format!("Factoriser :  {} + {}", monomial(k * a, "x"), k * b),
        format!("{k}({} + {b})", monomial(a, "x")),
        vec![
            format!("{a}({} + {b})", monomial(k, "x")),
            format!("{}(x + {b})", k * a),
            format!("x({} + {})", k * a, k * b),
        ],
    )
}
