use rand::RngCore;

use crate::drill_engine::{
    helpers::{
        fraction_text, free_input, integer_input, multiple_choice, operand, power_of_ten,
        reduced_fraction, superscript,
    },
    models::{Answer, Category, Question},
    rng::{chance, pick_one, random_int, shuffle},
    tables::{FRAC_DEC_TABLE, FRACTION_WORDS, ORDERING_POOL},
    topics::Generator,
};

const CAT: Category = Category::Numeric;

/// Non-trivial signed factors for products: never 0 or 1.
const SIGNED_FACTORS: &[i64] = &[-9, -8, -7, -6, -5, -4, -3, -2, -1, 2, 3, 4, 5, 6, 7, 8, 9];

pub const GENERATORS: &[Generator] = &[
    fraction_sum,
    power_of_ten_value,
    perfect_square_root,
    operation_priority,
    opposite_or_reciprocal,
    negative_exponent,
    frac_dec_pct,
    fraction_of_quantity,
    signed_add_sub,
    signed_product,
    compare_numbers,
    simplify_fraction,
    fraction_product,
];

pub fn generate(rng: &mut dyn RngCore) -> Question {
    let family = *pick_one(rng, GENERATORS);
    family(rng)
}

/// `"n"` when the denominator is 1, `"n/d"` otherwise.
fn fraction_display(num: i64, den: i64) -> String {
    if den == 1 { num.to_string() } else { fraction_text(num, den) }
}

// ---------------------------------------------------------------------------
// Fractions
// ---------------------------------------------------------------------------

pub fn fraction_sum(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 1, 9);
    let b = random_int(rng, 2, 9);
    let c = random_int(rng, 1, 9);
    let d = random_int(rng, 2, 9);
    fraction_sum_with(rng, a, b, c, d)
}

/// `a/b + c/d`, reduced. Distractors are the classic slips: adding
/// numerators and denominators, multiplying instead of adding, keeping one
/// product.
pub fn fraction_sum_with(rng: &mut dyn RngCore, a: i64, b: i64, c: i64, d: i64) -> Question {
    let num = a * d + c * b;
    let den = b * d;
    let (rn, rd) = reduced_fraction(num, den);
    multiple_choice(
        rng,
        CAT,
        format!("Combien vaut  {a}/{b} + {c}/{d} ?"),
        fraction_display(rn, rd),
        vec![
            fraction_text(a + c, b + d),
            fraction_text(a * c, b * d),
            fraction_text(a + c, b * d),
        ],
    )
}

pub fn fraction_product(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 1, 5);
    let b = random_int(rng, 2, 7);
    let c = random_int(rng, 1, 5);
    let d = random_int(rng, 2, 7);
    let (rn, rd) = reduced_fraction(a * c, b * d);
    multiple_choice(
        rng,
        CAT,
        format!("Combien vaut {a}/{b} × {c}/{d} ?"),
        fraction_display(rn, rd),
        vec![
            fraction_text(a + c, b + d),
            fraction_text(a * c, b + d),
            fraction_text(a + c, b * d),
        ],
    )
}

pub fn simplify_fraction(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 2, 10);
    let b = random_int(rng, 2, 10);
    let k = random_int(rng, 2, 6);
    let (num, den) = (a * k, b * k);
    let (rn, rd) = reduced_fraction(num, den);
    let mut q = free_input(CAT, format!("Simplifier la fraction {num}/{den}"), fraction_display(rn, rd));
    if rd == 1 {
        if let Answer::FreeInput { accepted, .. } = &mut q.answer {
            accepted.push(fraction_text(rn, 1));
        }
    }
    q
}

pub fn fraction_of_quantity(rng: &mut dyn RngCore) -> Question {
    let &(label, num, den) = pick_one(rng, FRACTION_WORDS);
    let multiplier = random_int(rng, 2, 10);
    let total = den * multiplier;
    integer_input(CAT, format!("Combien vaut {label} de {total} ?"), num * multiplier)
}

/// Fraction → decimal, decimal → fraction or fraction → percent; wrong
/// choices are other rows of the same table.
pub fn frac_dec_pct(rng: &mut dyn RngCore) -> Question {
    let entry = *pick_one(rng, FRAC_DEC_TABLE);
    let others: Vec<_> = FRAC_DEC_TABLE.iter().filter(|e| e.frac != entry.frac).copied().collect();
    let others = shuffle(rng, &others);
    let others = &others[..3];
    match random_int(rng, 0, 2) {
        0 => multiple_choice(
            rng,
            CAT,
            format!("Quelle est l'écriture décimale de {} ?", entry.frac),
            entry.dec,
            others.iter().map(|e| e.dec.to_string()).collect(),
        ),
        1 => multiple_choice(
            rng,
            CAT,
            format!("Quelle fraction correspond à {} ?", entry.dec),
            entry.frac,
            others.iter().map(|e| e.frac.to_string()).collect(),
        ),
        _ => multiple_choice(
            rng,
            CAT,
            format!("À quel pourcentage correspond {} ?", entry.frac),
            format!("{} %", entry.pct),
            others.iter().map(|e| format!("{} %", e.pct)).collect(),
        ),
    }
}

// ---------------------------------------------------------------------------
// Powers and roots
// ---------------------------------------------------------------------------

pub fn power_of_ten_value(rng: &mut dyn RngCore) -> Question {
    let exp = random_int(rng, 2, 6);
    integer_input(CAT, format!("Combien vaut {} ?", power_of_ten(exp)), 10i64.pow(exp as u32))
}

pub fn perfect_square_root(rng: &mut dyn RngCore) -> Question {
    let n = random_int(rng, 2, 15);
    integer_input(CAT, format!("Combien vaut √{} ?", n * n), n)
}

pub fn negative_exponent(rng: &mut dyn RngCore) -> Question {
    let base = random_int(rng, 2, 5);
    multiple_choice(
        rng,
        CAT,
        format!("Combien vaut  {}{} ?", base, superscript(-1)),
        format!("1/{base}"),
        vec![format!("−{base}"), format!("−1/{base}"), base.to_string()],
    )
}

// ---------------------------------------------------------------------------
// Integers and signed numbers
// ---------------------------------------------------------------------------

pub fn operation_priority(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 2, 8);
    let b = random_int(rng, 2, 5);
    let c = random_int(rng, 1, 9);
    multiple_choice(
        rng,
        CAT,
        format!("Combien vaut  {a} + {b} × {c} ?"),
        (a + b * c).to_string(),
        vec![
            ((a + b) * c).to_string(),
            (a * b + c).to_string(),
            (a + b + c).to_string(),
        ],
    )
}

pub fn opposite_or_reciprocal(rng: &mut dyn RngCore) -> Question {
    let n = random_int(rng, 2, 12);
    if chance(rng, 0.5) {
        return integer_input(CAT, format!("Quel est l'opposé de {n} ?"), -n);
    }
    multiple_choice(
        rng,
        CAT,
        format!("Quel est l'inverse de {n} ?"),
        format!("1/{n}"),
        vec![format!("−{n}"), format!("{n}/1"), format!("−1/{n}")],
    )
}

pub fn signed_add_sub(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, -12, 12);
    let b = random_int(rng, -12, 12);
    let (symbol, result) = if chance(rng, 0.5) { ("+", a + b) } else { ("\u{2212}", a - b) };
    integer_input(
        CAT,
        format!("Combien vaut {} {} {} ?", operand(a), symbol, operand(b)),
        result,
    )
}

pub fn signed_product(rng: &mut dyn RngCore) -> Question {
    let a = *pick_one(rng, SIGNED_FACTORS);
    let b = *pick_one(rng, SIGNED_FACTORS);
    integer_input(CAT, format!("Combien vaut {} × {} ?", operand(a), operand(b)), a * b)
}

/// Largest or smallest of four numbers with pairwise-distinct values
/// (`−1/2` and `−0,5` are never shown together).
pub fn compare_numbers(rng: &mut dyn RngCore) -> Question {
    let pool = shuffle(rng, ORDERING_POOL);
    let mut picked: Vec<(&str, i64)> = Vec::with_capacity(4);
    for (display, value) in pool {
        if picked.iter().all(|&(_, v)| v != value) {
            picked.push((display, value));
        }
        if picked.len() == 4 {
            break;
        }
    }

    let ask_max = chance(rng, 0.5);
    let target = if ask_max {
        picked.iter().max_by_key(|p| p.1)
    } else {
        picked.iter().min_by_key(|p| p.1)
    }
    .map(|p| p.0)
    .unwrap_or(picked[0].0);

    let listing = picked.iter().map(|p| p.0).collect::<Vec<_>>().join("  ;  ");
    let heading = if ask_max { "Quel est le plus grand nombre ?" } else { "Quel est le plus petit nombre ?" };
    multiple_choice(
        rng,
        CAT,
        format!("{heading}\n{listing}"),
        target,
        picked.iter().map(|p| p.0.to_string()).filter(|t| t != target).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::checker::parse_number;
    use crate::drill_engine::helpers::{from_superscript, numbers_in};
    use crate::drill_engine::rng::gcd;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn correct(q: &Question) -> String {
        q.correct_text()
    }

    #[test]
    fn fraction_sum_one_half_plus_one_third() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = fraction_sum_with(&mut rng, 1, 2, 1, 3);
        assert_eq!(correct(&q), "5/6");
        assert_eq!(q.question, "Combien vaut  1/2 + 1/3 ?");
    }

    #[test]
    fn fraction_sum_reduces_to_lowest_terms() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = fraction_sum_with(&mut rng, 1, 4, 1, 4);
        assert_eq!(correct(&q), "1/2");
        let q = fraction_sum_with(&mut rng, 1, 2, 1, 2);
        assert_eq!(correct(&q), "1");
    }

    #[test]
    fn simplified_fraction_is_irreducible() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = simplify_fraction(&mut rng);
            let answer = correct(&q);
            let mut parts = answer.split('/');
            let n: i64 = parts.next().unwrap().parse().unwrap();
            let d: i64 = parts.next().map(|d| d.parse().unwrap()).unwrap_or(1);
            assert_eq!(gcd(n, d), 1, "{answer} is not reduced");
        }
    }

    #[test]
    fn signed_product_never_uses_zero_or_one() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = signed_product(&mut rng);
            assert!(!q.question.contains(" 0 ") && !q.question.contains(" 1 ?"), "{}", q.question);
            assert!(!q.question.starts_with("Combien vaut 1 ") && !q.question.starts_with("Combien vaut 0 "));
        }
    }

    #[test]
    fn opposite_accepts_both_minus_signs() {
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = opposite_or_reciprocal(&mut rng);
            if let Answer::FreeInput { canonical, accepted } = &q.answer {
                assert!(canonical.starts_with('-'));
                assert!(accepted.iter().any(|a| a.starts_with('\u{2212}')));
            }
        }
    }

    #[test]
    fn compare_numbers_target_is_the_extreme() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = compare_numbers(&mut rng);
            let listing = q.question.lines().nth(1).unwrap();
            let values: Vec<i64> = listing
                .split("  ;  ")
                .map(|d| ORDERING_POOL.iter().find(|p| p.0 == d).unwrap().1)
                .collect();
            let target = ORDERING_POOL.iter().find(|p| p.0 == correct(&q)).unwrap().1;
            if q.question.contains("plus grand") {
                assert_eq!(target, *values.iter().max().unwrap());
            } else {
                assert_eq!(target, *values.iter().min().unwrap());
            }
            let mut unique = values.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), 4);
        }
    }

    fn value(text: &str) -> f64 {
        parse_number(text).unwrap_or_else(|| panic!("not a number: {text}"))
    }

    #[test]
    fn fraction_product_multiplies_the_shown_terms() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = fraction_product(&mut rng);
            let n = numbers_in(&q.question);
            let expected = (n[0] * n[2]) / (n[1] * n[3]);
            assert!((value(&correct(&q)) - expected).abs() < 1e-9, "{}", q.question);
        }
    }

    #[test]
    fn fraction_sum_adds_the_shown_terms() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = fraction_sum(&mut rng);
            let n = numbers_in(&q.question);
            let expected = n[0] / n[1] + n[2] / n[3];
            assert!((value(&correct(&q)) - expected).abs() < 1e-9, "{}", q.question);
        }
    }

    #[test]
    fn power_of_ten_expands_the_exponent() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = power_of_ten_value(&mut rng);
            let shown = q.question.trim_start_matches("Combien vaut 10").trim_end_matches(" ?");
            let exp = from_superscript(shown);
            assert_eq!(correct(&q), 10i64.pow(exp as u32).to_string(), "{}", q.question);
        }
    }

    #[test]
    fn square_root_of_the_shown_square() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = perfect_square_root(&mut rng);
            let square = numbers_in(&q.question)[0];
            let root = value(&correct(&q));
            assert_eq!(root * root, square, "{}", q.question);
        }
    }

    #[test]
    fn multiplication_comes_before_addition() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = operation_priority(&mut rng);
            let n = numbers_in(&q.question);
            assert_eq!(value(&correct(&q)), n[0] + n[1] * n[2], "{}", q.question);
        }
    }

    #[test]
    fn negative_exponent_is_the_reciprocal() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = negative_exponent(&mut rng);
            let base = numbers_in(&q.question)[0];
            assert!(q.question.contains(&superscript(-1)));
            assert!((value(&correct(&q)) - 1.0 / base).abs() < 1e-9, "{}", q.question);
        }
    }

    #[test]
    fn frac_dec_pct_answers_have_the_shown_value() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = frac_dec_pct(&mut rng);
            let shown = q.question.trim_end_matches(" ?").rsplit(' ').next().unwrap();
            let answer = correct(&q);
            let answered = match answer.strip_suffix(" %") {
                Some(pct) => value(pct) / 100.0,
                None => value(&answer),
            };
            assert!((value(shown) - answered).abs() < 1e-9, "{} → {answer}", q.question);
        }
    }

    #[test]
    fn fraction_of_quantity_applies_the_named_fraction() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = fraction_of_quantity(&mut rng);
            let body = q.question.trim_start_matches("Combien vaut ").trim_end_matches(" ?");
            let (label, total) = body.rsplit_once(" de ").unwrap();
            let &(_, num, den) = FRACTION_WORDS.iter().find(|w| w.0 == label).unwrap();
            let total: i64 = total.parse().unwrap();
            assert_eq!(correct(&q), (total * num / den).to_string(), "{}", q.question);
        }
    }

    #[test]
    fn signed_sums_follow_the_shown_operator() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = signed_add_sub(&mut rng);
            let body = q.question.trim_start_matches("Combien vaut ").trim_end_matches(" ?");
            let tokens: Vec<&str> = body.split(' ').collect();
            let (a, b) = (numbers_in(tokens[0])[0], numbers_in(tokens[2])[0]);
            let expected = if tokens[1] == "+" { a + b } else { a - b };
            assert_eq!(value(&correct(&q)), expected, "{}", q.question);
            assert!(!q.question.contains('-'), "{}", q.question);
        }
    }

    #[test]
    fn signed_product_multiplies_the_shown_factors() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = signed_product(&mut rng);
            let n = numbers_in(&q.question);
            assert_eq!(n.len(), 2, "{}", q.question);
            assert_eq!(value(&correct(&q)), n[0] * n[1], "{}", q.question);
        }
    }
}
