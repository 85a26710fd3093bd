use rand::RngCore;

use crate::drill_engine::{
    helpers::{affine, integer_input, multiple_choice, signed_number, true_false},
    models::{Category, Question},
    rng::{chance, pick_one, random_int},
    topics::Generator,
};

const CAT: Category = Category::Functions;

const SLOPES: &[i64] = &[1, 2, 3, -1, -2, -3];
const NUDGES: &[i64] = &[1, 2, -1];

pub const GENERATORS: &[Generator] = &[
    image,
    pre_image,
    monotonicity,
    read_coordinate,
    graph_reading,
];

pub fn generate(rng: &mut dyn RngCore) -> Question {
    let family = *pick_one(rng, GENERATORS);
    family(rng)
}

pub fn image(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 2, 6);
    let b = random_int(rng, -8, 8);
    let x = random_int(rng, -5, 5);
    integer_input(
        CAT,
        format!("f(x) = {}\nCalculer f({}).", affine(a, b), signed_number(x)),
        a * x + b,
    )
}

/// Built from the pre-image so `(y − b) / a` is always whole.
pub fn pre_image(rng: &mut dyn RngCore) -> Question {
    let a = random_int(rng, 2, 5);
    let b = random_int(rng, -5, 5);
    let x = random_int(rng, -4, 6);
    let y = a * x + b;
    integer_input(
        CAT,
        format!("f(x) = {}\nTrouver x tel que f(x) = {}.", affine(a, b), signed_number(y)),
        x,
    )
}

/// The stated direction is drawn independently of the slope.
pub fn monotonicity(rng: &mut dyn RngCore) -> Question {
    let a = *pick_one(rng, SLOPES);
    let says_increasing = chance(rng, 0.5);
    let nature = if says_increasing { "croissante" } else { "décroissante" };
    true_false(
        CAT,
        format!("La fonction f(x) = {} est {nature}.", affine(a, 1)),
        says_increasing == (a > 0),
    )
}

pub fn read_coordinate(rng: &mut dyn RngCore) -> Question {
    let px = random_int(rng, -6, 6);
    let py = random_int(rng, -6, 6);
    let abscissa = chance(rng, 0.5);
    let (asked, correct, other) = if abscissa { ("abscisse", px, py) } else { ("ordonnée", py, px) };
    let nudge = *pick_one(rng, NUDGES);
    multiple_choice(
        rng,
        CAT,
        format!(
            "Le point A a pour coordonnées ({} ; {}).\nQuelle est l'{asked} de A ?",
            signed_number(px),
            signed_number(py)
        ),
        signed_number(correct),
        vec![signed_number(other), signed_number(-correct), signed_number(correct + nudge)],
    )
}

/// A point `(x0 ; y0)` on the graph, read as an image or as a pre-image.
pub fn graph_reading(rng: &mut dyn RngCore) -> Question {
    let x0 = random_int(rng, -3, 5);
    let y0 = random_int(rng, -4, 8);
    let nudge = *pick_one(rng, NUDGES);
    let (xs, ys) = (signed_number(x0), signed_number(y0));
    let stem = format!("Le graphique d'une fonction f passe par le point ({xs} ; {ys}).");
    if chance(rng, 0.5) {
        multiple_choice(
            rng,
            CAT,
            format!("{stem}\nQuelle est l'image de {xs} par f ?"),
            ys,
            vec![xs, signed_number(-y0), signed_number(y0 + nudge)],
        )
    } else {
        multiple_choice(
            rng,
            CAT,
            format!("{stem}\nDonner un antécédent de {ys} par f."),
            xs,
            vec![ys, signed_number(-x0), signed_number(x0 + nudge)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::checker::parse_number;
    use crate::drill_engine::helpers::numbers_in;
    use crate::drill_engine::models::Answer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn monotonicity_claims_are_not_always_true() {
        let mut seen = [false, false];
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = monotonicity(&mut rng);
            let Answer::TrueFalse { expected } = q.answer else { panic!() };
            let decreasing_slope = q.question.contains('\u{2212}');
            let says_increasing = q.question.ends_with(" croissante.");
            assert_eq!(expected, says_increasing != decreasing_slope, "{}", q.question);
            seen[expected as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    /// `(a, b)` from the first line `"f(x) = ax ± b"`.
    fn coefficients(question: &str) -> (f64, f64) {
        let expr = question.lines().next().unwrap().trim_start_matches("f(x) = ");
        let (a, b) = expr.split_once("x ").unwrap();
        (numbers_in(a)[0], numbers_in(&b.replace(' ', ""))[0])
    }

    fn answer(q: &Question) -> f64 {
        parse_number(&q.correct_text()).unwrap()
    }

    #[test]
    fn pre_image_maps_back_to_the_target() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = pre_image(&mut rng);
            let (a, b) = coefficients(&q.question);
            let y = numbers_in(q.question.lines().nth(1).unwrap())[0];
            assert_eq!(a * answer(&q) + b, y, "{}", q.question);
        }
    }

    #[test]
    fn image_evaluates_the_shown_expression() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = image(&mut rng);
            let (a, b) = coefficients(&q.question);
            let x = numbers_in(q.question.lines().nth(1).unwrap())[0];
            assert_eq!(answer(&q), a * x + b, "{}", q.question);
        }
    }

    #[test]
    fn graph_reading_answers_from_the_shown_point() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = graph_reading(&mut rng);
            let (stem, ask) = q.question.split_once('\n').unwrap();
            let point = numbers_in(stem);
            let (x0, y0) = (point[0], point[1]);
            if ask.contains("image") {
                assert_eq!(numbers_in(ask)[0], x0);
                assert_eq!(answer(&q), y0, "{}", q.question);
            } else {
                assert_eq!(numbers_in(ask)[0], y0);
                assert_eq!(answer(&q), x0, "{}", q.question);
            }
        }
    }

    #[test]
    fn read_coordinate_picks_the_right_component() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = read_coordinate(&mut rng);
            let inner = q.question.split(['(', ')']).nth(1).unwrap();
            let (x, y) = inner.split_once(" ; ").unwrap();
            let want = if q.question.contains("abscisse") { x } else { y };
            assert_eq!(q.correct_text(), want);
        }
    }
}
