use rand::RngCore;

use crate::drill_engine::{
    helpers::integer_input,
    models::{Category, Question},
    rng::{pick_one, random_int},
    topics::Generator,
};

const CAT: Category = Category::Proportionality;

const PERCENTS: &[i64] = &[10, 15, 20, 25, 30, 50];
const BASES: &[i64] = &[40, 60, 80, 100, 120, 200, 300];
const SPEEDS: &[i64] = &[30, 40, 50, 60, 80, 100];
const HOURS: &[i64] = &[2, 3, 4, 5];
const SCALES: &[i64] = &[100, 200, 500, 1000, 2000];

/// `(base, percent)` pairs whose increase is a whole number of euros.
const INCREASES: &[(i64, i64)] = &[
    (80, 25), (100, 20), (60, 50),
    (200, 10), (150, 20), (40, 25),
    (120, 25), (500, 10), (300, 30),
];

const DECREASES: &[(i64, i64)] = &[
    (120, 25), (80, 50), (200, 30),
    (150, 20), (100, 10), (60, 50),
    (300, 20), (400, 25), (500, 10),
];

pub const GENERATORS: &[Generator] = &[
    percent_of_base,
    speed_distance_time,
    map_scale,
    percent_increase,
    percent_decrease,
];

pub fn generate(rng: &mut dyn RngCore) -> Question {
    let family = *pick_one(rng, GENERATORS);
    family(rng)
}

pub fn percent_of_base(rng: &mut dyn RngCore) -> Question {
    let pct = *pick_one(rng, PERCENTS);
    let base = *pick_one(rng, BASES);
    percent_of_base_with(pct, base)
}

/// Every `(pct, base)` drawn from the tables above divides evenly by 100.
pub fn percent_of_base_with(pct: i64, base: i64) -> Question {
    integer_input(CAT, format!("Combien font {pct} % de {base} ?"), pct * base / 100)
}

/// One relation `d = v × t`, asked in one of its three directions.
pub fn speed_distance_time(rng: &mut dyn RngCore) -> Question {
    let v = *pick_one(rng, SPEEDS);
    let t = *pick_one(rng, HOURS);
    let d = v * t;
    match random_int(rng, 0, 2) {
        0 => integer_input(
            CAT,
            format!("Un véhicule roule à {v} km/h pendant {t} h.\nQuelle distance parcourt-il (en km) ?"),
            d,
        ),
        1 => integer_input(
            CAT,
            format!("Un véhicule parcourt {d} km en {t} h.\nQuelle est sa vitesse (en km/h) ?"),
            v,
        ),
        _ => integer_input(
            CAT,
            format!("Un véhicule roule à {v} km/h.\nCombien de temps (en h) pour parcourir {d} km ?"),
            t,
        ),
    }
}

pub fn map_scale(rng: &mut dyn RngCore) -> Question {
    let scale = *pick_one(rng, SCALES);
    let on_map = random_int(rng, 2, 15);
    integer_input(
        CAT,
        format!(
            "Sur un plan à l'échelle 1/{scale}, un segment mesure {on_map} cm.\nQuelle est la longueur réelle (en cm) ?"
        ),
        on_map * scale,
    )
}

pub fn percent_increase(rng: &mut dyn RngCore) -> Question {
    let &(base, pct) = pick_one(rng, INCREASES);
    integer_input(
        CAT,
        format!("Un article coûte {base} €.\nSon prix augmente de {pct} %.\nQuel est le nouveau prix (en €) ?"),
        base + base * pct / 100,
    )
}

pub fn percent_decrease(rng: &mut dyn RngCore) -> Question {
    let &(base, pct) = pick_one(rng, DECREASES);
    integer_input(
        CAT,
        format!("Un article coûte {base} €.\nSon prix diminue de {pct} %.\nQuel est le nouveau prix (en €) ?"),
        base - base * pct / 100,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::helpers::numbers_in;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn answer(q: &Question) -> f64 {
        q.correct_text().parse().unwrap()
    }

    #[test]
    fn twenty_five_percent_of_eighty() {
        let q = percent_of_base_with(25, 80);
        assert_eq!(q.correct_text(), "20");
        assert_eq!(q.question, "Combien font 25 % de 80 ?");
    }

    #[test]
    fn percent_tables_are_clean() {
        for &pct in PERCENTS {
            for &base in BASES {
                assert_eq!(pct * base % 100, 0, "{pct} % de {base}");
            }
        }
        for &(base, pct) in INCREASES.iter().chain(DECREASES) {
            assert_eq!(base * pct % 100, 0, "{pct} % de {base}");
        }
    }

    #[test]
    fn speed_answers_solve_distance_equals_speed_times_time() {
        let mut seen = [false; 3];
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = speed_distance_time(&mut rng);
            let n = numbers_in(&q.question);
            let x = answer(&q);
            if q.question.contains("pendant") {
                assert_eq!(x, n[0] * n[1], "{}", q.question);
                seen[0] = true;
            } else if q.question.contains("vitesse") {
                assert_eq!(x * n[1], n[0], "{}", q.question);
                seen[1] = true;
            } else {
                assert_eq!(n[0] * x, n[1], "{}", q.question);
                seen[2] = true;
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn map_scale_multiplies_by_the_denominator() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = map_scale(&mut rng);
            // "1/scale" then the map length
            let n = numbers_in(&q.question);
            assert_eq!(n[0], 1.0);
            assert_eq!(answer(&q), n[1] * n[2], "{}", q.question);
        }
    }

    #[test]
    fn price_changes_apply_the_shown_rate() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = percent_increase(&mut rng);
            let n = numbers_in(&q.question);
            assert_eq!(answer(&q), n[0] * (100.0 + n[1]) / 100.0, "{}", q.question);

            let q = percent_decrease(&mut rng);
            let n = numbers_in(&q.question);
            assert_eq!(answer(&q), n[0] * (100.0 - n[1]) / 100.0, "{}", q.question);
        }
    }
}
