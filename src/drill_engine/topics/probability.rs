use rand::RngCore;

use crate::drill_engine::{
    helpers::{fraction_text, integer_input, multiple_choice, reduced_fraction},
    models::{Category, Question},
    rng::{pick_one, random_int, shuffle},
    tables::{EQUIPROBABLE_SCENARIOS, PROBABILITY_DISTRACTORS},
    topics::Generator,
};

const CAT: Category = Category::ProbabilityStatistics;

const BAG_SIZES: &[i64] = &[6, 8, 10, 12, 20];

/// Last value of a backward-built mean series must land in this range.
pub const MEAN_LAST_VALUE_RANGE: (i64, i64) = (1, 25);

/// Substituted when backward construction leaves the display range.
pub const MEAN_FALLBACK_SERIES: [i64; 3] = [10, 12, 14];
pub const MEAN_FALLBACK_ANSWER: i64 = 12;

pub const GENERATORS: &[Generator] = &[
    draw_probability,
    mean_of_series,
    complementary_event,
    median_of_series,
    range_of_series,
    equiprobability,
];

pub fn generate(rng: &mut dyn RngCore) -> Question {
    let family = *pick_one(rng, GENERATORS);
    family(rng)
}

fn series_text(values: &[i64]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ; ")
}

pub fn draw_probability(rng: &mut dyn RngCore) -> Question {
    let total = *pick_one(rng, BAG_SIZES);
    let favorable = random_int(rng, 1, total - 1);
    let (n, d) = reduced_fraction(favorable, total);
    multiple_choice(
        rng,
        CAT,
        format!(
            "Un sac contient {total} boules. {favorable} sont rouges.\nQuelle est la probabilité de tirer une boule rouge ?"
        ),
        fraction_text(n, d),
        vec![
            fraction_text(total - favorable, total),
            fraction_text(favorable, total + favorable),
            fraction_text(1, total),
        ],
    )
}

pub fn mean_of_series(rng: &mut dyn RngCore) -> Question {
    let n = random_int(rng, 3, 5);
    let target = random_int(rng, 8, 15);
    let partial: Vec<i64> = (0..n - 1).map(|_| random_int(rng, 5, 18)).collect();
    mean_of_series_with(rng, &partial, target)
}

/// Complete `partial` with the one value that makes the mean equal `target`.
/// If that value falls outside [`MEAN_LAST_VALUE_RANGE`] the fixed series
/// `10 ; 12 ; 14` is asked instead.
pub fn mean_of_series_with(rng: &mut dyn RngCore, partial: &[i64], target: i64) -> Question {
    let n = partial.len() as i64 + 1;
    let last = target * n - partial.iter().sum::<i64>();
    let (lo, hi) = MEAN_LAST_VALUE_RANGE;
    if last < lo || last > hi {
        tracing::debug!(last, target, "mean series out of range, using fallback");
        return integer_input(
            CAT,
            format!("Quelle est la moyenne de : {} ?", series_text(&MEAN_FALLBACK_SERIES)),
            MEAN_FALLBACK_ANSWER,
        );
    }
    let mut values = partial.to_vec();
    values.push(last);
    let displayed = shuffle(rng, &values);
    integer_input(CAT, format!("Quelle est la moyenne de : {} ?", series_text(&displayed)), target)
}

pub fn complementary_event(rng: &mut dyn RngCore) -> Question {
    let p = random_int(rng, 1, 9);
    let (pn, pd) = reduced_fraction(p, 10);
    let (cn, cd) = reduced_fraction(10 - p, 10);
    multiple_choice(
        rng,
        CAT,
        format!(
            "La probabilité d'un événement A est {}.\nQuelle est la probabilité de l'événement contraire ?",
            fraction_text(pn, pd)
        ),
        fraction_text(cn, cd),
        vec![
            fraction_text(pn, pd),
            fraction_text(1, pd),
            fraction_text(cd, cn),
        ],
    )
}

/// Odd-length series so the median is one of the values.
pub fn median_of_series(rng: &mut dyn RngCore) -> Question {
    let n = *pick_one(rng, &[5usize, 7]);
    let values: Vec<i64> = (0..n).map(|_| random_int(rng, 2, 25)).collect();
    let mut sorted = values.clone();
    sorted.sort_unstable();
    let median = sorted[n / 2];
    let displayed = shuffle(rng, &values);
    integer_input(
        CAT,
        format!("Quelle est la médiane de la série :\n{} ?", series_text(&displayed)),
        median,
    )
}

pub fn range_of_series(rng: &mut dyn RngCore) -> Question {
    let n = random_int(rng, 4, 7);
    let values: Vec<i64> = (0..n).map(|_| random_int(rng, 2, 30)).collect();
    let max = values.iter().copied().max().unwrap_or(0);
    let min = values.iter().copied().min().unwrap_or(0);
    integer_input(
        CAT,
        format!("Quelle est l'étendue de la série :\n{} ?", series_text(&values)),
        max - min,
    )
}

pub fn equiprobability(rng: &mut dyn RngCore) -> Question {
    let &(prompt, raw, simplified) = pick_one(rng, EQUIPROBABLE_SCENARIOS);
    let wrong: Vec<&str> = PROBABILITY_DISTRACTORS
        .iter()
        .copied()
        .filter(|w| *w != simplified && *w != raw)
        .collect();
    let wrong = shuffle(rng, &wrong);
    multiple_choice(
        rng,
        CAT,
        prompt,
        simplified,
        wrong.iter().take(3).map(|w| w.to_string()).collect(),
    )
}
