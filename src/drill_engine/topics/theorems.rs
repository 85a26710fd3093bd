//! Pythagoras and intercept theorem drills, in four levels. Every question
//! carries a worked hint.
//!
//! Levels 1 and 2 are free-input lengths in cm, compared numerically with
//! `tolerance.exact`. Level 3 asks the converses as true/false questions
//! answered `oui` / `non`. Level 4 is the measurement arena: enlarged
//! triangles with lengths to the tenth, compared with `tolerance.measure`.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    checker::AnswerMode,
    config::Tolerance,
    helpers::{format_decimal, free_input, integer_input, true_false},
    models::{Category, Question},
    rng::{chance, pick_one, random_int, shuffle},
};

const CAT: Category = Category::Geometry;

pub const BASE_TRIPLETS: &[[i64; 3]] = &[
    [3, 4, 5],
    [5, 12, 13],
    [8, 15, 17],
    [7, 24, 25],
    [6, 8, 10],
    [9, 12, 15],
    [12, 16, 20],
    [15, 20, 25],
    [9, 40, 41],
    [20, 21, 29],
];

const SCALES: &[i64] = &[1, 2, 3];

/// Points M on [AB) and N on [AC) with `AB/AC = AM/AN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterceptConfig {
    pub ab: i64,
    pub ac: i64,
    pub am: i64,
    pub an: i64,
}

const fn cfg(ab: i64, ac: i64, am: i64, an: i64) -> InterceptConfig {
    InterceptConfig { ab, ac, am, an }
}

pub const INTERCEPT_CONFIGS: &[InterceptConfig] = &[
    cfg(3, 5, 6, 10),
    cfg(4, 6, 8, 12),
    cfg(2, 7, 4, 14),
    cfg(3, 9, 5, 15),
    cfg(5, 10, 7, 14),
    cfg(4, 10, 6, 15),
    cfg(6, 9, 10, 15),
    cfg(3, 12, 4, 16),
    cfg(5, 15, 8, 24),
    cfg(2, 8, 3, 12),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TheoremLevel {
    Pythagoras,
    Intercept,
    Converse,
    Arena,
}

impl TheoremLevel {
    pub const ALL: [TheoremLevel; 4] = [Self::Pythagoras, Self::Intercept, Self::Converse, Self::Arena];

    /// Levels are numbered from 1; anything else falls back to Pythagoras.
    pub fn from_number(n: u8) -> Self {
        match n {
            2 => Self::Intercept,
            3 => Self::Converse,
            4 => Self::Arena,
            _ => Self::Pythagoras,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pythagoras => "Théorème de Pythagore",
            Self::Intercept => "Théorème de Thalès",
            Self::Converse => "Réciproques",
            Self::Arena => "Arène des mesures",
        }
    }

    /// How typed answers are compared at this level.
    pub fn answer_mode(self, tolerance: &Tolerance) -> AnswerMode {
        match self {
            Self::Pythagoras | Self::Intercept => tolerance.exact_mode(),
            Self::Converse => AnswerMode::Exact,
            Self::Arena => tolerance.measure_mode(),
        }
    }
}

pub fn generate(rng: &mut dyn RngCore, level: TheoremLevel) -> Question {
    match level {
        TheoremLevel::Pythagoras => pythagoras(rng),
        TheoremLevel::Intercept => intercept(rng),
        TheoremLevel::Converse => converse(rng),
        TheoremLevel::Arena => arena(rng),
    }
}

fn scaled_triplet(rng: &mut dyn RngCore) -> [i64; 3] {
    let base = *pick_one(rng, BASE_TRIPLETS);
    let k = *pick_one(rng, SCALES);
    base.map(|v| v * k)
}

// ---------------------------------------------------------------------------
// Level 1
// ---------------------------------------------------------------------------

/// Which side of the triangle right-angled at A is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSide {
    /// BC, from AB and AC.
    Hypotenuse,
    /// AB, from BC and AC.
    LegAb,
    /// AC, from BC and AB.
    LegAc,
}

pub fn pythagoras(rng: &mut dyn RngCore) -> Question {
    let triplet = scaled_triplet(rng);
    let side = match random_int(rng, 0, 2) {
        0 => MissingSide::Hypotenuse,
        1 => MissingSide::LegAb,
        _ => MissingSide::LegAc,
    };
    pythagoras_with(triplet, side)
}

/// `[a, b, c]` are AB, AC and BC of a triangle right-angled at A.
pub fn pythagoras_with([a, b, c]: [i64; 3], side: MissingSide) -> Question {
    const STEM: &str = "Le triangle ABC est rectangle en A.";
    match side {
        MissingSide::Hypotenuse => integer_input(
            CAT,
            format!("{STEM}\nAB = {a} cm et AC = {b} cm.\nCalcule BC."),
            c,
        )
        .with_hint(format!(
            "BC² = AB² + AC² = {a}² + {b}² = {} + {} = {}",
            a * a,
            b * b,
            c * c
        )),
        MissingSide::LegAb => integer_input(
            CAT,
            format!("{STEM}\nBC = {c} cm et AC = {b} cm.\nCalcule AB."),
            a,
        )
        .with_hint(format!(
            "AB² = BC² \u{2212} AC² = {c}² \u{2212} {b}² = {} \u{2212} {} = {}",
            c * c,
            b * b,
            a * a
        )),
        MissingSide::LegAc => integer_input(
            CAT,
            format!("{STEM}\nBC = {c} cm et AB = {a} cm.\nCalcule AC."),
            b,
        )
        .with_hint(format!(
            "AC² = BC² \u{2212} AB² = {c}² \u{2212} {a}² = {} \u{2212} {} = {}",
            c * c,
            a * a,
            b * b
        )),
    }
}

// ---------------------------------------------------------------------------
// Level 2
// ---------------------------------------------------------------------------

/// One of AB, AC, AM and AN is hidden; the table keeps every quotient whole.
pub fn intercept(rng: &mut dyn RngCore) -> Question {
    let InterceptConfig { ab, ac, am, an } = *pick_one(rng, INTERCEPT_CONFIGS);
    const STEM: &str = "Les droites (BM) et (CN) sont parallèles.";
    match random_int(rng, 0, 3) {
        0 => integer_input(
            CAT,
            format!("{STEM}\nAB = {ab} cm, AC = {ac} cm, AM = {am} cm.\nCalcule AN."),
            an,
        )
        .with_hint(format!("AB/AC = AM/AN ⟹ {ab}/{ac} = {am}/AN ⟹ AN = {am} × {ac} / {ab} = {an}")),
        1 => integer_input(
            CAT,
            format!("{STEM}\nAB = {ab} cm, AC = {ac} cm, AN = {an} cm.\nCalcule AM."),
            am,
        )
        .with_hint(format!("AB/AC = AM/AN ⟹ {ab}/{ac} = AM/{an} ⟹ AM = {ab} × {an} / {ac} = {am}")),
        2 => integer_input(
            CAT,
            format!("{STEM}\nAB = {ab} cm, AM = {am} cm, AN = {an} cm.\nCalcule AC."),
            ac,
        )
        .with_hint(format!("AB/AC = AM/AN ⟹ {ab}/AC = {am}/{an} ⟹ AC = {ab} × {an} / {am} = {ac}")),
        _ => integer_input(
            CAT,
            format!("{STEM}\nAC = {ac} cm, AM = {am} cm, AN = {an} cm.\nCalcule AB."),
            ab,
        )
        .with_hint(format!("AB/AC = AM/AN ⟹ AB/{ac} = {am}/{an} ⟹ AB = {am} × {ac} / {an} = {ab}")),
    }
}

// ---------------------------------------------------------------------------
// Level 3
// ---------------------------------------------------------------------------

pub fn converse(rng: &mut dyn RngCore) -> Question {
    if chance(rng, 0.5) {
        pythagoras_converse(rng)
    } else {
        intercept_converse(rng)
    }
}

/// Sides shown in shuffled order; half the time the hypotenuse is nudged so
/// the triangle is not right-angled.
pub fn pythagoras_converse(rng: &mut dyn RngCore) -> Question {
    let [a, b, c] = scaled_triplet(rng);
    let right = chance(rng, 0.5);
    let c = if right { c } else { c + *pick_one(rng, &[1, 2, -1]) };
    let sides = shuffle(rng, &[("AB", a), ("AC", b), ("BC", c)]);

    let mut largest = sides[0];
    for &s in &sides[1..] {
        if s.1 > largest.1 {
            largest = s;
        }
    }
    let others: Vec<(&str, i64)> = sides.iter().copied().filter(|s| s.0 != largest.0).collect();
    let (o1, o2) = (others[0], others[1]);
    let sum = o1.1 * o1.1 + o2.1 * o2.1;
    let big = largest.1 * largest.1;
    let right_at = match largest.0 {
        "BC" => "A",
        "AC" => "B",
        _ => "C",
    };

    let prompt = format!(
        "{} = {} cm, {} = {} cm, {} = {} cm.\nLe triangle ABC est-il rectangle ?",
        sides[0].0, sides[0].1, sides[1].0, sides[1].1, sides[2].0, sides[2].1
    );
    let verdict = if big == sum {
        format!("{big} = {sum} ⟹ Rectangle en {right_at}")
    } else {
        format!("{big} ≠ {sum} ⟹ Pas rectangle")
    };
    true_false(CAT, prompt, big == sum).with_hint(format!(
        "{}² = {big} et {}² + {}² = {} + {} = {sum}\n{verdict}",
        largest.0,
        o1.0,
        o2.0,
        o1.1 * o1.1,
        o2.1 * o2.1
    ))
}

/// Half the time AN is pushed off so the ratios differ.
pub fn intercept_converse(rng: &mut dyn RngCore) -> Question {
    let mut c = *pick_one(rng, INTERCEPT_CONFIGS);
    if chance(rng, 0.5) {
        c.an += *pick_one(rng, &[1, 2, 3]);
    }
    // cross products avoid comparing floats
    let parallel = c.ab * c.an == c.am * c.ac;
    let r1 = c.ab as f64 / c.ac as f64;
    let r2 = c.am as f64 / c.an as f64;
    let verdict = if parallel {
        "Les rapports sont égaux ⟹ Parallèles (Thalès)"
    } else {
        "Les rapports sont différents ⟹ Pas parallèles"
    };
    true_false(
        CAT,
        format!(
            "AB = {} cm, AC = {} cm, AM = {} cm, AN = {} cm.\nLes droites (BM) et (CN) sont-elles parallèles ?",
            c.ab, c.ac, c.am, c.an
        ),
        parallel,
    )
    .with_hint(format!(
        "AB/AC = {}/{} = {} et AM/AN = {}/{} = {}\n{verdict}",
        c.ab,
        c.ac,
        round4(r1),
        c.am,
        c.an,
        round4(r2)
    ))
}

// ---------------------------------------------------------------------------
// Level 4
// ---------------------------------------------------------------------------

/// Enlargement ratios, in tenths.
pub const ARENA_RATIOS: &[i64] = &[15, 20, 25, 30, 40];

/// ABC enlarged into ADE by a ratio from [`ARENA_RATIOS`]; one of AD, AE
/// and DE is hidden. The ratio is always readable from a shown pair.
pub fn arena(rng: &mut dyn RngCore) -> Question {
    let k10 = *pick_one(rng, ARENA_RATIOS);
    let ab = random_int(rng, 2, 7);
    let ac = random_int(rng, 2, 7);
    let bc = random_int(rng, 2, 6);
    let tenths = |n: i64| format_decimal(n as f64 / 10.0);
    let (ad, ae, de) = (tenths(ab * k10), tenths(ac * k10), tenths(bc * k10));
    let k = tenths(k10);

    let (shown, hidden, answer, ratio, scaled) = match random_int(rng, 0, 2) {
        0 => (format!("AE = {ae} cm, DE = {de} cm"), "AD", ad, format!("AE/AC = {ae}/{ac}"), format!("AB = {k} × {ab}")),
        1 => (format!("AD = {ad} cm, DE = {de} cm"), "AE", ae, format!("AD/AB = {ad}/{ab}"), format!("AC = {k} × {ac}")),
        _ => (format!("AD = {ad} cm, AE = {ae} cm"), "DE", de, format!("AD/AB = {ad}/{ab}"), format!("BC = {k} × {bc}")),
    };
    free_input(
        CAT,
        format!(
            "Les droites (BC) et (DE) sont parallèles, D sur [AB) et E sur [AC).
             AB = {ab} cm, AC = {ac} cm, BC = {bc} cm, {shown}.
Calcule {hidden}."
        ),
        answer.clone(),
    )
    .with_hint(format!("k = {ratio} = {k}
{hidden} = k × {scaled} = {answer}"))
}

fn round4(x: f64) -> String {
    crate::drill_engine::helpers::format_decimal((x * 10_000.0).round() / 10_000.0)
}
