use rand::RngCore;

use crate::drill_engine::{
    helpers::{integer_input, multiple_choice},
    models::{Category, Question},
    rng::{pick_one, random_int, shuffle},
    topics::Generator,
};

const CAT: Category = Category::Algorithmic;

/// Spreadsheet templates over the two input cells `A1` and `B1`.
const FORMULAS: &[(&str, fn(i64, i64) -> i64)] = &[
    ("=A1+B1", |a, b| a + b),
    ("=A1*B1", |a, b| a * b),
    ("=A1+B1*2", |a, b| a + b * 2),
    ("=A1*2+B1", |a, b| a * 2 + b),
    ("=(A1+B1)*2", |a, b| (a + b) * 2),
    ("=A1*B1-A1", |a, b| a * b - a),
];

/// Offsets turning a formula result into a wrong answer.
const WRONG_OFFSETS: &[i64] = &[-5, -3, -2, -1, 1, 2, 3, 5, 7];

pub const GENERATORS: &[Generator] = &[spreadsheet_formula, script_loop];

pub fn generate(rng: &mut dyn RngCore) -> Question {
    let family = *pick_one(rng, GENERATORS);
    family(rng)
}

pub fn spreadsheet_formula(rng: &mut dyn RngCore) -> Question {
    let a1 = random_int(rng, 2, 10);
    let b1 = random_int(rng, 2, 10);
    let &(formula, eval) = pick_one(rng, FORMULAS);
    let result = eval(a1, b1);
    // results are at least 2, so the positive offsets alone leave three candidates
    let wrong: Vec<String> = shuffle(rng, WRONG_OFFSETS)
        .into_iter()
        .map(|off| result + off)
        .filter(|&w| w > 0)
        .take(3)
        .map(|w| w.to_string())
        .collect();
    multiple_choice(
        rng,
        CAT,
        format!("Tableur : A1 = {a1}, B1 = {b1}.\nQue contient C1 si la formule est {formula} ?"),
        result.to_string(),
        wrong,
    )
}

/// A Scratch loop adding or removing a step, or a three-step calculation
/// program.
pub fn script_loop(rng: &mut dyn RngCore) -> Question {
    match random_int(rng, 0, 2) {
        0 => {
            let init = random_int(rng, 0, 5);
            let step = random_int(rng, 2, 5);
            let repeats = random_int(rng, 3, 6);
            integer_input(
                CAT,
                format!(
                    "Programme Scratch :\nMettre x à {init}\nRépéter {repeats} fois :\n    Ajouter {step} à x\nQuelle est la valeur de x ?"
                ),
                init + step * repeats,
            )
        }
        1 => {
            let init = random_int(rng, 20, 40);
            let step = random_int(rng, 2, 5);
            let repeats = random_int(rng, 3, 6);
            integer_input(
                CAT,
                format!(
                    "Programme Scratch :\nMettre x à {init}\nRépéter {repeats} fois :\n    Retirer {step} à x\nQuelle est la valeur de x ?"
                ),
                init - step * repeats,
            )
        }
        _ => calculation_program(rng),
    }
}

pub fn calculation_program(rng: &mut dyn RngCore) -> Question {
    let start = random_int(rng, 1, 6);
    let mult = random_int(rng, 2, 4);
    let add = random_int(rng, 1, 10);
    integer_input(
        CAT,
        format!(
            "Programme de calcul :\n• Choisir {start}\n• Multiplier par {mult}\n• Ajouter {add}\nQuel est le résultat ?"
        ),
        start * mult + add,
    )
}
