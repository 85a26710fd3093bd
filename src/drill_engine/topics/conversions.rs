//! Unit conversions. The geometry topic draws from these tables and the
//! themed "relatifs-conversions" session uses the four families directly.

use rand::RngCore;

use crate::drill_engine::{
    helpers::integer_input,
    models::{Category, Question},
    rng::{pick_one, random_int},
    tables::{
        Conversion, AREA_CONVERSIONS, CAPACITY_CONVERSIONS, LENGTH_CONVERSIONS,
        SOLID_VOLUME_CONVERSIONS,
    },
};

const CAT: Category = Category::Geometry;

/// Draw one row of `table` and a value in its range. Inverse rows show the
/// quantity in the small unit so the answer stays a whole number.
pub fn from_table(rng: &mut dyn RngCore, table: &[Conversion]) -> Question {
    let conv = pick_one(rng, table);
    let v = random_int(rng, conv.min, conv.max);
    let (question, answer) = conv.render(v);
    integer_input(CAT, question, answer)
}

pub fn length(rng: &mut dyn RngCore) -> Question {
    from_table(rng, LENGTH_CONVERSIONS)
}

pub fn area(rng: &mut dyn RngCore) -> Question {
    from_table(rng, AREA_CONVERSIONS)
}

pub fn solid_volume(rng: &mut dyn RngCore) -> Question {
    from_table(rng, SOLID_VOLUME_CONVERSIONS)
}

pub fn capacity(rng: &mut dyn RngCore) -> Question {
    from_table(rng, CAPACITY_CONVERSIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::tables::Phrasing;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_row_renders_a_consistent_pair() {
        let tables: [&[Conversion]; 4] = [
            LENGTH_CONVERSIONS,
            AREA_CONVERSIONS,
            SOLID_VOLUME_CONVERSIONS,
            CAPACITY_CONVERSIONS,
        ];
        for table in tables {
            for conv in table {
                for v in conv.min..=conv.max {
                    let (q, a) = conv.render(v);
                    let shown: i64 = q
                        .split(|c: char| !c.is_ascii_digit())
                        .find(|s| !s.is_empty())
                        .unwrap()
                        .parse()
                        .unwrap();
                    match conv.phrasing {
                        Phrasing::Convert => assert_eq!(a, shown * conv.factor, "{q}"),
                        _ => assert_eq!(shown, a * conv.factor, "{q}"),
                    }
                }
            }
        }
    }

    #[test]
    fn capacity_answers_are_whole_numbers() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = capacity(&mut rng);
            assert!(q.correct_text().parse::<i64>().is_ok(), "{}", q.question);
            assert_eq!(q.category, Category::Geometry);
        }
    }
}
