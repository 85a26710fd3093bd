//! Question families, one module per topic.
//!
//! | Module             | Category                | Families |
//! |--------------------|-------------------------|----------|
//! | `numeric`          | Calcul                  | fractions, powers, signed integers, ordering |
//! | `literal`          | Algèbre                 | distribute, solve, expand, factor |
//! | `proportionality`  | Proportions             | percentages, speed, scale |
//! | `probability`      | Probas                  | draws, mean, median, range, equiprobability |
//! | `geometry`         | Géométrie               | areas, volumes, angles, conversions, symmetry |
//! | `functions`        | Fonctions               | image, pre-image, variation, graph reading |
//! | `algorithmic`      | Algo                    | spreadsheet, Scratch, calculation program |
//!
//! Each topic exposes a `GENERATORS` table and a `generate` dispatcher that
//! picks one entry uniformly. `theorems`, `fraction_drill` and `scientific`
//! are level-based drills outside the balanced session.

use rand::RngCore;

use crate::drill_engine::models::{Category, Question};

pub mod algorithmic;
pub mod conversions;
pub mod fraction_drill;
pub mod functions;
pub mod geometry;
pub mod literal;
pub mod numeric;
pub mod probability;
pub mod proportionality;
pub mod scientific;
pub mod theorems;

/// A question family: draws its parameters from `rng` and builds one question.
pub type Generator = fn(&mut dyn RngCore) -> Question;

/// Topic dispatcher for a category.
pub fn dispatcher(category: Category) -> Generator {
    match category {
        Category::Numeric => numeric::generate,
        Category::Algebra => literal::generate,
        Category::Proportionality => proportionality::generate,
        Category::ProbabilityStatistics => probability::generate,
        Category::Geometry => geometry::generate,
        Category::Functions => functions::generate,
        Category::Algorithmic => algorithmic::generate,
    }
}

/// Every family table, for exhaustive checks.
pub fn family_tables() -> [(Category, &'static [Generator]); 7] {
    [
        (Category::Numeric, numeric::GENERATORS),
        (Category::Algebra, literal::GENERATORS),
        (Category::Proportionality, proportionality::GENERATORS),
        (Category::ProbabilityStatistics, probability::GENERATORS),
        (Category::Geometry, geometry::GENERATORS),
        (Category::Functions, functions::GENERATORS),
        (Category::Algorithmic, algorithmic::GENERATORS),
    ]
}

/// Flat family list of the `relatifs-conversions` themed session.
pub const SIGNED_AND_CONVERSIONS: &[Generator] = &[
    numeric::signed_add_sub,
    numeric::signed_product,
    conversions::length,
    conversions::area,
    conversions::solid_volume,
    conversions::capacity,
];
