use rand::{rngs::StdRng, SeedableRng};

use crate::drill_engine::{
    models::{Question, QuestionRequest},
    topics::{self, fraction_drill::{FractionDrill, FractionLevel}, scientific::ScientificLevel, theorems::TheoremLevel},
};

/// Seeded when asked, OS entropy otherwise.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Core dispatch: one question from the requested topic.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng = make_rng(request.rng_seed);
    let dispatch = topics::dispatcher(request.category);
    dispatch(&mut rng)
}

pub fn generate_theorem(level: TheoremLevel, rng_seed: Option<u64>) -> Question {
    let mut rng = make_rng(rng_seed);
    topics::theorems::generate(&mut rng, level)
}

pub fn generate_scientific(level: ScientificLevel, rng_seed: Option<u64>) -> Question {
    let mut rng = make_rng(rng_seed);
    topics::scientific::generate(&mut rng, level)
}

/// A fraction drill owning its own seeded source, so a whole round replays
/// identically from one seed.
pub struct SeededFractionDrill {
    rng: StdRng,
    drill: FractionDrill,
}

impl SeededFractionDrill {
    pub fn new(level: FractionLevel, rng_seed: Option<u64>) -> Self {
        let mut rng = make_rng(rng_seed);
        let drill = FractionDrill::new(&mut rng, level);
        SeededFractionDrill { rng, drill }
    }

    pub fn next_question(&mut self) -> Option<Question> {
        self.drill.next_question(&mut self.rng)
    }

    pub fn drill(&self) -> &FractionDrill {
        &self.drill
    }
}
