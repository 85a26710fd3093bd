//! Session assembly and round bookkeeping.

use std::collections::BTreeMap;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    checker::{check_answer, check_boolean},
    generator::make_rng,
    models::{Category, PracticeMode, Question, SessionRequest},
    rng::shuffle,
    topics::{self, Generator},
};

/// Balanced assembly: every generator is called `count / n` times in order,
/// the `count % n` leftover slots go to distinct generators picked at random,
/// then the whole list is shuffled.
///
/// Works the same for topic dispatchers and for a flat family list.
pub fn build_session(rng: &mut dyn RngCore, count: usize, generators: &[Generator]) -> Vec<Question> {
    let n = generators.len();
    if n == 0 {
        tracing::warn!(count, "no generators supplied, session is empty");
        return Vec::new();
    }
    let full_rounds = count / n;
    let mut questions = Vec::with_capacity(count);
    for _ in 0..full_rounds {
        for &generate in generators {
            questions.push(generate(rng));
        }
    }
    let remaining = count - full_rounds * n;
    let indices: Vec<usize> = (0..n).collect();
    for idx in shuffle(rng, &indices).into_iter().take(remaining) {
        questions.push(generators[idx](rng));
    }
    tracing::debug!(count, generators = n, full_rounds, remaining, "session assembled");
    shuffle(rng, &questions)
}

/// The seven topic dispatchers in category order.
pub fn topic_dispatchers() -> Vec<Generator> {
    Category::ALL.into_iter().map(topics::dispatcher).collect()
}

pub fn generators_for(mode: PracticeMode) -> Vec<Generator> {
    match mode {
        PracticeMode::Flash | PracticeMode::Brevet | PracticeMode::Zen => topic_dispatchers(),
        PracticeMode::RelatifsConversions => topics::SIGNED_AND_CONVERSIONS.to_vec(),
    }
}

pub fn generate_session(request: SessionRequest) -> Session {
    let mut rng = make_rng(request.rng_seed);
    let generators = generators_for(request.mode);
    Session::new(build_session(&mut rng, request.count, &generators))
}

// ---------------------------------------------------------------------------
// Round state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Position of the question in the session.
    pub index: usize,
    pub user_answer: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub correct: usize,
    pub asked: usize,
}

/// Questions of one round plus the running score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    questions: Vec<Question>,
    index: usize,
    score: usize,
    results: Vec<AnswerRecord>,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        Session { questions, index: 0, score: 0, results: Vec::new() }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Check `raw` against the current question, record it and move on.
    /// `None` once the session is over.
    pub fn submit_text(&mut self, raw: &str) -> Option<bool> {
        let correct = check_answer(self.current()?, raw);
        Some(self.record(raw.to_string(), correct))
    }

    pub fn submit_boolean(&mut self, value: bool) -> Option<bool> {
        let correct = check_boolean(self.current()?, value);
        let shown = if value { "vrai" } else { "faux" };
        Some(self.record(shown.to_string(), correct))
    }

    fn record(&mut self, user_answer: String, correct: bool) -> bool {
        self.results.push(AnswerRecord { index: self.index, user_answer, correct });
        if correct {
            self.score += 1;
        }
        self.index += 1;
        correct
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn results(&self) -> &[AnswerRecord] {
        &self.results
    }

    /// Correct / asked per category, over the answered questions.
    pub fn score_by_category(&self) -> BTreeMap<Category, CategoryScore> {
        let mut out: BTreeMap<Category, CategoryScore> = BTreeMap::new();
        for r in &self.results {
            let Some(q) = self.questions.get(r.index) else { continue };
            let entry = out.entry(q.category).or_default();
            entry.asked += 1;
            if r.correct {
                entry.correct += 1;
            }
        }
        out
    }

    /// At least `ceil(len × pass_ratio)` correct answers.
    pub fn passed(&self, pass_ratio: f64) -> bool {
        let needed = (self.len() as f64 * pass_ratio).ceil() as usize;
        self.score >= needed
    }
}
