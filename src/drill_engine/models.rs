use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::drill_engine::error::DrillError;

// ---------------------------------------------------------------------------
// Topic labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Numeric,
    Algebra,
    Proportionality,
    ProbabilityStatistics,
    Geometry,
    Functions,
    Algorithmic,
}

impl Category {
    /// All seven topics in session order.
    pub const ALL: [Category; 7] = [
        Category::Numeric,
        Category::Algebra,
        Category::Proportionality,
        Category::ProbabilityStatistics,
        Category::Geometry,
        Category::Functions,
        Category::Algorithmic,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Numeric               => "Calcul",
            Category::Algebra               => "Algèbre",
            Category::Proportionality       => "Proportions",
            Category::ProbabilityStatistics => "Probas",
            Category::Geometry              => "Géométrie",
            Category::Functions             => "Fonctions",
            Category::Algorithmic           => "Algo",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionFormat {
    MultipleChoice,
    TrueFalse,
    FreeInput,
}

impl fmt::Display for QuestionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionFormat::MultipleChoice => write!(f, "QCM"),
            QuestionFormat::TrueFalse      => write!(f, "Vrai/Faux"),
            QuestionFormat::FreeInput      => write!(f, "Réponse directe"),
        }
    }
}

// ---------------------------------------------------------------------------
// Question record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub is_correct: bool,
}

/// Format-specific answer representation.
///
/// Each variant carries only what its comparison rule needs, so the checker
/// is a plain exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "kebab-case")]
pub enum Answer {
    /// Exactly four choices with pairwise-distinct text, one of them correct.
    MultipleChoice { choices: Vec<Choice> },
    TrueFalse { expected: bool },
    /// `accepted` always contains `canonical`.
    FreeInput { canonical: String, accepted: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: Category,
    /// Display text; may span several lines.
    pub question: String,
    pub answer: Answer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Question {
    pub fn format(&self) -> QuestionFormat {
        match self.answer {
            Answer::MultipleChoice { .. } => QuestionFormat::MultipleChoice,
            Answer::TrueFalse { .. }      => QuestionFormat::TrueFalse,
            Answer::FreeInput { .. }      => QuestionFormat::FreeInput,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The text a player would have to submit to be marked correct.
    ///
    /// For true/false questions this is `"vrai"` or `"faux"`.
    pub fn correct_text(&self) -> String {
        match &self.answer {
            Answer::MultipleChoice { choices } => choices
                .iter()
                .find(|c| c.is_correct)
                .map(|c| c.text.clone())
                .unwrap_or_default(),
            Answer::TrueFalse { expected } => {
                if *expected { "vrai".to_string() } else { "faux".to_string() }
            }
            Answer::FreeInput { canonical, .. } => canonical.clone(),
        }
    }

    pub fn choices(&self) -> Option<&[Choice]> {
        match &self.answer {
            Answer::MultipleChoice { choices } => Some(choices),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Practice modes offered by the drill menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeMode {
    Flash,
    Brevet,
    Zen,
    /// Themed sub-session: signed numbers and unit conversions only.
    RelatifsConversions,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 4] = [
        PracticeMode::Flash,
        PracticeMode::Brevet,
        PracticeMode::Zen,
        PracticeMode::RelatifsConversions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PracticeMode::Flash               => "flash",
            PracticeMode::Brevet              => "brevet",
            PracticeMode::Zen                 => "zen",
            PracticeMode::RelatifsConversions => "relatifs-conversions",
        }
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PracticeMode::Flash               => "Flash",
            PracticeMode::Brevet              => "Mode Brevet",
            PracticeMode::Zen                 => "Zen",
            PracticeMode::RelatifsConversions => "Relatifs & Conversions",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PracticeMode {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PracticeMode::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| DrillError::UnknownMode(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub category: Category,
    /// `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    pub fn new(category: Category) -> Self {
        QuestionRequest { category, rng_seed: None }
    }

    pub fn seeded(category: Category, seed: u64) -> Self {
        QuestionRequest { category, rng_seed: Some(seed) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub mode: PracticeMode,
    pub count: usize,
    pub rng_seed: Option<u64>,
}

impl SessionRequest {
    /// Ten questions, OS entropy.
    pub fn new(mode: PracticeMode) -> Self {
        SessionRequest { mode, count: 10, rng_seed: None }
    }
}
