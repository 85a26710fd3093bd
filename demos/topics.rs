//! One illustrated example for every topic, plus the themed mode.
//!
//! Run with:
//!   cargo run --example topics
//!
//! Each block shows:
//!   • What the topic covers
//!   • One question (fixed seed → always the same question)
//!   • The options with the correct one marked ✓, or the accepted inputs
//!   • The hint when the family provides one

use math_drill_gen::{
    generate_question, generate_session, Answer, Category, PracticeMode, Question,
    QuestionRequest, SessionRequest,
};
use tracing_subscriber::EnvFilter;

// ── topic metadata ────────────────────────────────────────────────────────────

struct TopicMeta {
    category: Category,
    seed: u64,
    covers: &'static str,
}

fn topics() -> Vec<TopicMeta> {
    vec![
        TopicMeta {
            category: Category::Numeric,
            seed: 1001,
            covers: "Fractions, puissances de 10, écriture scientifique, priorités \
                     opératoires et comparaison de décimaux.",
        },
        TopicMeta {
            category: Category::Algebra,
            seed: 2002,
            covers: "Développer, factoriser, réduire une expression et résoudre une \
                     équation du premier degré.",
        },
        TopicMeta {
            category: Category::Proportionality,
            seed: 3003,
            covers: "Pourcentages, évolutions, échelles, vitesses et quatrième \
                     proportionnelle.",
        },
        TopicMeta {
            category: Category::ProbabilityStatistics,
            seed: 4004,
            covers: "Probabilité d'un tirage, événement contraire, moyenne, médiane \
                     et étendue d'une série.",
        },
        TopicMeta {
            category: Category::Geometry,
            seed: 5005,
            covers: "Aires, périmètres, volumes, angles, symétries et conversions \
                     d'unités.",
        },
        TopicMeta {
            category: Category::Functions,
            seed: 6006,
            covers: "Image, antécédent, sens de variation d'une fonction affine et \
                     lecture graphique.",
        },
        TopicMeta {
            category: Category::Algorithmic,
            seed: 7007,
            covers: "Formules de tableur, boucles Scratch et programmes de calcul.",
        },
    ]
}

// ── display helpers ───────────────────────────────────────────────────────────

fn divider(ch: char, n: usize) {
    println!("{}", ch.to_string().repeat(n));
}

fn wrap(text: &str, indent: usize, width: usize) {
    let pad = " ".repeat(indent);
    let mut line = pad.clone();
    for word in text.split_whitespace() {
        if line.chars().count() + word.chars().count() + 1 > width {
            println!("{line}");
            line = format!("{pad}{word}");
        } else {
            if line.len() > indent {
                line.push(' ');
            }
            line.push_str(word);
        }
    }
    if !line.trim().is_empty() {
        println!("{line}");
    }
}

fn print_question(q: &Question) {
    println!();
    println!("  QUESTION ({})", q.format());
    for line in q.question.lines() {
        wrap(line, 4, 66);
    }

    println!();
    match &q.answer {
        Answer::MultipleChoice { choices } => {
            println!("  OPTIONS");
            for c in choices {
                let marker = if c.is_correct { "✓" } else { " " };
                println!("    {marker} {}", c.text);
            }
        }
        Answer::TrueFalse { .. } => println!("  RÉPONSE  {}", q.correct_text()),
        Answer::FreeInput { canonical, accepted } => {
            println!("  RÉPONSE  {canonical}");
            let others: Vec<&str> =
                accepted.iter().filter(|a| *a != canonical).map(String::as_str).collect();
            if !others.is_empty() {
                println!("  ACCEPTÉ  {}", others.join("  |  "));
            }
        }
    }

    if let Some(hint) = &q.hint {
        println!();
        println!("  INDICE");
        for line in hint.lines() {
            wrap(line, 4, 66);
        }
    }
}

fn print_example(meta: &TopicMeta) {
    let q = generate_question(QuestionRequest::seeded(meta.category, meta.seed));

    divider('═', 66);
    println!("  THÈME : {}   seed: {}", meta.category, meta.seed);
    divider('─', 66);

    println!();
    println!("  AU PROGRAMME");
    wrap(meta.covers, 4, 64);

    print_question(&q);
    println!();
}

// ── entry point ───────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!();
    println!("  MATH DRILL GENERATOR : un exemple par thème");
    println!("  Seeds fixes (déterministe)");
    println!();

    let all = topics();
    for meta in &all {
        print_example(meta);
    }

    let themed = PracticeMode::RelatifsConversions;
    let session = generate_session(SessionRequest { mode: themed, count: 3, rng_seed: Some(8008) });
    divider('═', 66);
    println!("  MODE : {}   {} questions", themed, session.len());
    divider('─', 66);
    for q in session.questions() {
        print_question(q);
    }
    println!();

    divider('═', 66);
    println!("  {} thèmes affichés. Lancez 'cargo run --example demo' pour", all.len());
    println!("  une session complète.");
    divider('═', 66);
    println!();
}
