//! End-to-end demo: one practice session answered automatically, then the
//! level drills.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=math_drill_gen=debug` to see session assembly and deck logs.
//!
//! 1. **Brevet session**: ten questions balanced across the seven topics.
//!    Every other answer is wrong on purpose so the score breakdown shows
//!    both outcomes.
//! 2. **Level drills**: one question per theorem level, checked with the
//!    level's tolerance, a short fraction round and one scientific notation
//!    question, each with its hint.
//!
//! The player profile is only read, never written.

use math_drill_gen::drill_engine::topics::{
    fraction_drill::FractionLevel, scientific::ScientificLevel, theorems::TheoremLevel,
};
use math_drill_gen::{
    check_answer_with, generate_scientific, generate_session, generate_theorem, DrillConfig,
    PracticeMode, ProfileStore, QuestionFormat, SeededFractionDrill, SessionRequest,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DrillConfig::default();
    match ProfileStore::from_config(&config).load() {
        Some(profile) => println!("  Bonjour {} ({})", profile.name, profile.class_label),
        None => println!("  Pas de profil enregistré, session anonyme"),
    }

    // ── session ──────────────────────────────────────────────────────────────
    let mut session = generate_session(SessionRequest {
        mode: PracticeMode::Brevet,
        count: config.questions_per_session,
        rng_seed: Some(2025),
    });

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {} : {} questions", PracticeMode::Brevet, session.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    while let Some(q) = session.current() {
        let n = session.index() + 1;
        println!();
        println!("  {n}. [{} · {}]", q.category, q.format());
        for line in q.question.lines() {
            println!("     {line}");
        }
        if let Some(choices) = q.choices() {
            for c in choices {
                println!("       - {}", c.text);
            }
        }
        let slip = n % 2 == 0;
        let (answer, correct) = match q.format() {
            QuestionFormat::TrueFalse => {
                let expected = q.correct_text() == "vrai";
                let said = expected != slip;
                let shown = if said { "vrai" } else { "faux" };
                (shown.to_string(), session.submit_boolean(said))
            }
            _ => {
                let typed = if slip { format!("{}0", q.correct_text()) } else { q.correct_text() };
                let correct = session.submit_text(&typed);
                (typed, correct)
            }
        };
        let mark = if correct == Some(true) { "✓" } else { "✗" };
        println!("     → {answer}  {mark}");
    }

    println!();
    println!("  Score: {}/{}", session.score(), session.len());
    for (category, s) in session.score_by_category() {
        println!("    {category:<12} {}/{}", s.correct, s.asked);
    }
    let verdict = if session.passed(config.pass_ratio) { "réussi" } else { "à retravailler" };
    println!("  Seuil {} % : {verdict}", (config.pass_ratio * 100.0) as u32);

    // ── level drills ─────────────────────────────────────────────────────────
    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Théorèmes");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, level) in TheoremLevel::ALL.into_iter().enumerate() {
        let q = generate_theorem(level, Some(10 + i as u64));
        println!();
        println!("  {}", level.label());
        println!("  {}", q.question.replace('\n', "\n  "));
        let ok = check_answer_with(&q, &q.correct_text(), level.answer_mode(&config.tolerance));
        println!("  → {}  ({})", q.correct_text(), if ok { "accepté" } else { "refusé" });
        if let Some(hint) = &q.hint {
            println!("  Indice : {}", hint.replace('\n', " / "));
        }
    }

    println!();
    println!("  Fractions ({} questions)", config.questions_per_round);
    let mut drill = SeededFractionDrill::new(FractionLevel::Medium, Some(5));
    for _ in 0..config.questions_per_round {
        let Some(q) = drill.next_question() else { break };
        println!("    {}  →  {}", q.question, q.correct_text());
    }

    println!();
    let q = generate_scientific(ScientificLevel::Mixed, Some(3));
    println!("  Écriture scientifique");
    println!("  {}", q.question.replace('\n', "\n  "));
    println!("  → {}", q.correct_text());
}
