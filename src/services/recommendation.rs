//! Program naming, reasoning text and expected-progress estimates. All
//! user-facing strings are French, matching the web client.

use chrono::Utc;

use crate::models::profile::{Lift, LifterProfile};
use crate::models::program::{
    ExpectedProgress, GeneratedProgram, Goal, ProgramRecommendation, Scheme,
};

pub fn week_name(week_number: u32, is_deload: bool) -> String {
    if is_deload {
        format!("Semaine {week_number} - Légère")
    } else {
        format!("Semaine {week_number}")
    }
}

pub fn day_name(day_number: u32, primary: Lift) -> String {
    format!("Jour {day_number} - {}", primary.label())
}

/// Focus line shown on the week card, keyed on the scheme-relative week so a
/// remapped short cycle describes the phase it actually trains.
pub fn week_focus(scheme: Scheme, scheme_week: u32, is_deload: bool) -> String {
    if is_deload {
        return "Récupération : charges et volume réduits".to_string();
    }

    let focus = match scheme {
        Scheme::Linear => match scheme_week {
            1 | 2 => "Volume : installer la technique sur des barres modérées",
            3 | 4 => "Transition : les charges montent, les répétitions descendent",
            5 => "Intensité : triples lourds avant le test",
            _ => "Test : nouvelle barre de référence en AMRAP",
        },
        Scheme::FiveThreeOne => match scheme_week {
            1 => "Vague de 5 : séries de 5 avec dernière série AMRAP",
            2 => "Vague de 3 : séries de 3 avec dernière série AMRAP",
            3 => "Vague 5/3/1 : simple lourd en AMRAP",
            _ => "Semaine de récupération à charges légères",
        },
        Scheme::Block => match scheme_week {
            1..=3 => "Accumulation : volume élevé à intensité modérée",
            4..=6 => "Intensification : charges lourdes, volume réduit",
            7 => "Affûtage : test du maximum sur simple",
            _ => "Décharge : récupération avant le prochain bloc",
        },
        Scheme::Hypertrophy => "Hypertrophie : séries longues à charge modérée",
    };

    focus.to_string()
}

pub fn program_description(
    scheme: Scheme,
    goal: Goal,
    duration_weeks: u32,
    days_per_week: u32,
    priority: Lift,
) -> String {
    format!(
        "Programme {} de {duration_weeks} semaines, {days_per_week} jours par semaine. \
         Objectif {} avec {} en priorité.",
        scheme.label(),
        goal.label(),
        priority.label()
    )
}

/// Fixed per-scheme estimate of 1RM gain per completed cycle. Lower tiers
/// progress faster; displayed alongside the program, never fed back into the
/// load math.
pub fn expected_progress(scheme: Scheme) -> ExpectedProgress {
    match scheme {
        Scheme::Linear => ExpectedProgress {
            squat_kg: 10.0,
            bench_kg: 5.0,
            deadlift_kg: 10.0,
        },
        Scheme::FiveThreeOne => ExpectedProgress {
            squat_kg: 5.0,
            bench_kg: 2.5,
            deadlift_kg: 5.0,
        },
        Scheme::Block => ExpectedProgress {
            squat_kg: 2.5,
            bench_kg: 2.5,
            deadlift_kg: 5.0,
        },
        Scheme::Hypertrophy => ExpectedProgress {
            squat_kg: 2.5,
            bench_kg: 2.5,
            deadlift_kg: 2.5,
        },
    }
}

pub fn build_recommendation(
    program: GeneratedProgram,
    profile: &LifterProfile,
) -> ProgramRecommendation {
    let progress = expected_progress(program.scheme);

    let mut reasoning = vec![
        format!(
            "Niveau {} : périodisation {} sur {} semaines.",
            profile.experience.label(),
            program.scheme.label(),
            program.duration_weeks
        ),
        format!(
            "Objectif {} à {} jours d'entraînement par semaine.",
            program.goal.label(),
            profile.days_per_week
        ),
    ];

    if profile.days_per_week > 3 {
        reasoning.push(format!(
            "{} travaillé en priorité avec {} exposition(s) lourde(s) supplémentaire(s).",
            profile.priority_lift.label(),
            profile.days_per_week - 3
        ));
    } else {
        reasoning.push("Rotation équilibrée des trois mouvements sur la semaine.".to_string());
    }

    reasoning.push(format!(
        "Progression attendue par cycle : +{}kg au squat, +{}kg au développé couché, +{}kg au soulevé de terre.",
        progress.squat_kg, progress.bench_kg, progress.deadlift_kg
    ));

    ProgramRecommendation {
        program,
        reasoning,
        expected_progress: progress,
        generated_at: Utc::now(),
    }
}
