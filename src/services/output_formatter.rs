//! Display helpers consumed by the week/day cards. Total functions: a
//! malformed tree yields an empty string, never a panic.

use crate::models::program::{PrescribedSet, WeekPrescription};

const DELOAD_SUMMARY: &str = "Semaine légère - Récupération";

/// `"5+ @ 127.5kg"` for a weighted AMRAP set, `"8 @ 72.5%"` when no concrete
/// weight is attached.
pub fn format_set_display(set: &PrescribedSet) -> String {
    let reps = if set.amrap {
        format!("{}+", set.reps)
    } else {
        set.reps.to_string()
    };

    match set.weight_kg {
        Some(weight) => format!("{reps} @ {}kg", format_quantity(weight)),
        None => format!("{reps} @ {}%", format_quantity(set.percentage)),
    }
}

/// Headline for a week card: the top set of the first day's primary exercise,
/// or the fixed recovery label on deload weeks.
pub fn format_week_summary(week: &WeekPrescription) -> String {
    if week.is_deload {
        return DELOAD_SUMMARY.to_string();
    }

    week.days
        .first()
        .and_then(|day| day.exercises.first())
        .and_then(|exercise| exercise.sets.last())
        .and_then(|set| {
            set.weight_kg.map(|weight| {
                format!(
                    "Max: {}kg ({}%)",
                    format_quantity(weight),
                    format_quantity(set.percentage)
                )
            })
        })
        .unwrap_or_default()
}

fn format_quantity(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Lift;
    use crate::models::program::{DayPrescription, ExercisePrescription, LiftKind};

    fn weighted_set(reps: u32, percentage: f64, amrap: bool, weight_kg: f64) -> PrescribedSet {
        PrescribedSet {
            reps,
            percentage,
            amrap,
            rpe: None,
            weight_kg: Some(weight_kg),
        }
    }

    fn week_with_top_set(set: PrescribedSet) -> WeekPrescription {
        WeekPrescription {
            week_number: 1,
            name: "Semaine 1".to_string(),
            is_deload: false,
            days: vec![DayPrescription {
                day_number: 1,
                name: "Jour 1 - Squat".to_string(),
                main_lift: Lift::Squat,
                exercises: vec![ExercisePrescription {
                    name: "Squat".to_string(),
                    kind: LiftKind::Squat,
                    sets: vec![weighted_set(5, 65.0, false, 97.5), set],
                    notes: None,
                    is_tool_exercise: false,
                }],
            }],
            focus: String::new(),
        }
    }

    #[test]
    fn test_set_display_with_weight() {
        assert_eq!(
            format_set_display(&weighted_set(5, 85.0, true, 127.5)),
            "5+ @ 127.5kg"
        );
        assert_eq!(
            format_set_display(&weighted_set(3, 70.0, false, 100.0)),
            "3 @ 100kg"
        );
    }

    #[test]
    fn test_set_display_falls_back_to_percentage() {
        let set = PrescribedSet {
            reps: 8,
            percentage: 72.5,
            amrap: false,
            rpe: None,
            weight_kg: None,
        };
        assert_eq!(format_set_display(&set), "8 @ 72.5%");
    }

    #[test]
    fn test_week_summary_uses_last_set_of_primary() {
        let week = week_with_top_set(weighted_set(5, 85.0, true, 127.5));
        assert_eq!(format_week_summary(&week), "Max: 127.5kg (85%)");
    }

    #[test]
    fn test_week_summary_deload_is_fixed_label() {
        let mut week = week_with_top_set(weighted_set(10, 40.0, false, 60.0));
        week.is_deload = true;
        assert_eq!(format_week_summary(&week), "Semaine légère - Récupération");
    }

    #[test]
    fn test_week_summary_empty_on_malformed_tree() {
        let mut week = week_with_top_set(weighted_set(5, 85.0, false, 127.5));
        week.days.clear();
        assert_eq!(format_week_summary(&week), "");

        let mut week = week_with_top_set(weighted_set(5, 85.0, false, 127.5));
        week.days[0].exercises[0].sets.clear();
        assert_eq!(format_week_summary(&week), "");

        // A weightless top set (accessory in primary position) also yields
        // nothing rather than a bogus headline.
        let mut week = week_with_top_set(weighted_set(5, 85.0, false, 127.5));
        week.days[0].exercises[0].sets = vec![PrescribedSet {
            reps: 8,
            percentage: 0.0,
            amrap: false,
            rpe: Some(7.0),
            weight_kg: None,
        }];
        assert_eq!(format_week_summary(&week), "");
    }
}
