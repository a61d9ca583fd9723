use crate::models::profile::{ExperienceLevel, Lift, LiftMaxes, LifterProfile, ProfileError};
use crate::models::program::{
    DayPrescription, ExercisePrescription, GeneratedProgram, Goal, LiftKind, PrescribedSet,
    ProgramRecommendation, Scheme, SetPrescription, WeekPrescription,
};
use crate::services::deload::{DeloadPolicy, is_deload_week};
use crate::services::percentage_tables::{WeekTable, resolve_week_table, scheme_week_for};
use crate::services::recommendation;
use crate::services::split::{DayPairing, build_day_split};

/// An explicit scheme override wins; otherwise the experience tier decides.
/// Hypertrophy is never selected automatically.
pub fn select_scheme(profile: &LifterProfile) -> Scheme {
    profile.scheme.unwrap_or(match profile.experience {
        ExperienceLevel::Untrained | ExperienceLevel::Novice => Scheme::Linear,
        ExperienceLevel::Intermediate => Scheme::FiveThreeOne,
        ExperienceLevel::Advanced | ExperienceLevel::Elite => Scheme::Block,
    })
}

pub fn select_goal(experience: ExperienceLevel) -> Goal {
    match experience {
        ExperienceLevel::Untrained | ExperienceLevel::Novice => Goal::General,
        ExperienceLevel::Intermediate => Goal::Strength,
        ExperienceLevel::Advanced | ExperienceLevel::Elite => Goal::Peaking,
    }
}

pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    (value / increment).round() * increment
}

const SQUAT_ACCESSORIES: [&str; 3] = ["Squat bulgare", "Presse à cuisses", "Gainage lesté"];
const BENCH_ACCESSORIES: [&str; 3] = ["Développé incliné haltères", "Dips", "Rowing haltère"];
const DEADLIFT_ACCESSORIES: [&str; 3] = ["Soulevé de terre roumain", "Rowing barre", "Hip thrust"];

fn accessory_pool(lift: Lift) -> &'static [&'static str] {
    match lift {
        Lift::Squat => &SQUAT_ACCESSORIES,
        Lift::Bench => &BENCH_ACCESSORIES,
        Lift::Deadlift => &DEADLIFT_ACCESSORIES,
    }
}

#[derive(Debug, Clone)]
pub struct ProgramGenerator {
    deload_policy: DeloadPolicy,
    /// Smallest loadable jump on the platform: a 1.25 kg plate per side.
    rounding_increment_kg: f64,
}

impl Default for ProgramGenerator {
    fn default() -> Self {
        Self {
            deload_policy: DeloadPolicy::default(),
            rounding_increment_kg: 2.5,
        }
    }
}

impl ProgramGenerator {
    /// Expands a lifter profile into a full cycle prescription. Pure and
    /// deterministic: the same profile always yields the same tree.
    pub fn generate(&self, profile: &LifterProfile) -> Result<ProgramRecommendation, ProfileError> {
        profile.validate()?;

        let scheme = select_scheme(profile);
        let goal = select_goal(profile.experience);
        let duration_weeks = profile
            .duration_weeks
            .unwrap_or_else(|| scheme.default_weeks());
        let split = build_day_split(profile.days_per_week, profile.priority_lift);

        let weeks = (1..=duration_weeks)
            .map(|week| self.build_week(scheme, duration_weeks, week, &split, &profile.maxes))
            .collect();

        let program = GeneratedProgram {
            scheme,
            goal,
            duration_weeks,
            maxes: profile.maxes,
            weeks,
            description: recommendation::program_description(
                scheme,
                goal,
                duration_weeks,
                profile.days_per_week,
                profile.priority_lift,
            ),
        };

        Ok(recommendation::build_recommendation(program, profile))
    }

    fn build_week(
        &self,
        scheme: Scheme,
        duration_weeks: u32,
        week_number: u32,
        split: &[DayPairing],
        maxes: &LiftMaxes,
    ) -> WeekPrescription {
        let is_deload = is_deload_week(duration_weeks, week_number);
        let scheme_week = scheme_week_for(scheme, duration_weeks, week_number);
        let table = resolve_week_table(scheme, scheme_week);

        let effective = if is_deload {
            self.deload_policy.remap(&table.light)
        } else {
            table
        };
        let medium = effective.medium();

        let days = split
            .iter()
            .enumerate()
            .map(|(index, pairing)| {
                // Days beyond the base rotation run the derived medium pair.
                let source = if index < 3 { &effective } else { &medium };
                self.build_day(index as u32 + 1, pairing, source, maxes, is_deload)
            })
            .collect();

        WeekPrescription {
            week_number,
            name: recommendation::week_name(week_number, is_deload),
            is_deload,
            days,
            focus: recommendation::week_focus(scheme, scheme_week, is_deload),
        }
    }

    fn build_day(
        &self,
        day_number: u32,
        pairing: &DayPairing,
        table: &WeekTable,
        maxes: &LiftMaxes,
        is_deload: bool,
    ) -> DayPrescription {
        let mut exercises = vec![
            self.main_exercise(pairing.primary, &table.heavy, maxes),
            self.main_exercise(pairing.secondary, &table.light, maxes),
        ];
        exercises.extend(accessories_for(pairing.primary, is_deload));

        DayPrescription {
            day_number,
            name: recommendation::day_name(day_number, pairing.primary),
            main_lift: pairing.primary,
            exercises,
        }
    }

    fn main_exercise(
        &self,
        lift: Lift,
        sets: &[SetPrescription],
        maxes: &LiftMaxes,
    ) -> ExercisePrescription {
        let max = maxes.for_lift(lift);
        let sets = sets
            .iter()
            .map(|set| {
                set.with_weight(round_to_increment(
                    max * set.percentage / 100.0,
                    self.rounding_increment_kg,
                ))
            })
            .collect();

        ExercisePrescription {
            name: lift.label().to_string(),
            kind: lift.into(),
            sets,
            notes: None,
            is_tool_exercise: false,
        }
    }
}

/// Accessories are prescribed but untracked: fixed structure, no computed
/// load, always the first entries of the primary lift's pool so regeneration
/// is stable.
fn accessories_for(primary: Lift, is_deload: bool) -> Vec<ExercisePrescription> {
    let (count, sets, reps, rpe) = if is_deload {
        (1, 2, 12, 6.0)
    } else {
        (2, 3, 8, 7.0)
    };

    accessory_pool(primary)
        .iter()
        .take(count)
        .map(|name| ExercisePrescription {
            name: (*name).to_string(),
            kind: LiftKind::Accessory,
            sets: (0..sets)
                .map(|_| PrescribedSet {
                    reps,
                    percentage: 0.0,
                    amrap: false,
                    rpe: Some(rpe),
                    weight_kg: None,
                })
                .collect(),
            notes: Some(format!("RPE {rpe}")),
            is_tool_exercise: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(experience: ExperienceLevel) -> LifterProfile {
        LifterProfile {
            experience,
            maxes: LiftMaxes {
                squat: 150.0,
                bench: 100.0,
                deadlift: 180.0,
            },
            days_per_week: 3,
            duration_weeks: Some(4),
            priority_lift: Lift::Squat,
            scheme: None,
        }
    }

    #[test]
    fn test_scheme_selection_table() {
        assert_eq!(
            select_scheme(&profile(ExperienceLevel::Untrained)),
            Scheme::Linear
        );
        assert_eq!(
            select_scheme(&profile(ExperienceLevel::Novice)),
            Scheme::Linear
        );
        assert_eq!(
            select_scheme(&profile(ExperienceLevel::Intermediate)),
            Scheme::FiveThreeOne
        );
        assert_eq!(
            select_scheme(&profile(ExperienceLevel::Advanced)),
            Scheme::Block
        );
        assert_eq!(
            select_scheme(&profile(ExperienceLevel::Elite)),
            Scheme::Block
        );
    }

    #[test]
    fn test_explicit_scheme_override_wins() {
        let mut p = profile(ExperienceLevel::Intermediate);
        p.scheme = Some(Scheme::Hypertrophy);
        assert_eq!(select_scheme(&p), Scheme::Hypertrophy);
    }

    #[test]
    fn test_goal_selection_table() {
        assert_eq!(select_goal(ExperienceLevel::Untrained), Goal::General);
        assert_eq!(select_goal(ExperienceLevel::Novice), Goal::General);
        assert_eq!(select_goal(ExperienceLevel::Intermediate), Goal::Strength);
        assert_eq!(select_goal(ExperienceLevel::Advanced), Goal::Peaking);
        assert_eq!(select_goal(ExperienceLevel::Elite), Goal::Peaking);
    }

    #[test]
    fn test_round_to_increment() {
        assert_eq!(round_to_increment(97.5, 2.5), 97.5);
        assert_eq!(round_to_increment(96.3, 2.5), 97.5);
        assert_eq!(round_to_increment(96.2, 2.5), 95.0);
        assert_eq!(round_to_increment(128.0, 2.5), 127.5);
    }

    #[test]
    fn test_intermediate_week_1_squat_weights() {
        // 531 week 1 at a 150 kg squat max: 65/75/85% -> 97.5/112.5/127.5.
        let result = ProgramGenerator::default()
            .generate(&profile(ExperienceLevel::Intermediate))
            .unwrap();

        assert_eq!(result.program.scheme, Scheme::FiveThreeOne);

        let first_day = &result.program.weeks[0].days[0];
        assert_eq!(first_day.main_lift, Lift::Squat);

        let squat = &first_day.exercises[0];
        assert_eq!(squat.name, "Squat");
        let weights: Vec<f64> = squat.sets.iter().filter_map(|s| s.weight_kg).collect();
        assert_eq!(weights, vec![97.5, 112.5, 127.5]);
        assert!(squat.sets[2].amrap);
    }

    #[test]
    fn test_day_count_matches_request_every_week() {
        for days in [3, 4, 5] {
            let mut p = profile(ExperienceLevel::Intermediate);
            p.days_per_week = days;

            let result = ProgramGenerator::default().generate(&p).unwrap();
            for week in &result.program.weeks {
                assert_eq!(week.days.len() as u32, days);
            }
        }
    }

    #[test]
    fn test_priority_lift_leads_extra_days() {
        let mut p = profile(ExperienceLevel::Advanced);
        p.days_per_week = 5;
        p.duration_weeks = Some(6);
        p.priority_lift = Lift::Bench;

        let result = ProgramGenerator::default().generate(&p).unwrap();
        let week = &result.program.weeks[0];

        assert_eq!(week.days.len(), 5);
        assert_eq!(week.days[3].main_lift, Lift::Bench);
        assert_eq!(week.days[4].main_lift, Lift::Bench);

        let bench_days = week
            .days
            .iter()
            .filter(|d| d.main_lift == Lift::Bench)
            .count();
        for other in [Lift::Squat, Lift::Deadlift] {
            let other_days = week.days.iter().filter(|d| d.main_lift == other).count();
            assert!(bench_days > other_days);
        }
    }

    #[test]
    fn test_deload_flag_on_final_week_only() {
        let result = ProgramGenerator::default()
            .generate(&profile(ExperienceLevel::Intermediate))
            .unwrap();

        let flags: Vec<bool> = result.program.weeks.iter().map(|w| w.is_deload).collect();
        assert_eq!(flags, vec![false, false, false, true]);

        let mut p = profile(ExperienceLevel::Novice);
        p.duration_weeks = Some(6);
        let result = ProgramGenerator::default().generate(&p).unwrap();
        let flags: Vec<bool> = result.program.weeks.iter().map(|w| w.is_deload).collect();
        assert_eq!(flags, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn test_deload_week_runs_on_light_table_only() {
        let result = ProgramGenerator::default()
            .generate(&profile(ExperienceLevel::Intermediate))
            .unwrap();

        // 531 week 4 light group is 2x10 @ 40; the deload remap floors the
        // light slot at 40 as well.
        let deload_week = &result.program.weeks[3];
        assert!(deload_week.is_deload);

        let primary = &deload_week.days[0].exercises[0];
        assert!(primary.sets.iter().all(|s| s.reps == 10));
        assert!(primary.sets.iter().all(|s| s.percentage == 40.0));

        let secondary = &deload_week.days[0].exercises[1];
        assert!(secondary.sets.iter().all(|s| s.percentage == 40.0));
    }

    #[test]
    fn test_extra_days_use_medium_pair() {
        let mut p = profile(ExperienceLevel::Intermediate);
        p.days_per_week = 5;
        p.priority_lift = Lift::Bench;

        let result = ProgramGenerator::default().generate(&p).unwrap();
        let week_one = &result.program.weeks[0];

        // 531 week 1 light group is 10 @ 50/55/60; the bonus-day heavy slot
        // boosts that by 5 points.
        let bonus_primary = &week_one.days[3].exercises[0];
        let percentages: Vec<f64> = bonus_primary.sets.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![55.0, 60.0, 65.0]);
        assert!(bonus_primary.sets.iter().all(|s| s.reps == 10));

        let bonus_secondary = &week_one.days[3].exercises[1];
        let percentages: Vec<f64> = bonus_secondary.sets.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![50.0, 55.0, 60.0]);
    }

    #[test]
    fn test_duration_defaults_to_scheme_native_length() {
        let mut p = profile(ExperienceLevel::Advanced);
        p.duration_weeks = None;
        let result = ProgramGenerator::default().generate(&p).unwrap();
        assert_eq!(result.program.duration_weeks, 8);
        assert_eq!(result.program.weeks.len(), 8);

        let mut p = profile(ExperienceLevel::Novice);
        p.duration_weeks = None;
        let result = ProgramGenerator::default().generate(&p).unwrap();
        assert_eq!(result.program.duration_weeks, 6);
    }

    #[test]
    fn test_all_main_weights_are_loadable_and_close() {
        let mut p = profile(ExperienceLevel::Advanced);
        p.days_per_week = 5;
        p.duration_weeks = Some(6);

        let result = ProgramGenerator::default().generate(&p).unwrap();

        for week in &result.program.weeks {
            for day in &week.days {
                for exercise in &day.exercises {
                    let Some(lift) = exercise.kind.as_lift() else {
                        continue;
                    };
                    let max = result.program.maxes.for_lift(lift);
                    for set in &exercise.sets {
                        let weight = set.weight_kg.expect("main lift set must carry a weight");
                        let remainder = (weight / 2.5).fract().abs();
                        assert!(remainder < 1e-9 || (1.0 - remainder) < 1e-9);
                        assert!((weight - max * set.percentage / 100.0).abs() <= 1.25);
                    }
                }
            }
        }
    }

    #[test]
    fn test_accessories_are_tool_exercises() {
        let result = ProgramGenerator::default()
            .generate(&profile(ExperienceLevel::Intermediate))
            .unwrap();

        let normal_day = &result.program.weeks[0].days[0];
        let accessories: Vec<_> = normal_day
            .exercises
            .iter()
            .filter(|e| e.is_tool_exercise)
            .collect();

        assert_eq!(accessories.len(), 2);
        assert_eq!(accessories[0].name, "Squat bulgare");
        assert_eq!(accessories[1].name, "Presse à cuisses");
        for accessory in &accessories {
            assert_eq!(accessory.kind, LiftKind::Accessory);
            assert_eq!(accessory.sets.len(), 3);
            assert!(accessory.sets.iter().all(|s| s.weight_kg.is_none()));
            assert!(accessory.sets.iter().all(|s| s.reps == 8));
        }

        let deload_day = &result.program.weeks[3].days[0];
        let accessories: Vec<_> = deload_day
            .exercises
            .iter()
            .filter(|e| e.is_tool_exercise)
            .collect();
        assert_eq!(accessories.len(), 1);
        assert_eq!(accessories[0].sets.len(), 2);
        assert!(accessories[0].sets.iter().all(|s| s.reps == 12));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let p = profile(ExperienceLevel::Intermediate);
        let generator = ProgramGenerator::default();

        let first = generator.generate(&p).unwrap();
        let second = generator.generate(&p).unwrap();

        // Everything but the creation timestamp is bit-for-bit identical.
        assert_eq!(first.program, second.program);
        assert_eq!(first.reasoning, second.reasoning);
        assert_eq!(first.expected_progress, second.expected_progress);
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        let mut p = profile(ExperienceLevel::Intermediate);
        p.maxes.squat = -1.0;
        assert!(matches!(
            ProgramGenerator::default().generate(&p),
            Err(ProfileError::NonPositiveMax { lift: "squat", .. })
        ));
    }
}
