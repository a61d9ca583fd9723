use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::profile::{Lift, LiftMaxes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Linear,
    #[serde(rename = "531")]
    FiveThreeOne,
    Block,
    Hypertrophy,
}

impl Scheme {
    /// Native table length, used as the cycle duration when the lifter does
    /// not request one.
    pub fn default_weeks(&self) -> u32 {
        match self {
            Scheme::Linear => 6,
            Scheme::FiveThreeOne => 4,
            Scheme::Block => 8,
            Scheme::Hypertrophy => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scheme::Linear => "Linéaire",
            Scheme::FiveThreeOne => "5/3/1",
            Scheme::Block => "Par blocs",
            Scheme::Hypertrophy => "Hypertrophie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    General,
    Strength,
    Peaking,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::General => "Général",
            Goal::Strength => "Force",
            Goal::Peaking => "Pic de forme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiftKind {
    Squat,
    Bench,
    Deadlift,
    Accessory,
}

impl From<Lift> for LiftKind {
    fn from(lift: Lift) -> Self {
        match lift {
            Lift::Squat => LiftKind::Squat,
            Lift::Bench => LiftKind::Bench,
            Lift::Deadlift => LiftKind::Deadlift,
        }
    }
}

impl LiftKind {
    pub fn as_lift(&self) -> Option<Lift> {
        match self {
            LiftKind::Squat => Some(Lift::Squat),
            LiftKind::Bench => Some(Lift::Bench),
            LiftKind::Deadlift => Some(Lift::Deadlift),
            LiftKind::Accessory => None,
        }
    }
}

/// One row of a static percentage table. Percentage is relative to the 1RM
/// and may exceed 100 for a top-end AMRAP test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetPrescription {
    pub reps: u32,
    pub percentage: f64,
    pub amrap: bool,
    pub rpe: Option<f64>,
}

impl SetPrescription {
    pub fn with_weight(&self, weight_kg: f64) -> PrescribedSet {
        PrescribedSet {
            reps: self.reps,
            percentage: self.percentage,
            amrap: self.amrap,
            rpe: self.rpe,
            weight_kg: Some(weight_kg),
        }
    }
}

/// A table row with the concrete load attached. Accessories never carry a
/// weight; main lifts always do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescribedSet {
    pub reps: u32,
    pub percentage: f64,
    pub amrap: bool,
    pub rpe: Option<f64>,
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePrescription {
    pub name: String,
    pub kind: LiftKind,
    pub sets: Vec<PrescribedSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub is_tool_exercise: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPrescription {
    pub day_number: u32,
    pub name: String,
    pub main_lift: Lift,
    pub exercises: Vec<ExercisePrescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPrescription {
    pub week_number: u32,
    pub name: String,
    pub is_deload: bool,
    pub days: Vec<DayPrescription>,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProgram {
    pub scheme: Scheme,
    pub goal: Goal,
    pub duration_weeks: u32,
    pub maxes: LiftMaxes,
    pub weeks: Vec<WeekPrescription>,
    pub description: String,
}

/// Expected 1RM gain in kg over one completed cycle. Metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedProgress {
    pub squat_kg: f64,
    pub bench_kg: f64,
    pub deadlift_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecommendation {
    pub program: GeneratedProgram,
    pub reasoning: Vec<String>,
    pub expected_progress: ExpectedProgress,
    /// Non-semantic; two generations from the same profile differ only here.
    pub generated_at: DateTime<Utc>,
}
