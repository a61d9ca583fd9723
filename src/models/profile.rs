use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::program::Scheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Untrained,
    Novice,
    Intermediate,
    Advanced,
    Elite,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Untrained => "Non entraîné",
            ExperienceLevel::Novice => "Débutant",
            ExperienceLevel::Intermediate => "Intermédiaire",
            ExperienceLevel::Advanced => "Avancé",
            ExperienceLevel::Elite => "Élite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
}

impl Lift {
    pub const MAIN: [Lift; 3] = [Lift::Squat, Lift::Bench, Lift::Deadlift];

    pub fn key(&self) -> &'static str {
        match self {
            Lift::Squat => "squat",
            Lift::Bench => "bench",
            Lift::Deadlift => "deadlift",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lift::Squat => "Squat",
            Lift::Bench => "Développé couché",
            Lift::Deadlift => "Soulevé de terre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftMaxes {
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
}

impl LiftMaxes {
    pub fn for_lift(&self, lift: Lift) -> f64 {
        match lift {
            Lift::Squat => self.squat,
            Lift::Bench => self.bench,
            Lift::Deadlift => self.deadlift,
        }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            squat: self.squat * factor,
            bench: self.bench * factor,
            deadlift: self.deadlift * factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifterProfile {
    pub experience: ExperienceLevel,
    pub maxes: LiftMaxes,
    pub days_per_week: u32,
    pub duration_weeks: Option<u32>,
    pub priority_lift: Lift,
    pub scheme: Option<Scheme>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("{lift} max must be positive (got {value})")]
    NonPositiveMax { lift: &'static str, value: f64 },
    #[error("daysPerWeek must be 3, 4 or 5 (got {0})")]
    InvalidDaysPerWeek(u32),
    #[error("durationWeeks must be 4 or 6 (got {0})")]
    InvalidDurationWeeks(u32),
}

impl LifterProfile {
    /// Fails fast on nonsensical values before any percentage math runs on
    /// them.
    pub fn validate(&self) -> Result<(), ProfileError> {
        for lift in Lift::MAIN {
            let value = self.maxes.for_lift(lift);
            if !value.is_finite() || value <= 0.0 {
                return Err(ProfileError::NonPositiveMax {
                    lift: lift.key(),
                    value,
                });
            }
        }

        if !(3..=5).contains(&self.days_per_week) {
            return Err(ProfileError::InvalidDaysPerWeek(self.days_per_week));
        }

        if let Some(weeks) = self.duration_weeks
            && !matches!(weeks, 4 | 6)
        {
            return Err(ProfileError::InvalidDurationWeeks(weeks));
        }

        Ok(())
    }
}
