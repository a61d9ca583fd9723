//! Static per-scheme percentage tables.
//!
//! Each scheme maps a scheme-relative week index to a heavy and a light
//! working-set group. The tables are a coach's periodization chart, not
//! derived data; change them only against the chart.

use crate::models::program::{Scheme, SetPrescription};

#[derive(Debug, Clone, PartialEq)]
pub struct WeekTable {
    pub heavy: Vec<SetPrescription>,
    pub light: Vec<SetPrescription>,
}

impl WeekTable {
    pub fn empty() -> Self {
        Self {
            heavy: Vec::new(),
            light: Vec::new(),
        }
    }

    /// Derived pair for training days beyond the third. The light group's
    /// reps and AMRAP flags are kept, the synthetic heavy slot gains +5
    /// percentage points capped at 80 so bonus days add volume without
    /// overloading the prioritized lift.
    pub fn medium(&self) -> Self {
        let heavy = self
            .light
            .iter()
            .map(|set| SetPrescription {
                percentage: (set.percentage + 5.0).min(80.0),
                ..*set
            })
            .collect();

        Self {
            heavy,
            light: self.light.clone(),
        }
    }
}

fn set(reps: u32, percentage: f64) -> SetPrescription {
    SetPrescription {
        reps,
        percentage,
        amrap: false,
        rpe: None,
    }
}

fn amrap(reps: u32, percentage: f64) -> SetPrescription {
    SetPrescription {
        reps,
        percentage,
        amrap: true,
        rpe: None,
    }
}

fn week_entry(scheme: Scheme, week: u32) -> Option<WeekTable> {
    let table = match (scheme, week) {
        // Linear: working intensity ramps from 72.5% up to a 102.5% AMRAP
        // test on the final week.
        (Scheme::Linear, 1) => WeekTable {
            heavy: vec![set(8, 72.5); 3],
            light: vec![set(8, 55.0); 3],
        },
        (Scheme::Linear, 2) => WeekTable {
            heavy: vec![set(8, 77.5); 3],
            light: vec![set(8, 57.5); 3],
        },
        (Scheme::Linear, 3) => WeekTable {
            heavy: vec![set(6, 82.5); 4],
            light: vec![set(8, 60.0); 3],
        },
        (Scheme::Linear, 4) => WeekTable {
            heavy: vec![set(5, 87.5); 4],
            light: vec![set(6, 62.5); 3],
        },
        (Scheme::Linear, 5) => WeekTable {
            heavy: vec![set(3, 95.0), set(3, 95.0), amrap(3, 95.0)],
            light: vec![set(6, 65.0); 3],
        },
        (Scheme::Linear, 6) => WeekTable {
            heavy: vec![set(3, 85.0), set(1, 95.0), amrap(1, 102.5)],
            light: vec![set(5, 60.0); 2],
        },

        // 531-style: triple wave (5s / 3s / 1s with AMRAP top sets) then a
        // light recovery week.
        (Scheme::FiveThreeOne, 1) => WeekTable {
            heavy: vec![set(5, 65.0), set(5, 75.0), amrap(5, 85.0)],
            light: vec![set(10, 50.0), set(10, 55.0), set(10, 60.0)],
        },
        (Scheme::FiveThreeOne, 2) => WeekTable {
            heavy: vec![set(3, 70.0), set(3, 80.0), amrap(3, 90.0)],
            light: vec![set(10, 50.0), set(10, 55.0), set(10, 60.0)],
        },
        (Scheme::FiveThreeOne, 3) => WeekTable {
            heavy: vec![set(5, 75.0), set(3, 85.0), amrap(1, 95.0)],
            light: vec![set(10, 50.0), set(10, 55.0), set(10, 60.0)],
        },
        (Scheme::FiveThreeOne, 4) => WeekTable {
            heavy: vec![set(5, 40.0), set(5, 50.0), set(5, 60.0)],
            light: vec![set(10, 40.0); 2],
        },

        // Block: accumulation (1-3), intensification (4-6), peaking single
        // (7), deload (8).
        (Scheme::Block, 1) => WeekTable {
            heavy: vec![set(8, 65.0); 4],
            light: vec![set(8, 55.0); 3],
        },
        (Scheme::Block, 2) => WeekTable {
            heavy: vec![set(8, 70.0); 4],
            light: vec![set(8, 57.5); 3],
        },
        (Scheme::Block, 3) => WeekTable {
            heavy: vec![set(8, 72.5); 4],
            light: vec![set(8, 60.0); 3],
        },
        (Scheme::Block, 4) => WeekTable {
            heavy: vec![set(5, 77.5); 4],
            light: vec![set(6, 62.5); 3],
        },
        (Scheme::Block, 5) => WeekTable {
            heavy: vec![set(4, 82.5); 4],
            light: vec![set(6, 65.0); 3],
        },
        (Scheme::Block, 6) => WeekTable {
            heavy: vec![set(3, 87.5); 3],
            light: vec![set(6, 67.5); 3],
        },
        (Scheme::Block, 7) => WeekTable {
            heavy: vec![set(3, 85.0), set(1, 92.5), amrap(1, 100.0)],
            light: vec![set(6, 70.0); 2],
        },
        (Scheme::Block, 8) => WeekTable {
            heavy: vec![set(5, 60.0); 3],
            light: vec![set(8, 50.0); 2],
        },

        // Hypertrophy: standalone high-rep table, only reachable through an
        // explicit scheme override.
        (Scheme::Hypertrophy, 1) => WeekTable {
            heavy: vec![set(10, 65.0); 4],
            light: vec![set(12, 50.0); 3],
        },
        (Scheme::Hypertrophy, 2) => WeekTable {
            heavy: vec![set(10, 67.5); 4],
            light: vec![set(12, 52.5); 3],
        },
        (Scheme::Hypertrophy, 3) => WeekTable {
            heavy: vec![set(12, 70.0); 4],
            light: vec![set(12, 55.0); 3],
        },
        (Scheme::Hypertrophy, 4) => WeekTable {
            heavy: vec![set(10, 60.0); 3],
            light: vec![set(12, 45.0); 2],
        },

        _ => return None,
    };

    Some(table)
}

/// Total lookup: a week index outside a scheme's table falls back to that
/// scheme's week 1. Out-of-range weeks are a caller mismatch, not an error.
pub fn resolve_week_table(scheme: Scheme, week: u32) -> WeekTable {
    week_entry(scheme, week)
        .or_else(|| week_entry(scheme, 1))
        .unwrap_or_else(WeekTable::empty)
}

/// Maps a program-relative week onto the scheme-relative table index when the
/// requested cycle duration differs from the scheme's native length. One rule
/// per (duration, native length) combination; short programs always reach the
/// table's final rows.
pub fn scheme_week_for(scheme: Scheme, duration_weeks: u32, program_week: u32) -> u32 {
    let native = scheme.default_weeks();
    if duration_weeks == native {
        return program_week;
    }

    match (duration_weeks, native, program_week) {
        (6, 4, w) => match w {
            1 | 2 => 1,
            3 | 4 => 2,
            5 => 3,
            _ => 4,
        },
        (4, 6, w) => match w {
            1 => 1,
            2 => 3,
            3 => 5,
            _ => 6,
        },
        (4, 8, w) => match w {
            1 => 1,
            2 => 4,
            3 => 7,
            _ => 8,
        },
        (6, 8, w) => match w {
            1 => 1,
            2 => 2,
            3 => 4,
            4 => 5,
            5 => 7,
            _ => 8,
        },
        (_, _, w) => w.min(native),
    }
}
