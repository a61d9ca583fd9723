use crate::models::profile::Lift;

/// One training day: a heavily loaded primary lift and a lightly loaded
/// secondary lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPairing {
    pub primary: Lift,
    pub secondary: Lift,
}

const BASE_ROTATION: [DayPairing; 3] = [
    DayPairing {
        primary: Lift::Squat,
        secondary: Lift::Bench,
    },
    DayPairing {
        primary: Lift::Bench,
        secondary: Lift::Deadlift,
    },
    DayPairing {
        primary: Lift::Deadlift,
        secondary: Lift::Squat,
    },
];

/// The base 3-day split rotates each lift through the primary slot once.
/// Extra days pair the prioritized lift against the remaining lifts in turn,
/// giving it one or two additional heavy exposures per week.
pub fn build_day_split(days_per_week: u32, priority: Lift) -> Vec<DayPairing> {
    let mut split = BASE_ROTATION.to_vec();

    let others: Vec<Lift> = Lift::MAIN
        .into_iter()
        .filter(|lift| *lift != priority)
        .collect();

    for extra in 0..days_per_week.saturating_sub(3) as usize {
        split.push(DayPairing {
            primary: priority,
            secondary: others[extra % others.len()],
        });
    }

    split
}
