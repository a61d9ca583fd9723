use crate::models::program::SetPrescription;
use crate::services::percentage_tables::WeekTable;

/// A deload week is positional, not scheme data: the final week of a 4- or
/// 6-week cycle.
pub fn is_deload_week(duration_weeks: u32, week: u32) -> bool {
    (duration_weeks == 4 && week == 4) || (duration_weeks == 6 && week == 6)
}

#[derive(Debug, Clone)]
pub struct DeloadPolicy {
    /// Factor applied to the light group's percentages for the deload light
    /// slot.
    pub light_scale: f64,
    /// Percentages never drop below this on a deload week.
    pub floor_percentage: f64,
}

impl Default for DeloadPolicy {
    fn default() -> Self {
        Self {
            light_scale: 0.9,
            floor_percentage: 40.0,
        }
    }
}

impl DeloadPolicy {
    /// Deload weeks discard the heavy group entirely: the light table fills
    /// the heavy slot as-is, and a further reduced copy fills the light slot.
    pub fn remap(&self, light: &[SetPrescription]) -> WeekTable {
        let lighter = light
            .iter()
            .map(|set| SetPrescription {
                percentage: (set.percentage * self.light_scale).max(self.floor_percentage),
                ..*set
            })
            .collect();

        WeekTable {
            heavy: light.to_vec(),
            light: lighter,
        }
    }
}
