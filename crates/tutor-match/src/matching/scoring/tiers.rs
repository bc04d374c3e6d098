//! Ordered threshold tables for the non-cumulative bonus tiers.
//!
//! Each table is scanned top to bottom and the first threshold the value
//! reaches wins; values below every threshold receive the table's floor.

/// Threshold-to-bonus table with a floor for values under every threshold.
#[derive(Debug, Clone, Copy)]
pub struct TierTable {
    pub tiers: &'static [(f32, u8)],
    pub floor: u8,
}

impl TierTable {
    pub fn bonus(&self, value: f32) -> u8 {
        self.tiers
            .iter()
            .find(|(threshold, _)| value >= *threshold)
            .map(|(_, bonus)| *bonus)
            .unwrap_or(self.floor)
    }
}

pub const RATING_TIERS: TierTable = TierTable {
    tiers: &[(4.5, 20), (4.0, 15), (3.5, 10)],
    floor: 0,
};

/// Every tutor earns at least the floor here, including those with no readable experience.
pub const EXPERIENCE_TIERS: TierTable = TierTable {
    tiers: &[(2.0, 15), (1.0, 10)],
    floor: 5,
};
