//! Constant tables shared by every scenario.
//!
//! Rows are indexed by the type index (plant A/B/C, client XG/MG/G).

/// Uniform sampling range: `value = u * scale + offset` with `u` in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    pub scale: f64,
    pub offset: f64,
}

impl SampleRange {
    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// Map a unit draw onto the range, truncating toward zero.
    pub fn truncated(&self, unit: f64) -> u32 {
        (unit * self.scale + self.offset).trunc() as u32
    }
}

/// Prices for one client type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRow {
    pub guaranteed: f64,
    pub non_guaranteed: f64,
    pub penalty: f64,
}

/// Costs for one plant type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRow {
    pub per_mw: f64,
    pub daily: f64,
    pub stop: f64,
}

/// One step of the transmission loss function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossStep {
    /// Largest distance (inclusive) covered by this step.
    pub max_distance: f64,
    /// Fraction of energy lost.
    pub fraction: f64,
}

pub const PRODUCTION: [SampleRange; 3] = [
    SampleRange::new(500.0, 250.0),
    SampleRange::new(150.0, 100.0),
    SampleRange::new(90.0, 10.0),
];

pub const CONSUMPTION: [SampleRange; 3] = [
    SampleRange::new(15.0, 5.0),
    SampleRange::new(3.0, 2.0),
    SampleRange::new(2.0, 1.0),
];

pub const PRICES: [PriceRow; 3] = [
    PriceRow {
        guaranteed: 40.0,
        non_guaranteed: 30.0,
        penalty: 5.0,
    },
    PriceRow {
        guaranteed: 50.0,
        non_guaranteed: 40.0,
        penalty: 5.0,
    },
    PriceRow {
        guaranteed: 60.0,
        non_guaranteed: 50.0,
        penalty: 5.0,
    },
];

pub const COSTS: [CostRow; 3] = [
    CostRow {
        per_mw: 5.0,
        daily: 2000.0,
        stop: 1500.0,
    },
    CostRow {
        per_mw: 8.0,
        daily: 1000.0,
        stop: 500.0,
    },
    CostRow {
        per_mw: 15.0,
        daily: 500.0,
        stop: 150.0,
    },
];

pub const LOSSES: [LossStep; 5] = [
    LossStep {
        max_distance: 10.0,
        fraction: 0.0,
    },
    LossStep {
        max_distance: 25.0,
        fraction: 0.1,
    },
    LossStep {
        max_distance: 50.0,
        fraction: 0.2,
    },
    LossStep {
        max_distance: 75.0,
        fraction: 0.4,
    },
    LossStep {
        max_distance: 1000.0,
        fraction: 0.6,
    },
];

/// Coordinates are drawn from `0..=COORD_MAX`.
pub const COORD_MAX: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_drops_fraction() {
        let range = SampleRange::new(3.0, 2.0);
        assert_eq!(range.truncated(0.0), 2);
        assert_eq!(range.truncated(0.5), 3);
        assert_eq!(range.truncated(0.999_999), 4);
    }

    #[test]
    fn loss_bounds_ascend() {
        assert!(
            LOSSES
                .windows(2)
                .all(|pair| pair[0].max_distance < pair[1].max_distance)
        );
    }
}
