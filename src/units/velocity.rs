use serde::{Deserialize, Serialize};

use super::{rescale, ScaledUnit};

/// 속도 단위. 기준은 m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
}

impl ScaledUnit for VelocityUnit {
    fn factor(self) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => 1.0,
            VelocityUnit::KilometerPerHour => 1000.0 / 3600.0,
            VelocityUnit::MilePerHour => 0.44704,
            VelocityUnit::Knot => 0.514_444,
        }
    }
}

pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    rescale(value, from, to)
}
