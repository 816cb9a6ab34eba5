use serde::{Deserialize, Serialize};

use super::{rescale, ScaledUnit};

/// 길이 단위. 기준은 m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
}

impl ScaledUnit for LengthUnit {
    fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Mile => 1609.34,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    rescale(value, from, to)
}
