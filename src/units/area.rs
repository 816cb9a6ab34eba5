use serde::{Deserialize, Serialize};

use super::{rescale, ScaledUnit};

/// 면적 단위. 기준은 m².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareKilometer,
    Hectare,
    Acre,
    /// сотка (100 m²)
    Sotka,
}

impl ScaledUnit for AreaUnit {
    fn factor(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareKilometer => 1e6,
            AreaUnit::Hectare => 1e4,
            AreaUnit::Acre => 4046.86,
            AreaUnit::Sotka => 100.0,
        }
    }
}

pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    rescale(value, from, to)
}
