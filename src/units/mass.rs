use serde::{Deserialize, Serialize};

use super::{rescale, ScaledUnit};

/// 질량 단위. 기준은 kg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    /// 미터톤
    Tonne,
    Pound,
    Ounce,
    Carat,
}

impl ScaledUnit for MassUnit {
    fn factor(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 1e-3,
            MassUnit::Tonne => 1000.0,
            MassUnit::Pound => 0.453_592,
            MassUnit::Ounce => 0.028_349_5,
            MassUnit::Carat => 0.0002,
        }
    }
}

pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    rescale(value, from, to)
}
