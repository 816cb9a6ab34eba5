use serde::{Deserialize, Serialize};

use super::{rescale, ScaledUnit};

/// 체적 단위. 기준은 m³.
///
/// 가스 물량 보고에 쓰는 천 m³, 백만 m³ 단위를 포함한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    ThousandCubicMeter,
    MillionCubicMeter,
    Liter,
    Milliliter,
    /// US gallon
    Gallon,
    /// US pint
    Pint,
}

impl ScaledUnit for VolumeUnit {
    fn factor(self) -> f64 {
        match self {
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::ThousandCubicMeter => 1e3,
            VolumeUnit::MillionCubicMeter => 1e6,
            VolumeUnit::Liter => 1e-3,
            VolumeUnit::Milliliter => 1e-6,
            VolumeUnit::Gallon => 3.785_41e-3,
            VolumeUnit::Pint => 0.473_176e-3,
        }
    }
}

pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    rescale(value, from, to)
}
