use serde::{Deserialize, Serialize};

use super::{rescale, ScaledUnit};

/// 절대 압력 단위. 기준은 MPa이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    MegaPascal,
    KiloPascal,
    Pascal,
    Bar,
    Atm,
    /// кгс/см²
    KgfPerCm2,
    MmHg,
    Psi,
}

impl ScaledUnit for PressureUnit {
    fn factor(self) -> f64 {
        match self {
            PressureUnit::MegaPascal => 1.0,
            PressureUnit::KiloPascal => 1e-3,
            PressureUnit::Pascal => 1e-6,
            PressureUnit::Bar => 0.1,
            PressureUnit::Atm => 0.101_325,
            PressureUnit::KgfPerCm2 => 0.098_066_5,
            PressureUnit::MmHg => 0.101_325 / 760.0,
            PressureUnit::Psi => 0.006_894_757,
        }
    }
}

pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    rescale(value, from, to)
}
