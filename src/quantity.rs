use std::str::FromStr;

use crate::conversion::ConversionError;

/// 단위 변환기가 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Pressure,
    Temperature,
    Length,
    Volume,
    Area,
    Velocity,
    Mass,
    Time,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 8] = [
        QuantityKind::Pressure,
        QuantityKind::Temperature,
        QuantityKind::Length,
        QuantityKind::Volume,
        QuantityKind::Area,
        QuantityKind::Velocity,
        QuantityKind::Mass,
        QuantityKind::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityKind::Pressure => "pressure",
            QuantityKind::Temperature => "temperature",
            QuantityKind::Length => "length",
            QuantityKind::Volume => "volume",
            QuantityKind::Area => "area",
            QuantityKind::Velocity => "speed",
            QuantityKind::Mass => "weight",
            QuantityKind::Time => "time",
        }
    }
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    /// 영문 이름과 러시아어 이름을 받는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pressure" | "давление" => Ok(QuantityKind::Pressure),
            "temperature" | "temp" | "температура" => Ok(QuantityKind::Temperature),
            "length" | "длина" => Ok(QuantityKind::Length),
            "volume" | "объем" | "объём" => Ok(QuantityKind::Volume),
            "area" | "площадь" => Ok(QuantityKind::Area),
            "speed" | "velocity" | "скорость" => Ok(QuantityKind::Velocity),
            "weight" | "mass" | "вес" | "масса" => Ok(QuantityKind::Mass),
            "time" | "время" => Ok(QuantityKind::Time),
            _ => Err(ConversionError::UnknownQuantity(s.to_string())),
        }
    }
}
