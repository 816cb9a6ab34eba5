use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    #[error("지원하지 않는 물리량: {0}")]
    UnknownQuantity(String),
}

/// 문자열 단위명을 해석해 값을 환산한다.
///
/// 단위 문자열은 대소문자를 가리지 않는다. 예: `MPa`, `kgf/cm2`, `тыс.м3`, `km/h`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Pressure => via(value, from_unit_str, to_unit_str, parse_pressure_unit, convert_pressure),
        QuantityKind::Temperature => via(
            value,
            from_unit_str,
            to_unit_str,
            parse_temperature_unit,
            convert_temperature,
        ),
        QuantityKind::Length => via(value, from_unit_str, to_unit_str, parse_length_unit, convert_length),
        QuantityKind::Volume => via(value, from_unit_str, to_unit_str, parse_volume_unit, convert_volume),
        QuantityKind::Area => via(value, from_unit_str, to_unit_str, parse_area_unit, convert_area),
        QuantityKind::Velocity => via(
            value,
            from_unit_str,
            to_unit_str,
            parse_velocity_unit,
            convert_velocity,
        ),
        QuantityKind::Mass => via(value, from_unit_str, to_unit_str, parse_mass_unit, convert_mass),
        QuantityKind::Time => via(value, from_unit_str, to_unit_str, parse_time_unit, convert_time),
    }
}

fn via<U>(
    value: f64,
    from: &str,
    to: &str,
    parse: fn(&str) -> Result<U, ConversionError>,
    apply: fn(f64, U, U) -> f64,
) -> Result<f64, ConversionError> {
    Ok(apply(value, parse(from)?, parse(to)?))
}

fn unknown(s: &str) -> ConversionError {
    ConversionError::UnknownUnit(s.to_string())
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mpa" | "мпа" => Ok(PressureUnit::MegaPascal),
        "kpa" | "кпа" => Ok(PressureUnit::KiloPascal),
        "pa" | "па" => Ok(PressureUnit::Pascal),
        "bar" | "бар" => Ok(PressureUnit::Bar),
        "atm" | "атм" => Ok(PressureUnit::Atm),
        "kgf/cm2" | "kg/cm2" | "кгс/см2" | "кгс/см²" => Ok(PressureUnit::KgfPerCm2),
        "mmhg" | "torr" | "мм рт.ст." => Ok(PressureUnit::MmHg),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(unknown(s)),
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
        "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(unknown(s)),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "м" => Ok(LengthUnit::Meter),
        "km" | "км" => Ok(LengthUnit::Kilometer),
        "cm" | "см" => Ok(LengthUnit::Centimeter),
        "mm" | "мм" => Ok(LengthUnit::Millimeter),
        "mile" | "mi" => Ok(LengthUnit::Mile),
        "yard" | "yd" => Ok(LengthUnit::Yard),
        "foot" | "ft" => Ok(LengthUnit::Foot),
        "inch" | "in" => Ok(LengthUnit::Inch),
        _ => Err(unknown(s)),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" | "м3" | "м³" => Ok(VolumeUnit::CubicMeter),
        "thousand_m3" | "km3n" | "тыс.м3" | "тыс.м³" => Ok(VolumeUnit::ThousandCubicMeter),
        "million_m3" | "mmcm" | "млн.м3" | "млн.м³" => Ok(VolumeUnit::MillionCubicMeter),
        "l" | "liter" | "litre" | "л" => Ok(VolumeUnit::Liter),
        "ml" | "мл" => Ok(VolumeUnit::Milliliter),
        "gallon" | "gal" => Ok(VolumeUnit::Gallon),
        "pint" | "pt" => Ok(VolumeUnit::Pint),
        _ => Err(unknown(s)),
    }
}

pub fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "м2" | "м²" => Ok(AreaUnit::SquareMeter),
        "km2" | "км2" | "км²" => Ok(AreaUnit::SquareKilometer),
        "ha" | "га" => Ok(AreaUnit::Hectare),
        "acre" => Ok(AreaUnit::Acre),
        "sotka" | "сотка" => Ok(AreaUnit::Sotka),
        _ => Err(unknown(s)),
    }
}

pub fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "мс" | "м/с" => Ok(VelocityUnit::MeterPerSecond),
        "km/h" | "kmh" | "км/ч" => Ok(VelocityUnit::KilometerPerHour),
        "mph" => Ok(VelocityUnit::MilePerHour),
        "knot" | "kn" | "узел" => Ok(VelocityUnit::Knot),
        _ => Err(unknown(s)),
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg" | "кг" => Ok(MassUnit::Kilogram),
        "g" | "г" => Ok(MassUnit::Gram),
        "t" | "ton" | "tonne" | "т" => Ok(MassUnit::Tonne),
        "lb" | "lbs" => Ok(MassUnit::Pound),
        "oz" => Ok(MassUnit::Ounce),
        "carat" | "ct" => Ok(MassUnit::Carat),
        _ => Err(unknown(s)),
    }
}

pub fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "s" | "sec" | "с" => Ok(TimeUnit::Second),
        "min" | "мин" => Ok(TimeUnit::Minute),
        "h" | "hour" | "ч" => Ok(TimeUnit::Hour),
        "day" | "d" | "сут" => Ok(TimeUnit::Day),
        "week" | "нед" => Ok(TimeUnit::Week),
        _ => Err(unknown(s)),
    }
}
