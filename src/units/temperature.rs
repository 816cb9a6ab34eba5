use serde::{Deserialize, Serialize};

/// 온도 단위. 내부 기준은 K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

const ZERO_CELSIUS_K: f64 = 273.15;

fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value + ZERO_CELSIUS_K,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + ZERO_CELSIUS_K,
        TemperatureUnit::Kelvin => value,
    }
}

fn from_kelvin(kelvin: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => kelvin - ZERO_CELSIUS_K,
        TemperatureUnit::Fahrenheit => (kelvin - ZERO_CELSIUS_K) * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => kelvin,
    }
}

/// 온도는 원점이 달라 배율만으로 바꿀 수 없으므로 K를 거친다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_kelvin(to_kelvin(value, from), to)
}
