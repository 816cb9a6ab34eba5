//! 단위 정의 및 변환 모듈 모음.
//!
//! 온도를 제외한 모든 단위는 기준 단위에 대한 배율 하나로 정의된다.

pub mod area;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use time::{convert_time, TimeUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use volume::{convert_volume, VolumeUnit};

/// 기준 단위 배율로 정의되는 단위.
pub trait ScaledUnit: Copy {
    /// 이 단위 1이 기준 단위로 얼마인지.
    fn factor(self) -> f64;
}

pub(crate) fn rescale<U: ScaledUnit>(value: f64, from: U, to: U) -> f64 {
    value * from.factor() / to.factor()
}
