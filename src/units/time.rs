use serde::{Deserialize, Serialize};

use super::{rescale, ScaledUnit};
use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

/// 시간 단위. 기준은 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl ScaledUnit for TimeUnit {
    fn factor(self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => SECONDS_PER_HOUR,
            TimeUnit::Day => SECONDS_PER_DAY,
            TimeUnit::Week => 7.0 * SECONDS_PER_DAY,
        }
    }
}

pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    rescale(value, from, to)
}
