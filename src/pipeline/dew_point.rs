use serde::Deserialize;
use tracing::debug;

use crate::constants::STANDARD_PRESSURE_MPA;
use crate::error::{require_finite, require_non_negative, require_positive, CalcError};

/// Magnus 식 계수
const MAGNUS_ALPHA: f64 = 17.27;
const MAGNUS_BETA: f64 = 237.7;
/// 0 °C 포화 수증기압 [kPa]
const MAGNUS_P0_KPA: f64 = 0.61094;

/// 물 몰분율이 0 이하로 퇴화했을 때 돌려주는 하한값 [°C]. 물리적 결과가 아니다.
pub const DEGENERATE_DEW_POINT_C: f64 = -100.0;

/// 간이 보정: 대기압 초과 0.1 MPa 당 -0.5 °C
const SIMPLIFIED_SLOPE_C_PER_STEP: f64 = -0.5;
const SIMPLIFIED_STEP_MPA: f64 = 0.1;

/// 이슬점 환산 방법.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum DewPointMethod {
    /// 선형 경험 보정
    Simplified,
    /// Magnus 식 기반 포화압 역산 (ISO 18453 계열)
    #[default]
    Iso18453,
}

impl DewPointMethod {
    /// 정확히 `"simplified"`일 때만 간이 방법이다. 대소문자나 공백이 다르면
    /// Magnus 방법으로 본다.
    pub fn from_name(name: &str) -> Self {
        if name == "simplified" {
            DewPointMethod::Simplified
        } else {
            DewPointMethod::Iso18453
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DewPointMethod::Simplified => "simplified",
            DewPointMethod::Iso18453 => "ISO18453",
        }
    }
}

impl From<String> for DewPointMethod {
    fn from(value: String) -> Self {
        DewPointMethod::from_name(&value)
    }
}

/// 수분 이슬점(ТПРв) 환산 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DewPointInput {
    /// 수분 이슬점 [°C]
    pub dew_point_water_c: f64,
    /// 압력 [MPa]
    pub pressure_mpa: f64,
    #[serde(default)]
    pub method: DewPointMethod,
}

impl DewPointInput {
    pub fn new(dew_point_water_c: f64, pressure_mpa: f64, method: DewPointMethod) -> Self {
        Self {
            dew_point_water_c,
            pressure_mpa,
            method,
        }
    }
}

/// 주어진 압력에서의 수분 이슬점 [°C].
pub fn dew_point_conversion(input: DewPointInput) -> Result<f64, CalcError> {
    require_finite("dew_point_water_c", input.dew_point_water_c)?;
    match input.method {
        DewPointMethod::Simplified => {
            require_non_negative("pressure_mpa", input.pressure_mpa)?;
            let correction = (input.pressure_mpa - STANDARD_PRESSURE_MPA) / SIMPLIFIED_STEP_MPA
                * SIMPLIFIED_SLOPE_C_PER_STEP;
            Ok(input.dew_point_water_c + correction)
        }
        DewPointMethod::Iso18453 => {
            require_positive("pressure_mpa", input.pressure_mpa)?;
            Ok(magnus_dew_point(input.dew_point_water_c, input.pressure_mpa))
        }
    }
}

fn magnus_dew_point(dew_point_c: f64, pressure_mpa: f64) -> f64 {
    let p_kpa = pressure_mpa * 1000.0;
    let p_sat = MAGNUS_P0_KPA * (MAGNUS_ALPHA * dew_point_c / (MAGNUS_BETA + dew_point_c)).exp();
    let x_water = p_sat / p_kpa;
    if !x_water.is_finite() || x_water <= 0.0 {
        debug!(x_water = x_water, "degenerate water mole fraction");
        return DEGENERATE_DEW_POINT_C;
    }

    let ln_ratio = (x_water * p_kpa / MAGNUS_P0_KPA).ln();
    MAGNUS_BETA * ln_ratio / (MAGNUS_ALPHA - ln_ratio)
}
