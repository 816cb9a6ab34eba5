use serde::Deserialize;
use tracing::debug;

use crate::constants::{
    ADIABATIC_INDEX, GAS_CONSTANT, METHANE_MOLAR_MASS, SECONDS_PER_HOUR, STANDARD_GAS_DENSITY,
    STANDARD_PRESSURE_MPA, STANDARD_PRESSURE_PA,
};
use crate::error::{require_non_negative, require_positive, CalcError};
use crate::gas_law::{bore_area_m2, pressure_ratio};
use crate::params::defaults;

fn default_discharge_coef() -> f64 {
    0.62
}

/// 오리피스 유출 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutflowRegime {
    /// 임계(음속) 유출
    Critical,
    /// 아임계 유출
    Subcritical,
}

/// 임계 압력비 (2/(k+1))^(k/(k-1)).
pub fn critical_pressure_ratio() -> f64 {
    let k = ADIABATIC_INDEX;
    (2.0 / (k + 1.0)).powf(k / (k - 1.0))
}

/// 관내 압력과 대기압의 비로 유출 영역을 정한다.
pub fn outflow_regime(pressure_mpa: f64) -> OutflowRegime {
    if pressure_ratio(pressure_mpa) > 1.0 / critical_pressure_ratio() {
        OutflowRegime::Critical
    } else {
        OutflowRegime::Subcritical
    }
}

/// 관벽 구멍(핀홀, 미세 균열) 누설 입력. ВНИИГАЗ 방법.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoleLeakInput {
    /// 구멍 직경 [mm]
    pub hole_diameter_mm: f64,
    /// 관내 압력 [MPa]
    pub pressure_mpa: f64,
    pub temperature_k: f64,
    #[serde(default = "defaults::compressibility")]
    pub compressibility: f64,
    /// 유출 계수
    #[serde(default = "default_discharge_coef")]
    pub discharge_coef: f64,
}

impl HoleLeakInput {
    pub fn new(hole_diameter_mm: f64, pressure_mpa: f64, temperature_k: f64) -> Self {
        Self {
            hole_diameter_mm,
            pressure_mpa,
            temperature_k,
            compressibility: defaults::compressibility(),
            discharge_coef: default_discharge_coef(),
        }
    }
}

/// 구멍을 통한 누설 유량 [m³/h, 표준상태].
///
/// 몰질량은 방법서대로 g/mol 값(16.04)을 그대로 쓴다. 관내 압력이 대기압
/// 이하이면 유출이 없으므로 0이다.
pub fn gas_through_hole(input: HoleLeakInput) -> Result<f64, CalcError> {
    require_non_negative("hole_diameter_mm", input.hole_diameter_mm)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;
    require_positive("temperature_k", input.temperature_k)?;
    require_positive("compressibility", input.compressibility)?;
    require_non_negative("discharge_coef", input.discharge_coef)?;

    if input.pressure_mpa <= STANDARD_PRESSURE_MPA {
        debug!(
            pressure_mpa = input.pressure_mpa,
            "line pressure not above atmospheric, no outflow"
        );
        return Ok(0.0);
    }

    let area = bore_area_m2(input.hole_diameter_mm);
    let p_pa = input.pressure_mpa * 1e6;
    let rt_over_m = GAS_CONSTANT * input.temperature_k / METHANE_MOLAR_MASS;
    let density = p_pa * METHANE_MOLAR_MASS
        / (input.compressibility * GAS_CONSTANT * input.temperature_k);

    let k = ADIABATIC_INDEX;
    let velocity = match outflow_regime(input.pressure_mpa) {
        OutflowRegime::Critical => {
            (k * rt_over_m * (2.0 / (k + 1.0)).powf((k + 1.0) / (k - 1.0))).sqrt()
        }
        OutflowRegime::Subcritical => {
            let expansion = 1.0 - (STANDARD_PRESSURE_PA / p_pa).powf((k - 1.0) / k);
            (2.0 * k / (k - 1.0) * rt_over_m * expansion).sqrt()
        }
    };

    let mass_flow = input.discharge_coef * area * density * velocity;
    Ok(mass_flow / STANDARD_GAS_DENSITY * SECONDS_PER_HOUR)
}
